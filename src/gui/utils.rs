use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{error, info};

use crate::output::Download;

const SIZE_UNITS: [&str; 3] = ["KB", "MB", "GB"];

/// Human-readable size in binary units, e.g. `2.00 KB`
pub fn format_file_size(size: u64) -> String {
    if size < 1024 {
        return format!("{} bytes", size);
    }
    let mut value = size as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < SIZE_UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, SIZE_UNITS[unit])
}

/// Size of the file behind a download, if it can still be read
pub fn get_file_size(path: &Path) -> Option<u64> {
    let meta = fs::metadata(path).ok()?;
    meta.is_file().then(|| meta.len())
}

/// Extracts the lowercase file extension from a file name
pub fn get_file_extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Copies a download to `dest`, returning where it landed
pub fn save_copy(download: &Download, dest: &Path) -> Result<PathBuf> {
    fs::copy(&download.path, dest)
        .with_context(|| format!("copying {} to {}", download.file_name, dest.display()))?;
    Ok(dest.to_path_buf())
}

/// Saves a download and describes the outcome for the user
pub fn save_with_notice(download: &Download, dest: &Path) -> String {
    match save_copy(download, dest) {
        Ok(path) => {
            info!("Saved {} to {}", download.file_name, path.display());
            format!("Saved {} to {}", download.file_name, path.display())
        }
        Err(e) => {
            error!("Download failed: {:#}", e);
            format!("Could not save {}: {:#}", download.file_name, e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sizes_use_binary_units() {
        assert_eq!(format_file_size(512), "512 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5.00 GB");
    }

    #[test]
    fn directories_have_no_file_size() {
        let dir = TempDir::new().unwrap();
        assert_eq!(get_file_size(dir.path()), None);
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(get_file_extension("Research_study.PDF"), "pdf");
        assert_eq!(get_file_extension("README"), "");
    }

    fn diversity_download(dir: &Path) -> Download {
        let src = dir.join("Diversity_Indices.xlsx");
        fs::write(&src, b"workbook").unwrap();
        Download {
            label: "Download Diversity Indices Data".to_string(),
            file_name: "Diversity_Indices.xlsx".to_string(),
            mime: crate::assets::XLSX_MIME,
            path: src,
        }
    }

    #[test]
    fn save_copy_keeps_contents() {
        let dir = TempDir::new().unwrap();
        let download = diversity_download(dir.path());

        let dest = dir.path().join("copy.xlsx");
        save_copy(&download, &dest).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"workbook");
    }

    #[test]
    fn save_notice_reports_success_and_failure() {
        let dir = TempDir::new().unwrap();
        let download = diversity_download(dir.path());

        let saved = save_with_notice(&download, &dir.path().join("copy.xlsx"));
        assert!(saved.starts_with("Saved Diversity_Indices.xlsx to "));

        let missing_dir = dir.path().join("no_such_dir").join("copy.xlsx");
        let failed = save_with_notice(&download, &missing_dir);
        assert!(failed.starts_with("Could not save Diversity_Indices.xlsx: "));
    }
}
