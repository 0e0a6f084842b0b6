use std::path::{Path, PathBuf};

use log::warn;

use crate::error::AssetError;
use crate::output::{Download, RasterImage, Rendered};
use crate::pdf::{PageRasterizer, PdfiumRasterizer};
use crate::table::Dataset;

/// Conventional asset file names, relative to the asset directory
pub mod files {
    pub const PROFILE_PHOTO: &str = "profile_pic.png";
    pub const REPORT_PRESENTATION: &str = "Report_Presentation.pdf";
    pub const RESEARCH_STUDY: &str = "Research_study.pdf";
    pub const ETHICAL_CLEARANCE: &str = "Ethical_clearance.pdf";
    pub const STUDY_AREA_MAP: &str = "Study_Area_Map.png";
    pub const PCA_BIPLOT: &str = "PCA_Biplot.png";
    pub const ABUNDANCE: &str = "Abundance1.png";
    pub const EVENNESS: &str = "Evenness5.png";
    pub const SHANNON: &str = "Shannon2.png";
    pub const SIMPSON: &str = "Simpson4.png";
    pub const SPECIES_RICHNESS: &str = "Species_richness3.png";
    pub const MACROINVERTEBRATES: &str = "Macroinvertebrates_Season1_2.xlsx";
    pub const WATER_PARAMETERS: &str = "Water_Parameters_Season1_2.xlsx";
    pub const DIVERSITY_INDICES: &str = "Diversity_Indices.xlsx";
    pub const UMP_LOGO: &str = "UMP_Logo.png";
    pub const NRF_LOGO: &str = "NRF_Logo.png";

    pub const ALL: [&str; 16] = [
        PROFILE_PHOTO,
        REPORT_PRESENTATION,
        RESEARCH_STUDY,
        ETHICAL_CLEARANCE,
        STUDY_AREA_MAP,
        PCA_BIPLOT,
        ABUNDANCE,
        EVENNESS,
        SHANNON,
        SIMPSON,
        SPECIES_RICHNESS,
        MACROINVERTEBRATES,
        WATER_PARAMETERS,
        DIVERSITY_INDICES,
        UMP_LOGO,
        NRF_LOGO,
    ];
}

pub const PDF_MIME: &str = "application/pdf";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    PdfFirstPage,
    Table,
}

/// A loaded asset of any kind
#[derive(Debug, Clone)]
pub enum Asset {
    Image(RasterImage),
    Table(Dataset),
}

/// Read-only access to the optional files under one directory
pub struct AssetStore {
    base_dir: PathBuf,
    rasterizer: Box<dyn PageRasterizer>,
}

impl AssetStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_rasterizer(base_dir, Box::new(PdfiumRasterizer::new()))
    }

    pub fn with_rasterizer(
        base_dir: impl Into<PathBuf>,
        rasterizer: Box<dyn PageRasterizer>,
    ) -> Self {
        Self {
            base_dir: base_dir.into(),
            rasterizer,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_of(name).is_file()
    }

    /// Loads one asset. Failures become a fallback notice naming the asset;
    /// nothing here ever aborts the caller.
    pub fn render_asset(&self, kind: AssetKind, name: &str) -> Rendered<Asset> {
        let path = self.path_of(name);
        let result = match kind {
            AssetKind::Image => load_image(&path, name).map(Asset::Image),
            AssetKind::PdfFirstPage => self.rasterizer.first_page(&path).map(Asset::Image),
            AssetKind::Table => Dataset::load(&path).map(Asset::Table),
        };
        Rendered::from_result(name, result)
    }

    pub fn image(&self, name: &str) -> Rendered<RasterImage> {
        Rendered::from_result(name, load_image(&self.path_of(name), name))
    }

    pub fn pdf_first_page(&self, name: &str) -> Rendered<RasterImage> {
        Rendered::from_result(name, self.rasterizer.first_page(&self.path_of(name)))
    }

    pub fn dataset(&self, name: &str) -> Rendered<Dataset> {
        Rendered::from_result(name, Dataset::load(&self.path_of(name)))
    }

    /// A download control for `name`, or `None` when the file is absent
    pub fn download(&self, name: &str, label: &str, mime: &'static str) -> Option<Download> {
        let path = self.path_of(name);
        if !path.is_file() {
            warn!("Download '{}' hidden: {} not found", label, path.display());
            return None;
        }
        Some(Download {
            label: label.to_string(),
            file_name: name.to_string(),
            mime,
            path,
        })
    }

    /// (file name, present) for every conventional asset
    pub fn inventory(&self) -> Vec<(&'static str, bool)> {
        files::ALL.iter().map(|&name| (name, self.exists(name))).collect()
    }
}

fn load_image(path: &Path, name: &str) -> Result<RasterImage, AssetError> {
    if !path.is_file() {
        return Err(AssetError::NotFound(path.to_path_buf()));
    }
    let pixels = image::open(path)?.to_rgba8();
    Ok(RasterImage {
        name: name.to_string(),
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_image_falls_back_with_its_name() {
        let dir = TempDir::new().unwrap();
        let store = AssetStore::new(dir.path());
        let fallback = store.image(files::PCA_BIPLOT).fallback().cloned().unwrap();
        assert_eq!(fallback.asset, files::PCA_BIPLOT);
        assert!(fallback.reason.contains("not found"));
    }

    #[test]
    fn corrupt_image_falls_back() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(files::UMP_LOGO), b"not a png").unwrap();
        let store = AssetStore::new(dir.path());
        let rendered = store.render_asset(AssetKind::Image, files::UMP_LOGO);
        assert_eq!(rendered.fallback().unwrap().asset, files::UMP_LOGO);
    }

    #[test]
    fn download_requires_the_file() {
        let dir = TempDir::new().unwrap();
        let store = AssetStore::new(dir.path());
        assert!(store.download(files::RESEARCH_STUDY, "Study", PDF_MIME).is_none());

        std::fs::write(dir.path().join(files::RESEARCH_STUDY), b"%PDF-1.4").unwrap();
        let download = store.download(files::RESEARCH_STUDY, "Study", PDF_MIME).unwrap();
        assert_eq!(download.file_name, files::RESEARCH_STUDY);
        assert_eq!(download.mime, PDF_MIME);
    }

    #[test]
    fn inventory_lists_every_conventional_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(files::NRF_LOGO), b"x").unwrap();
        let store = AssetStore::new(dir.path());
        let inventory = store.inventory();
        assert_eq!(inventory.len(), files::ALL.len());
        assert!(inventory.contains(&(files::NRF_LOGO, true)));
        assert!(inventory.contains(&(files::UMP_LOGO, false)));
    }
}
