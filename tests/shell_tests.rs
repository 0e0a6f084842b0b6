// Integration tests for the content shell
// These run against scratch asset directories, with and without files

use std::fs;
use std::path::Path;

use ecodash::assets::{files, PDF_MIME};
use ecodash::output::{Block, Rendered};
use ecodash::{AssetKind, AssetStore, Section, Shell, ShellError};
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
    let img = RgbaImage::from_pixel(width, height, Rgba([0, 128, 0, 255]));
    img.save(dir.join(name)).unwrap();
}

#[test]
fn test_every_section_renders_with_no_assets() {
    let dir = TempDir::new().unwrap();
    let mut shell = Shell::new(dir.path());

    for section in Section::ALL {
        shell.select_section(section.title()).unwrap();
        let output = shell.render_current_section();
        assert_eq!(output.section, section);
        assert!(!output.is_empty());
        assert!(!output.to_string().is_empty());
    }
}

#[test]
fn test_every_section_renders_with_corrupt_assets() {
    let dir = TempDir::new().unwrap();
    for name in files::ALL {
        fs::write(dir.path().join(name), b"garbage").unwrap();
    }
    let mut shell = Shell::new(dir.path());

    for section in Section::ALL {
        shell.select(section);
        assert!(!shell.render_current_section().is_empty());
    }
}

#[test]
fn test_missing_asset_fallback_names_the_asset() {
    let dir = TempDir::new().unwrap();
    let store = AssetStore::new(dir.path());

    for (kind, name) in [
        (AssetKind::Image, files::STUDY_AREA_MAP),
        (AssetKind::PdfFirstPage, files::ETHICAL_CLEARANCE),
        (AssetKind::Table, files::WATER_PARAMETERS),
    ] {
        let rendered = store.render_asset(kind, name);
        let fallback = rendered.fallback().expect("missing file must fall back");
        assert_eq!(fallback.asset, name);
        assert!(fallback.to_string().contains(name));
    }
}

#[test]
fn test_invalid_selection_leaves_state_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut shell = Shell::new(dir.path());
    shell.select(Section::Discussion);

    let result = shell.select_section("Appendix B");
    assert_eq!(result, Err(ShellError::InvalidSelection("Appendix B".to_string())));
    assert_eq!(shell.current(), Section::Discussion);
}

#[test]
fn test_sidebar_downloads_follow_files_on_disk() {
    let dir = TempDir::new().unwrap();
    let shell = Shell::new(dir.path());
    assert!(shell.sidebar().documents.is_empty());

    fs::write(dir.path().join(files::REPORT_PRESENTATION), b"%PDF-1.4").unwrap();
    let documents = shell.sidebar().documents;
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].label, "📊 Download Report Presentation (PDF)");

    fs::write(dir.path().join(files::RESEARCH_STUDY), b"%PDF-1.4").unwrap();
    let documents = shell.sidebar().documents;
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[1].label, "📘 Download Research Study (PDF)");
    assert_eq!(documents[1].file_name, files::RESEARCH_STUDY);
    assert_eq!(documents[1].mime, PDF_MIME);
}

#[test]
fn test_one_missing_chart_does_not_hide_the_others() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), files::ABUNDANCE, 40, 30);
    write_png(dir.path(), files::SHANNON, 40, 30);

    let mut shell = Shell::new(dir.path());
    shell.select(Section::Results);
    let output = shell.render_current_section();

    let unavailable: Vec<&str> = output.fallbacks().into_iter().map(|f| f.asset.as_str()).collect();
    assert!(unavailable.contains(&files::EVENNESS));
    assert!(!unavailable.contains(&files::ABUNDANCE));
    assert!(!unavailable.contains(&files::SHANNON));

    let text = output.to_string();
    assert!(text.contains("[image Abundance1.png 40x30] Abundance"));
    assert!(text.contains("PERMANOVA"));
}

#[test]
fn test_profile_photo_loads_when_present() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), files::PROFILE_PHOTO, 8, 12);

    let shell = Shell::new(dir.path());
    let output = shell.render_current_section();
    assert_eq!(output.section, Section::Profile);
    assert!(output.fallbacks().is_empty());

    let photo = output
        .blocks
        .iter()
        .find_map(|b| match b {
            Block::Columns(cols) => cols[0].iter().find_map(|b| match b {
                Block::Figure(f) => Some(f),
                _ => None,
            }),
            _ => None,
        })
        .unwrap();
    match &photo.image {
        Rendered::Loaded(img) => assert_eq!((img.width(), img.height()), (8, 12)),
        Rendered::Unavailable(f) => panic!("unexpected fallback: {}", f),
    }
}

#[test]
fn test_clearance_fallback_carries_diagnostic() {
    let dir = TempDir::new().unwrap();
    let mut shell = Shell::new(dir.path());
    shell.select(Section::Clearance);

    let output = shell.render_current_section();
    let fallbacks = output.fallbacks();
    assert_eq!(fallbacks.len(), 1);
    assert_eq!(fallbacks[0].asset, files::ETHICAL_CLEARANCE);
    assert!(fallbacks[0]
        .reason
        .starts_with("Failed to render Ethical Clearance PDF. Error:"));
    assert!(output.to_string().contains("Ethical approval was obtained"));
}

#[test]
fn test_separate_shells_keep_separate_navigation() {
    let dir = TempDir::new().unwrap();
    let mut first = Shell::new(dir.path());
    let second = Shell::new(dir.path());

    first.select(Section::References);
    assert_eq!(first.current(), Section::References);
    assert_eq!(second.current(), Section::Profile);
}
