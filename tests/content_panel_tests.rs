// Integration tests for the content panel
// A default egui Context is enough to upload textures without a window

#![cfg(feature = "gui")]

use ecodash::gui::ContentPanel;
use ecodash::{Section, Shell};
use tempfile::TempDir;

#[test]
fn test_content_panel_initialization() {
    let panel = ContentPanel::new();
    assert!(panel.section().is_none());
}

#[test]
fn test_content_panel_tracks_loaded_section() {
    let dir = TempDir::new().unwrap();
    let mut shell = Shell::new(dir.path());
    let ctx = egui::Context::default();
    let mut panel = ContentPanel::new();

    // Acknowledgments carries generated QR images, so textures get uploaded
    shell.select(Section::Acknowledgments);
    panel.load(shell.render_current_section(), &ctx);
    assert_eq!(panel.section(), Some(Section::Acknowledgments));

    shell.select(Section::References);
    panel.load(shell.render_current_section(), &ctx);
    assert_eq!(panel.section(), Some(Section::References));
}
