use std::path::PathBuf;

use clap::Parser;
use eframe::{run_native, NativeOptions};
use egui::ViewportBuilder;

use ecodash::gui::DashboardApp;
use ecodash::shell::PAGE_TITLE;

#[derive(Parser)]
#[command(author, version, about = "Macroplastics study dashboard")]
struct Args {
    /// Directory holding the images, PDFs and spreadsheets
    #[arg(short, long, default_value = ".")]
    assets_dir: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    // Initialize logging
    env_logger::init();
    let args = Args::parse();

    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title(PAGE_TITLE),
        ..Default::default()
    };

    run_native(
        PAGE_TITLE,
        options,
        Box::new(move |cc| Box::new(DashboardApp::new(cc, args.assets_dir))),
    )
}
