use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use ecodash::{qr, Section, Shell};

#[derive(Parser)]
#[command(author, version, about = "Headless access to the macroplastics study dashboard")]
struct Cli {
    /// Directory holding the images, PDFs and spreadsheets
    #[arg(short, long, default_value = ".", global = true)]
    assets_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the dashboard sections in navigation order
    Sections,

    /// Render one section as plain text
    Render {
        /// Section title or short name (e.g. "Results" or "results")
        section: String,
    },

    /// Report which asset files are present
    Assets,

    /// Write a QR code PNG for a URL
    Qr {
        /// URL to encode
        #[arg(short, long)]
        url: String,

        /// Output PNG path
        #[arg(short, long, default_value = "qr.png")]
        output: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Sections => {
            for (i, section) in Section::ALL.iter().enumerate() {
                println!("{}. {} ({})", i + 1, section.title(), section.slug());
            }
        }
        Commands::Render { section } => {
            let mut shell = Shell::new(&cli.assets_dir);
            shell.select_section(&section)?;
            print!("{}", shell.render_current_section());

            let sidebar = shell.sidebar();
            if !sidebar.documents.is_empty() {
                println!("---");
                for doc in &sidebar.documents {
                    println!("[download] {} ({}, {})", doc.label, doc.file_name, doc.mime);
                }
            }
        }
        Commands::Assets => {
            let shell = Shell::new(&cli.assets_dir);
            println!("Assets in {}", shell.assets().base_dir().display());
            for (name, present) in shell.assets().inventory() {
                println!("  [{}] {}", if present { "x" } else { " " }, name);
            }
        }
        Commands::Qr { url, output } => {
            let img = qr::generate(&url, &url)?;
            img.pixels
                .save(&output)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("Wrote QR code for '{}' to '{}'", url, output.display());
        }
    }
    Ok(())
}
