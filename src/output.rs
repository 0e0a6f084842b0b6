use std::fmt;
use std::path::PathBuf;

use image::RgbaImage;
use log::warn;

use crate::error::AssetError;
use crate::section::Section;
use crate::table::Dataset;

/// Result of trying to load one asset for display
#[derive(Debug, Clone)]
pub enum Rendered<T> {
    Loaded(T),
    Unavailable(Fallback),
}

impl<T> Rendered<T> {
    /// Turns a loader result into something a section can always display
    pub fn from_result(asset: &str, result: Result<T, AssetError>) -> Self {
        match result {
            Ok(value) => Rendered::Loaded(value),
            Err(err) => {
                warn!("Asset {} unavailable: {}", asset, err);
                Rendered::Unavailable(Fallback {
                    asset: asset.to_string(),
                    reason: err.to_string(),
                })
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Rendered::Loaded(_))
    }

    pub fn fallback(&self) -> Option<&Fallback> {
        match self {
            Rendered::Loaded(_) => None,
            Rendered::Unavailable(fallback) => Some(fallback),
        }
    }

    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            Rendered::Loaded(value) => Some(value),
            Rendered::Unavailable(_) => None,
        }
    }
}

/// Notice shown in place of an asset that failed to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub asset: String,
    pub reason: String,
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} unavailable: {}", self.asset, self.reason)
    }
}

/// A decoded raster ready to become a texture
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub name: String,
    pub pixels: RgbaImage,
}

impl RasterImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

#[derive(Debug, Clone)]
pub struct Figure {
    pub caption: Option<String>,
    pub image: Rendered<RasterImage>,
}

/// A file offered for download under its original name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub label: String,
    pub file_name: String,
    pub mime: &'static str,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct DatasetView {
    pub title: String,
    pub data: Rendered<Dataset>,
    pub download: Option<Download>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Table of literal results. `significant` cells get emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<StatCell>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCell {
    pub text: String,
    pub significant: bool,
}

#[derive(Debug, Clone)]
pub enum Block {
    Title(String),
    Heading { level: u8, text: String },
    Paragraph(String),
    /// A bold lead-in followed by text
    Labeled { label: String, text: String },
    Bullets(Vec<String>),
    Links(Vec<Link>),
    /// Highlighted note box
    Info(String),
    Table(StatTable),
    Figure(Figure),
    Dataset(DatasetView),
    Columns(Vec<Vec<Block>>),
    Divider,
}

/// Everything one render pass produced for a section
#[derive(Debug, Clone)]
pub struct RenderedOutput {
    pub section: Section,
    pub blocks: Vec<Block>,
}

impl RenderedOutput {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Every fallback notice in the output, nested columns included
    pub fn fallbacks(&self) -> Vec<&Fallback> {
        let mut found = Vec::new();
        collect_fallbacks(&self.blocks, &mut found);
        found
    }
}

fn collect_fallbacks<'a>(blocks: &'a [Block], found: &mut Vec<&'a Fallback>) {
    for block in blocks {
        match block {
            Block::Figure(figure) => found.extend(figure.image.fallback()),
            Block::Dataset(view) => found.extend(view.data.fallback()),
            Block::Columns(columns) => {
                for column in columns {
                    collect_fallbacks(column, found);
                }
            }
            _ => {}
        }
    }
}

/// Plain-text rendering used by the CLI
impl fmt::Display for RenderedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_blocks(f, &self.blocks)
    }
}

fn write_blocks(f: &mut fmt::Formatter<'_>, blocks: &[Block]) -> fmt::Result {
    for block in blocks {
        match block {
            Block::Title(text) => {
                writeln!(f, "{}", text)?;
                writeln!(f, "{}", "=".repeat(text.chars().count()))?;
            }
            Block::Heading { level, text } => {
                writeln!(f, "{} {}", "#".repeat(usize::from(*level).max(1)), text)?
            }
            Block::Paragraph(text) => writeln!(f, "{}", text)?,
            Block::Labeled { label, text } => writeln!(f, "{}: {}", label, text)?,
            Block::Bullets(items) => {
                for item in items {
                    writeln!(f, "  - {}", item)?;
                }
            }
            Block::Links(links) => {
                for link in links {
                    writeln!(f, "  {} <{}>", link.label, link.url)?;
                }
            }
            Block::Info(text) => writeln!(f, "[info] {}", text)?,
            Block::Table(table) => {
                writeln!(f, "{}", table.title)?;
                writeln!(f, "  {}", table.headers.join(" | "))?;
                for row in &table.rows {
                    let cells: Vec<String> = row
                        .iter()
                        .map(|c| {
                            if c.significant {
                                format!("*{}*", c.text)
                            } else {
                                c.text.clone()
                            }
                        })
                        .collect();
                    writeln!(f, "  {}", cells.join(" | "))?;
                }
            }
            Block::Figure(figure) => {
                let caption = figure.caption.as_deref().unwrap_or("");
                match &figure.image {
                    Rendered::Loaded(img) => writeln!(
                        f,
                        "[image {} {}x{}] {}",
                        img.name,
                        img.width(),
                        img.height(),
                        caption
                    )?,
                    Rendered::Unavailable(fallback) => writeln!(f, "[!] {}", fallback)?,
                }
            }
            Block::Dataset(view) => {
                writeln!(f, "{}", view.title)?;
                match &view.data {
                    Rendered::Loaded(dataset) => {
                        writeln!(f, "  {}", dataset.headers().join(" | "))?;
                        for row in dataset.rows() {
                            let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
                            writeln!(f, "  {}", cells.join(" | "))?;
                        }
                    }
                    Rendered::Unavailable(fallback) => writeln!(f, "[!] {}", fallback)?,
                }
                if let Some(download) = &view.download {
                    writeln!(
                        f,
                        "[download] {} ({}, {})",
                        download.label, download.file_name, download.mime
                    )?;
                }
            }
            Block::Columns(columns) => {
                for column in columns {
                    write_blocks(f, column)?;
                }
            }
            Block::Divider => writeln!(f, "---")?,
        }
    }
    Ok(())
}
