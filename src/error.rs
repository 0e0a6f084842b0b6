use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why an asset could not be turned into something displayable
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("QR encode error: {0}")]
    Qr(String),
}

/// Errors surfaced by the navigation boundary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("invalid selection: '{0}' is not a known section")]
    InvalidSelection(String),
}
