//! Presentation shell for the macroplastics habitat study dashboard.
//!
//! The [`shell::Shell`] owns the navigation state and dispatches a render
//! pass to one of the fixed [`section::Section`] routines. Routines produce a
//! front-end neutral [`output::RenderedOutput`]; the egui window and the CLI
//! both draw from it.

pub mod assets;
mod content;
pub mod error;
pub mod output;
pub mod pdf;
pub mod qr;
pub mod section;
pub mod shell;
pub mod table;

#[cfg(feature = "gui")]
pub mod gui;

pub use assets::{AssetKind, AssetStore};
pub use error::{AssetError, ShellError};
pub use output::{Block, Fallback, RenderedOutput, Rendered};
pub use section::Section;
pub use shell::Shell;
