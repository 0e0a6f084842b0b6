//! The content shell: navigation state plus the render dispatcher.
//!
//! A [`Shell`] is owned by exactly one viewer. It holds the single
//! "currently selected section" value and the asset store the section
//! routines read from. Nothing here is global, so two viewers are two
//! shells.

use std::path::PathBuf;

use log::{debug, info, warn};

use crate::assets::{files, AssetStore, PDF_MIME};
use crate::content;
use crate::error::ShellError;
use crate::output::{Download, RenderedOutput};
use crate::section::Section;

pub const PAGE_TITLE: &str = "Ecological Role of Macroplastics";

pub const FOOTER: [&str; 3] = [
    "© 2025 Venerate Mdaka",
    "University of Mpumalanga",
    "BSc Honours Research Project",
];

/// The currently selected section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    current: Section,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn set(&mut self, section: Section) {
        self.current = section;
    }
}

/// Sidebar content that does not depend on the selected section
#[derive(Debug, Clone)]
pub struct Sidebar {
    pub sections: [Section; 9],
    pub documents: Vec<Download>,
}

pub struct Shell {
    navigation: Navigation,
    assets: AssetStore,
}

impl Shell {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self::with_store(AssetStore::new(assets_dir))
    }

    pub fn with_store(assets: AssetStore) -> Self {
        Self {
            navigation: Navigation::new(),
            assets,
        }
    }

    pub fn current(&self) -> Section {
        self.navigation.current()
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    pub fn select(&mut self, section: Section) {
        if section != self.navigation.current() {
            info!("Selected section: {}", section);
        }
        self.navigation.set(section);
    }

    /// Selects a section by label or slug. Unknown names leave the
    /// current selection untouched.
    pub fn select_section(&mut self, name: &str) -> Result<Section, ShellError> {
        match name.parse::<Section>() {
            Ok(section) => {
                self.select(section);
                Ok(section)
            }
            Err(err) => {
                warn!("{}", err);
                Err(err)
            }
        }
    }

    /// One render pass for the current section
    pub fn render_current_section(&self) -> RenderedOutput {
        let section = self.navigation.current();
        let output = content::render(section, &self.assets);
        debug!(
            "Rendered {} ({} blocks, {} unavailable assets)",
            section,
            output.blocks.len(),
            output.fallbacks().len()
        );
        output
    }

    /// Navigation entries and whichever report downloads exist on disk
    pub fn sidebar(&self) -> Sidebar {
        let documents = [
            (files::REPORT_PRESENTATION, "📊 Download Report Presentation (PDF)"),
            (files::RESEARCH_STUDY, "📘 Download Research Study (PDF)"),
        ]
        .into_iter()
        .filter_map(|(name, label)| self.assets.download(name, label, PDF_MIME))
        .collect();

        Sidebar {
            sections: Section::ALL,
            documents,
        }
    }
}
