//! Section render routines. Each takes the asset store and returns the
//! blocks for one page; the dispatch below is exhaustive over [`Section`].

mod closing;
mod profile;
mod results;
mod study;

use crate::assets::AssetStore;
use crate::output::{Block, Figure, RenderedOutput, StatCell};
use crate::section::Section;

pub fn render(section: Section, assets: &AssetStore) -> RenderedOutput {
    let render_fn: fn(&AssetStore) -> Vec<Block> = match section {
        Section::Profile => profile::render,
        Section::Overview => study::overview,
        Section::Clearance => study::clearance,
        Section::Methods => study::methods,
        Section::Results => results::render,
        Section::Discussion => closing::discussion,
        Section::Conclusion => closing::conclusion,
        Section::Acknowledgments => closing::acknowledgments,
        Section::References => closing::references,
    };

    RenderedOutput {
        section,
        blocks: render_fn(assets),
    }
}

fn title(text: &str) -> Block {
    Block::Title(text.to_string())
}

fn heading(level: u8, text: &str) -> Block {
    Block::Heading {
        level,
        text: text.to_string(),
    }
}

fn para(text: &str) -> Block {
    Block::Paragraph(text.to_string())
}

fn labeled(label: &str, text: &str) -> Block {
    Block::Labeled {
        label: label.to_string(),
        text: text.to_string(),
    }
}

fn bullets(items: &[&str]) -> Block {
    Block::Bullets(items.iter().map(|s| s.to_string()).collect())
}

fn figure(assets: &AssetStore, name: &str, caption: Option<&str>) -> Block {
    Block::Figure(Figure {
        caption: caption.map(str::to_string),
        image: assets.image(name),
    })
}

/// Cell text with significance marked by a trailing `!`
fn cells(raw_cells: &[&str]) -> Vec<StatCell> {
    raw_cells
        .iter()
        .map(|raw| match raw.strip_suffix('!') {
            Some(text) => StatCell {
                text: text.to_string(),
                significant: true,
            },
            None => StatCell {
                text: raw.to_string(),
                significant: false,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn every_section_renders_without_assets() {
        let dir = TempDir::new().unwrap();
        let store = AssetStore::new(dir.path());
        for section in Section::ALL {
            let output = render(section, &store);
            assert_eq!(output.section, section);
            assert!(!output.is_empty(), "{} rendered nothing", section);
        }
    }

    #[test]
    fn bang_suffix_marks_significance() {
        let row = cells(&["Temp", "p = 0.001953 P<0.05!"]);
        assert!(!row[0].significant);
        assert!(row[1].significant);
        assert_eq!(row[1].text, "p = 0.001953 P<0.05");
    }
}
