use super::{bullets, cells, figure, heading, para, title};
use crate::assets::{files, AssetStore, XLSX_MIME};
use crate::output::{Block, DatasetView, StatTable};

/// Seasonal water quality comparison, as reported
const WATER_QUALITY: [[&str; 3]; 9] = [
    ["Temp", "t = -9.44", "p = 0.001953 P<0.05!"],
    ["pH", "Z = 2.6656", "p = 0.0039063 P<0.05!"],
    ["TDS", "t = -6.044", "p = 0.0019531 P<0.05!"],
    ["ORP", "Z = 1.78", "p = 0.083984"],
    ["%DO", "Z = 17838", "p = 0.083984"],
    ["EC", "t = -1.9245", "p = 0.0855938"],
    ["Phosphorus", "t = -1.1851", "p = 0.249"],
    ["P Pentoxide", "t = -1.356", "p = 0.19922"],
    ["Phosphate", "t = -1.66", "p = 0.166"],
];

/// Diversity index p-values between substrates and between seasons
const DIVERSITY: [[&str; 3]; 5] = [
    ["Abundance", "0.38318 (P>0.05)", "0.0016899 (P<0.05)!"],
    ["Species richness", "0.17626 (P>0.05)", "0.00011253 (P<0.05)!"],
    ["Evenness", "0.30899 (P>0.05)", "0.14237 (P>0.05)"],
    ["Simpson diversity", "0.0136 (P<0.05)!", "0.064322 (P>0.05)"],
    ["Shannon", "0.0106 (P<0.05)!", "0.0068626 (P<0.05)!"],
];

const DATASETS: [(&str, &str, &str); 3] = [
    (
        "Macroinvertebrates Data",
        files::MACROINVERTEBRATES,
        "Download Macroinvertebrates Data",
    ),
    (
        "Water Parameters Data",
        files::WATER_PARAMETERS,
        "Download Water Parameters Data",
    ),
    (
        "Diversity Indices Data",
        files::DIVERSITY_INDICES,
        "Download Diversity Indices Data",
    ),
];

pub fn render(assets: &AssetStore) -> Vec<Block> {
    let mut blocks = vec![
        title("Results"),
        heading(2, "1. Environmental Variables"),
        figure(assets, files::PCA_BIPLOT, None),
        para(
            "PCA explained 68.1% of the variance in environmental variables. A clear separation \
             between the two seasons was observed. Season 1 (S1, winter) exhibited greater \
             variability in physio-chemical conditions, while Season 2 (S2, spring) maintained \
             more stable conditions.",
        ),
        stat_table(
            "Table 1: Statistical results for seasonal water quality comparison",
            ["Variable", "Test Statistics", "p-value"],
            &WATER_QUALITY,
        ),
        heading(2, "2. Species Composition"),
        para("4,157 individuals were collected in S1 and 604 individuals in S2."),
        bullets(&["S1: Natural (2,232), Plastics (1,916)", "S2: Natural (181), Plastics (423)"]),
        heading(2, "3. Taxonomic Diversity"),
        Block::Columns(vec![
            vec![figure(assets, files::ABUNDANCE, Some("Abundance"))],
            vec![figure(assets, files::EVENNESS, Some("Evenness"))],
            vec![figure(assets, files::SHANNON, Some("Shannon Index"))],
        ]),
        Block::Columns(vec![
            vec![figure(assets, files::SIMPSON, Some("Simpson Index"))],
            vec![figure(assets, files::SPECIES_RICHNESS, Some("Species Richness"))],
        ]),
        stat_table(
            "Table 2: Significance of Macroinvertebrate Diversity Indices Between Substrates and Seasons",
            ["Diversity indices", "Substrates", "Seasons"],
            &DIVERSITY,
        ),
        para(
            "Evenness and Simpson diversity did not differ significantly between the two seasons. \
             Simpson diversity showed significant variation in substrates (P<0.05).",
        ),
        heading(2, "4. Datasets (Excel)"),
    ];

    // Each workbook stands alone: one bad file does not hide the others
    for (caption, name, label) in DATASETS {
        blocks.push(Block::Dataset(DatasetView {
            title: caption.to_string(),
            data: assets.dataset(name),
            download: assets.download(name, label, XLSX_MIME),
        }));
    }

    blocks.extend([
        heading(2, "5. PERMANOVA & SIMPER Results"),
        heading(4, "PERMANOVA"),
        bullets(&[
            "Substrate: Not significant (p = 0.711, F = 0.820)",
            "Season: Highly significant (p = 0.001, F = 2.369)",
            "Substrate × Season: Significant (p = 0.017, F = 1.443)",
        ]),
        heading(4, "SIMPER"),
        bullets(&[
            "Chironominae: 21.4% of dissimilarity, plastics (52.6%) & natural substrates (32.3%)",
            "Tanypodinae: 15.4% dissimilarity, natural substrates (52%) & plastics (16.9%)",
            "Marsupiobdella africana, Stenophysa marmota, and Culicine: <1% each",
        ]),
    ]);

    blocks
}

fn stat_table(title: &str, headers: [&str; 3], rows: &[[&str; 3]]) -> Block {
    Block::Table(StatTable {
        title: title.to_string(),
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows: rows.iter().map(|row| cells(row)).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn tables_keep_reported_values() {
        let dir = TempDir::new().unwrap();
        let blocks = render(&AssetStore::new(dir.path()));
        let tables: Vec<&StatTable> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::Table(t) => Some(t),
                _ => None,
            })
            .collect();

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows.len(), 9);
        assert_eq!(tables[0].rows[0][2].text, "p = 0.001953 P<0.05");
        assert!(tables[0].rows[0][2].significant);
        assert!(!tables[0].rows[3][2].significant);
        assert_eq!(tables[1].rows[4][0].text, "Shannon");
    }

    #[test]
    fn missing_datasets_each_get_their_own_notice() {
        let dir = TempDir::new().unwrap();
        let blocks = render(&AssetStore::new(dir.path()));
        let views: Vec<&DatasetView> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::Dataset(v) => Some(v),
                _ => None,
            })
            .collect();

        assert_eq!(views.len(), 3);
        for (view, (_, name, _)) in views.iter().zip(DATASETS) {
            assert_eq!(view.data.fallback().unwrap().asset, name);
            assert!(view.download.is_none());
        }
    }
}
