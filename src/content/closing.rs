use super::{bullets, figure, heading, labeled, para, title};
use crate::assets::{files, AssetStore};
use crate::output::{Block, Figure, Rendered};
use crate::qr;

/// (name, url) pairs encoded as QR codes on the acknowledgments page
pub const QR_LINKS: [(&str, &str); 2] = [
    ("ASRG Facebook", "https://www.facebook.com/AquaticSystemsResearchGroup"),
    ("ASRG Website", "http://www.aquasystems-res.com"),
];

pub fn discussion(_assets: &AssetStore) -> Vec<Block> {
    vec![
        title("Discussion"),
        heading(4, "Cause of dramatic seasonal decline in macroinvertebrates"),
        labeled(
            "Life Cycle Patterns",
            "Many aquatic insects have synchronized life cycles. The high abundance in S1 (cool-dry) \
             likely reflects mature larvae before emerging as flying adults. The low abundance in S2 \
             (wet-cool) suggests that most larvae had already emerged, leaving only a few individuals.",
        ),
        labeled(
            "Physical Disturbance",
            "Rainfall occurring a week prior to sampling likely increased river flow and displaced \
             organisms. Higher flows during the wet season can sweep macroinvertebrates off natural substrates.",
        ),
        heading(4, "Causes of plastics supporting more diversity in Season 2"),
        labeled(
            "Habitat Stability & Complexity",
            "During high-flow events, natural substrates such as leaves and small rocks are easily \
             displaced. Macroplastics provide more stable refuges during disturbances due to their \
             size, durability, and ability to become lodged within the river channel.",
        ),
    ]
}

pub fn conclusion(_assets: &AssetStore) -> Vec<Block> {
    vec![
        title("Conclusion"),
        heading(3, "Main Conclusions"),
        heading(4, "1. Habitat Function Confirmed"),
        bullets(&[
            "✅ Macroplastics provide viable habitats for aquatic macroinvertebrates",
            "✅ Comparable community structure to natural substrates",
        ]),
        heading(4, "2. Seasonal Dynamics"),
        bullets(&[
            "✅ Significant seasonal variation in colonization patterns",
            "✅ Macroplastics more important during high-flow conditions",
        ]),
        heading(4, "3. Management Implications"),
        bullets(&[
            "⚠️ Plastic pollution has complex ecological roles",
            "⚠️ Removal strategies should consider habitat function",
            "⚠️ Need for integrated pollution management",
        ]),
        Block::Info(
            "Recommendations:\n\
             1. Consider ecological functions in plastic pollution management\n\
             2. Monitor plastic habitats in conservation planning\n\
             3. Further research on long-term impacts"
                .to_string(),
        ),
    ]
}

pub fn acknowledgments(assets: &AssetStore) -> Vec<Block> {
    let mut blocks = vec![
        title("Acknowledgments"),
        para(
            "I would like to sincerely thank the University of Mpumalanga for providing the academic \
             support and resources necessary to complete this Honours study. Special thanks to the \
             Aquatic Systems Research Group (ASRG) coordinated by Dr Tatenda Dalu, and thanks to my \
             supervisor Dr Pule MPopetsi for guidance during fieldwork and laboratory analysis. I am \
             also grateful to the National Research Foundation (NRF) for funding support, and to all \
             colleagues and friends who assisted with data collection, processing, and thoughtful \
             discussions throughout the project.",
        ),
        Block::Columns(vec![
            vec![figure(assets, files::UMP_LOGO, Some("University of Mpumalanga"))],
            vec![figure(assets, files::NRF_LOGO, Some("National Research Foundation"))],
        ]),
    ];

    // Generated fresh on every pass
    for (name, url) in QR_LINKS {
        let image = qr::generate(url, name);
        blocks.push(Block::Figure(Figure {
            caption: Some(format!("Scan QR Code for {}", name)),
            image: Rendered::from_result(name, image),
        }));
    }

    blocks
}

pub fn references(_assets: &AssetStore) -> Vec<Block> {
    vec![
        title("References"),
        bullets(&[
            "Azevedo-Santos, V.M., et al. (2021). Plastic pollution: A focus on freshwater biodiversity. Ambio",
            "Blettler, M.C.M., et al. (2018). Freshwater plastic pollution: Recognizing research biases. Water Research",
            "Dalu, T., et al. (2025). Macroplastic colonization by aquatic invertebrates in African rivers. Scientific Reports",
            "Hoellein, T.J., et al. (2014). Anthropogenic litter in urban freshwater ecosystems. PLOS One",
            "Amaral-Zettler, L.A., Zettler, E.R. and Mincer, T.J., 2020. Ecology of the plastisphere. Nature Reviews Microbiology",
            "Rummel, C.D., et al. (2021). Effects of polymer type on colonization. Environmental Science & Technology",
            "Gallitelli, L., et al. (2023). Seasonal dynamics of plastic colonization. Science of the Total Environment",
            "Marino, F., et al. (2024). Comparative analysis of natural and artificial substrate communities. Water",
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn qr_codes_render_even_without_logos() {
        let dir = TempDir::new().unwrap();
        let blocks = acknowledgments(&AssetStore::new(dir.path()));
        let captions: Vec<&str> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::Figure(f) if f.image.is_loaded() => f.caption.as_deref(),
                _ => None,
            })
            .collect();
        assert_eq!(
            captions,
            vec!["Scan QR Code for ASRG Facebook", "Scan QR Code for ASRG Website"]
        );
    }
}
