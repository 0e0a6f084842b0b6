use super::{bullets, figure, heading, labeled, para, title};
use crate::assets::{files, AssetStore};
use crate::output::{Block, Figure, Rendered};

pub fn overview(_assets: &AssetStore) -> Vec<Block> {
    vec![
        title("Study Overview"),
        para(
            "This study investigated the colonisation of macroplastic debris by aquatic \
             macroinvertebrates in the Crocodile River, Mpumalanga, across contrasting seasons.",
        ),
        heading(3, "AIM"),
        para(
            "The study aimed to assess the ecological role of macroplastics as habitats for \
             aquatic macroinvertebrates in the Crocodile River, Mpumalanga.",
        ),
        heading(3, "Objectives"),
        bullets(&[
            "Assess the presence of macroinvertebrate communities on macroplastic debris",
            "Compare diversity between macroplastics and natural substrates",
            "Evaluate seasonal variation in community composition",
        ]),
        heading(3, "Hypotheses"),
        bullets(&[
            "Macroinvertebrate communities will be present on macroplastic debris across seasons.",
            "Macroinvertebrate diversity will differ significantly between macroplastics and natural substrates.",
        ]),
    ]
}

pub fn clearance(assets: &AssetStore) -> Vec<Block> {
    let image = match assets.pdf_first_page(files::ETHICAL_CLEARANCE) {
        Rendered::Unavailable(mut fallback) => {
            fallback.reason = format!(
                "Failed to render Ethical Clearance PDF. Error: {}",
                fallback.reason
            );
            Rendered::Unavailable(fallback)
        }
        loaded => loaded,
    };

    vec![
        title("Ethical Clearance"),
        para("Ethical approval was obtained prior to field sampling and laboratory analysis."),
        Block::Figure(Figure {
            caption: Some("Ethical Clearance Approval".to_string()),
            image,
        }),
    ]
}

pub fn methods(assets: &AssetStore) -> Vec<Block> {
    vec![
        title("Methods"),
        heading(3, "Study Area"),
        figure(assets, files::STUDY_AREA_MAP, None),
        para(
            "Sampling was conducted along the Crocodile River during S1 (cool-dry) and S2 \
             (wet-cool) seasons.",
        ),
        heading(3, "Environmental Variables"),
        para(
            "A multiparameter probe measured temperature, pH, conductivity, dissolved oxygen (DO), \
             oxidation-reduction potential (ORP), and total dissolved solids.",
        ),
        heading(3, "Macroinvertebrate Sampling"),
        para(
            "A random 20-minute timed sampling protocol was used to dislodge macroinvertebrates \
             into a net. Samples were preserved in 70% ethanol, identified under a microscope, and counted.",
        ),
        heading(3, "Field Sampling"),
        para("Sampling was conducted across two distinct seasonal periods:"),
        labeled("Season 1 (Cool–Dry)", "Early June 2025 → Winter"),
        labeled("Season 2 (Wet–Cool)", "Mid-September 2025 → Spring"),
        heading(4, "Substrates sampled (where present)"),
        bullets(&[
            "Macroplastic debris: bottles, plastic bags, plastic wrappers",
            "Natural substrates: Coarse substrates (pebbles, cobbles) and vegetation",
        ]),
        heading(3, "Data Analysis"),
        bullets(&[
            "Shapiro–Wilk test for normality",
            "Paired t-test and Wilcoxon signed-rank tests",
            "PCA for environmental variables",
            "Shannon–Wiener, Simpson, and species richness indices",
            "PERMANOVA and SIMPER for community comparisons",
        ]),
    ]
}
