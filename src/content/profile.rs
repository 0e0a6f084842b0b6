use super::{bullets, figure, heading, labeled, title};
use crate::assets::{files, AssetStore};
use crate::output::{Block, Link};

pub fn render(assets: &AssetStore) -> Vec<Block> {
    let photo = vec![figure(assets, files::PROFILE_PHOTO, Some("Venerate Mdaka"))];

    let summary = vec![
        heading(3, "Venerate Mdaka"),
        labeled("BSc Honours in Environmental Science", "University of Mpumalanga"),
        heading(3, "Research Focus"),
        bullets(&[
            "Freshwater Ecology",
            "Plastic Pollution Studies",
            "Macroinvertebrate Communities",
            "Aquatic Habitat Assessment",
        ]),
        heading(3, "Current Project"),
        labeled(
            "Ecological Role of Macroplastics as Habitats for Aquatic Macroinvertebrates",
            "Crocodile River, Mpumalanga, South Africa",
        ),
    ];

    let contact = vec![
        heading(3, "Contact Information"),
        Block::Links(vec![
            link("📧 Email", "mailto:veneratemdakahlonipho@gmail.com"),
            link("🔗 LinkedIn", "https://www.linkedin.com/in/venerate-mdaka-799703279"),
            link("🆔 ORCID", "https://orcid.org/0009-0000-0872-3156"),
        ]),
    ];

    let background = vec![
        heading(3, "Academic Background"),
        bullets(&[
            "BSc Honours in Environmental Science, University of Mpumalanga (2025)",
            "Aquatic Systems Research Group (ASRG), Research affiliate",
            "National Research Foundation (NRF), Scholarship Recipient",
        ]),
    ];

    let skills = vec![
        heading(3, "Research Skills"),
        bullets(&[
            "Field Sampling Techniques",
            "Statistical Analysis",
            "Laboratory Analysis",
            "Scientific Writing",
        ]),
    ];

    vec![
        title("Researcher Profile"),
        Block::Columns(vec![photo, summary]),
        Block::Divider,
        Block::Columns(vec![contact, background, skills]),
        Block::Divider,
    ]
}

fn link(label: &str, url: &str) -> Link {
    Link {
        label: label.to_string(),
        url: url.to_string(),
    }
}
