use std::fmt;
use std::str::FromStr;

use crate::error::ShellError;

/// One page of the dashboard. The set is closed and its order is the
/// order shown in the navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Profile,
    Overview,
    Clearance,
    Methods,
    Results,
    Discussion,
    Conclusion,
    Acknowledgments,
    References,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Profile,
        Section::Overview,
        Section::Clearance,
        Section::Methods,
        Section::Results,
        Section::Discussion,
        Section::Conclusion,
        Section::Acknowledgments,
        Section::References,
    ];

    /// Label shown in the navigation control
    pub fn title(self) -> &'static str {
        match self {
            Section::Profile => "Researcher Profile",
            Section::Overview => "Study Overview",
            Section::Clearance => "Ethical Clearance",
            Section::Methods => "Methods",
            Section::Results => "Results",
            Section::Discussion => "Discussion",
            Section::Conclusion => "Conclusion",
            Section::Acknowledgments => "Acknowledgments",
            Section::References => "References",
        }
    }

    /// Short lowercase name accepted on the command line
    pub fn slug(self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::Overview => "overview",
            Section::Clearance => "clearance",
            Section::Methods => "methods",
            Section::Results => "results",
            Section::Discussion => "discussion",
            Section::Conclusion => "conclusion",
            Section::Acknowledgments => "acknowledgments",
            Section::References => "references",
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::ALL[0]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Section {
    type Err = ShellError;

    /// Accepts either the navigation label or the slug, ignoring case
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let wanted = name.trim();
        Section::ALL
            .into_iter()
            .find(|s| {
                s.title().eq_ignore_ascii_case(wanted) || s.slug().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ShellError::InvalidSelection(name.to_string()))
    }
}
