use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TourError;

/// One demonstration section of the tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Visibility,
    Statics,
    Singleton,
    Closures,
}

impl Section {
    /// Every section, in execution order.
    pub const ALL: [Section; 4] = [
        Section::Visibility,
        Section::Statics,
        Section::Singleton,
        Section::Closures,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Visibility => "visibility",
            Section::Statics => "statics",
            Section::Singleton => "singleton",
            Section::Closures => "closures",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visibility" => Ok(Section::Visibility),
            "statics" => Ok(Section::Statics),
            "singleton" => Ok(Section::Singleton),
            "closures" => Ok(Section::Closures),
            _ => Err(TourError::UnknownSection(s.trim().to_string())),
        }
    }
}

/// Output lines produced by a single section, in print order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionReport {
    pub section: Section,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourReport {
    pub sections: Vec<SectionReport>,
}

impl TourReport {
    /// All output lines across sections, in print order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|section| section.lines.iter().map(String::as_str))
    }
}
