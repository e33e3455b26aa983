//! Sections and songs

use super::label::SectionLabel;
use serde::{Deserialize, Serialize};

/// A labeled run of lyric lines.
///
/// Blank lines may appear between lines as sub-group separators, never at either end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub label: SectionLabel,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(label: SectionLabel, lines: Vec<String>) -> Self {
        Self { label, lines }
    }

    /// Lines that carry lyrics, i.e. everything but blank separators.
    pub fn content_lines(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|l| !l.trim().is_empty())
    }
}

/// A song after normalization: metadata plus its sections in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSong {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl NormalizedSong {
    pub fn new(title: impl Into<String>, artist: Option<String>, sections: Vec<Section>) -> Self {
        Self {
            title: title.into(),
            artist,
            sections,
        }
    }

    pub fn labels(&self) -> Vec<SectionLabel> {
        self.sections.iter().map(|s| s.label).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of lyric lines across all sections, blank separators excluded.
    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|s| s.content_lines().count()).sum()
    }
}
