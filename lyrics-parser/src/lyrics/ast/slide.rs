//! Slides and slide settings

use super::label::SectionLabel;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Allowed slide sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum LinesPerSlide {
    Two,
    #[default]
    Three,
    Four,
}

impl LinesPerSlide {
    pub fn get(self) -> usize {
        match self {
            LinesPerSlide::Two => 2,
            LinesPerSlide::Three => 3,
            LinesPerSlide::Four => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("lines per slide must be 2, 3 or 4 (got {0})")]
pub struct InvalidLinesPerSlide(pub u8);

impl TryFrom<u8> for LinesPerSlide {
    type Error = InvalidLinesPerSlide;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(LinesPerSlide::Two),
            3 => Ok(LinesPerSlide::Three),
            4 => Ok(LinesPerSlide::Four),
            other => Err(InvalidLinesPerSlide(other)),
        }
    }
}

impl From<LinesPerSlide> for u8 {
    fn from(value: LinesPerSlide) -> Self {
        value.get() as u8
    }
}

/// How a trailing single line left over by fixed-size chunking is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrphanStrategy {
    /// Borrow a line from the previous chunk when it has more than two lines.
    /// Never exceeds the configured slide size; with two lines per slide an orphan stays.
    #[default]
    Rebalance,
    /// Rebalance, and with two lines per slide fold the orphan into the previous chunk,
    /// producing one three-line slide.
    MergePairs,
}

/// A bounded chunk of lines for a single slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideGroup {
    pub lines: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<SectionLabel>,
}

impl SlideGroup {
    pub fn new(lines: Vec<String>, label: Option<SectionLabel>) -> Self {
        Self { lines, label }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A slide as handed to deck renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Slide {
    Cover {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date: Option<String>,
    },
    Title {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        artist: Option<String>,
    },
    Lyrics(SlideGroup),
}

impl Slide {
    pub fn as_lyrics(&self) -> Option<&SlideGroup> {
        match self {
            Slide::Lyrics(group) => Some(group),
            _ => None,
        }
    }
}

pub const DEFAULT_COVER_TITLE: &str = "Worship Set";

/// Settings for turning songs into slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSettings {
    pub lines_per_slide: LinesPerSlide,
    pub show_section_labels: bool,
    pub orphans: OrphanStrategy,
    pub cover_title: String,
    /// Shown on the cover slide. Supplied by the caller so slide output stays deterministic.
    pub cover_date: Option<String>,
}

impl SlideSettings {
    pub fn new(lines_per_slide: LinesPerSlide, show_section_labels: bool) -> Self {
        Self {
            lines_per_slide,
            show_section_labels,
            ..Self::default()
        }
    }
}

impl Default for SlideSettings {
    fn default() -> Self {
        Self {
            lines_per_slide: LinesPerSlide::default(),
            show_section_labels: false,
            orphans: OrphanStrategy::default(),
            cover_title: DEFAULT_COVER_TITLE.to_string(),
            cover_date: None,
        }
    }
}
