//! Entry points
//!
//!     The three calls every consumer needs. All of them are total: any text, including the
//!     empty string, is valid input.

use crate::lyrics::ast::{NormalizedSong, Section};
use crate::lyrics::cleaning::clean_lines;
use crate::lyrics::formats::to_editor_text;
use crate::lyrics::inference::InferenceOptions;
use crate::lyrics::structure::normalize_sections;
use tracing::debug;

pub use crate::lyrics::segmenting::split_into_slides;

/// Clean raw lyrics and derive their sections.
///
/// Explicit headers are honoured as written. Without headers only blank-line stanzas are
/// analysed, so an unbroken block stays a single `Verse 1`.
pub fn normalize_lyrics(title: &str, artist: Option<&str>, raw: &str) -> NormalizedSong {
    let sections = sections_with(raw, &InferenceOptions::stanzas());
    debug!(title, sections = sections.len(), "normalized lyrics");
    NormalizedSong::new(title, artist.map(str::to_string), sections)
}

/// One-shot formatting for review: infer as much structure as possible and re-emit the
/// lyrics with a `[Label]` line above every section.
pub fn auto_format_lyrics_for_editor(raw: &str) -> String {
    to_editor_text(&sections_with(raw, &InferenceOptions::full()))
}

/// Sections for raw text under the given inference options.
pub fn sections_with(raw: &str, options: &InferenceOptions) -> Vec<Section> {
    normalize_sections(&clean_lines(raw), options)
}
