//! # lyrics
//!
//! Turns free-form pasted song lyrics into labeled sections and presentation slides.
//!
//! File Layout
//!
//! The engine is a one-directional pipeline, one module per stage:
//!
//! src/lyrics
//!   ├── cleaning      raw text -> cleaned lines (metadata and chord lines dropped)
//!   ├── headers       explicit section headers -> SectionLabel
//!   ├── structure     cleaned lines -> ordered sections (header path or inference)
//!   ├── inference     repeated stanza / repeated line sequence heuristics
//!   ├── segmenting    sections -> slide groups
//!   └── formats       editor text and plain-text slide export
//!
//! Around it sit the pipeline plumbing (transforms, loader), the source-side helpers
//! (bulk paste splitting, set-list titles, provider interfaces) and the test helpers.
//!
//! The three entry points every consumer needs are re-exported here:
//! [`normalize_lyrics`], [`auto_format_lyrics_for_editor`] and [`split_into_slides`].
//!
//! For testing guidelines, see the [testing module](lyrics::testing).

pub mod lyrics;

pub use lyrics::api::{auto_format_lyrics_for_editor, normalize_lyrics, split_into_slides};
