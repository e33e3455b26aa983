//! Prebuilt pipelines
//!
//! Shared by the loader, the CLI and the tests.

use crate::lyrics::ast::Section;
use crate::lyrics::inference::InferenceOptions;
use crate::lyrics::transforms::stages::{EditorSerialization, LineCleaning, Structuring};
use crate::lyrics::transforms::Transform;
use once_cell::sync::Lazy;

pub type LinesTransform = Transform<String, Vec<String>>;
pub type SectionsTransform = Transform<String, Vec<Section>>;
pub type TextTransform = Transform<String, String>;

/// Raw text to cleaned lines.
pub static CLEAN: Lazy<LinesTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(LineCleaning::new()));

/// Raw text to sections the way `normalize_lyrics` derives them (stanza inference only).
pub static TO_SECTIONS: Lazy<SectionsTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(LineCleaning::new())
        .then(Structuring::new(InferenceOptions::stanzas()))
});

/// Raw text to sections with the full single-stanza inference.
pub static TO_INFERRED_SECTIONS: Lazy<SectionsTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(LineCleaning::new())
        .then(Structuring::new(InferenceOptions::full()))
});

/// Raw text to `[Label]` editor text.
pub static AUTO_FORMAT: Lazy<TextTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then_transform(&TO_INFERRED_SECTIONS)
        .then(EditorSerialization::new())
});

/// Build a sections pipeline for caller-chosen options (e.g. from configuration).
pub fn sections_with(options: InferenceOptions) -> SectionsTransform {
    Transform::from_fn(Ok)
        .then(LineCleaning::new())
        .then(Structuring::new(options))
}
