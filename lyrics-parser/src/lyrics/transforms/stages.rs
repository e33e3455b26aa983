//! Engine stages
//!
//! Thin [Runnable] wrappers over the engine modules so they can be composed.

use crate::lyrics::ast::{NormalizedSong, Section, Slide, SlideSettings};
use crate::lyrics::cleaning::clean_lines;
use crate::lyrics::formats::to_editor_text;
use crate::lyrics::inference::InferenceOptions;
use crate::lyrics::segmenting::split_into_slides;
use crate::lyrics::structure::normalize_sections;
use crate::lyrics::transforms::{Runnable, TransformError};

/// Raw text to cleaned lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineCleaning;

impl LineCleaning {
    pub fn new() -> Self {
        LineCleaning
    }
}

impl Runnable<String, Vec<String>> for LineCleaning {
    fn run(&self, input: String) -> Result<Vec<String>, TransformError> {
        Ok(clean_lines(&input))
    }
}

impl Runnable<&str, Vec<String>> for LineCleaning {
    fn run(&self, input: &str) -> Result<Vec<String>, TransformError> {
        Ok(clean_lines(input))
    }
}

/// Cleaned lines to sections, header path or inference.
#[derive(Debug, Default, Clone, Copy)]
pub struct Structuring {
    options: InferenceOptions,
}

impl Structuring {
    pub fn new(options: InferenceOptions) -> Self {
        Structuring { options }
    }
}

impl Runnable<Vec<String>, Vec<Section>> for Structuring {
    fn run(&self, input: Vec<String>) -> Result<Vec<Section>, TransformError> {
        Ok(normalize_sections(&input, &self.options))
    }
}

/// Sections to `[Label]` editor text.
#[derive(Debug, Default, Clone, Copy)]
pub struct EditorSerialization;

impl EditorSerialization {
    pub fn new() -> Self {
        EditorSerialization
    }
}

impl Runnable<Vec<Section>, String> for EditorSerialization {
    fn run(&self, input: Vec<Section>) -> Result<String, TransformError> {
        Ok(to_editor_text(&input))
    }
}

/// Songs to a full slide deck.
#[derive(Debug, Default, Clone)]
pub struct Segmenting {
    settings: SlideSettings,
}

impl Segmenting {
    pub fn new(settings: SlideSettings) -> Self {
        Segmenting { settings }
    }
}

impl Runnable<Vec<NormalizedSong>, Vec<Slide>> for Segmenting {
    fn run(&self, input: Vec<NormalizedSong>) -> Result<Vec<Slide>, TransformError> {
        Ok(split_into_slides(&input, &self.settings))
    }
}
