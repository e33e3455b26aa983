//! Configuration loader for the lyrics tools.
//!
//! `defaults/lyrics.default.toml` is embedded into every binary so that the documented
//! defaults and runtime behavior stay in sync. Applications layer user files and flag
//! overrides on top via [`Loader`] before deserializing into [`LyricsConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use lyrics_parser::lyrics::ast::{LinesPerSlide, OrphanStrategy, SlideSettings};
use lyrics_parser::lyrics::inference::{BridgeStrategy, InferenceDepth, InferenceOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/lyrics.default.toml");

/// Top-level configuration consumed by the lyrics tools.
#[derive(Debug, Clone, Deserialize)]
pub struct LyricsConfig {
    pub slides: SlidesConfig,
    pub inference: InferenceConfig,
}

/// Mirrors [`SlideSettings`].
#[derive(Debug, Clone, Deserialize)]
pub struct SlidesConfig {
    pub lines_per_slide: LinesPerSlide,
    pub show_section_labels: bool,
    pub orphans: OrphanStrategy,
    pub cover_title: String,
    #[serde(default)]
    pub cover_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    pub bridge: BridgeStrategy,
}

impl SlidesConfig {
    pub fn to_settings(&self) -> SlideSettings {
        SlideSettings {
            lines_per_slide: self.lines_per_slide,
            show_section_labels: self.show_section_labels,
            orphans: self.orphans,
            cover_title: self.cover_title.clone(),
            cover_date: self.cover_date.clone(),
        }
    }
}

impl InferenceConfig {
    pub fn to_options(&self, depth: InferenceDepth) -> InferenceOptions {
        InferenceOptions {
            depth,
            bridge: self.bridge,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error at [`Loader::build`].
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file that may be absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `slides.lines_per_slide` from a flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<LyricsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<LyricsConfig, ConfigError> {
    Loader::new().build()
}
