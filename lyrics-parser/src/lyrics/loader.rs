//! Song loading
//!
//!     [SongLoader] reads lyrics from a file or a string and runs pipelines over them. The
//!     CLI and the integration tests go through it:
//!
//!         let song = SongLoader::from_path("amazing-grace.txt")?.normalize("Amazing Grace", None);
//!         let text = SongLoader::from_string(raw).auto_format()?;

use crate::lyrics::api::normalize_lyrics;
use crate::lyrics::ast::{NormalizedSong, Section};
use crate::lyrics::transforms::standard::{AUTO_FORMAT, CLEAN, TO_INFERRED_SECTIONS, TO_SECTIONS};
use crate::lyrics::transforms::{Transform, TransformError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}

/// Raw lyrics plus shortcuts for the standard pipelines.
#[derive(Debug, Clone)]
pub struct SongLoader {
    source: String,
}

impl SongLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "loaded lyrics");
        Ok(SongLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        SongLoader {
            source: source.into(),
        }
    }

    /// Run any pipeline over the source.
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    pub fn clean(&self) -> Result<Vec<String>, LoaderError> {
        self.with(&CLEAN)
    }

    /// Sections as `normalize_lyrics` derives them.
    pub fn sections(&self) -> Result<Vec<Section>, LoaderError> {
        self.with(&TO_SECTIONS)
    }

    /// Sections with full single-stanza inference.
    pub fn inferred_sections(&self) -> Result<Vec<Section>, LoaderError> {
        self.with(&TO_INFERRED_SECTIONS)
    }

    pub fn auto_format(&self) -> Result<String, LoaderError> {
        self.with(&AUTO_FORMAT)
    }

    pub fn normalize(&self, title: &str, artist: Option<&str>) -> NormalizedSong {
        normalize_lyrics(title, artist, &self.source)
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}
