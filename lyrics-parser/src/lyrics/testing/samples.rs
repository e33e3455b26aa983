//! Curated sample lyrics
//!
//!     Sample files live in `lyrics-parser/samples/<name>.txt`. All lyrics in them are
//!     written for the test suite.

use crate::lyrics::ast::NormalizedSong;
use crate::lyrics::loader::SongLoader;
use std::path::PathBuf;

pub fn path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(format!("{name}.txt"))
}

pub fn loader(name: &str) -> SongLoader {
    let path = path(name);
    SongLoader::from_path(&path)
        .unwrap_or_else(|err| panic!("sample '{name}' could not be loaded: {err}"))
}

pub fn source(name: &str) -> String {
    loader(name).source().to_string()
}

/// Normalize a sample, using its file name as the title.
pub fn normalize(name: &str) -> NormalizedSong {
    loader(name).normalize(name, None)
}
