//! CLI transforms
//!
//! Each transform is an engine stage plus an output format (e.g. "sections-json").

use anyhow::{bail, Context};
use lyrics_config::LyricsConfig;
use lyrics_parser::lyrics::ast::NormalizedSong;
use lyrics_parser::lyrics::bulk::{match_bulk_lyrics, normalize_title_key, parse_bulk_lyrics};
use lyrics_parser::lyrics::formats::{slides_to_text, to_editor_text};
use lyrics_parser::lyrics::inference::InferenceDepth;
use lyrics_parser::lyrics::loader::SongLoader;
use lyrics_parser::lyrics::setlist::parse_titles;
use lyrics_parser::lyrics::transforms::stages::Segmenting;
use lyrics_parser::lyrics::transforms::standard::sections_with;
use lyrics_parser::lyrics::transforms::Runnable;
use std::collections::HashMap;
use tracing::debug;

/// All available transforms with a one-line description.
pub const AVAILABLE_TRANSFORMS: &[(&str, &str)] = &[
    ("clean", "Cleaned lyric lines (metadata and chord lines removed)"),
    ("sections-json", "Normalized song as JSON"),
    ("sections-yaml", "Normalized song as YAML"),
    ("editor", "Auto-formatted text with [Label] headers, for review"),
    ("slides-json", "Slide deck as JSON (input: lyrics or a JSON array of songs)"),
    ("slides-text", "Slide deck as blank-line separated text blocks"),
    ("bulk-json", "Multi-song paste split into titled blocks as JSON"),
];

/// Song metadata supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct SongMeta {
    pub title: String,
    pub artist: Option<String>,
    pub titles: Option<String>,
}

pub fn execute_transform(
    source: &str,
    transform_name: &str,
    meta: &SongMeta,
    config: &LyricsConfig,
) -> anyhow::Result<String> {
    let loader = SongLoader::from_string(source);

    match transform_name {
        "clean" => Ok(loader.clean()?.join("\n")),
        "sections-json" => {
            let song = loader.normalize(&meta.title, meta.artist.as_deref());
            serde_json::to_string_pretty(&song).context("JSON serialization failed")
        }
        "sections-yaml" => {
            let song = loader.normalize(&meta.title, meta.artist.as_deref());
            serde_yaml::to_string(&song).context("YAML serialization failed")
        }
        "editor" => {
            let options = config.inference.to_options(InferenceDepth::Full);
            let sections = loader.with(&sections_with(options))?;
            Ok(to_editor_text(&sections))
        }
        "slides-json" => {
            let slides = Segmenting::new(config.slides.to_settings()).run(songs_from(&loader, meta))?;
            serde_json::to_string_pretty(&slides).context("JSON serialization failed")
        }
        "slides-text" => {
            let slides = Segmenting::new(config.slides.to_settings()).run(songs_from(&loader, meta))?;
            Ok(slides_to_text(&slides))
        }
        "bulk-json" => bulk_json(source, meta),
        _ => {
            let known: Vec<&str> = AVAILABLE_TRANSFORMS.iter().map(|(name, _)| *name).collect();
            bail!(
                "unknown transform '{transform_name}' (available: {})",
                known.join(", ")
            )
        }
    }
}

/// A JSON array of songs is taken as is, anything else is one song of raw lyrics.
fn songs_from(loader: &SongLoader, meta: &SongMeta) -> Vec<NormalizedSong> {
    match serde_json::from_str::<Vec<NormalizedSong>>(loader.source()) {
        Ok(songs) => {
            debug!(songs = songs.len(), "input is a JSON song list");
            songs
        }
        Err(_) => vec![loader.normalize(&meta.title, meta.artist.as_deref())],
    }
}

fn bulk_json(source: &str, meta: &SongMeta) -> anyhow::Result<String> {
    let titles = match &meta.titles {
        Some(list) => parse_titles(list)?,
        None => Vec::new(),
    };
    let blocks = parse_bulk_lyrics(source, &titles);

    if titles.is_empty() {
        return serde_json::to_string_pretty(&blocks).context("JSON serialization failed");
    }

    let entry_ids: HashMap<String, String> = titles
        .iter()
        .enumerate()
        .map(|(index, title)| (normalize_title_key(title), (index + 1).to_string()))
        .collect();
    let matched = match_bulk_lyrics(blocks, &entry_ids);
    serde_json::to_string_pretty(&matched).context("JSON serialization failed")
}
