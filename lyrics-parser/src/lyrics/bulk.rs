//! Bulk paste splitting
//!
//!     A whole set list pasted at once, one song after another. A new song starts at a marker
//!     line:
//!
//!         # Title             one to six hashes
//!         [Song] Title        also `[Title] Title`, any case
//!         == Title ==         any number of `=` on both sides
//!         Title               a bare line whose title key equals a known title
//!
//!     Text before the first marker is ignored, as are songs whose lyrics are empty.
//!     Blocks are then matched to set-list entries through [normalize_title_key].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

static HASH_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6}\s+(.+)$").expect("hash marker pattern is valid"));
static BRACKET_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\[(?:song|title)\]\s*(.+)$").expect("bracket marker pattern is valid")
});
static EQUALS_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^=+\s*(.+?)\s*=+$").expect("equals marker pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkLyricsBlock {
    pub title: String,
    pub lyrics: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkLyricsMatch {
    pub entry_id: String,
    pub title: String,
    pub lyrics: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkMatch {
    pub matches: Vec<BulkLyricsMatch>,
    pub unmatched: Vec<BulkLyricsBlock>,
}

/// Matching key for titles: lowercase ASCII letters and digits, apostrophes dropped,
/// everything else a single space.
pub fn normalize_title_key(title: &str) -> String {
    let spaced: String = title
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn marker_title(line: &str, known: &HashSet<String>) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    for pattern in [&*HASH_MARKER, &*BRACKET_MARKER, &*EQUALS_MARKER] {
        if let Some(caps) = pattern.captures(trimmed) {
            return Some(caps[1].trim().to_string());
        }
    }
    known
        .contains(&normalize_title_key(trimmed))
        .then(|| trimmed.to_string())
}

/// Split a multi-song paste into titled blocks.
pub fn parse_bulk_lyrics<S: AsRef<str>>(input: &str, known_titles: &[S]) -> Vec<BulkLyricsBlock> {
    let known: HashSet<String> = known_titles
        .iter()
        .map(|t| normalize_title_key(t.as_ref()))
        .filter(|k| !k.is_empty())
        .collect();

    let mut blocks = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in input.lines() {
        if let Some(title) = marker_title(line, &known) {
            if let Some((title, lines)) = current.take() {
                flush(&mut blocks, title, &lines);
            }
            current = Some((title, Vec::new()));
        } else if let Some((_, lines)) = current.as_mut() {
            lines.push(line);
        }
    }
    if let Some((title, lines)) = current {
        flush(&mut blocks, title, &lines);
    }

    debug!(blocks = blocks.len(), "parsed bulk lyrics");
    blocks
}

fn flush(blocks: &mut Vec<BulkLyricsBlock>, title: String, lines: &[&str]) {
    let lyrics = lines.join("\n").trim().to_string();
    if lyrics.is_empty() {
        debug!(%title, "dropping song without lyrics");
        return;
    }
    blocks.push(BulkLyricsBlock { title, lyrics });
}

/// Pair blocks with entries through their title keys.
pub fn match_bulk_lyrics(
    blocks: Vec<BulkLyricsBlock>,
    title_key_to_entry_id: &HashMap<String, String>,
) -> BulkMatch {
    let mut result = BulkMatch::default();
    for block in blocks {
        match title_key_to_entry_id.get(&normalize_title_key(&block.title)) {
            Some(entry_id) => result.matches.push(BulkLyricsMatch {
                entry_id: entry_id.clone(),
                title: block.title,
                lyrics: block.lyrics,
            }),
            None => result.unmatched.push(block),
        }
    }
    result
}
