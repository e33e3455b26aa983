//! Lyrics providers
//!
//!     The engine never fetches anything itself. Sources of lyrics plug in through
//!     [LyricsProvider]: a search returning ranked candidates, and a fetch returning the raw
//!     text for one of them, which is then fed to [normalize_lyrics].
//!
//!     Lookups are memoized only through an explicit [LookupCache] owned by the caller and
//!     handed to a [CachedProvider]; nothing is cached behind the caller's back.

use crate::lyrics::api::normalize_lyrics;
use crate::lyrics::ast::NormalizedSong;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("song not found: {0}")]
    NotFound(String),
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// A search hit. `score` is a relevance in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    pub score: f64,
}

impl Candidate {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: Option<String>,
        score: f64,
    ) -> Self {
        let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
        Self {
            id: id.into(),
            title: title.into(),
            artist,
            score,
        }
    }
}

/// Unprocessed lyrics as a provider returns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLyrics {
    pub song_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    pub raw: String,
}

impl RawLyrics {
    pub fn normalize(&self) -> NormalizedSong {
        normalize_lyrics(&self.title, self.artist.as_deref(), &self.raw)
    }
}

pub trait LyricsProvider {
    /// Candidates for a free-text query, best first.
    fn search_songs(&self, query: &str) -> Result<Vec<Candidate>, ProviderError>;

    fn get_lyrics(&self, song_id: &str) -> Result<RawLyrics, ProviderError>;
}

impl<P: LyricsProvider + ?Sized> LyricsProvider for &P {
    fn search_songs(&self, query: &str) -> Result<Vec<Candidate>, ProviderError> {
        (**self).search_songs(query)
    }

    fn get_lyrics(&self, song_id: &str) -> Result<RawLyrics, ProviderError> {
        (**self).get_lyrics(song_id)
    }
}

/// Memoized lookups. Searches are keyed by the trimmed, lowercased query.
#[derive(Debug, Default, Clone)]
pub struct LookupCache {
    searches: HashMap<String, Vec<Candidate>>,
    lyrics: HashMap<String, RawLyrics>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn query_key(query: &str) -> String {
        query.trim().to_lowercase()
    }

    pub fn search(&self, query: &str) -> Option<&Vec<Candidate>> {
        self.searches.get(&Self::query_key(query))
    }

    pub fn store_search(&mut self, query: &str, candidates: Vec<Candidate>) {
        self.searches.insert(Self::query_key(query), candidates);
    }

    pub fn lyrics(&self, song_id: &str) -> Option<&RawLyrics> {
        self.lyrics.get(song_id)
    }

    pub fn store_lyrics(&mut self, lyrics: RawLyrics) {
        self.lyrics.insert(lyrics.song_id.clone(), lyrics);
    }

    pub fn len(&self) -> usize {
        self.searches.len() + self.lyrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A provider whose successful lookups go through a caller-owned cache.
///
/// Errors are passed through and never cached.
pub struct CachedProvider<P> {
    inner: P,
    cache: Arc<Mutex<LookupCache>>,
}

impl<P: LyricsProvider> CachedProvider<P> {
    pub fn new(inner: P, cache: Arc<Mutex<LookupCache>>) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &Arc<Mutex<LookupCache>> {
        &self.cache
    }

    fn with_cache<R>(&self, f: impl FnOnce(&mut LookupCache) -> R) -> R {
        let mut guard = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl<P: LyricsProvider> LyricsProvider for CachedProvider<P> {
    fn search_songs(&self, query: &str) -> Result<Vec<Candidate>, ProviderError> {
        if let Some(hit) = self.with_cache(|cache| cache.search(query).cloned()) {
            debug!(query, "search cache hit");
            return Ok(hit);
        }
        let candidates = self.inner.search_songs(query)?;
        self.with_cache(|cache| cache.store_search(query, candidates.clone()));
        Ok(candidates)
    }

    fn get_lyrics(&self, song_id: &str) -> Result<RawLyrics, ProviderError> {
        if let Some(hit) = self.with_cache(|cache| cache.lyrics(song_id).cloned()) {
            debug!(song_id, "lyrics cache hit");
            return Ok(hit);
        }
        let lyrics = self.inner.get_lyrics(song_id)?;
        self.with_cache(|cache| cache.store_lyrics(lyrics.clone()));
        Ok(lyrics)
    }
}

/// In-memory provider over a fixed song list.
///
/// A query matches when it is a case-insensitive substring of the title or the artist. An
/// exact title match scores 1.0, any other match 0.7.
#[derive(Debug, Default, Clone)]
pub struct StaticProvider {
    songs: Vec<RawLyrics>,
}

impl StaticProvider {
    pub const EXACT_SCORE: f64 = 1.0;
    pub const PARTIAL_SCORE: f64 = 0.7;

    pub fn new(songs: Vec<RawLyrics>) -> Self {
        Self { songs }
    }

    pub fn push(&mut self, song: RawLyrics) {
        self.songs.push(song);
    }
}

impl LyricsProvider for StaticProvider {
    fn search_songs(&self, query: &str) -> Result<Vec<Candidate>, ProviderError> {
        let q = query.trim().to_lowercase();
        let mut candidates: Vec<Candidate> = self
            .songs
            .iter()
            .filter(|song| {
                song.title.to_lowercase().contains(&q)
                    || song
                        .artist
                        .as_deref()
                        .is_some_and(|a| a.to_lowercase().contains(&q))
            })
            .map(|song| {
                let score = if song.title.to_lowercase() == q {
                    Self::EXACT_SCORE
                } else {
                    Self::PARTIAL_SCORE
                };
                Candidate::new(&song.song_id, &song.title, song.artist.clone(), score)
            })
            .collect();
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(candidates)
    }

    fn get_lyrics(&self, song_id: &str) -> Result<RawLyrics, ProviderError> {
        self.songs
            .iter()
            .find(|song| song.song_id == song_id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(song_id.to_string()))
    }
}
