//! Set-list title parsing

use std::collections::HashSet;
use thiserror::Error;

/// Largest set list accepted in one batch.
pub const MAX_TITLES: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetListError {
    #[error("no song titles given")]
    Empty,
    #[error("at most {max} songs per batch (got {got})")]
    TooManyTitles { max: usize, got: usize },
}

/// Split comma or newline separated titles, dropping blanks and case-insensitive repeats.
///
/// The first spelling of a repeated title is kept.
pub fn parse_titles(input: &str) -> Result<Vec<String>, SetListError> {
    let mut seen = HashSet::new();
    let titles: Vec<String> = input
        .split([',', '\n'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.to_lowercase()))
        .map(str::to_string)
        .collect();

    match titles.len() {
        0 => Err(SetListError::Empty),
        got if got > MAX_TITLES => Err(SetListError::TooManyTitles { max: MAX_TITLES, got }),
        _ => Ok(titles),
    }
}
