//! Exact repeated line sequences
//!
//! Looks for the run of 2 to 6 consecutive lines that repeats best inside an unbroken
//! block. Lines are compared in match form. Each candidate run is scored by
//! `length × non-overlapping occurrences`; higher score wins, then longer run, then the
//! run found first (longer runs are scanned first, left to right).

use super::{non_overlapping, ChorusSpan};
use crate::lyrics::cleaning::normalize_for_match;
use std::collections::HashMap;
use tracing::debug;

/// Blocks shorter than this are not searched.
pub const MIN_BLOCK_LINES: usize = 8;
pub const MIN_RUN: usize = 2;
pub const MAX_RUN: usize = 6;

struct Candidate {
    len: usize,
    starts: Vec<usize>,
    score: usize,
}

/// Chorus spans for the best repeated run, if one occurs at least twice without overlap.
pub fn find_repeated_sequence(lines: &[String]) -> Option<Vec<ChorusSpan>> {
    let normalized: Vec<String> = lines.iter().map(|l| normalize_for_match(l)).collect();
    let n = normalized.len();
    if n < MIN_BLOCK_LINES {
        return None;
    }

    let mut best: Option<Candidate> = None;
    for len in (MIN_RUN..=MAX_RUN).rev() {
        let mut occurrences: HashMap<&[String], Vec<usize>> = HashMap::new();
        let mut order: Vec<&[String]> = Vec::new();
        for start in 0..=n - len {
            let run = &normalized[start..start + len];
            if run.iter().any(|line| line.is_empty()) {
                continue;
            }
            let starts = occurrences.entry(run).or_default();
            if starts.is_empty() {
                order.push(run);
            }
            starts.push(start);
        }

        for run in order {
            let starts = non_overlapping(&occurrences[&run], len);
            if starts.len() < 2 {
                continue;
            }
            let score = len * starts.len();
            let better = best
                .as_ref()
                .map_or(true, |b| score > b.score || (score == b.score && len > b.len));
            if better {
                best = Some(Candidate { len, starts, score });
            }
        }
    }

    let best = best?;
    debug!(len = best.len, occurrences = best.starts.len(), "repeated line sequence");
    Some(
        best.starts
            .into_iter()
            .map(|start| ChorusSpan { start, len: best.len })
            .collect(),
    )
}
