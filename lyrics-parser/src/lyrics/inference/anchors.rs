//! Anchor-line chorus detection
//!
//! Fallback for pastes where the chorus never repeats verbatim (a line dropped here, an
//! ad-lib added there). The most frequent non-trivial lines serve as anchors. From each
//! anchor occurrence a window of up to 14 following lines is taken, cut short at the next
//! occurrence. Distinct lines of the first window that show up in at least one other
//! window form the candidate chorus block, at most 8 lines. The candidate with the best
//! `block length × occurrences` wins; on equal scores the earlier anchor stays.

use super::{non_overlapping, ChorusSpan};
use crate::lyrics::cleaning::normalize_for_match;
use std::collections::HashMap;
use tracing::debug;

pub const MAX_ANCHORS: usize = 6;
pub const WINDOW: usize = 14;
pub const MAX_BLOCK: usize = 8;
const MIN_CHARS: usize = 8;
const MIN_TOKENS: usize = 3;
const FILLERS: &[&str] = &[
    "oh", "ooh", "oooh", "ah", "yeah", "yes", "no", "amen", "hey", "whoa", "woah", "la", "na",
];

/// A chorus block seeded by an anchor line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorChorus {
    /// The common lines, in original casing (first occurrence).
    pub block: Vec<String>,
    pub spans: Vec<ChorusSpan>,
}

/// Whether a line (already in match form) is too weak to anchor a chorus.
pub fn is_trivial(normalized: &str) -> bool {
    if normalized.chars().count() < MIN_CHARS {
        return true;
    }
    let tokens: Vec<&str> = normalized.split(' ').filter(|t| !t.is_empty()).collect();
    tokens.len() < MIN_TOKENS
        || normalized.starts_with("yeah ")
        || tokens.iter().all(|t| FILLERS.contains(t))
}

pub fn find_anchor_chorus(lines: &[String]) -> Option<AnchorChorus> {
    let normalized: Vec<String> = lines.iter().map(|l| normalize_for_match(l)).collect();
    let n = normalized.len();

    let mut frequency: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for line in &normalized {
        if is_trivial(line) {
            continue;
        }
        let count = frequency.entry(line.as_str()).or_insert(0);
        if *count == 0 {
            order.push(line);
        }
        *count += 1;
    }

    let mut anchors: Vec<(&str, usize)> = order
        .into_iter()
        .map(|line| (line, frequency[line]))
        .filter(|(_, count)| *count >= 2)
        .collect();
    anchors.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.len().cmp(&a.0.len())));
    anchors.truncate(MAX_ANCHORS);

    let mut best: Option<(AnchorChorus, usize)> = None;
    for (anchor, _) in anchors {
        let starts: Vec<usize> = (0..n).filter(|&i| normalized[i] == anchor).collect();
        // a window stops where the next occurrence of the anchor begins
        let windows: Vec<&[String]> = starts
            .iter()
            .enumerate()
            .map(|(k, &start)| {
                let next = starts.get(k + 1).copied().unwrap_or(n);
                &normalized[start..(start + WINDOW).min(next)]
            })
            .collect();

        let first_start = starts[0];
        let mut seen: Vec<&str> = Vec::new();
        let mut block: Vec<String> = Vec::new();
        for (offset, line) in windows[0].iter().enumerate() {
            if is_trivial(line) || seen.contains(&line.as_str()) {
                continue;
            }
            let hits = windows.iter().filter(|w| w.contains(line)).count();
            if hits >= 2 {
                seen.push(line.as_str());
                block.push(lines[first_start + offset].clone());
            }
            if block.len() >= MAX_BLOCK {
                break;
            }
        }
        if block.len() < 2 {
            continue;
        }

        let kept = non_overlapping(&starts, block.len());
        if kept.len() < 2 {
            continue;
        }
        let score = block.len() * kept.len();
        if best.as_ref().map_or(true, |(_, best_score)| score > *best_score) {
            let spans = kept
                .into_iter()
                .map(|start| ChorusSpan {
                    start,
                    len: block.len().min(n - start),
                })
                .collect();
            best = Some((AnchorChorus { block, spans }, score));
        }
    }

    let (found, score) = best?;
    debug!(block = found.block.len(), occurrences = found.spans.len(), score, "anchor chorus");
    Some(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_trivial_lines() {
        assert!(is_trivial(""));
        assert!(is_trivial("oh oh"));
        assert!(is_trivial("short"));
        assert!(is_trivial("two words"));
        assert!(is_trivial("oh oh oh oh oh"));
        assert!(is_trivial("yeah you are good"));
        assert!(!is_trivial("you are good"));
        assert!(!is_trivial("how great is our god"));
    }

    #[test]
    fn test_anchor_block_from_loose_repeats() {
        // second chorus drops a line and adds an ad-lib, so no exact run of 3 repeats
        let lines = owned(&[
            "walking through the valley low",
            "every step I take alone",
            "you are my shelter in the storm",
            "you are my refuge and my song",
            "you will never let me go",
            "mountains rise and oceans roar",
            "still I know you hold me more",
            "you are my shelter in the storm",
            "oh oh",
            "you will never let me go",
        ]);
        let found = find_anchor_chorus(&lines).expect("anchor chorus");
        assert_eq!(
            found.block,
            vec!["you are my shelter in the storm", "you will never let me go"]
        );
        assert_eq!(
            found.spans,
            vec![ChorusSpan { start: 2, len: 2 }, ChorusSpan { start: 7, len: 2 }]
        );
    }

    #[test]
    fn test_original_casing_of_first_occurrence() {
        let lines = owned(&[
            "Shout To The Lord all the earth",
            "let us sing together now",
            "filler verse line number one",
            "Shout to the lord ALL the earth",
            "let us sing together now",
        ]);
        let found = find_anchor_chorus(&lines).expect("anchor chorus");
        assert_eq!(found.block[0], "Shout To The Lord all the earth");
        assert_eq!(found.spans.len(), 2);
    }

    #[test]
    fn test_no_repeats_no_anchor() {
        let lines: Vec<String> = (1..=12).map(|i| format!("a unique line {i}")).collect();
        assert_eq!(find_anchor_chorus(&lines), None);
    }
}
