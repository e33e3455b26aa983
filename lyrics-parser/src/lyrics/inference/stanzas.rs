//! Stanza-level inference
//!
//! A stanza is a run of non-blank lines. Its signature is the match form of each line
//! (see [normalize_for_match]) joined with newlines, so two stanzas match when they
//! differ only in case, punctuation or spacing.

use crate::lyrics::ast::{Section, SectionLabel};
use crate::lyrics::cleaning::{is_blank, normalize_for_match};
use std::collections::HashMap;
use tracing::debug;

/// Split lines at blank lines, dropping the blanks.
pub fn split_stanzas(lines: &[String]) -> Vec<&[String]> {
    lines
        .split(|line| is_blank(line))
        .filter(|stanza| !stanza.is_empty())
        .collect()
}

pub fn stanza_signature(stanza: &[String]) -> String {
    stanza
        .iter()
        .map(|line| normalize_for_match(line))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// The signature recurring most often, if any recurs at all.
///
/// Ties on count go to the longer signature, then to the one seen first.
pub fn find_chorus_signature(stanzas: &[&[String]]) -> Option<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for stanza in stanzas {
        let signature = stanza_signature(stanza);
        if signature.is_empty() {
            continue;
        }
        let count = counts.entry(signature.clone()).or_insert(0);
        if *count == 0 {
            order.push(signature);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for signature in &order {
        let count = counts[signature];
        if count < 2 {
            continue;
        }
        let better = match best {
            None => true,
            Some((best_sig, best_count)) => {
                count > best_count || (count == best_count && signature.len() > best_sig.len())
            }
        };
        if better {
            best = Some((signature, count));
        }
    }
    best.map(|(signature, _)| signature.to_string())
}

/// Label each stanza as Chorus, Bridge or a numbered Verse, keeping source order.
pub fn label_stanzas(stanzas: &[&[String]]) -> Vec<Section> {
    let chorus = find_chorus_signature(stanzas);
    let is_chorus: Vec<bool> = stanzas
        .iter()
        .map(|stanza| chorus.as_deref() == Some(stanza_signature(stanza).as_str()))
        .collect();
    let chorus_count = is_chorus.iter().filter(|c| **c).count();
    let last_chorus = is_chorus.iter().rposition(|c| *c);
    debug!(stanzas = stanzas.len(), chorus_count, "stanza inference");

    let mut verse = 0;
    stanzas
        .iter()
        .zip(is_chorus)
        .enumerate()
        .map(|(index, (stanza, chorus))| {
            let label = if chorus {
                SectionLabel::Chorus
            } else if chorus_count >= 2 && last_chorus.is_some_and(|last| index > last) {
                SectionLabel::Bridge
            } else {
                verse += 1;
                SectionLabel::Verse(verse)
            };
            Section::new(label, stanza.to_vec())
        })
        .collect()
}
