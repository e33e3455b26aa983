//! Repetition Inference Engine
//!
//!     Guesses section structure for lyrics pasted without any headers. Best-effort by
//!     nature: the result is meant to be reviewed (see
//!     [auto_format_lyrics_for_editor](crate::lyrics::api::auto_format_lyrics_for_editor)).
//!
//! Stanza step
//!
//!     Lines are split into stanzas at blank lines. With more than one stanza, the stanza
//!     that recurs most often becomes the chorus; stanzas after its last occurrence are
//!     bridges, everything else is numbered verses. See [stanzas].
//!
//! Single-stanza step
//!
//!     Only with [InferenceDepth::Full]. A song pasted as one unbroken block is searched for
//!     chorus spans, first as an exact repeated run of lines ([sequence]), then from
//!     frequently repeated anchor lines ([anchors]). The pieces between spans become verses,
//!     one of them possibly a bridge as picked by the [BridgeStrategy]. Without any spans,
//!     long blocks are cut into fixed-size verses.
//!
//!     When both steps could apply, the stanza step wins.

pub mod anchors;
pub mod bridge;
pub mod sequence;
pub mod stanzas;

pub use bridge::{BridgeStrategy, Segment};

use crate::lyrics::ast::{Section, SectionLabel};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::debug;

/// Blocks of at least this many lines are chunked into [LONG_CHUNK]-line verses.
pub const LONG_BLOCK: usize = 18;
pub const LONG_CHUNK: usize = 8;
/// Blocks of at least this many lines are chunked into [MEDIUM_CHUNK]-line verses.
pub const MEDIUM_BLOCK: usize = 12;
pub const MEDIUM_CHUNK: usize = 6;

/// How far inference goes for headerless input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InferenceDepth {
    /// Stanza step only; an unbroken block stays a single `Verse 1`.
    #[default]
    Stanzas,
    /// Stanza step plus the single-stanza span search and chunking.
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InferenceOptions {
    pub depth: InferenceDepth,
    pub bridge: BridgeStrategy,
}

impl InferenceOptions {
    pub fn stanzas() -> Self {
        Self::default()
    }

    pub fn full() -> Self {
        Self {
            depth: InferenceDepth::Full,
            ..Self::default()
        }
    }

    pub fn with_bridge(mut self, bridge: BridgeStrategy) -> Self {
        self.bridge = bridge;
        self
    }
}

/// One occurrence of the chorus inside a single stanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChorusSpan {
    pub start: usize,
    pub len: usize,
}

impl ChorusSpan {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Infer sections for headerless cleaned lines.
pub fn infer(lines: &[String], options: &InferenceOptions) -> Vec<Section> {
    let stanzas = stanzas::split_stanzas(lines);
    match stanzas.as_slice() {
        [] => Vec::new(),
        [single] => infer_single_stanza(single, options),
        _ => stanzas::label_stanzas(&stanzas),
    }
}

fn infer_single_stanza(lines: &[String], options: &InferenceOptions) -> Vec<Section> {
    if options.depth == InferenceDepth::Stanzas {
        return vec![Section::new(SectionLabel::Verse(1), lines.to_vec())];
    }

    let spans = sequence::find_repeated_sequence(lines)
        .or_else(|| anchors::find_anchor_chorus(lines).map(|found| found.spans));

    match spans {
        Some(spans) => {
            debug!(choruses = spans.len(), len = spans[0].len, "chorus spans found");
            label_around_spans(lines, &spans, options.bridge)
        }
        None => chunk_into_verses(lines),
    }
}

/// Keep starts that begin at least `len` lines after the previously kept one.
///
/// `starts` must be ascending.
pub fn non_overlapping(starts: &[usize], len: usize) -> Vec<usize> {
    let mut kept: Vec<usize> = Vec::new();
    for &start in starts {
        if kept.last().map_or(true, |&last| start - last >= len) {
            kept.push(start);
        }
    }
    kept
}

/// Lay out segment, chorus, segment, chorus, ..., trailing segment in source order.
///
/// `spans` must be ascending and non-overlapping.
pub fn label_around_spans(
    lines: &[String],
    spans: &[ChorusSpan],
    bridge: BridgeStrategy,
) -> Vec<Section> {
    enum Piece {
        Segment(usize),
        Chorus(Range<usize>),
    }

    let mut pieces = Vec::new();
    let mut segments: Vec<(Segment, Range<usize>)> = Vec::new();
    let mut cursor = 0;

    for (index, span) in spans.iter().enumerate() {
        if span.start > cursor {
            pieces.push(Piece::Segment(segments.len()));
            segments.push((Segment::new(index, span.start - cursor, false), cursor..span.start));
        }
        pieces.push(Piece::Chorus(span.range()));
        cursor = cursor.max(span.end());
    }
    if cursor < lines.len() {
        pieces.push(Piece::Segment(segments.len()));
        segments.push((
            Segment::new(spans.len(), lines.len() - cursor, true),
            cursor..lines.len(),
        ));
    }

    let descriptors: Vec<Segment> = segments.iter().map(|(segment, _)| *segment).collect();
    let bridge_index = bridge.select(&descriptors, spans.len());
    debug!(?bridge, ?bridge_index, segments = descriptors.len(), "bridge selection");

    let mut verse = 1;
    pieces
        .into_iter()
        .map(|piece| match piece {
            Piece::Chorus(range) => Section::new(SectionLabel::Chorus, lines[range].to_vec()),
            Piece::Segment(index) => {
                let label = if bridge_index == Some(index) {
                    SectionLabel::Bridge
                } else {
                    verse += 1;
                    SectionLabel::Verse(verse - 1)
                };
                Section::new(label, lines[segments[index].1.clone()].to_vec())
            }
        })
        .collect()
}

/// Last resort for an unbroken block: fixed-size verses.
pub fn chunk_into_verses(lines: &[String]) -> Vec<Section> {
    let size = if lines.len() >= LONG_BLOCK {
        LONG_CHUNK
    } else if lines.len() >= MEDIUM_BLOCK {
        MEDIUM_CHUNK
    } else {
        return vec![Section::new(SectionLabel::Verse(1), lines.to_vec())];
    };

    debug!(lines = lines.len(), size, "no chorus found, chunking into verses");
    lines
        .chunks(size)
        .zip(1..)
        .map(|(chunk, number)| Section::new(SectionLabel::Verse(number), chunk.to_vec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn numbered(prefix: &str, count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("{prefix} {i}")).collect()
    }

    fn labels(sections: &[Section]) -> Vec<String> {
        sections.iter().map(|s| s.label.to_string()).collect()
    }

    #[test]
    fn test_non_overlapping_merges_close_starts() {
        assert_eq!(non_overlapping(&[0, 1, 2, 6, 7, 12], 4), vec![0, 6, 12]);
        assert_eq!(non_overlapping(&[], 3), Vec::<usize>::new());
    }

    #[test]
    fn test_stanza_depth_keeps_single_block() {
        let lines = numbered("Line", 20);
        let sections = infer(&lines, &InferenceOptions::stanzas());
        assert_eq!(labels(&sections), vec!["Verse 1"]);
        assert_eq!(sections[0].lines.len(), 20);
    }

    #[test]
    fn test_chunking_thresholds() {
        let eighteen = infer(&numbered("Line", 18), &InferenceOptions::full());
        assert_eq!(labels(&eighteen), vec!["Verse 1", "Verse 2", "Verse 3"]);
        assert_eq!(eighteen[2].lines, vec!["Line 17", "Line 18"]);

        let twelve = infer(&numbered("Line", 12), &InferenceOptions::full());
        assert_eq!(labels(&twelve), vec!["Verse 1", "Verse 2"]);
        assert_eq!(twelve[0].lines.len(), 6);

        let eleven = infer(&numbered("Line", 11), &InferenceOptions::full());
        assert_eq!(labels(&eleven), vec!["Verse 1"]);
    }

    #[test]
    fn test_label_around_spans_with_two_choruses() {
        let lines = owned(&["v1", "v2", "c1", "c2", "v3", "v4", "c1", "c2", "b1", "b2"]);
        let spans = [ChorusSpan { start: 2, len: 2 }, ChorusSpan { start: 6, len: 2 }];
        let sections = label_around_spans(&lines, &spans, BridgeStrategy::PostSecondChorus);
        assert_eq!(
            labels(&sections),
            vec!["Verse 1", "Chorus", "Verse 2", "Chorus", "Bridge"]
        );
        assert_eq!(sections[4].lines, vec!["b1", "b2"]);
    }

    #[test]
    fn test_label_around_spans_prefers_segment_between_second_and_third_chorus() {
        let lines = owned(&[
            "v1", "c1", "c2", "v2", "c1", "c2", "b1", "b2", "b3", "c1", "c2", "t1",
        ]);
        let spans = [
            ChorusSpan { start: 1, len: 2 },
            ChorusSpan { start: 4, len: 2 },
            ChorusSpan { start: 9, len: 2 },
        ];
        let sections = label_around_spans(&lines, &spans, BridgeStrategy::PostSecondChorus);
        assert_eq!(
            labels(&sections),
            vec!["Verse 1", "Chorus", "Verse 2", "Chorus", "Bridge", "Chorus", "Verse 3"]
        );
    }

    #[test]
    fn test_label_around_spans_without_bridge_strategy() {
        let lines = owned(&["c1", "c2", "v1", "c1", "c2", "t1"]);
        let spans = [ChorusSpan { start: 0, len: 2 }, ChorusSpan { start: 3, len: 2 }];
        let sections = label_around_spans(&lines, &spans, BridgeStrategy::Disabled);
        assert_eq!(
            labels(&sections),
            vec!["Chorus", "Verse 1", "Chorus", "Verse 2"]
        );
    }
}
