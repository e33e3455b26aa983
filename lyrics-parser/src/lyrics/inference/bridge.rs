//! Bridge selection strategies
//!
//! Once chorus spans are known inside an unbroken block, the pieces between them are
//! segments. A strategy picks at most one segment to call `Bridge`; the rest become
//! numbered verses. Strategies only look at segment positions and lengths, never at text.

use serde::{Deserialize, Serialize};

/// A non-chorus piece of an unbroken block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Chorus occurrences before this segment.
    pub choruses_before: usize,
    /// Line count.
    pub len: usize,
    /// Whether this segment follows the last chorus.
    pub trailing: bool,
}

impl Segment {
    pub fn new(choruses_before: usize, len: usize, trailing: bool) -> Self {
        Self {
            choruses_before,
            len,
            trailing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BridgeStrategy {
    /// With three or more choruses, the segment between the second and third, else the
    /// longest segment at or after the second chorus. With exactly two, the trailing one.
    #[default]
    PostSecondChorus,
    /// With two or more choruses, the segment after the last chorus.
    TrailingSegment,
    /// Never label a bridge.
    #[serde(rename = "none")]
    Disabled,
}

impl BridgeStrategy {
    /// Index into `segments` of the bridge, if any.
    pub fn select(self, segments: &[Segment], chorus_count: usize) -> Option<usize> {
        match self {
            BridgeStrategy::PostSecondChorus => post_second_chorus(segments, chorus_count),
            BridgeStrategy::TrailingSegment if chorus_count >= 2 => trailing(segments),
            BridgeStrategy::TrailingSegment | BridgeStrategy::Disabled => None,
        }
    }
}

fn post_second_chorus(segments: &[Segment], chorus_count: usize) -> Option<usize> {
    match chorus_count {
        0 | 1 => None,
        2 => trailing(segments),
        _ => segments
            .iter()
            .position(|s| !s.trailing && s.choruses_before == 2)
            .or_else(|| longest_from_second_chorus(segments)),
    }
}

fn longest_from_second_chorus(segments: &[Segment]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, segment) in segments.iter().enumerate() {
        if segment.choruses_before < 2 {
            continue;
        }
        if best.map_or(true, |(_, len)| segment.len > len) {
            best = Some((index, segment.len));
        }
    }
    best.map(|(index, _)| index)
}

fn trailing(segments: &[Segment]) -> Option<usize> {
    segments.iter().position(|s| s.trailing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_choruses_pick_trailing_segment() {
        let segments = [
            Segment::new(0, 4, false),
            Segment::new(1, 4, false),
            Segment::new(2, 3, true),
        ];
        assert_eq!(BridgeStrategy::PostSecondChorus.select(&segments, 2), Some(2));
        assert_eq!(BridgeStrategy::TrailingSegment.select(&segments, 2), Some(2));
        assert_eq!(BridgeStrategy::Disabled.select(&segments, 2), None);
    }

    #[test]
    fn test_two_choruses_without_tail_have_no_bridge() {
        let segments = [Segment::new(0, 4, false), Segment::new(1, 4, false)];
        assert_eq!(BridgeStrategy::PostSecondChorus.select(&segments, 2), None);
    }

    #[test]
    fn test_three_choruses_prefer_segment_before_third() {
        let segments = [
            Segment::new(0, 4, false),
            Segment::new(1, 4, false),
            Segment::new(2, 2, false),
            Segment::new(3, 6, true),
        ];
        assert_eq!(BridgeStrategy::PostSecondChorus.select(&segments, 3), Some(2));
    }

    #[test]
    fn test_three_choruses_fall_back_to_longest_late_segment() {
        // choruses 2 and 3 are back to back
        let segments = [
            Segment::new(0, 4, false),
            Segment::new(1, 4, false),
            Segment::new(3, 2, false),
            Segment::new(4, 5, true),
        ];
        assert_eq!(BridgeStrategy::PostSecondChorus.select(&segments, 4), Some(3));
    }

    #[test]
    fn test_single_chorus_has_no_bridge() {
        let segments = [Segment::new(0, 4, false), Segment::new(1, 4, true)];
        assert_eq!(BridgeStrategy::PostSecondChorus.select(&segments, 1), None);
        assert_eq!(BridgeStrategy::TrailingSegment.select(&segments, 1), None);
    }

    #[test]
    fn test_strategy_names() {
        let strategy: BridgeStrategy = serde_json::from_str("\"trailing-segment\"").unwrap();
        assert_eq!(strategy, BridgeStrategy::TrailingSegment);
        assert_eq!(serde_json::to_string(&BridgeStrategy::Disabled).unwrap(), "\"none\"");
        assert_eq!(
            serde_json::to_string(&BridgeStrategy::PostSecondChorus).unwrap(),
            "\"post-second-chorus\""
        );
    }
}
