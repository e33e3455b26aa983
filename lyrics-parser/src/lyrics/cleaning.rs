//! Line Cleaner
//!
//!     First stage of the pipeline: raw pasted text in, lyric lines out.
//!
//!     Pasted lyrics arrive with whatever the source site added around them: CCLI and
//!     copyright footers, links, key/tempo/capo annotations, and chord charts. Each raw line
//!     is classified as one of
//!
//!         blank       kept as a separator (runs collapse to one)
//!         metadata    dropped, see [is_metadata_line]
//!         chords      dropped, see [is_chords_only]
//!         content     kept, trimmed
//!
//!     Leading and trailing blank lines are removed, so the output either is empty or starts
//!     and ends with content.
//!
//!     The same module owns [normalize_for_match], the canonical form used by the inference
//!     engine whenever two lines are compared.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Prefixes (lowercase) that mark a metadata line.
const METADATA_PREFIXES: &[&str] = &[
    "ccli song #",
    "ccli license #",
    "song #",
    "license #",
    "©",
    "(c)",
    "capo",
    "key:",
    "tempo:",
    "time:",
];

/// Substrings (lowercase) that mark a metadata line wherever they appear.
const METADATA_MARKERS: &[&str] = &["all rights reserved", "www.", "http://", "https://"];

/// Share of tokens that must be chord symbols for a line to count as a chord line.
const CHORD_TOKEN_RATIO: f64 = 0.8;

/// Root, accidental, quality, degree, slash bass: `C`, `F#m7`, `Bbmaj7`, `Dsus4`, `G/B`.
static CHORD_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-G](?:#|b)?(?:maj|min|m|sus|dim|aug|add)?\d*(?:/[A-G](?:#|b)?)?$")
        .expect("chord pattern is valid")
});

static CHORD_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[|()\[\],]").expect("separator pattern is valid"));

/// Split raw text into cleaned lyric lines.
///
/// A leading byte-order mark is dropped before the first line is classified.
pub fn clean_lines(raw: &str) -> Vec<String> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut out = Vec::new();
    for line in raw.lines() {
        let trimmed = line.trim();
        if is_metadata_line(trimmed) {
            trace!(line = trimmed, "dropping metadata line");
            continue;
        }
        if is_chords_only(trimmed) {
            trace!(line = trimmed, "dropping chord line");
            continue;
        }
        out.push(trimmed.to_string());
    }
    collapse_blank_lines(out)
}

/// Collapse runs of blank lines to a single empty line and drop blank lines at both ends.
///
/// Applied once to the whole song and again to every section buffer.
pub fn collapse_blank_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    let mut prev_blank = true;
    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            if !prev_blank {
                out.push(String::new());
            }
            prev_blank = true;
        } else {
            out.push(line.to_string());
            prev_blank = false;
        }
    }
    if out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Copyright and licensing footers, links, and performance annotations.
pub fn is_metadata_line(line: &str) -> bool {
    let lower = line.trim().to_lowercase();
    if lower.is_empty() {
        return false;
    }
    METADATA_PREFIXES.iter().any(|p| lower.starts_with(p))
        || METADATA_MARKERS.iter().any(|m| lower.contains(m))
}

/// A chord chart line such as `G  D/F#  Em7  C` or `| Am | F | C | G |`.
///
/// At least two tokens, at least 80% of them chord symbols, and no lowercase letters
/// outside the chord symbols themselves (qualities like `m` or `sus` are lowercase).
pub fn is_chords_only(line: &str) -> bool {
    let spaced = CHORD_SEPARATORS.replace_all(line.trim(), " ");
    let tokens: Vec<&str> = spaced.split_whitespace().collect();
    if tokens.len() < 2 {
        return false;
    }

    let (chords, words): (Vec<&str>, Vec<&str>) =
        tokens.iter().copied().partition(|tok| CHORD_TOKEN.is_match(tok));
    if words.iter().any(|w| w.chars().any(|c| c.is_lowercase())) {
        return false;
    }
    chords.len() as f64 / tokens.len() as f64 >= CHORD_TOKEN_RATIO
}

/// Bracket contents made only of chord symbols, such as `G` in `[G]` or `D/F# Em` in `[D/F# Em]`.
pub fn is_chord_marker(text: &str) -> bool {
    let mut tokens = text.split_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(|tok| CHORD_TOKEN.is_match(tok))
}

/// Canonical comparison form: lowercase, alphanumerics only, single spaces.
pub fn normalize_for_match(line: &str) -> String {
    let replaced: String = line
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_clean_drops_metadata_and_chords() {
        let raw = "CCLI Song # 123\nKey: G\nG D Em C\n\nReal line 1\nReal line 2";
        assert_eq!(clean_lines(raw), vec!["Real line 1", "Real line 2"]);
    }

    #[test]
    fn test_clean_handles_crlf_and_trailing_space() {
        let raw = "First   \r\nSecond\t\r\n";
        assert_eq!(clean_lines(raw), vec!["First", "Second"]);
    }

    #[test]
    fn test_clean_collapses_and_trims_blank_runs() {
        let raw = "\n\n  \nA\n\n\n\nB\n   \n\n";
        assert_eq!(clean_lines(raw), vec!["A", "", "B"]);
    }

    #[test]
    fn test_clean_empty_input() {
        assert!(clean_lines("").is_empty());
        assert!(clean_lines("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_blank_left_behind_by_removed_lines_collapses() {
        let raw = "A\n\n© 2020 Someone\n\nB";
        assert_eq!(clean_lines(raw), vec!["A", "", "B"]);
    }

    #[rstest]
    #[case("CCLI Song # 7012345")]
    #[case("ccli license # 11223344")]
    #[case("Song # 42")]
    #[case("License # 9")]
    #[case("© 2017 Some Publishing")]
    #[case("(c) 2004 Worship Together")]
    #[case("Used by permission. All Rights Reserved.")]
    #[case("Lyrics from www.example.com")]
    #[case("see https://example.com/song")]
    #[case("Capo 2")]
    #[case("Key: Bb")]
    #[case("Tempo: 72")]
    #[case("Time: 6/8")]
    fn test_metadata_lines(#[case] line: &str) {
        assert!(is_metadata_line(line), "{line:?} should be metadata");
    }

    #[rstest]
    #[case("Amazing grace how sweet the sound")]
    #[case("Keys to the kingdom")]
    #[case("")]
    fn test_non_metadata_lines(#[case] line: &str) {
        assert!(!is_metadata_line(line), "{line:?} should not be metadata");
    }

    #[rstest]
    #[case("G D Em C")]
    #[case("| Am | F | C | G |")]
    #[case("C/E  F  G7  Am")]
    #[case("F#m7 Bbmaj7 Dsus4 Cadd9")]
    #[case("(G) [D] Em, C")]
    fn test_chord_lines(#[case] line: &str) {
        assert!(is_chords_only(line), "{line:?} should be a chord line");
    }

    #[rstest]
    #[case("G")]
    #[case("A mighty fortress")]
    #[case("GOD IS GOOD")]
    #[case("Em a")]
    #[case("C D E F H J K")]
    fn test_non_chord_lines(#[case] line: &str) {
        assert!(!is_chords_only(line), "{line:?} should not be a chord line");
    }

    #[test]
    fn test_leading_byte_order_mark_is_dropped() {
        assert_eq!(clean_lines("\u{feff}[Chorus]\nx"), vec!["[Chorus]", "x"]);
        assert_eq!(clean_lines("\u{feff}"), Vec::<String>::new());
    }

    #[rstest]
    #[case("G", true)]
    #[case("F#m7", true)]
    #[case("D/F# Em", true)]
    #[case("Chorus", false)]
    #[case("Tag", false)]
    #[case("G and more", false)]
    #[case("", false)]
    fn test_chord_markers(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_chord_marker(text), expected, "{text:?}");
    }

    #[test]
    fn test_normalize_for_match() {
        assert_eq!(
            normalize_for_match("  Oh, Come — let us ADORE Him! "),
            "oh come let us adore him"
        );
        assert_eq!(normalize_for_match("Señor, ¡ven!"), "señor ven");
        assert_eq!(normalize_for_match("!!!"), "");
    }
}
