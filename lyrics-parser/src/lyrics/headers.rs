//! Header Parser
//!
//!     Recognizes explicit section headers and maps them onto [SectionLabel].
//!
//!     Two shapes are accepted, both case-insensitive and trimmed:
//!
//!         [Verse 2]   [Chorus]   [Pre-Chorus]   [Instrumental]
//!         Verse 2     Chorus:    pre chorus     BRIDGE
//!
//!     The kind grammar is `<kind>[ N][:]` with kind one of verse, chorus, pre-chorus
//!     (also "pre chorus" and "prechorus"), bridge, tag, outro, intro. A number is only
//!     meaningful for verses and defaults to 1.
//!
//!     Bracketed text outside the kind grammar is still a header, labeled `Other`, so that
//!     markers like `[Instrumental]` or `[Other]` start their own section instead of being
//!     sung. Bracketed chord markers (`[G]`, `[D/F# Em]`) are not headers. Bare lines outside
//!     the grammar are lyrics.

use crate::lyrics::ast::SectionLabel;
use crate::lyrics::cleaning::is_chord_marker;
use once_cell::sync::Lazy;
use regex::Regex;

static BRACKET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\]]+)\]$").expect("bracket pattern is valid"));

static KIND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(verse|chorus|pre[- ]?chorus|bridge|tag|outro|intro)(?:\s+(\d+))?\s*:?$")
        .expect("header pattern is valid")
});

/// Parse a single line as a section header.
pub fn parse_header(line: &str) -> Option<SectionLabel> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    match BRACKET.captures(trimmed) {
        Some(caps) => {
            let inner = caps[1].trim();
            if inner.is_empty() {
                return None;
            }
            match parse_kind(inner) {
                Some(label) => Some(label),
                None if is_chord_marker(inner) => None,
                None => Some(SectionLabel::Other),
            }
        }
        None => parse_kind(trimmed),
    }
}

pub fn is_header(line: &str) -> bool {
    parse_header(line).is_some()
}

fn parse_kind(text: &str) -> Option<SectionLabel> {
    let caps = KIND.captures(text)?;
    let kind = caps[1].to_lowercase();
    let label = match kind.as_str() {
        "verse" => {
            let number = caps
                .get(2)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .unwrap_or(1);
            SectionLabel::verse(number)
        }
        "chorus" => SectionLabel::Chorus,
        "bridge" => SectionLabel::Bridge,
        "tag" => SectionLabel::Tag,
        "outro" => SectionLabel::Outro,
        "intro" => SectionLabel::Intro,
        // pre-chorus, pre chorus, prechorus
        _ => SectionLabel::PreChorus,
    };
    Some(label)
}
