//! Section labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of section labels.
///
/// Verse numbers are kept exactly as found in explicit headers (gaps and duplicates are
/// not corrected); inferred verses are numbered by order of first appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SectionLabel {
    Verse(u32),
    Chorus,
    PreChorus,
    Bridge,
    Tag,
    Outro,
    Intro,
    Other,
}

impl SectionLabel {
    pub fn verse(number: u32) -> Self {
        SectionLabel::Verse(number.max(1))
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionLabel::Verse(n) => write!(f, "Verse {}", n),
            SectionLabel::Chorus => write!(f, "Chorus"),
            SectionLabel::PreChorus => write!(f, "Pre-Chorus"),
            SectionLabel::Bridge => write!(f, "Bridge"),
            SectionLabel::Tag => write!(f, "Tag"),
            SectionLabel::Outro => write!(f, "Outro"),
            SectionLabel::Intro => write!(f, "Intro"),
            SectionLabel::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section label: {0:?}")]
pub struct LabelParseError(pub String);

impl FromStr for SectionLabel {
    type Err = LabelParseError;

    /// Parses the canonical text produced by `Display`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let mut words = lower.split_whitespace();
        let kind = words.next().unwrap_or_default();
        let rest: Vec<&str> = words.collect();

        let label = match (kind, rest.as_slice()) {
            ("verse", []) => SectionLabel::Verse(1),
            ("verse", [n]) => {
                let n = n
                    .parse::<u32>()
                    .map_err(|_| LabelParseError(s.to_string()))?;
                SectionLabel::verse(n)
            }
            ("chorus", []) => SectionLabel::Chorus,
            ("pre-chorus", []) | ("prechorus", []) | ("pre", ["chorus"]) => SectionLabel::PreChorus,
            ("bridge", []) => SectionLabel::Bridge,
            ("tag", []) => SectionLabel::Tag,
            ("outro", []) => SectionLabel::Outro,
            ("intro", []) => SectionLabel::Intro,
            ("other", []) => SectionLabel::Other,
            _ => return Err(LabelParseError(s.to_string())),
        };
        Ok(label)
    }
}

impl From<SectionLabel> for String {
    fn from(label: SectionLabel) -> Self {
        label.to_string()
    }
}

impl TryFrom<String> for SectionLabel {
    type Error = LabelParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_canonical_text() {
        assert_eq!(SectionLabel::Verse(2).to_string(), "Verse 2");
        assert_eq!(SectionLabel::PreChorus.to_string(), "Pre-Chorus");
        assert_eq!(SectionLabel::Other.to_string(), "Other");
    }

    #[test]
    fn test_parse_round_trips_every_label() {
        let labels = [
            SectionLabel::Verse(1),
            SectionLabel::Verse(12),
            SectionLabel::Chorus,
            SectionLabel::PreChorus,
            SectionLabel::Bridge,
            SectionLabel::Tag,
            SectionLabel::Outro,
            SectionLabel::Intro,
            SectionLabel::Other,
        ];
        for label in labels {
            assert_eq!(label.to_string().parse::<SectionLabel>(), Ok(label));
        }
    }

    #[test]
    fn test_parse_is_lenient_on_case_and_missing_number() {
        assert_eq!("VERSE".parse(), Ok(SectionLabel::Verse(1)));
        assert_eq!("pre chorus".parse(), Ok(SectionLabel::PreChorus));
        assert_eq!("verse 0".parse(), Ok(SectionLabel::Verse(1)));
    }

    #[test]
    fn test_parse_rejects_unknown_text() {
        assert!("Refrain".parse::<SectionLabel>().is_err());
        assert!("Verse two".parse::<SectionLabel>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_text() {
        let json = serde_json::to_string(&SectionLabel::Verse(3)).unwrap();
        assert_eq!(json, "\"Verse 3\"");
        let back: SectionLabel = serde_json::from_str("\"Pre-Chorus\"").unwrap();
        assert_eq!(back, SectionLabel::PreChorus);
    }
}
