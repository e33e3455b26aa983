//! Normalization of curated samples
//!
//! Sections are checked with the fluent song assertions; sample content comes from
//! `lyrics-parser/samples`.

use lyrics_parser::lyrics::ast::SectionLabel;
use lyrics_parser::lyrics::cleaning::clean_lines;
use lyrics_parser::lyrics::testing::{assert_song, samples, TextMatch};
use lyrics_parser::normalize_lyrics;
use rstest::rstest;

#[test]
fn test_headered_sample_keeps_explicit_labels() {
    let song = samples::normalize("headered");

    assert_song(&song)
        .title("headered")
        .artist(None)
        .labels(&[
            "Intro",
            "Verse 1",
            "Pre-Chorus",
            "Chorus",
            "Verse 2",
            "Chorus",
            "Bridge",
            "Tag",
        ])
        .section(2, |s| {
            s.label(SectionLabel::PreChorus)
                .lines(&["And I won't look back", "No I won't look back"]);
        })
        .section(7, |s| {
            s.line_count(1).first_line("Wholly Yours");
        });
}

#[test]
fn test_footer_chords_and_bare_headers() {
    let song = samples::normalize("ccli_footer");

    assert_song(&song)
        .labels(&["Verse 1", "Verse 2", "Chorus"])
        .line_count(6)
        .section(0, |s| {
            s.lines(&["Quiet river running slow", "Under bridges made of stone"]);
        })
        .section(2, |s| {
            s.line(1, TextMatch::StartsWith("Let the valleys".into()));
        });
}

#[test]
fn test_prelude_becomes_first_verse() {
    let song = samples::normalize("prelude");

    assert_song(&song)
        .labels(&["Verse 1", "Chorus", "Other"])
        .section(0, |s| {
            s.lines(&["Before any header", "Still before any header"]);
        })
        .section(2, |s| {
            s.lines(&["Hum along"]);
        });
}

#[test]
fn test_repeated_stanza_is_chorus_and_tail_is_bridge() {
    let song = samples::normalize("stanzas");

    assert_song(&song)
        .labels(&["Verse 1", "Chorus", "Verse 2", "Chorus", "Bridge"])
        .section(1, |s| {
            s.line_count(4).first_line("Carry me over the water");
        })
        .section(4, |s| {
            s.line(1, TextMatch::Contains("One who holds".into()));
        });
}

#[test]
fn test_unbroken_block_stays_one_verse() {
    let song = samples::normalize("one_block");

    assert_song(&song).section_count(1).section(0, |s| {
        s.label(SectionLabel::Verse(1)).line_count(23);
    });
}

#[test]
fn test_metadata_scenario() {
    let raw = "CCLI Song # 123\nKey: G\nG D Em C\n\nReal line 1\nReal line 2";
    assert_eq!(clean_lines(raw), vec!["Real line 1", "Real line 2"]);

    let song = normalize_lyrics("Scenario", Some("Someone"), raw);
    assert_song(&song)
        .artist(Some("Someone"))
        .section_count(1)
        .section(0, |s| {
            s.label(SectionLabel::Verse(1))
                .lines(&["Real line 1", "Real line 2"]);
        });
}

#[test]
fn test_repeated_first_and_third_stanza() {
    let raw = "Rivers run\nto the sea\n\nMountains stand\nby the shore\n\nrivers run,\nTo the sea!";
    let song = normalize_lyrics("ABA", None, raw);
    assert_song(&song).labels(&["Chorus", "Verse 1", "Chorus"]);
}

#[test]
fn test_bracketed_chord_markers_keep_stanza_inference() {
    let raw = "Rivers run\n[G]\nto the sea\n\nMountains stand\nby the shore\n\nRivers run\n[G]\nto the sea";
    let song = normalize_lyrics("ABA", None, raw);
    assert_song(&song)
        .labels(&["Chorus", "Verse 1", "Chorus"])
        .section(1, |s| {
            s.lines(&["Mountains stand", "by the shore"]);
        });
}

#[test]
fn test_byte_order_mark_does_not_hide_first_header() {
    let song = normalize_lyrics("BOM", None, "\u{feff}[Chorus]\nx");
    assert_song(&song).section_count(1).section(0, |s| {
        s.label(SectionLabel::Chorus).lines(&["x"]);
    });
}

#[rstest]
#[case("")]
#[case("\n\n   \n")]
#[case("CCLI Song # 1\n© 2020 Someone")]
#[case("[Chorus]\n\n[Verse 2]\n")]
fn test_no_content_means_no_sections(#[case] raw: &str) {
    let song = normalize_lyrics("Empty", None, raw);
    assert!(song.is_empty(), "expected no sections for {raw:?}, got {:?}", song.sections);
}

#[rstest]
#[case("[verse 3]\na", SectionLabel::Verse(3))]
#[case("[PRE CHORUS]\na", SectionLabel::PreChorus)]
#[case("[prechorus]\na", SectionLabel::PreChorus)]
#[case("Outro:\na", SectionLabel::Outro)]
#[case("[Chorus x2]\na", SectionLabel::Other)]
#[case("[Verse 0]\na", SectionLabel::Verse(1))]
fn test_header_spellings(#[case] raw: &str, #[case] expected: SectionLabel) {
    let song = normalize_lyrics("t", None, raw);
    assert_song(&song).section_count(1).section(0, |s| {
        s.label(expected).lines(&["a"]);
    });
}
