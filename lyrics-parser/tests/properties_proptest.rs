//! Property-based tests for the normalization and slide guarantees
//!
//! Generated lyric lines are lowercase word runs with a fixed first word, so they can never
//! be mistaken for headers, chord lines or metadata.

use lyrics_parser::lyrics::ast::{LinesPerSlide, OrphanStrategy, SectionLabel, SlideSettings};
use lyrics_parser::{auto_format_lyrics_for_editor, normalize_lyrics, split_into_slides};
use proptest::prelude::*;

fn lyric_line() -> impl Strategy<Value = String> {
    "[a-z]{2,8}( [a-z]{2,8}){0,4}".prop_map(|words| format!("la {words}"))
}

fn stanza() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(lyric_line(), 1..6)
}

/// Stanzas drawn from a small pool so that repeats (choruses) are common.
fn song_text() -> impl Strategy<Value = String> {
    prop::collection::vec(stanza(), 1..4).prop_flat_map(|pool| {
        let size = pool.len();
        prop::collection::vec(0..size, 1..7).prop_map(move |picks| {
            picks
                .iter()
                .map(|&i| pool[i].join("\n"))
                .collect::<Vec<_>>()
                .join("\n\n")
        })
    })
}

fn header() -> impl Strategy<Value = SectionLabel> {
    prop_oneof![
        (1u32..6).prop_map(SectionLabel::Verse),
        Just(SectionLabel::Chorus),
        Just(SectionLabel::PreChorus),
        Just(SectionLabel::Bridge),
        Just(SectionLabel::Tag),
        Just(SectionLabel::Outro),
        Just(SectionLabel::Intro),
        Just(SectionLabel::Other),
    ]
}

fn lines_per_slide() -> impl Strategy<Value = LinesPerSlide> {
    prop_oneof![
        Just(LinesPerSlide::Two),
        Just(LinesPerSlide::Three),
        Just(LinesPerSlide::Four),
    ]
}

proptest! {
    #[test]
    fn headerless_block_is_a_single_verse(lines in prop::collection::vec(lyric_line(), 1..40)) {
        let song = normalize_lyrics("t", None, &lines.join("\n"));
        prop_assert_eq!(song.sections.len(), 1);
        prop_assert_eq!(song.sections[0].label, SectionLabel::Verse(1));
        prop_assert_eq!(&song.sections[0].lines, &lines);
    }

    #[test]
    fn bracketed_headers_define_the_labels(
        prelude in prop::collection::vec(lyric_line(), 0..3),
        blocks in prop::collection::vec((header(), stanza()), 1..8),
    ) {
        let mut text = prelude.join("\n");
        for (label, lines) in &blocks {
            text.push_str(&format!("\n[{label}]\n{}\n", lines.join("\n")));
        }

        let mut expected: Vec<SectionLabel> = blocks.iter().map(|(label, _)| *label).collect();
        if !prelude.is_empty() {
            expected.insert(0, SectionLabel::Verse(1));
        }
        prop_assert_eq!(normalize_lyrics("t", None, &text).labels(), expected);
    }

    #[test]
    fn slide_groups_are_never_empty_or_oversized(
        text in song_text(),
        max in lines_per_slide(),
        labels in any::<bool>(),
    ) {
        let song = normalize_lyrics("t", None, &text);
        let settings = SlideSettings::new(max, labels);
        let slides = split_into_slides(std::slice::from_ref(&song), &settings);

        let groups: Vec<_> = slides.iter().filter_map(|s| s.as_lyrics()).collect();
        prop_assert!(groups.iter().all(|g| !g.is_empty() && g.len() <= max.get()));
        prop_assert!(groups.iter().all(|g| g.label.is_some() == labels));
        prop_assert_eq!(groups.iter().map(|g| g.len()).sum::<usize>(), song.line_count());
    }

    #[test]
    fn merge_pairs_only_grows_two_line_slides(text in song_text()) {
        let song = normalize_lyrics("t", None, &text);
        let settings = SlideSettings {
            orphans: OrphanStrategy::MergePairs,
            ..SlideSettings::new(LinesPerSlide::Two, false)
        };
        let slides = split_into_slides(std::slice::from_ref(&song), &settings);
        prop_assert!(slides.iter().filter_map(|s| s.as_lyrics()).all(|g| (1..=3).contains(&g.len())));
    }

    #[test]
    fn auto_format_is_stable(text in song_text()) {
        let once = auto_format_lyrics_for_editor(&text);
        prop_assert_eq!(auto_format_lyrics_for_editor(&once), once.clone());
    }
}
