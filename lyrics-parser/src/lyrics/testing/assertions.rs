//! Fluent assertions over songs and slides

use super::matchers::TextMatch;
use crate::lyrics::ast::{NormalizedSong, Section, SectionLabel, Slide};

fn summarize(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|s| format!("{} ({})", s.label, s.lines.len()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn assert_song(song: &NormalizedSong) -> SongAssertion<'_> {
    SongAssertion { song }
}

pub struct SongAssertion<'a> {
    song: &'a NormalizedSong,
}

impl<'a> SongAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(self.song.title, expected, "Expected song title '{}'", expected);
        self
    }

    pub fn artist(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.song.artist.as_deref(),
            expected,
            "Expected artist {:?}",
            expected
        );
        self
    }

    pub fn section_count(self, expected: usize) -> Self {
        let actual = self.song.sections.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} sections, found {}: [{}]",
            expected,
            actual,
            summarize(&self.song.sections)
        );
        self
    }

    /// Labels in order, written the way they display (`"Verse 2"`, `"Pre-Chorus"`).
    pub fn labels(self, expected: &[&str]) -> Self {
        let actual: Vec<String> = self.song.labels().iter().map(ToString::to_string).collect();
        assert_eq!(
            actual,
            expected,
            "Section labels differ: [{}]",
            summarize(&self.song.sections)
        );
        self
    }

    pub fn line_count(self, expected: usize) -> Self {
        let actual = self.song.line_count();
        assert_eq!(actual, expected, "Expected {} lyric lines, found {}", expected, actual);
        self
    }

    pub fn section<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        let sections = &self.song.sections;
        assert!(
            index < sections.len(),
            "Section index {} out of bounds (song has {} sections: [{}])",
            index,
            sections.len(),
            summarize(sections)
        );
        assertion(SectionAssertion {
            section: &sections[index],
            context: format!("sections[{index}]"),
        });
        self
    }
}

pub struct SectionAssertion<'a> {
    section: &'a Section,
    context: String,
}

impl<'a> SectionAssertion<'a> {
    pub fn label(self, expected: SectionLabel) -> Self {
        assert_eq!(
            self.section.label, expected,
            "{}: Expected label {}, found {}",
            self.context, expected, self.section.label
        );
        self
    }

    /// Number of lyric lines, blank separators excluded.
    pub fn line_count(self, expected: usize) -> Self {
        let actual = self.section.content_lines().count();
        assert_eq!(
            actual, expected,
            "{}: Expected {} lines, found {}: {:?}",
            self.context, expected, actual, self.section.lines
        );
        self
    }

    pub fn lines(self, expected: &[&str]) -> Self {
        assert_eq!(self.section.lines, expected, "{}: lines differ", self.context);
        self
    }

    pub fn line(self, index: usize, expected: TextMatch) -> Self {
        let context = format!("{}:lines[{}]", self.context, index);
        match self.section.lines.get(index) {
            Some(actual) => expected.assert(actual, &context),
            None => panic!(
                "{}: out of bounds (section has {} lines)",
                context,
                self.section.lines.len()
            ),
        }
        self
    }

    pub fn first_line(self, expected: &str) -> Self {
        self.line(0, TextMatch::Exact(expected.to_string()))
    }
}

pub fn assert_slides(slides: &[Slide]) -> SlidesAssertion<'_> {
    SlidesAssertion { slides }
}

pub struct SlidesAssertion<'a> {
    slides: &'a [Slide],
}

impl SlidesAssertion<'_> {
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(self.slides.len(), expected, "Expected {} slides", expected);
        self
    }

    /// Line counts of the lyric slides, in order.
    pub fn lyric_sizes(self, expected: &[usize]) -> Self {
        let actual: Vec<usize> = self
            .slides
            .iter()
            .filter_map(Slide::as_lyrics)
            .map(|group| group.len())
            .collect();
        assert_eq!(actual, expected, "Lyric slide sizes differ");
        self
    }

    pub fn no_empty_groups(self) -> Self {
        for (index, slide) in self.slides.iter().enumerate() {
            if let Some(group) = slide.as_lyrics() {
                assert!(!group.is_empty(), "slides[{index}]: empty lyric slide");
            }
        }
        self
    }

    /// Every lyric slide carries a label (`true`) or none does (`false`).
    pub fn labeled(self, expected: bool) -> Self {
        for (index, slide) in self.slides.iter().enumerate() {
            if let Some(group) = slide.as_lyrics() {
                assert_eq!(
                    group.label.is_some(),
                    expected,
                    "slides[{index}]: label presence differs ({:?})",
                    group.label
                );
            }
        }
        self
    }
}
