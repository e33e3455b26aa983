//! Slide Segmenter
//!
//!     Sections in, slide-sized groups out. Per section:
//!
//!         1. split the lines at blank separators into sub-groups, so a couplet break
//!            inside a section never shares a slide;
//!         2. cut every sub-group into chunks of `lines_per_slide`, left to right;
//!         3. fix a trailing single line according to the [OrphanStrategy]:
//!
//!                7 lines, 3 per slide:  [3, 3, 1]  ->  [3, 2, 2]
//!                5 lines, 4 per slide:  [4, 1]     ->  [3, 2]
//!
//!     Rebalancing only borrows from a previous chunk holding more than two lines, so no
//!     chunk ever exceeds the slide size. With two lines per slide there is nothing to
//!     borrow; [OrphanStrategy::MergePairs] folds the orphan into the previous chunk instead.
//!
//!     [split_into_slides] wraps the chunking with the synthetic slides decks expect: one
//!     cover, then per song a title slide followed by its lyric slides.

use crate::lyrics::ast::{
    LinesPerSlide, NormalizedSong, OrphanStrategy, Section, Slide, SlideGroup, SlideSettings,
};
use crate::lyrics::cleaning::is_blank;

/// Chunk a single run of lines (no blank separators expected).
pub fn chunk_lines(lines: &[String], max: LinesPerSlide, orphans: OrphanStrategy) -> Vec<Vec<String>> {
    let max = max.get();
    let mut chunks: Vec<Vec<String>> = lines.chunks(max).map(<[String]>::to_vec).collect();

    let count = chunks.len();
    if count >= 2 && chunks[count - 1].len() == 1 {
        let previous_len = chunks[count - 2].len();
        if max >= 3 && previous_len > 2 {
            if let Some(moved) = chunks[count - 2].pop() {
                chunks[count - 1].insert(0, moved);
            }
        } else if max == 2 && orphans == OrphanStrategy::MergePairs {
            if let Some(orphan) = chunks.pop() {
                chunks[count - 2].extend(orphan);
            }
        }
    }
    chunks
}

/// Slide groups for one section.
pub fn segment_section(
    section: &Section,
    max: LinesPerSlide,
    include_label: bool,
    orphans: OrphanStrategy,
) -> Vec<SlideGroup> {
    let label = include_label.then_some(section.label);
    section
        .lines
        .split(|line| is_blank(line))
        .filter(|group| !group.is_empty())
        .flat_map(|group| chunk_lines(group, max, orphans))
        .map(|lines| SlideGroup::new(lines, label))
        .collect()
}

/// Slide groups for a sequence of sections, in order.
pub fn segment(
    sections: &[Section],
    max: LinesPerSlide,
    include_label: bool,
    orphans: OrphanStrategy,
) -> Vec<SlideGroup> {
    sections
        .iter()
        .flat_map(|section| segment_section(section, max, include_label, orphans))
        .collect()
}

/// Full deck content: cover slide, then a title slide and lyric slides per song.
pub fn split_into_slides(songs: &[NormalizedSong], settings: &SlideSettings) -> Vec<Slide> {
    let mut slides = vec![Slide::Cover {
        title: settings.cover_title.clone(),
        date: settings.cover_date.clone(),
    }];

    for song in songs {
        slides.push(Slide::Title {
            title: song.title.clone(),
            artist: song.artist.clone(),
        });
        slides.extend(
            segment(
                &song.sections,
                settings.lines_per_slide,
                settings.show_section_labels,
                settings.orphans,
            )
            .into_iter()
            .map(Slide::Lyrics),
        );
    }
    slides
}
