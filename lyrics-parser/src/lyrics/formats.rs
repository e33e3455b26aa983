//! Text serializers
//!
//!     Two plain-text renderings:
//!
//!         editor text     `[Label]` header, section lines, one blank line between sections.
//!                         Feeding it back through the header path yields the same sections.
//!         slide text      one block per slide, blocks separated by a blank line, the format
//!                         plain-text presentation importers read.
//!
//!     JSON and YAML are produced through serde by the callers.

use crate::lyrics::ast::{Section, Slide};

/// Render sections as reviewable editor text.
pub fn to_editor_text(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|section| {
            let mut block = format!("[{}]", section.label);
            for line in &section.lines {
                block.push('\n');
                block.push_str(line);
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render slides as blank-line separated text blocks.
pub fn slides_to_text(slides: &[Slide]) -> String {
    slides
        .iter()
        .map(slide_block)
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn slide_block(slide: &Slide) -> String {
    let mut lines: Vec<String> = Vec::new();
    match slide {
        Slide::Cover { title, date } => {
            lines.push(title.clone());
            lines.extend(date.iter().cloned());
        }
        Slide::Title { title, artist } => {
            lines.push(title.clone());
            lines.extend(artist.iter().cloned());
        }
        Slide::Lyrics(group) => {
            if let Some(label) = group.label {
                lines.push(format!("[{label}]"));
            }
            lines.extend(group.lines.iter().cloned());
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::ast::{SectionLabel, SlideGroup};

    #[test]
    fn test_editor_text_empty() {
        assert_eq!(to_editor_text(&[]), "");
    }

    #[test]
    fn test_editor_text_sections() {
        let sections = vec![
            Section::new(SectionLabel::Verse(1), vec!["one".into(), "two".into()]),
            Section::new(SectionLabel::PreChorus, vec!["three".into()]),
        ];
        insta::assert_snapshot!(to_editor_text(&sections), @r"
        [Verse 1]
        one
        two

        [Pre-Chorus]
        three
        ");
    }

    #[test]
    fn test_slides_text() {
        let slides = vec![
            Slide::Cover {
                title: "Worship Set".into(),
                date: Some("2024-03-10".into()),
            },
            Slide::Title {
                title: "Song".into(),
                artist: None,
            },
            Slide::Lyrics(SlideGroup::new(
                vec!["a".into(), "b".into()],
                Some(SectionLabel::Chorus),
            )),
            Slide::Lyrics(SlideGroup::new(vec!["c".into()], None)),
        ];
        insta::assert_snapshot!(slides_to_text(&slides), @r"
        Worship Set
        2024-03-10

        Song

        [Chorus]
        a
        b

        c
        ");
    }
}
