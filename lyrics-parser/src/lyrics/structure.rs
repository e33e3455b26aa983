//! Structure Normalizer
//!
//!     Cleaned lines in, ordered sections out. Two paths:
//!
//!         Header path     any line parses as a header (see [headers](crate::lyrics::headers)).
//!                         Each header opens a section that runs to the next header. Lines
//!                         before the first header become a leading `Verse 1`. Every section
//!                         buffer gets the blank-line cleanup again, and sections left with no
//!                         content are dropped.
//!
//!         Headerless      delegated to [inference](crate::lyrics::inference) with the
//!                         caller's [InferenceOptions].
//!
//!     The header path never runs inference: explicit markup always wins.

use crate::lyrics::ast::{Section, SectionLabel};
use crate::lyrics::cleaning::collapse_blank_lines;
use crate::lyrics::headers::{is_header, parse_header};
use crate::lyrics::inference::{self, InferenceOptions};
use tracing::debug;

/// Produce ordered sections from cleaned lines.
pub fn normalize_sections(lines: &[String], options: &InferenceOptions) -> Vec<Section> {
    if lines.iter().any(|l| is_header(l)) {
        sections_from_headers(lines)
    } else {
        inference::infer(lines, options)
    }
}

/// Header path: split at header lines.
pub fn sections_from_headers(lines: &[String]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut prelude: Vec<&str> = Vec::new();
    let mut current: Option<(SectionLabel, Vec<&str>)> = None;

    for line in lines {
        match parse_header(line) {
            Some(label) => {
                if let Some((open_label, buffer)) = current.take() {
                    push_section(&mut sections, open_label, buffer);
                }
                current = Some((label, Vec::new()));
            }
            None => match current.as_mut() {
                Some((_, buffer)) => buffer.push(line),
                None => prelude.push(line),
            },
        }
    }
    if let Some((open_label, buffer)) = current {
        push_section(&mut sections, open_label, buffer);
    }

    let prelude = collapse_blank_lines(prelude);
    if !prelude.is_empty() {
        debug!(lines = prelude.len(), "content before first header becomes Verse 1");
        sections.insert(0, Section::new(SectionLabel::Verse(1), prelude));
    }
    sections
}

fn push_section(sections: &mut Vec<Section>, label: SectionLabel, buffer: Vec<&str>) {
    let lines = collapse_blank_lines(buffer);
    if lines.is_empty() {
        debug!(%label, "dropping section without content");
        return;
    }
    sections.push(Section::new(label, lines));
}
