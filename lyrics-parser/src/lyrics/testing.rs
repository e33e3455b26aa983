//! Testing utilities
//!
//!     Two rules for tests of the engine:
//!
//!         1. Prefer the curated sample files (via [samples]) over lyrics typed inline. Sample
//!            files are reviewed once and shared; ad-hoc strings drift.
//!         2. Assert on whole songs with the fluent [assert_song] API instead of indexing
//!            into `sections` by hand.
//!
//!     ```rust,ignore
//!     use lyrics_parser::lyrics::testing::{assert_song, samples};
//!
//!     let song = samples::normalize("stanzas");
//!     assert_song(&song)
//!         .labels(&["Verse 1", "Chorus", "Verse 2", "Chorus", "Bridge"])
//!         .section(1, |s| {
//!             s.line_count(4).first_line("Carry me over the water");
//!         });
//!     ```
//!
//!     Failure messages carry a context path (`sections[1]:lines[0]`) so a broken assertion
//!     points at the exact spot.

mod assertions;
mod matchers;
pub mod samples;

pub use assertions::{assert_slides, assert_song, SectionAssertion, SlidesAssertion, SongAssertion};
pub use matchers::TextMatch;
