//! Data model
//!
//!     Everything the pipeline produces is a plain value object: built fresh per request,
//!     never shared, never mutated after construction.
//!
//!         SectionLabel    closed label taxonomy, `Verse` carries its number
//!         Section         a label plus its lyric lines (blank lines only as inner separators)
//!         NormalizedSong  title, optional artist, ordered sections
//!         SlideGroup      1..N lines destined for one slide, optionally labeled
//!         Slide           cover / title / lyrics slide as handed to deck renderers
//!
//!     Serialization is done with serde. Labels travel as their canonical text ("Verse 2",
//!     "Pre-Chorus") so that JSON produced here reads the same as the editor format.

pub mod label;
pub mod slide;
pub mod song;

pub use label::{LabelParseError, SectionLabel};
pub use slide::{
    InvalidLinesPerSlide, LinesPerSlide, OrphanStrategy, Slide, SlideGroup, SlideSettings,
    DEFAULT_COVER_TITLE,
};
pub use song::{NormalizedSong, Section};
