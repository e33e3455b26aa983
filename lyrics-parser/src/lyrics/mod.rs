//! Main module for lyrics library functionality

pub mod api;
pub mod ast;
pub mod bulk;
pub mod cleaning;
pub mod formats;
pub mod headers;
pub mod inference;
pub mod loader;
pub mod providers;
pub mod segmenting;
pub mod setlist;
pub mod structure;
pub mod testing;
pub mod transforms;
