//! tagscrub
//!
//! Clean up freshly downloaded MP3s (Bandcamp style names) before they go into a DJ library:
//! - rename `Artist - Album - 01 song.mp3` to `Artist - Song.mp3`
//! - strip stale ID3 fields, write artist/title from the filename
//! - optionally tidy the musical key that MixedInKey leaves in the comment
//!
//! The CLIs in `main.rs` and `bin/` are thin wrappers around [`core`].

pub mod core;

pub use crate::core::error::{Error, Result};
pub use crate::core::types::{ParsedFilename, RunSummary, ScrubOptions, TagSet, TagVersion};
