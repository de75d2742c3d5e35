//! core/tags/mod.rs
//!
//! ID3 tag read/write utilities.
//! Public API:
//! - [`read_tag_set`] reads the fields we care about into a [`TagSet`](super::types::TagSet).
//! - [`scrub_file`] deletes stale fields and writes artist/title back to disk.
//! - [`normalize_key_comment`] is the pure comment rule used by `scrub_file`.

mod read;
mod util;
mod write;

pub use read::read_tag_set;
pub use util::{NO_KEY, normalize_key_comment};
pub use write::{ScrubRequest, scrub_file};
