//! core/tags/read.rs
//! Read the tag fields this tool cares about into a `TagSet`.

use std::path::Path;

use id3::{Tag, TagLike};

use super::super::types::TagSet;
use super::util::{key_comment, text_frame};

/// Read ID3v2 fields plus ID3v1 presence.
///
/// Returns:
/// - `(TagSet, false)` if an ID3v2 tag was read
/// - `(TagSet, true)` if there is no readable ID3v2 tag (fields are None, `has_v1` still set)
pub fn read_tag_set(path: &Path) -> (TagSet, bool) {
    let has_v1 = id3::v1::Tag::read_from_path(path).is_ok();

    match Tag::read_from_path(path) {
        Ok(tag) => (
            TagSet {
                has_v1,
                ..build_set_from_tag(&tag)
            },
            false,
        ),
        Err(_) => (
            TagSet {
                has_v1,
                ..TagSet::default()
            },
            true,
        ),
    }
}

fn build_set_from_tag(tag: &Tag) -> TagSet {
    TagSet {
        artist: tag.artist().map(str::to_owned),
        title: tag.title().map(str::to_owned),
        album: tag.album().map(str::to_owned),
        year: tag.year(),
        comment: key_comment(tag).map(|c| c.text.clone()),
        track: tag.track(),
        genre: tag.genre().map(str::to_owned),
        band: text_frame(tag, "TPE2"),
        has_v1: false,
    }
}
