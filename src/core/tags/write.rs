//! Scrub the tags of one MP3: drop stale fields, write artist/title from the filename.

use std::path::Path;

use id3::frame::Comment;
use id3::{ErrorKind, Tag, TagLike};
use tracing::debug;

use super::super::error::{Error, Result};
use super::super::types::TagVersion;
use super::util::{key_comment, normalize_key_comment};

/// What to write into one file.
#[derive(Debug, Clone, Copy)]
pub struct ScrubRequest<'a> {
    pub artist: &'a str,
    pub title: &'a str,
    /// Keep the COMM frame and normalize it, instead of deleting it.
    pub correct_key_comment: bool,
    pub version: TagVersion,
}

/// Rewrite the tags of `path` in place.
///
/// - ID3v1: removed entirely (song, artist, album, year, comment, track, genre)
/// - ID3v2: band (TPE2), track (TRCK) and comments removed, artist (TPE1) and title (TIT2) set
/// - with `correct_key_comment`, a single cleaned COMM frame replaces the old ones
///
/// The v2 tag is written once, at the end.
pub fn scrub_file(path: &Path, req: &ScrubRequest<'_>) -> Result<()> {
    let tag_err = |source: id3::Error| Error::Tag {
        path: path.to_path_buf(),
        source,
    };

    // Files without any v2 tag are common for fresh downloads; start fresh then.
    // Read before touching the file so a broken v2 tag leaves it as it was.
    let mut tag = match Tag::read_from_path(path) {
        Ok(tag) => tag,
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => Tag::new(),
        Err(e) => return Err(tag_err(e)),
    };

    let removed_v1 = id3::v1::Tag::remove_from_path(path).map_err(tag_err)?;
    if removed_v1 {
        debug!("removed ID3v1 tag from {path:?}");
    }

    let _ = tag.remove("TPE2"); // band
    let _ = tag.remove("TRCK"); // track

    let comment = key_comment(&tag).map(|c| c.text.clone());
    let _ = tag.remove("COMM");

    tag.set_artist(req.artist);
    tag.set_title(req.title);

    if req.correct_key_comment {
        let text = normalize_key_comment(comment.as_deref());
        debug!("key comment for {path:?}: {comment:?} -> {text:?}");
        let _ = tag.add_frame(Comment {
            lang: "eng".to_string(),
            description: String::new(),
            text,
        });
    }

    tag.write_to_path(path, req.version.into()).map_err(tag_err)
}
