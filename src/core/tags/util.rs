//! core/tags/util.rs
//! Small helpers shared by tag reading/writing.

use id3::frame::{Comment, Content};
use id3::{Tag, TagLike};

/// What goes in the comment when key detection left nothing behind
/// (MixedInKey skips files that are too long).
pub const NO_KEY: &str = "N/A";

/// Get a best-effort string value from a text frame id.
pub(crate) fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    let frame = tag.get(id)?;
    match frame.content() {
        Content::Text(s) => Some(s.clone()),
        _ => None,
    }
}

/// The comment a key-detection tool would have written:
/// first COMM with an empty description, otherwise the first COMM at all.
pub(crate) fn key_comment(tag: &Tag) -> Option<&Comment> {
    tag.comments()
        .find(|c| c.description.is_empty())
        .or_else(|| tag.comments().next())
}

/// Clean up a key comment for DJ software.
///
/// - missing/blank -> "N/A"
/// - "8A/9A" -> "8A 9A"
pub fn normalize_key_comment(comment: Option<&str>) -> String {
    match comment.map(str::trim) {
        Some(s) if !s.is_empty() => s.replace('/', " ").trim().to_string(),
        _ => NO_KEY.to_string(),
    }
}
