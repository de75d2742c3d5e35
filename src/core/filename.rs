//! core/filename.rs
//!
//! Filename conventions:
//! - Bandcamp downloads: `Artist - Album - 01 Song Name.mp3`
//! - What we want in the DJ library: `Artist - Song Name.mp3`
//!
//! Everything here is pure string work, no filesystem access.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{Error, Result};
use super::types::ParsedFilename;

/// Separator between artist / album / song segments.
pub const DELIMITER: &str = " - ";

/// Two digits and a space at the very start of the song segment ("01 ").
static TRACK_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2} ").unwrap());

/// Split `Artist - [Album -] Song.ext` into its segments.
///
/// - 2 segments: artist + song
/// - 3+ segments: first is the artist, last is the song, the rest is the album
pub fn parse_filename(name: &str) -> Result<ParsedFilename> {
    let unparsable = || Error::UnparsableFilename(name.to_string());

    let path = Path::new(name);
    let stem = path.file_stem().and_then(|s| s.to_str()).ok_or_else(unparsable)?;
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(unparsable)?;

    let segments: Vec<&str> = stem.split(DELIMITER).collect();
    let (artist, album, song) = match segments.as_slice() {
        [] | [_] => return Err(unparsable()),
        [artist, song] => (*artist, None, *song),
        [artist, middle @ .., song] => (*artist, Some(middle.join(DELIMITER)), *song),
    };

    if artist.trim().is_empty() || song.trim().is_empty() {
        return Err(unparsable());
    }

    Ok(ParsedFilename {
        artist: artist.to_string(),
        album,
        song: song.to_string(),
        extension: extension.to_string(),
    })
}

impl ParsedFilename {
    /// Put the segments back together. Inverse of [`parse_filename`].
    pub fn file_name(&self) -> String {
        match &self.album {
            Some(album) => format!(
                "{}{DELIMITER}{}{DELIMITER}{}.{}",
                self.artist, album, self.song, self.extension
            ),
            None => format!("{}{DELIMITER}{}.{}", self.artist, self.song, self.extension),
        }
    }
}

/// Capitalize every word of a song name.
///
/// A plain title-case pass would lower-case the word after an opening
/// parenthesis, so `(` is peeled off first: `(original mix)` -> `(Original Mix)`.
pub fn capitalize_song(song: &str) -> String {
    song.split_whitespace()
        .map(|word| match word.strip_prefix('(') {
            Some(rest) => format!("({}", capitalize_word(rest)),
            None => capitalize_word(word),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// First character upper-case, the rest lower-case.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Drop a leading two-digit track number ("07 Song" -> "Song").
/// Anything else ("7 Song", "107 Song", "07-Song") comes back unchanged.
pub fn strip_track_number(song: &str) -> &str {
    match TRACK_PREFIX.find(song) {
        Some(m) => &song[m.end()..],
        None => song,
    }
}

/// The name a file should have in the library: `Artist - Song.ext`,
/// album dropped, song capitalized.
///
/// The track number is only stripped from `Artist - Album - 01 Song` names.
/// A two-segment name is already in library form, so `Jay - 24 Hours` keeps its number.
pub fn cleaned_file_name(parsed: &ParsedFilename) -> String {
    let song = capitalize_song(&parsed.song);
    let song = match parsed.album {
        Some(_) => strip_track_number(&song),
        None => song.as_str(),
    };
    format!("{}{DELIMITER}{}.{}", parsed.artist, song, parsed.extension)
}
