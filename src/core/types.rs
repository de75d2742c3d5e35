//! Core data types shared between the pipeline, the tag layer and the CLIs.
//!
//! Rule of thumb:
//! - These structs should be "boring bags of data"
//! - No filesystem code
//! - No tag parsing code
//!
//! `ParsedFilename` is what we learn from a name on disk,
//! `TagSet` is what we learn from the ID3 tags inside the file.

use std::fmt;
use std::path::PathBuf;

/// The pieces of an `Artist - [Album -] Song.ext` filename.
///
/// Segments are stored exactly as they appear in the name, so
/// `ParsedFilename::file_name()` gives back the name that was parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilename {
    pub artist: String,

    /// Middle segment(s). Bandcamp downloads carry one, hand-renamed files usually don't.
    pub album: Option<String>,

    /// Last segment, may still start with a track number ("01 Song").
    pub song: String,

    /// Extension without the dot ("mp3").
    pub extension: String,
}

/// The tag fields this tool reads, writes or deletes.
///
/// - `Option<T>` means the frame is missing (or unreadable)
/// - `band` is the ID3v2 TPE2 frame ("album artist" in most players)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    pub artist: Option<String>,
    pub title: Option<String>,
    pub album: Option<String>,
    pub year: Option<i32>,
    pub comment: Option<String>,
    pub track: Option<u32>,
    pub genre: Option<String>,
    pub band: Option<String>,

    /// True while an ID3v1 trailer is still present at the end of the file.
    pub has_v1: bool,
}

/// ID3v2 revision written back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagVersion {
    V23,
    #[default]
    V24,
}

impl From<TagVersion> for id3::Version {
    fn from(v: TagVersion) -> Self {
        match v {
            TagVersion::V23 => id3::Version::Id3v23,
            TagVersion::V24 => id3::Version::Id3v24,
        }
    }
}

/// Everything one run needs to know, resolved from the command line.
#[derive(Debug, Clone)]
pub struct ScrubOptions {
    /// Directory holding the files (not walked recursively).
    pub directory: PathBuf,

    /// Rename files to `Artist - Song.ext` before tagging.
    pub rename_files: bool,

    /// Keep and clean the key comment instead of deleting it.
    pub correct_key_comment: bool,

    /// Log what would happen, touch nothing.
    pub dry_run: bool,

    pub tag_version: TagVersion,
}

impl ScrubOptions {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            rename_files: false,
            correct_key_comment: false,
            dry_run: false,
            tag_version: TagVersion::default(),
        }
    }
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub renamed: usize,
    pub scrubbed: usize,
    pub failed: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} renamed, {} scrubbed, {} failed",
            self.renamed, self.scrubbed, self.failed
        )
    }
}
