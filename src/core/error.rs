use std::io;
use std::path::PathBuf;

/// Errors produced while scanning, renaming or tagging.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0:?} is not a directory")]
    NotADirectory(PathBuf),

    #[error("could not read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The name has no `Artist - Song` shape (missing delimiter or a blank segment).
    #[error("could not parse filename `{0}` (expected `Artist - [Album -] Song.ext`)")]
    UnparsableFilename(String),

    #[error("refusing to overwrite existing file {0:?}")]
    TargetExists(PathBuf),

    #[error("could not rename {from:?} to {to:?}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ID3 error on {path:?}: {source}")]
    Tag {
        path: PathBuf,
        #[source]
        source: id3::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
