//! tagscrub CLI
//!
//! Usage:
//!   tagscrub <directory> [--rename_files] [--correct_key_comment] [--dry-run]
//!
//! Typical flow for a fresh Bandcamp download:
//! 1. `tagscrub ~/Downloads/album --rename_files`
//! 2. run MixedInKey on the folder
//! 3. `tagscrub ~/Downloads/album --correct_key_comment`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tagscrub::{ScrubOptions, TagVersion};

#[derive(Parser, Debug)]
#[command(name = "tagscrub", version)]
#[command(about = "Rename MP3s to `Artist - Song.mp3` and scrub their ID3 tags")]
struct Args {
    /// System path to directory containing files.
    directory: PathBuf,

    /// Rename `Artist - Album - 01 song.mp3` to `Artist - Song.mp3` first.
    /// Useful only if the files haven't already been renamed by hand.
    #[arg(long = "rename_files", alias = "rename-files")]
    rename_files: bool,

    /// Keep the key comment written by MixedInKey, replacing the `/` between keys
    /// with a space, and write `N/A` if no key was added (file was too long).
    #[arg(long = "correct_key_comment", alias = "correct-key-comment")]
    correct_key_comment: bool,

    /// Only log what would be renamed and tagged.
    #[arg(long)]
    dry_run: bool,

    /// ID3v2 revision to write.
    #[arg(long, value_enum, default_value_t = Id3Version::V24)]
    id3_version: Id3Version,

    /// Debug logging (RUST_LOG overrides).
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Id3Version {
    V23,
    V24,
}

impl From<Id3Version> for TagVersion {
    fn from(v: Id3Version) -> Self {
        match v {
            Id3Version::V23 => TagVersion::V23,
            Id3Version::V24 => TagVersion::V24,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let opts = ScrubOptions {
        directory: args.directory,
        rename_files: args.rename_files,
        correct_key_comment: args.correct_key_comment,
        dry_run: args.dry_run,
        tag_version: args.id3_version.into(),
    };

    match tagscrub::core::run(&opts) {
        Ok(summary) => {
            info!("done: {summary}");
            if summary.failed == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
