//! core/mod.rs
//!
//! The brain of the tool, one linear pipeline over one directory:
//!   (A) list `.mp3` files
//!   (B) optionally rename them to `Artist - Song.mp3`
//!   (C) list again, parse each name
//!   (D) scrub ID3 tags (delete stale fields, write artist/title, fix key comment)
//!
//! Per-file problems are logged and counted, they never stop the batch.
//! Only directory-level errors come back as `Err`.

pub mod error;
pub mod filename;
pub mod library;
pub mod rename;
pub mod tags;
pub mod types;

use std::path::Path;

use tracing::{info, warn};

use error::Result;
use rename::{apply_rename, file_name_str, plan_renames, simulate_renames};
use tags::{ScrubRequest, scrub_file};
use types::{RunSummary, ScrubOptions};

/// Run the whole pipeline described by `opts`.
pub fn run(opts: &ScrubOptions) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    let mut paths = library::scan_mp3s(&opts.directory)?;

    if opts.rename_files {
        let (plans, failures) = plan_renames(&paths);
        summary.failed += failures;

        if opts.dry_run {
            let (listing, renamed, failures) = simulate_renames(paths, &plans)?;
            paths = listing;
            summary.renamed = renamed;
            summary.failed += failures;
        } else {
            for plan in &plans {
                match apply_rename(plan) {
                    Ok(()) => summary.renamed += 1,
                    Err(e) => {
                        warn!("{e}");
                        summary.failed += 1;
                    }
                }
            }
            // Re-read the directory so the tag phase sees the new names.
            paths = library::scan_mp3s(&opts.directory)?;
        }
    }

    for path in &paths {
        match scrub_one(path, opts) {
            Ok(()) => summary.scrubbed += 1,
            Err(e) => {
                warn!("{e}");
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

fn scrub_one(path: &Path, opts: &ScrubOptions) -> Result<()> {
    let name = file_name_str(path)?;
    info!("Scrubbing ID3 tags for `{name}`.");

    let parsed = filename::parse_filename(name)?;
    let req = ScrubRequest {
        artist: &parsed.artist,
        title: &parsed.song,
        correct_key_comment: opts.correct_key_comment,
        version: opts.tag_version,
    };

    if opts.dry_run {
        info!(
            "[dry run] would set artist `{}`, title `{}`",
            req.artist, req.title
        );
        return Ok(());
    }

    scrub_file(path, &req)
}
