//! core/rename.rs
//!
//! Rename phase, split in two so dry runs can reuse it:
//! - [`plan_renames`] decides old name -> new name (no IO besides reading names)
//! - [`apply_rename`] performs one `fs::rename`
//! - [`simulate_renames`] replays the plans on paper for dry runs

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::error::{Error, Result};
use super::filename::{cleaned_file_name, parse_filename};

/// One pending rename inside the same directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Work out the cleaned name for every path.
///
/// - Files that already have their cleaned name produce no plan
/// - Unparsable names are logged and counted, never fatal
///
/// Returns (plans, failures).
pub fn plan_renames(paths: &[PathBuf]) -> (Vec<RenamePlan>, usize) {
    let mut plans = Vec::with_capacity(paths.len());
    let mut failures = 0;

    for path in paths {
        match plan_one(path) {
            Ok(Some(plan)) => plans.push(plan),
            Ok(None) => debug!("`{}` already clean", path.display()),
            Err(e) => {
                warn!("skipping rename: {e}");
                failures += 1;
            }
        }
    }

    (plans, failures)
}

fn plan_one(path: &Path) -> Result<Option<RenamePlan>> {
    let name = file_name_str(path)?;
    let parsed = parse_filename(name)?;
    let new_name = cleaned_file_name(&parsed);

    if new_name == name {
        return Ok(None);
    }

    Ok(Some(RenamePlan {
        from: path.to_path_buf(),
        to: path.with_file_name(new_name),
    }))
}

/// Rename one file. An existing, different file at the target is never overwritten.
pub fn apply_rename(plan: &RenamePlan) -> Result<()> {
    if target_taken(plan)? {
        return Err(Error::TargetExists(plan.to.clone()));
    }

    info!(
        "Renaming file `{}` to `{}`.",
        display_name(&plan.from),
        display_name(&plan.to)
    );

    std::fs::rename(&plan.from, &plan.to).map_err(|source| Error::Rename {
        from: plan.from.clone(),
        to: plan.to.clone(),
        source,
    })
}

/// Is there a file other than `plan.from` sitting at `plan.to`?
///
/// Decided by directory entries, not path spelling:
/// - an entry named exactly like the target is a different file
/// - on case-insensitive filesystems the target can "exist" only as `from` itself
///   (case-only rename); any other case variant is a different file
pub(crate) fn target_taken(plan: &RenamePlan) -> Result<bool> {
    if !plan.to.exists() {
        return Ok(false);
    }

    let dir = plan.to.parent().unwrap_or_else(|| Path::new("."));
    let read_err = |source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let target_name = plan.to.file_name();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        if Some(entry.map_err(read_err)?.file_name().as_os_str()) == target_name {
            return Ok(true);
        }
    }

    let from = plan.from.file_name().map(|s| s.to_string_lossy());
    let to = target_name.map(|s| s.to_string_lossy());
    Ok(match (from, to) {
        (Some(from), Some(to)) => !from.eq_ignore_ascii_case(&to),
        _ => true,
    })
}

/// Dry-run counterpart of applying `plans` in order.
///
/// Tracks which names would be free after each step, so collisions show up the
/// same way `apply_rename` would report them.
///
/// Returns (directory listing afterwards, renames that would succeed, failures).
pub fn simulate_renames(
    paths: Vec<PathBuf>,
    plans: &[RenamePlan],
) -> Result<(Vec<PathBuf>, usize, usize)> {
    let scanned: HashSet<PathBuf> = paths.iter().cloned().collect();
    let mut listing = scanned.clone();
    let mut renamed = 0;
    let mut failures = 0;

    for plan in plans {
        let taken = listing.contains(&plan.to)
            || (!scanned.contains(&plan.to) && target_taken(plan)?);
        if taken {
            warn!("{}", Error::TargetExists(plan.to.clone()));
            failures += 1;
            continue;
        }

        info!(
            "[dry run] would rename `{}` to `{}`.",
            display_name(&plan.from),
            display_name(&plan.to)
        );
        listing.remove(&plan.from);
        listing.insert(plan.to.clone());
        renamed += 1;
    }

    let mut out: Vec<PathBuf> = listing.into_iter().collect();
    out.sort();
    Ok((out, renamed, failures))
}

/// File name as UTF-8, or an unparsable-filename error.
pub(crate) fn file_name_str(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::UnparsableFilename(path.to_string_lossy().into_owned()))
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
