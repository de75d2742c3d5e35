use std::path::{Path, PathBuf};

use super::error::{Error, Result};

/// List the `.mp3` files sitting directly in `dir`, sorted by path.
///
/// Sub-directories are ignored: the tool works on one download folder at a time.
pub fn scan_mp3s(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let read_err = |source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() && is_mp3(&path) {
            out.push(path);
        }
    }

    out.sort();
    Ok(out)
}

fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}
