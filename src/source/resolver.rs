//! Filename resolution against the PDF directory

use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Resolve a caller-supplied filename to a file inside `root`.
///
/// Parent references, absolute paths and symlinks that lead out of `root`
/// are rejected with [`Error::InvalidFilename`]. The lexical check runs
/// before the filesystem is touched.
pub fn resolve_filename(root: &Path, filename: &str) -> Result<PathBuf> {
    let relative = Path::new(filename);

    if !is_contained(relative) {
        return Err(Error::InvalidFilename {
            filename: filename.to_string(),
        });
    }

    let candidate = root.join(relative);

    if !candidate.is_file() {
        return Err(Error::FileNotFound {
            filename: filename.to_string(),
        });
    }

    let canonical_root = std::fs::canonicalize(root)?;
    let canonical = std::fs::canonicalize(&candidate)?;

    if !canonical.starts_with(&canonical_root) {
        return Err(Error::InvalidFilename {
            filename: filename.to_string(),
        });
    }

    Ok(canonical)
}

/// True when every component stays below the directory it is joined onto.
fn is_contained(relative: &Path) -> bool {
    relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
