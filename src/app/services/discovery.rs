//! Analysis file discovery
//!
//! Lists candidate `.xlsx` analysis files in a single folder, excluding
//! Excel editor lock files (`~$` prefix). Files are returned in file-system
//! enumeration order; processing order follows discovery order.

use crate::constants::{ANALYSIS_EXTENSION, LOCK_FILE_PREFIX};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Discover analysis files in the given folder (non-recursive)
pub fn discover_analysis_files(folder: &Path) -> Result<Vec<PathBuf>> {
    debug!("Searching for analysis files in: {}", folder.display());

    let entries = std::fs::read_dir(folder).map_err(|e| {
        Error::io(
            format!("Failed to read input folder '{}'", folder.display()),
            e,
        )
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::io(
                format!("Failed to read entry in '{}'", folder.display()),
                e,
            )
        })?;
        let path = entry.path();
        if is_analysis_file(&path) {
            files.push(path);
        }
    }

    debug!("Found {} analysis files", files.len());
    Ok(files)
}

/// Check whether a path is a candidate analysis file.
///
/// The extension check is case-insensitive to match the Windows file
/// matching the original template producers rely on.
pub fn is_analysis_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ANALYSIS_EXTENSION));
    if !has_extension {
        return false;
    }

    // Excel leaves ~$ lock files next to open workbooks
    !path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(LOCK_FILE_PREFIX))
}
