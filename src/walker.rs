// src/walker.rs
// Candidate file enumeration

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix a file name must carry to be a candidate.
const SOURCE_SUFFIX: &str = ".py";

/// Package-initializer files are never candidates.
const PACKAGE_INIT: &str = "__init__.py";

/// Collect candidate source files under `root`, recursively.
///
/// A file is a candidate iff its name ends with `.py` and is not exactly
/// `__init__.py`. Order is traversal order, not sorted. Walk errors (a
/// missing root, an unreadable directory) propagate and abort the run;
/// per-file read problems are left to the parse stage.
pub fn collect_candidates(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.ends_with(SOURCE_SUFFIX) && name != PACKAGE_INIT {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
