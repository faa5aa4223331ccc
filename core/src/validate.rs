//! Pre-ingestion checks. Both predicates are side-effect free apart from the
//! probe open in [`is_valid_file`], which is dropped immediately.

use std::fs::File;
use std::path::Path;

/// True when `path` names an existing regular file this process can read.
pub fn is_valid_file(path: &Path) -> bool {
    let is_file = std::fs::metadata(path)
        .map(|m| m.is_file())
        .unwrap_or(false);
    if !is_file {
        tracing::debug!(path = %path.display(), "not a regular file");
        return false;
    }

    match File::open(path) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "file not readable");
            false
        }
    }
}

/// True when the string has content after trimming surrounding whitespace.
pub fn is_valid_task_string(input: &str) -> bool {
    !input.trim().is_empty()
}
