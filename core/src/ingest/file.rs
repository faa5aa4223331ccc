use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::IngestError;
use crate::validate::is_valid_file;

/// Reads one task per line, trimming each line.
///
/// Blank lines survive as empty strings; only the final newline of the file
/// does not produce an entry.
pub fn parse_file(path: &Path) -> Result<Vec<String>, IngestError> {
    if !is_valid_file(path) {
        return Err(IngestError::InvalidFile {
            path: path.to_path_buf(),
        });
    }

    let read_err = |source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let tasks = BufReader::new(file)
        .lines()
        .map(|line| line.map(|l| l.trim().to_string()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_err)?;

    tracing::debug!(path = %path.display(), count = tasks.len(), "tasks read from file");
    Ok(tasks)
}
