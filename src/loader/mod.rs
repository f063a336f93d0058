//! Result set discovery and loading.
//!
//! Finds the latest `angela-paris-test-results-*.json` style file in a
//! directory and parses it into test records. The result files embed their
//! timestamps in lexicographically sortable form, so the last name wins.

use crate::models::TestRecord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Failures while locating or reading a result set.
///
/// Both variants are expected operating conditions (the suite may simply not
/// have run yet, or a run may have been interrupted mid-write), so callers
/// report them and finish cleanly instead of treating them as faults.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no test results files found in {}", .dir.display())]
    NoInputFound { dir: PathBuf },

    #[error("failed to load {}: {}", .path.display(), .reason)]
    LoadFailure { path: PathBuf, reason: String },
}

/// Find the latest result file in `dir`.
///
/// Candidates are regular files whose name starts with `prefix` and ends
/// with `suffix`; the lexicographically last name is the latest run. The
/// search does not recurse into subdirectories.
pub fn find_latest(dir: &Path, prefix: &str, suffix: &str) -> Result<PathBuf, LoadError> {
    let entries = fs::read_dir(dir).map_err(|e| LoadError::LoadFailure {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut names: Vec<String> = Vec::new();
    for entry in entries.flatten() {
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with(prefix) && name.ends_with(suffix) {
            names.push(name);
        }
    }

    names.sort();
    debug!(
        "Found {} candidate result file(s) in {}",
        names.len(),
        dir.display()
    );

    match names.pop() {
        Some(name) => Ok(dir.join(name)),
        None => Err(LoadError::NoInputFound {
            dir: dir.to_path_buf(),
        }),
    }
}

/// Parse a result file into test records.
///
/// The file must hold a JSON array of run records; a missing file,
/// unreadable content, or malformed JSON is reported as a
/// [`LoadError::LoadFailure`] carrying the underlying reason.
pub fn load_records(path: &Path) -> Result<Vec<TestRecord>, LoadError> {
    let contents = fs::read_to_string(path).map_err(|e| LoadError::LoadFailure {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&contents).map_err(|e| LoadError::LoadFailure {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
