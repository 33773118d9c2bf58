//! Timestamped snapshots of the previous JSON output.

use crate::error::SyncResult;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Copy the current output file into the backup directory, if one exists.
///
/// The snapshot is named `<output-stem>_backup_<YYYY-MM-DD_HH-MM-SS>.json`
/// and is a byte-identical copy. Returns the backup path, or `None` when
/// there was no previous output to preserve. The backup directory is
/// created on first use.
pub fn backup_existing_output(output: &Path, backup_dir: &Path) -> SyncResult<Option<PathBuf>> {
    fs::create_dir_all(backup_dir)?;

    if !output.exists() {
        return Ok(None);
    }

    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let backup_path = backup_dir.join(backup_file_name(output, &timestamp.to_string()));
    fs::copy(output, &backup_path)?;

    Ok(Some(backup_path))
}

fn backup_file_name(output: &Path, timestamp: &str) -> String {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    format!("{}_backup_{}.json", stem, timestamp)
}
