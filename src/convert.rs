//! One conversion run: spreadsheet → backup of previous output → JSON.

use crate::backup::backup_existing_output;
use crate::config::ConvertConfig;
use crate::error::{SyncError, SyncResult};
use crate::excel::SheetReader;
use std::fs;
use std::path::PathBuf;

/// What a successful conversion produced, for reporting.
#[derive(Debug)]
pub struct ConvertOutcome {
    pub record_count: usize,
    pub sheet_name: String,
    /// Snapshot of the previous output, when one existed.
    pub backup_path: Option<PathBuf>,
}

/// Convert the spreadsheet to pretty-printed JSON at the output path.
///
/// Side effects run in a fixed order: verify the input exists, snapshot
/// any previous output into the backup directory, read the sheet, then
/// overwrite the output. Serialization happens before the write, so a
/// read or serialize failure leaves the previous output untouched. The
/// write itself is a plain overwrite, not an atomic replace; two
/// concurrent runs against one output path can interleave and corrupt
/// each other's backups.
pub fn run_convert(config: &ConvertConfig) -> SyncResult<ConvertOutcome> {
    if !config.input.exists() {
        return Err(SyncError::MissingInput(config.input.clone()));
    }

    // Previous output must be preserved before anything else happens
    let backup_path = backup_existing_output(&config.output, &config.backup_dir)?;

    let sheet = SheetReader::new(&config.input).read()?;

    // 2-space indent, non-ASCII left unescaped
    let json = serde_json::to_string_pretty(&sheet.records)?;

    if let Some(parent) = config.output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config.output, json)?;

    Ok(ConvertOutcome {
        record_count: sheet.records.len(),
        sheet_name: sheet.sheet_name,
        backup_path,
    })
}
