//! JSON minification: strip non-semantic whitespace, report the savings.

use crate::config::MinifyConfig;
use crate::error::{SyncError, SyncResult};
use serde_json::Value;
use std::fs;

/// Byte sizes before and after minification.
#[derive(Debug)]
pub struct MinifyOutcome {
    pub original_bytes: u64,
    pub minified_bytes: u64,
}

impl MinifyOutcome {
    /// Size reduction as a percentage of the original
    pub fn reduction_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        let saved = self.original_bytes.saturating_sub(self.minified_bytes);
        saved as f64 / self.original_bytes as f64 * 100.0
    }
}

/// Re-serialize a JSON document with no inter-token whitespace.
///
/// The source file is parsed in full first, so malformed input fails
/// before anything is written. The minified form goes to a distinct
/// output path; the pretty-printed source is never touched.
pub fn run_minify(config: &MinifyConfig) -> SyncResult<MinifyOutcome> {
    if !config.input.exists() {
        return Err(SyncError::MissingInput(config.input.clone()));
    }

    let raw = fs::read_to_string(&config.input)?;
    let value: Value =
        serde_json::from_str(&raw).map_err(|source| SyncError::MalformedJson {
            path: config.input.clone(),
            source,
        })?;

    // Compact form: `,` and `:` separators, no indentation
    let minified = serde_json::to_string(&value)?;

    if let Some(parent) = config.output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config.output, &minified)?;

    Ok(MinifyOutcome {
        original_bytes: raw.len() as u64,
        minified_bytes: minified.len() as u64,
    })
}
