//! Fixed paths for the website's data layout, overridable per run.
//!
//! The website serves `data/modifiers_data.json` directly, so both
//! operations default to that layout. Tests and CLI flags construct
//! their own configs instead of touching globals.

use std::path::PathBuf;

/// Paths for one conversion run: spreadsheet in, JSON out, backups aside.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Source spreadsheet (.xlsx), first sheet only.
    pub input: PathBuf,
    /// Pretty-printed JSON consumed by the website.
    pub output: PathBuf,
    /// Directory that receives timestamped snapshots of the previous output.
    pub backup_dir: PathBuf,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/modifiers.xlsx"),
            output: PathBuf::from("data/modifiers_data.json"),
            backup_dir: PathBuf::from("data/backups"),
        }
    }
}

/// Paths for one minification run.
#[derive(Debug, Clone)]
pub struct MinifyConfig {
    /// Pretty-printed JSON source (left untouched).
    pub input: PathBuf,
    /// Minified output, written to a distinct path.
    pub output: PathBuf,
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/modifiers_data.json"),
            output: PathBuf::from("data/optimized/modifiers_data.min.json"),
        }
    }
}
