//! Modsync - Excel to JSON sync for the modifier collection website
//!
//! This library reads a spreadsheet of modifier records, normalizes each
//! row into a flat string-keyed record, and writes the ordered record
//! list as JSON for the website to serve. The previous output is
//! preserved as a timestamped backup before every overwrite. A separate
//! minify operation strips non-semantic whitespace from the JSON.
//!
//! # Example
//!
//! ```no_run
//! use modifier_sync::config::ConvertConfig;
//! use modifier_sync::convert::run_convert;
//!
//! let config = ConvertConfig::default();
//! let outcome = run_convert(&config)?;
//!
//! println!("Records: {}", outcome.record_count);
//! # Ok::<(), modifier_sync::error::SyncError>(())
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod excel;
pub mod minify;

// Re-export commonly used types
pub use config::{ConvertConfig, MinifyConfig};
pub use convert::{run_convert, ConvertOutcome};
pub use error::{SyncError, SyncResult};
pub use excel::{Record, SheetData, SheetReader};
pub use minify::{run_minify, MinifyOutcome};
