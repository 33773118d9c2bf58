//! Excel ingestion module
//!
//! Reads the first worksheet of an .xlsx workbook and maps each data row
//! to a flat string-keyed record, ready for JSON serialization.

mod reader;

pub use reader::{Record, SheetData, SheetReader};
