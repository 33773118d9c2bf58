//! Sheet reader implementation - Excel (.xlsx) → records

use crate::error::{SyncError, SyncResult};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use serde_json::Value;
use std::path::Path;

/// One normalized spreadsheet row: column name → trimmed string value.
///
/// `serde_json`'s preserve_order feature keeps keys in spreadsheet
/// column order.
pub type Record = serde_json::Map<String, Value>;

/// The first worksheet, flattened into records.
#[derive(Debug)]
pub struct SheetData {
    pub sheet_name: String,
    pub records: Vec<Record>,
}

/// A cell is either absent or carries text; resolved to a plain string
/// at ingestion so nothing downstream branches on a sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CellText {
    Missing,
    Present(String),
}

impl CellText {
    fn resolve(self) -> String {
        match self {
            CellText::Missing => String::new(),
            CellText::Present(s) => s.trim().to_string(),
        }
    }
}

/// Sheet reader for converting .xlsx rows to string records
pub struct SheetReader {
    path: std::path::PathBuf,
}

impl SheetReader {
    /// Create a new sheet reader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the first worksheet into an ordered record list.
    ///
    /// Row 0 is the header; every header column appears in every record,
    /// with empty cells normalized to `""`.
    pub fn read(&self) -> SyncResult<SheetData> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| SyncError::Sheet("workbook has no worksheets".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;
        let records = records_from_range(&range);

        Ok(SheetData {
            sheet_name,
            records,
        })
    }
}

/// Flatten a worksheet range into records, one per data row.
fn records_from_range(range: &Range<Data>) -> Vec<Record> {
    let (height, width) = range.get_size();
    if height < 1 {
        // No header row means no columns to key records by.
        return Vec::new();
    }

    // Header row (row 0) defines key names and key order
    let headers: Vec<String> = (0..width)
        .map(|col| header_name(range.get((0, col)), col))
        .collect();

    let mut records = Vec::with_capacity(height - 1);
    for row in 1..height {
        let mut record = Record::new();
        for (col, header) in headers.iter().enumerate() {
            let text = cell_text(range.get((row, col))).resolve();
            record.insert(header.clone(), Value::String(text));
        }
        records.push(record);
    }
    records
}

/// Column name from a header cell, with a positional fallback for blanks
fn header_name(cell: Option<&Data>, col: usize) -> String {
    match cell_text(cell) {
        CellText::Present(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => format!("col_{}", col),
    }
}

/// Classify a raw cell: empty and error cells are Missing, everything
/// else renders to its display text.
fn cell_text(cell: Option<&Data>) -> CellText {
    match cell {
        None | Some(Data::Empty) | Some(Data::Error(_)) => CellText::Missing,
        Some(Data::String(s)) => CellText::Present(s.clone()),
        Some(Data::Int(i)) => CellText::Present(i.to_string()),
        Some(Data::Float(f)) => CellText::Present(f.to_string()),
        Some(Data::Bool(b)) => CellText::Present(b.to_string()),
        Some(Data::DateTimeIso(s)) | Some(Data::DurationIso(s)) => CellText::Present(s.clone()),
        Some(other) => CellText::Present(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_empty_is_missing() {
        assert_eq!(cell_text(Some(&Data::Empty)), CellText::Missing);
        assert_eq!(cell_text(None), CellText::Missing);
    }

    #[test]
    fn test_cell_text_values_render_as_strings() {
        assert_eq!(
            cell_text(Some(&Data::String("Sword".to_string()))),
            CellText::Present("Sword".to_string())
        );
        assert_eq!(
            cell_text(Some(&Data::Int(42))),
            CellText::Present("42".to_string())
        );
        assert_eq!(
            cell_text(Some(&Data::Float(1.5))),
            CellText::Present("1.5".to_string())
        );
        assert_eq!(
            cell_text(Some(&Data::Bool(true))),
            CellText::Present("true".to_string())
        );
    }

    #[test]
    fn test_resolve_trims_surrounding_whitespace() {
        let text = CellText::Present("  Sword of X \t".to_string()).resolve();
        assert_eq!(text, "Sword of X");
    }

    #[test]
    fn test_resolve_missing_is_empty_string() {
        assert_eq!(CellText::Missing.resolve(), "");
    }

    #[test]
    fn test_header_name_fallback_for_blank_cells() {
        assert_eq!(header_name(Some(&Data::Empty), 3), "col_3");
        assert_eq!(header_name(None, 0), "col_0");
        assert_eq!(
            header_name(Some(&Data::String("Name".to_string())), 0),
            "Name"
        );
    }

    #[test]
    fn test_records_from_range_keeps_row_order_and_columns() {
        let cells = vec![
            ((0, 0), Data::String("Name".to_string())),
            ((0, 1), Data::String("Category".to_string())),
            ((1, 0), Data::String("Sword of X".to_string())),
            // (1, 1) left empty on purpose
            ((2, 0), Data::String("  Shield  ".to_string())),
            ((2, 1), Data::String("Armor".to_string())),
        ];
        let range = Range::from_sparse(
            cells
                .into_iter()
                .map(|((r, c), d)| calamine::Cell::new((r, c), d))
                .collect(),
        );

        let records = records_from_range(&range);
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first["Name"], Value::String("Sword of X".to_string()));
        // Missing cell still gets its key, as the empty string
        assert_eq!(first["Category"], Value::String("".to_string()));

        let second = &records[1];
        assert_eq!(second["Name"], Value::String("Shield".to_string()));
        assert_eq!(second["Category"], Value::String("Armor".to_string()));

        // Key order follows spreadsheet column order
        let keys: Vec<&String> = first.keys().collect();
        assert_eq!(keys, vec!["Name", "Category"]);
    }

    #[test]
    fn test_records_from_range_header_only_sheet() {
        let range = Range::from_sparse(vec![calamine::Cell::new(
            (0, 0),
            Data::String("Name".to_string()),
        )]);
        assert!(records_from_range(&range).is_empty());
    }
}
