use std::path::PathBuf;
use thiserror::Error;

pub type SyncResult<T> = Result<T, SyncError>;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel read error: {0}")]
    Excel(#[from] calamine::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("malformed JSON in {}: {source}", .path.display())]
    MalformedJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("spreadsheet error: {0}")]
    Sheet(String),
}
