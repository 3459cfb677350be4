//! Error types for reference table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a country reference table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Table file not found.
    #[error("country table not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open the table file.
    #[error("failed to read country table {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a CSV record.
    #[error("failed to parse {file}: {source}")]
    CsvParse {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A code has the wrong shape for its column.
    #[error("invalid {field} value '{value}' in {file} (record {record})")]
    InvalidValue {
        field: &'static str,
        value: String,
        file: String,
        record: u64,
    },

    /// The table parsed but holds no codes.
    #[error("country table {file} contains no entries")]
    EmptyTable { file: String },
}

/// Result type for reference table operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
