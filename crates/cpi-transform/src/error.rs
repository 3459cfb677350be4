//! Error types for reshaping.

use thiserror::Error;

use cpi_ingest::IngestError;

/// Errors raised while reshaping a wide table.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Reading the next source row failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// A non-empty value sits in a column the header does not cover.
    #[error(
        "record {record}: value in column {column} has no year label (header has {header_len} columns)"
    )]
    HeaderMisaligned {
        record: u64,
        column: usize,
        header_len: usize,
    },
}

/// Result type for reshaping.
pub type Result<T> = std::result::Result<T, TransformError>;
