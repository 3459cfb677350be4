//! Error types for writing output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use cpi_transform::TransformError;

/// Errors raised while writing CSV output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The output file could not be created or truncated.
    #[error("failed to create {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Flushing buffered output failed.
    #[error("failed to write {destination}")]
    Write {
        destination: String,
        #[source]
        source: io::Error,
    },

    /// A record could not be serialized.
    #[error("failed to write record {record} to {destination}")]
    Csv {
        destination: String,
        record: usize,
        #[source]
        source: csv::Error,
    },

    /// The row stream being written failed.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
