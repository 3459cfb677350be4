//! Error types for source reading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while obtaining or tokenizing a source.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Source Identification ===
    /// The source string looks like a URL but cannot be used.
    #[error("invalid source '{source_id}': {reason}")]
    InvalidSource { source_id: String, reason: String },

    // === Fetch Errors ===
    /// The request could not be sent or the body could not be read.
    #[error("failed to fetch {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("failed to fetch {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The server answered with something other than CSV.
    #[error("{url} returned non-CSV content ({content_type})")]
    NonCsvContent { url: String, content_type: String },

    // === File System Errors ===
    /// Local source file not found.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open the local source file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// A record could not be tokenized.
    #[error("failed to parse CSV {source_id} at record {record}: {source}")]
    CsvParse {
        source_id: String,
        record: u64,
        #[source]
        source: csv::Error,
    },

    /// The source has no header row.
    #[error("CSV source is empty: {source_id}")]
    EmptySource { source_id: String },
}

impl IngestError {
    /// True for errors raised while retrieving the source.
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            Self::Request { .. }
                | Self::HttpStatus { .. }
                | Self::NonCsvContent { .. }
                | Self::FileNotFound { .. }
                | Self::FileRead { .. }
        )
    }

    /// True for errors raised while tokenizing the content.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::CsvParse { .. } | Self::EmptySource { .. })
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/cpi.csv"),
        };
        assert_eq!(err.to_string(), "source file not found: /path/to/cpi.csv");

        let err = IngestError::HttpStatus {
            url: "http://example.test/cpi".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "failed to fetch http://example.test/cpi: HTTP 404");
    }

    #[test]
    fn test_error_classification() {
        let fetch = IngestError::NonCsvContent {
            url: "http://example.test".to_string(),
            content_type: "text/html".to_string(),
        };
        assert!(fetch.is_fetch());
        assert!(!fetch.is_parse());

        let parse = IngestError::EmptySource {
            source_id: "empty.csv".to_string(),
        };
        assert!(parse.is_parse());
        assert!(!parse.is_fetch());
    }
}
