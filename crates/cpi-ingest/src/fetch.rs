//! Opening a source as a byte stream.
//!
//! Remote sources use a blocking HTTP client; the response body is handed to
//! the CSV reader as-is so rows are pulled off the socket as they are parsed.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::source::Source;

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("cpi-reshape/", env!("CARGO_PKG_VERSION"));

/// HTTP settings for remote sources.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchOptions {
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Open a source for reading.
pub fn open_stream(source: &Source, options: &FetchOptions) -> Result<Box<dyn Read>> {
    match source {
        Source::Url(url) => open_url(url, options),
        Source::Path(path) => open_file(path),
    }
}

fn open_url(url: &str, options: &FetchOptions) -> Result<Box<dyn Read>> {
    let client = Client::builder()
        .timeout(options.timeout)
        .build()
        .map_err(|source| IngestError::Request {
            url: url.to_string(),
            source,
        })?;

    info!(url, "fetching source");
    let response = client
        .get(url)
        .header(USER_AGENT, options.user_agent.as_str())
        .send()
        .map_err(|source| IngestError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    if let Some(content_type) = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    {
        debug!(url, content_type, "response content type");
        if !is_csv_content_type(content_type) {
            return Err(IngestError::NonCsvContent {
                url: url.to_string(),
                content_type: content_type.to_string(),
            });
        }
    }

    Ok(Box::new(response))
}

fn open_file(path: &Path) -> Result<Box<dyn Read>> {
    info!(path = %path.display(), "reading source file");
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    Ok(Box::new(file))
}

/// Media types that servers use for CSV downloads, besides any `text/*`.
const CSV_MEDIA_TYPES: [&str; 4] = [
    "application/csv",
    "application/octet-stream",
    "application/vnd.ms-excel",
    "application/x-csv",
];

/// Whether a `Content-Type` value can carry CSV text.
///
/// Any `text/*` type is accepted except markup; other types must be one of
/// the generic download types servers label CSV with.
pub fn is_csv_content_type(value: &str) -> bool {
    let essence = value
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    if essence.is_empty() {
        return true;
    }
    match essence.split_once('/') {
        Some(("text", subtype)) => !matches!(subtype, "html" | "xml"),
        Some(_) => CSV_MEDIA_TYPES.contains(&essence.as_str()),
        None => false,
    }
}
