//! Source identification.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use reqwest::Url;

use crate::error::{IngestError, Result};

/// World Bank CPI indicator endpoint, served as CSV.
pub const DEFAULT_SOURCE_URL: &str = "http://api.worldbank.org/indicator/FP.CPI.TOTL?format=csv";

/// Where the wide CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// An `http` or `https` URL.
    Url(String),
    /// A local file.
    Path(PathBuf),
}

impl Source {
    /// Classify a source string.
    ///
    /// `http`/`https` URLs are fetched over the network, `file` URLs are
    /// converted to local paths, and anything else is taken as a path.
    pub fn parse(raw: &str) -> Result<Self> {
        let Ok(url) = Url::parse(raw) else {
            return Ok(Self::Path(PathBuf::from(raw)));
        };
        match url.scheme() {
            "http" | "https" => Ok(Self::Url(raw.to_string())),
            "file" => url
                .to_file_path()
                .map(Self::Path)
                .map_err(|()| IngestError::InvalidSource {
                    source_id: raw.to_string(),
                    reason: "file URL does not name a local path".to_string(),
                }),
            // Windows drive letters parse as single-letter schemes.
            _ => Ok(Self::Path(PathBuf::from(raw))),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl Default for Source {
    fn default() -> Self {
        Self::Url(DEFAULT_SOURCE_URL.to_string())
    }
}

impl FromStr for Source {
    type Err = IngestError;

    fn from_str(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}
