//! Source reading for the CPI reshaper.
//!
//! This crate obtains the wide CSV (from a URL or a local file) and splits it
//! into a [`Header`](cpi_model::Header) and a lazy stream of
//! [`DataRow`](cpi_model::DataRow)s.
//!
//! # Example
//!
//! ```ignore
//! use cpi_ingest::{FetchOptions, Source, open_source};
//!
//! let source = Source::parse("cpi.csv")?;
//! let csv = open_source(&source, &FetchOptions::default())?;
//! for row in csv.rows {
//!     let row = row?;
//!     println!("{} has {} values", row.country_code(), row.values().len());
//! }
//! ```

mod error;
mod fetch;
mod reader;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Source Identification ===
pub use source::{DEFAULT_SOURCE_URL, Source};

// === Fetching ===
pub use fetch::{DEFAULT_USER_AGENT, FetchOptions, is_csv_content_type, open_stream};

// === CSV Reading ===
pub use reader::{CsvSource, RowReader, open_source, read_csv_source};
