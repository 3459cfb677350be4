//! CSV output for reshaped CPI rows.
//!
//! Rows are written in the order they arrive, to a file or to standard
//! output. The header is whatever the row stream yields first; this crate
//! does not add one.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{
    Destination, LineTerminator, OutputOptions, WriteSummary, write_csv, write_rows,
};
