//! CSV serialization of output rows.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::{debug, info, trace};

use cpi_model::OutputRow;
use cpi_transform::TransformError;

use crate::error::{OutputError, Result};

/// Where output rows go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::File(path.to_path_buf()),
            None => Self::Stdout,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Record terminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineTerminator {
    /// `\r\n`, the spreadsheet dialect.
    #[default]
    Crlf,
    /// `\n`.
    Lf,
}

impl LineTerminator {
    fn as_csv(self) -> Terminator {
        match self {
            Self::Crlf => Terminator::CRLF,
            Self::Lf => Terminator::Any(b'\n'),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub terminator: LineTerminator,
}

/// What a completed write produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub destination: Destination,
    /// Records written, header included.
    pub records: usize,
}

/// Serialize rows to any writer, in order.
///
/// Returns the number of records written. The first failing row stops the
/// write; records before it have already been handed to `writer`.
pub fn write_rows<W, I>(writer: W, rows: I, options: &OutputOptions) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = std::result::Result<OutputRow, TransformError>>,
{
    write_records(writer, rows, options, "output")
}

/// Write rows to `path`, or to standard output when `path` is `None`.
///
/// An existing file is truncated. Its parent directory must already exist.
pub fn write_csv<I>(rows: I, path: Option<&Path>, options: &OutputOptions) -> Result<WriteSummary>
where
    I: IntoIterator<Item = std::result::Result<OutputRow, TransformError>>,
{
    let destination = Destination::from_path(path);
    let label = destination.to_string();
    let records = match &destination {
        Destination::Stdout => write_records(io::stdout().lock(), rows, options, &label)?,
        Destination::File(path) => {
            let file = File::create(path).map_err(|source| OutputError::Create {
                path: path.clone(),
                source,
            })?;
            write_records(file, rows, options, &label)?
        }
    };
    info!(destination = %destination, records, "output written");
    Ok(WriteSummary {
        destination,
        records,
    })
}

fn write_records<W, I>(
    writer: W,
    rows: I,
    options: &OutputOptions,
    destination: &str,
) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = std::result::Result<OutputRow, TransformError>>,
{
    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(options.terminator.as_csv())
        .from_writer(writer);

    let mut records = 0usize;
    for row in rows {
        let row = row?;
        records += 1;
        csv.write_record(row.fields())
            .map_err(|source| OutputError::Csv {
                destination: destination.to_string(),
                record: records,
                source,
            })?;
        trace!(record = records, "wrote record");
    }

    csv.flush().map_err(|source| OutputError::Write {
        destination: destination.to_string(),
        source,
    })?;
    debug!(destination, records, "flushed output");
    Ok(records)
}
