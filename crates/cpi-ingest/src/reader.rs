//! Lazy CSV tokenization of a wide source.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use tracing::{debug, trace};

use cpi_model::{DataRow, Header};

use crate::error::{IngestError, Result};
use crate::fetch::{FetchOptions, open_stream};
use crate::source::Source;

/// A source split into its header and a forward-only row stream.
pub struct CsvSource {
    /// The upstream header. Only its column positions are meaningful.
    pub header: Header,
    /// Remaining rows, read on demand.
    pub rows: RowReader,
}

/// Iterator over the data rows of a source.
///
/// Each call to `next` reads one record from the underlying stream. The
/// iterator is not restartable.
pub struct RowReader {
    records: StringRecordsIntoIter<Box<dyn Read>>,
    source_id: String,
    record: u64,
}

impl RowReader {
    /// 1-based record number of the last row returned (the header is record 1).
    pub fn record_number(&self) -> u64 {
        self.record
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }
}

impl Iterator for RowReader {
    type Item = Result<DataRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.records.next()?;
        self.record += 1;
        Some(match result {
            Ok(record) => {
                trace!(record = self.record, cells = record.len(), "read row");
                Ok(record.iter().collect())
            }
            Err(source) => Err(IngestError::CsvParse {
                source_id: self.source_id.clone(),
                record: self.record,
                source,
            }),
        })
    }
}

impl std::fmt::Debug for RowReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowReader")
            .field("source_id", &self.source_id)
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

/// Open a source and read its header row.
pub fn open_source(source: &Source, options: &FetchOptions) -> Result<CsvSource> {
    let stream = open_stream(source, options)?;
    read_csv_source(stream, &source.to_string())
}

/// Split any byte stream into header and rows.
///
/// Rows may have differing lengths; cells are kept verbatim except for a
/// byte-order mark on the very first header cell.
pub fn read_csv_source<R: Read + 'static>(reader: R, source_id: &str) -> Result<CsvSource> {
    let stream: Box<dyn Read> = Box::new(reader);
    let mut records = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(stream)
        .into_records();

    let header = match records.next() {
        Some(Ok(record)) => header_from_record(&record),
        Some(Err(source)) => {
            return Err(IngestError::CsvParse {
                source_id: source_id.to_string(),
                record: 1,
                source,
            });
        }
        None => {
            return Err(IngestError::EmptySource {
                source_id: source_id.to_string(),
            });
        }
    };
    debug!(source = source_id, header = ?header.cells(), "upstream header");

    Ok(CsvSource {
        header,
        rows: RowReader {
            records,
            source_id: source_id.to_string(),
            record: 1,
        },
    })
}

fn header_from_record(record: &StringRecord) -> Header {
    record
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            if idx == 0 {
                cell.trim_start_matches('\u{feff}')
            } else {
                cell
            }
        })
        .collect()
}
