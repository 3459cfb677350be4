//! Wide-to-long reshaping.
//!
//! A wide table has one row per country and one column per year. The
//! [`Reshaper`] walks it row by row, then column by column, and yields one
//! [`OutputRow`] per non-empty cell, preceded by the fixed header of the
//! chosen [`Layout`]. Both orders are preserved so output is reproducible.
//!
//! Rows are pulled from the source only when the previous row has been fully
//! emitted; nothing beyond the current row is held in memory.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use cpi_ingest::IngestError;
use cpi_model::{DataRow, FIRST_YEAR_COLUMN, Header, Layout, OutputRow};
use cpi_standards::CountryTable;

use crate::error::{Result, TransformError};
use crate::stats::ReshapeStats;

/// How observation rows are built.
#[derive(Debug, Clone, Copy)]
enum Mode<'t> {
    Narrow(&'t CountryTable),
    Wide,
}

/// The row currently being unrolled.
#[derive(Debug)]
struct Cursor {
    row: DataRow,
    column: usize,
    record: u64,
}

/// Lazy long-format view over a wide row stream.
#[derive(Debug)]
pub struct Reshaper<'t, I> {
    mode: Mode<'t>,
    header: Header,
    rows: I,
    cursor: Option<Cursor>,
    header_emitted: bool,
    done: bool,
    stats: ReshapeStats,
}

/// Reshape into `iso2c, year, cpi` rows.
pub fn reshape_long<I>(
    header: Header,
    rows: I,
    countries: &CountryTable,
) -> Reshaper<'_, I::IntoIter>
where
    I: IntoIterator<Item = std::result::Result<DataRow, IngestError>>,
{
    Reshaper::new(Mode::Narrow(countries), header, rows.into_iter())
}

/// Reshape into `Country Name, Country Code, Year, CPI` rows.
pub fn reshape_wide<I>(header: Header, rows: I) -> Reshaper<'static, I::IntoIter>
where
    I: IntoIterator<Item = std::result::Result<DataRow, IngestError>>,
{
    Reshaper::new(Mode::Wide, header, rows.into_iter())
}

/// Reshape into the given layout.
///
/// The country table is only consulted for [`Layout::Narrow`].
pub fn reshape<I>(
    layout: Layout,
    header: Header,
    rows: I,
    countries: &CountryTable,
) -> Reshaper<'_, I::IntoIter>
where
    I: IntoIterator<Item = std::result::Result<DataRow, IngestError>>,
{
    match layout {
        Layout::Narrow => reshape_long(header, rows, countries),
        Layout::Wide => Reshaper::new(Mode::Wide, header, rows.into_iter()),
    }
}

impl<'t, I> Reshaper<'t, I>
where
    I: Iterator<Item = std::result::Result<DataRow, IngestError>>,
{
    fn new(mode: Mode<'t>, header: Header, rows: I) -> Self {
        Self {
            mode,
            header,
            rows,
            cursor: None,
            header_emitted: false,
            done: false,
            stats: ReshapeStats::default(),
        }
    }

    pub fn layout(&self) -> Layout {
        match self.mode {
            Mode::Narrow(_) => Layout::Narrow,
            Mode::Wide => Layout::Wide,
        }
    }

    /// Counters for everything emitted so far.
    pub fn stats(&self) -> &ReshapeStats {
        &self.stats
    }

    /// Emit the next observation from the current row, if any remain.
    fn next_observation(&mut self) -> Option<Result<OutputRow>> {
        let cursor = self.cursor.as_mut()?;
        while let Some(value) = cursor.row.cells().get(cursor.column) {
            let column = cursor.column;
            cursor.column += 1;
            if value.is_empty() {
                self.stats.empty_cells += 1;
                continue;
            }

            let Some(year) = self.header.year_at(column) else {
                return Some(Err(TransformError::HeaderMisaligned {
                    record: cursor.record,
                    column,
                    header_len: self.header.len(),
                }));
            };

            let row = &cursor.row;
            let output = match self.mode {
                Mode::Narrow(countries) => {
                    let resolved = countries.resolve_alpha2(row.country_code());
                    if resolved.is_unknown() {
                        self.stats
                            .record_unmapped(row.country_code(), row.country_name());
                    }
                    OutputRow::Narrow {
                        iso2c: resolved.as_str().to_string(),
                        year: year.to_string(),
                        cpi: value.clone(),
                    }
                }
                Mode::Wide => OutputRow::Wide {
                    country_name: row.country_name().to_string(),
                    country_code: row.country_code().to_string(),
                    year: year.to_string(),
                    cpi: value.clone(),
                },
            };
            self.stats.observations += 1;
            trace!(record = cursor.record, column, year, "observation");
            return Some(Ok(output));
        }
        self.cursor = None;
        None
    }
}

impl<I> Iterator for Reshaper<'_, I>
where
    I: Iterator<Item = std::result::Result<DataRow, IngestError>>,
{
    type Item = Result<OutputRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.header_emitted {
            self.header_emitted = true;
            return Some(Ok(OutputRow::Header(self.layout())));
        }

        loop {
            if let Some(result) = self.next_observation() {
                if result.is_err() {
                    self.done = true;
                }
                return Some(result);
            }

            match self.rows.next() {
                Some(Ok(row)) => {
                    self.stats.rows_read += 1;
                    // The header is record 1.
                    let record = self.stats.rows_read as u64 + 1;
                    self.cursor = Some(Cursor {
                        row,
                        column: FIRST_YEAR_COLUMN,
                        record,
                    });
                }
                Some(Err(error)) => {
                    self.done = true;
                    return Some(Err(error.into()));
                }
                None => {
                    self.done = true;
                    debug!(
                        layout = %self.layout(),
                        rows_read = self.stats.rows_read,
                        observations = self.stats.observations,
                        empty_cells = self.stats.empty_cells,
                        unmapped = self.stats.unmapped_codes.len(),
                        "reshape complete"
                    );
                    return None;
                }
            }
        }
    }
}

impl<I> FusedIterator for Reshaper<'_, I> where
    I: Iterator<Item = std::result::Result<DataRow, IngestError>>
{
}
