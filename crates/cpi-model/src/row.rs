//! Wide-format input rows.
//!
//! Both the header and every data row share the same positional layout:
//! column 0 is the country name, column 1 the ISO 3166-1 alpha-3 code, and
//! every column from [`FIRST_YEAR_COLUMN`] onward belongs to one year.

/// Index of the first per-year column in a wide row.
pub const FIRST_YEAR_COLUMN: usize = 2;

/// The header row of a wide table.
///
/// Only the year labels are ever read; the name and code cells are kept so
/// that column indices line up with [`DataRow`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header(Vec<String>);

impl Header {
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    /// Returns the year label for a column of the full row.
    pub fn year_at(&self, column: usize) -> Option<&str> {
        if column < FIRST_YEAR_COLUMN {
            return None;
        }
        self.0.get(column).map(String::as_str)
    }

    /// Number of cells, including the name and code columns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for Header {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// One country's row in a wide table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataRow(Vec<String>);

impl DataRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    pub fn country_name(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or("")
    }

    /// The alpha-3 country code as it appears in the source.
    pub fn country_code(&self) -> &str {
        self.0.get(1).map(String::as_str).unwrap_or("")
    }

    /// Indicator values, starting at [`FIRST_YEAR_COLUMN`].
    pub fn values(&self) -> &[String] {
        self.0.get(FIRST_YEAR_COLUMN..).unwrap_or(&[])
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for DataRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
