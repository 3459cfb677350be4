//! Long-format output layouts and rows.

use std::fmt;

/// Header emitted first by the narrow layout.
pub const NARROW_HEADER: [&str; 3] = ["iso2c", "year", "cpi"];

/// Header emitted first by the wide layout.
pub const WIDE_HEADER: [&str; 4] = ["Country Name", "Country Code", "Year", "CPI"];

/// Shape of the long-format output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `iso2c, year, cpi` with the country code translated to alpha-2.
    #[default]
    Narrow,
    /// `Country Name, Country Code, Year, CPI` with the source code kept as-is.
    Wide,
}

impl Layout {
    /// The fixed header for this layout.
    ///
    /// The source header is never copied into the output; only its column
    /// positions are trusted.
    pub fn header(self) -> &'static [&'static str] {
        match self {
            Layout::Narrow => &NARROW_HEADER,
            Layout::Wide => &WIDE_HEADER,
        }
    }

    /// File name used when the output goes into a directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Layout::Narrow => "cpi-long.csv",
            Layout::Wide => "cpi-wide.csv",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Narrow => "long",
            Layout::Wide => "wide",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record of long-format output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputRow {
    Header(Layout),
    Narrow {
        iso2c: String,
        year: String,
        cpi: String,
    },
    Wide {
        country_name: String,
        country_code: String,
        year: String,
        cpi: String,
    },
}

impl OutputRow {
    /// Fields in output column order.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            OutputRow::Header(layout) => layout.header().to_vec(),
            OutputRow::Narrow { iso2c, year, cpi } => {
                vec![iso2c.as_str(), year.as_str(), cpi.as_str()]
            }
            OutputRow::Wide {
                country_name,
                country_code,
                year,
                cpi,
            } => vec![
                country_name.as_str(),
                country_code.as_str(),
                year.as_str(),
                cpi.as_str(),
            ],
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, OutputRow::Header(_))
    }

    /// Year label of an observation row.
    pub fn year(&self) -> Option<&str> {
        match self {
            OutputRow::Header(_) => None,
            OutputRow::Narrow { year, .. } | OutputRow::Wide { year, .. } => {
                Some(year.as_str())
            }
        }
    }
}
