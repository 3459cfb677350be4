//! Country reference table.
//!
//! Maps ISO 3166-1 alpha-3 codes to alpha-2 codes. Lookups are
//! case-insensitive. Codes that have no entry (World Bank aggregates such as
//! `WLD`, or territories outside ISO 3166-1 such as Kosovo's `XKX`) resolve to
//! [`UNKNOWN_REGION_CODE`].

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::embedded;
use crate::error::{Result, StandardsError};

/// Alpha-2 code substituted when an alpha-3 code has no table entry.
pub const UNKNOWN_REGION_CODE: &str = "XK";

/// A single country entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub alpha_2: String,
    pub alpha_3: String,
    pub name: Option<String>,
}

/// Result of resolving an alpha-3 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alpha2<'a> {
    /// The code has a table entry.
    Mapped(&'a str),
    /// No entry; renders as [`UNKNOWN_REGION_CODE`].
    Unknown,
}

impl<'a> Alpha2<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Alpha2::Mapped(code) => code,
            Alpha2::Unknown => UNKNOWN_REGION_CODE,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Alpha2::Unknown)
    }
}

impl fmt::Display for Alpha2<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row of a country table CSV.
#[derive(Debug, Deserialize)]
struct CountryCsvRow {
    alpha_2: String,
    alpha_3: String,
    #[serde(default)]
    name: Option<String>,
}

/// Read-only alpha-3 → alpha-2 lookup table.
#[derive(Debug, Clone)]
pub struct CountryTable {
    countries: Vec<Country>,
    by_alpha_3: HashMap<String, usize>,
}

impl CountryTable {
    /// Load the embedded ISO 3166-1 table.
    pub fn iso3166() -> Result<Self> {
        Self::from_reader(
            Cursor::new(embedded::ISO_3166_1.as_bytes()),
            embedded::ISO_3166_1_LABEL,
        )
    }

    /// Load a table from a CSV file with `alpha_2` and `alpha_3` columns.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StandardsError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                StandardsError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Self::from_reader(file, &path.display().to_string())
    }

    /// Load a table from any CSV reader. `label` names the source in errors.
    pub fn from_reader<R: Read>(reader: R, label: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut countries = Vec::new();
        let mut by_alpha_3 = HashMap::new();

        for (idx, result) in reader.deserialize::<CountryCsvRow>().enumerate() {
            let record = idx as u64 + 1;
            let row = result.map_err(|source| StandardsError::CsvParse {
                file: label.to_string(),
                source,
            })?;

            let alpha_2 = validated_code(&row.alpha_2, 2, "alpha_2", label, record)?;
            let alpha_3 = validated_code(&row.alpha_3, 3, "alpha_3", label, record)?;

            // First entry wins on duplicate alpha-3 codes.
            if by_alpha_3.contains_key(&alpha_3) {
                debug!(alpha_3 = %alpha_3, file = label, "duplicate country code ignored");
                continue;
            }
            by_alpha_3.insert(alpha_3.clone(), countries.len());
            countries.push(Country {
                alpha_2,
                alpha_3,
                name: row.name.filter(|name| !name.is_empty()),
            });
        }

        if countries.is_empty() {
            return Err(StandardsError::EmptyTable {
                file: label.to_string(),
            });
        }

        debug!(entries = countries.len(), file = label, "loaded country table");
        Ok(Self {
            countries,
            by_alpha_3,
        })
    }

    /// Look up the entry for an alpha-3 code.
    pub fn get(&self, alpha_3: &str) -> Option<&Country> {
        self.by_alpha_3
            .get(&alpha_3.to_ascii_uppercase())
            .map(|&idx| &self.countries[idx])
    }

    /// Alpha-2 code for an alpha-3 code, if the table has one.
    pub fn alpha2_for(&self, alpha_3: &str) -> Option<&str> {
        self.get(alpha_3).map(|country| country.alpha_2.as_str())
    }

    /// Resolve an alpha-3 code, falling back to [`UNKNOWN_REGION_CODE`].
    pub fn resolve_alpha2(&self, alpha_3: &str) -> Alpha2<'_> {
        match self.alpha2_for(alpha_3) {
            Some(code) => Alpha2::Mapped(code),
            None => Alpha2::Unknown,
        }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }
}

fn validated_code(
    raw: &str,
    len: usize,
    field: &'static str,
    file: &str,
    record: u64,
) -> Result<String> {
    if raw.len() != len || !raw.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(StandardsError::InvalidValue {
            field,
            value: raw.to_string(),
            file: file.to_string(),
            record,
        });
    }
    Ok(raw.to_ascii_uppercase())
}
