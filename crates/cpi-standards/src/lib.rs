//! Reference data for country-code normalization.
//!
//! This crate provides:
//!
//! - the ISO 3166-1 country table, embedded at compile time
//! - [`CountryTable`], an alpha-3 → alpha-2 lookup with a fixed fallback
//!   ([`UNKNOWN_REGION_CODE`]) for codes the table does not know
//!
//! # Example
//!
//! ```
//! use cpi_standards::{CountryTable, UNKNOWN_REGION_CODE};
//!
//! let table = CountryTable::iso3166()?;
//! assert_eq!(table.resolve_alpha2("ISL").as_str(), "IS");
//! assert_eq!(table.resolve_alpha2("XKX").as_str(), UNKNOWN_REGION_CODE);
//! # Ok::<(), cpi_standards::StandardsError>(())
//! ```

pub mod country;
pub mod embedded;
pub mod error;

pub use country::{Alpha2, Country, CountryTable, UNKNOWN_REGION_CODE};
pub use error::{Result, StandardsError};
