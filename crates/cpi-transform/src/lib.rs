//! Wide-to-long reshaping for the CPI table.
//!
//! [`reshape_long`] turns each non-empty year cell of a wide row into an
//! `iso2c, year, cpi` record, translating the alpha-3 country code through a
//! [`CountryTable`](cpi_standards::CountryTable). [`reshape_wide`] keeps the
//! country name and source code instead.
//!
//! Both return a [`Reshaper`], a lazy iterator that yields the output header
//! first and then one row per observation in source order.

mod error;
mod reshape;
mod stats;

pub use error::{Result, TransformError};
pub use reshape::{Reshaper, reshape, reshape_long, reshape_wide};
pub use stats::ReshapeStats;
