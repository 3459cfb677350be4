//! Data model for the CPI wide-to-long reshaper.
//!
//! Input is a wide table (one column per year) described by [`Header`] and
//! [`DataRow`]; output is a sequence of [`OutputRow`]s in one of two
//! [`Layout`]s.

pub mod layout;
pub mod row;

pub use layout::{Layout, NARROW_HEADER, OutputRow, WIDE_HEADER};
pub use row::{DataRow, FIRST_YEAR_COLUMN, Header};
