//! Embedded reference data.
//!
//! The country table is compiled into the binary with `include_str!()` so the
//! reshaper needs no runtime data files.

/// ISO 3166-1 country codes (`alpha_2,alpha_3,name`).
pub const ISO_3166_1: &str = include_str!("../data/iso3166-1.csv");

/// Label used in error messages for the embedded table.
pub const ISO_3166_1_LABEL: &str = "embedded ISO 3166-1 table";
