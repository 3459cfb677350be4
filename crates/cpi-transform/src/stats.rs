//! Counters collected while reshaping.

use std::collections::BTreeSet;

use tracing::{trace, warn};

use cpi_standards::UNKNOWN_REGION_CODE;

/// What a reshape pass has seen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReshapeStats {
    /// Data rows pulled from the source (header excluded).
    pub rows_read: usize,
    /// Observation rows emitted (output header excluded).
    pub observations: usize,
    /// Year cells skipped because they were empty.
    pub empty_cells: usize,
    /// Observations whose country code fell back to the sentinel.
    pub unmapped_observations: usize,
    /// Distinct source codes that had no alpha-2 mapping.
    pub unmapped_codes: BTreeSet<String>,
}

impl ReshapeStats {
    /// Rows written by the sink: the header plus every observation.
    pub fn output_rows(&self) -> usize {
        self.observations + 1
    }

    pub(crate) fn record_unmapped(&mut self, country_code: &str, country_name: &str) {
        self.unmapped_observations += 1;
        if self.unmapped_codes.insert(country_code.to_string()) {
            warn!(
                country_code,
                country_name,
                fallback = UNKNOWN_REGION_CODE,
                "no alpha-2 code for country"
            );
        } else {
            trace!(country_code, "unmapped country code");
        }
    }
}
