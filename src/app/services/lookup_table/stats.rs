//! Loading statistics for lookup tables

use crate::app::models::LookupCategory;
use serde::{Deserialize, Serialize};

/// Statistics from building one lookup table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Category of the table built
    pub category: LookupCategory,

    /// Data lines read from the reference source, header excluded
    pub data_lines: usize,

    /// Distinct codes in the finished table
    pub distinct_codes: usize,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new(category: LookupCategory) -> Self {
        Self {
            category,
            data_lines: 0,
            distinct_codes: 0,
        }
    }

    /// Data lines whose code had already been seen and was reassigned
    pub fn duplicate_codes(&self) -> usize {
        self.data_lines.saturating_sub(self.distinct_codes)
    }
}
