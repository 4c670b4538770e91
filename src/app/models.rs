//! Core data types shared by the codecs, lookup tables and transcoder

use crate::constants::{AIRCRAFT_FILE_NAME, AIRPORTS_FILE_NAME, CARRIERS_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed value produced by parsing one CSV cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// String content, written back unchanged
    Text(String),
    /// Integer content or a resolved lookup id
    Integer(i32),
    /// "NA", empty, or an unknown categorical code
    Missing,
}

impl FieldValue {
    /// Append the output text of this value, using `missing_value` for `Missing`
    pub fn write_to(&self, out: &mut String, missing_value: i32) {
        match self {
            FieldValue::Text(text) => out.push_str(text),
            FieldValue::Integer(value) => out.push_str(&value.to_string()),
            FieldValue::Missing => out.push_str(&missing_value.to_string()),
        }
    }

    /// Integer view of the value, with `Missing` resolved to `missing_value`
    pub fn as_integer(&self, missing_value: i32) -> Option<i32> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            FieldValue::Missing => Some(missing_value),
            FieldValue::Text(_) => None,
        }
    }

    /// Check if this value stands for missing data
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

/// Categorical columns that are replaced by integer ids
///
/// Airport codes are shared by `Origin` and `Dest`, so both columns consult
/// the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookupCategory {
    Carrier,
    Aircraft,
    Airport,
    CancellationCode,
}

impl LookupCategory {
    /// Reference file the table is built from, `None` for inline tables
    pub fn reference_file_name(&self) -> Option<&'static str> {
        match self {
            LookupCategory::Carrier => Some(CARRIERS_FILE_NAME),
            LookupCategory::Aircraft => Some(AIRCRAFT_FILE_NAME),
            LookupCategory::Airport => Some(AIRPORTS_FILE_NAME),
            LookupCategory::CancellationCode => None,
        }
    }

    /// Human readable label used in logs and summaries
    pub fn label(&self) -> &'static str {
        match self {
            LookupCategory::Carrier => "carrier",
            LookupCategory::Aircraft => "aircraft",
            LookupCategory::Airport => "airport",
            LookupCategory::CancellationCode => "cancellation code",
        }
    }
}

impl fmt::Display for LookupCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
