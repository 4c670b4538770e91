//! Typed parse/format pairs for single CSV cells

use crate::app::models::{FieldValue, LookupCategory};
use crate::app::services::lookup_table::LookupTables;
use crate::constants::MISSING_MARKER;
use std::num::ParseIntError;
use tracing::trace;

/// Error raised while parsing a single cell
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Text where an integer was expected
    #[error("'{value}' is not a valid integer ({reason})")]
    InvalidInteger { value: String, reason: ParseIntError },
}

/// Decoding of string cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringCodec {
    /// Copied verbatim
    Plain,
    /// One leading and one trailing character removed, assumed to be quotes
    ///
    /// The characters are not checked. Cells shorter than two characters
    /// decode to an empty string. Output is never re-quoted.
    Quoted,
}

impl StringCodec {
    pub fn decode(&self, raw: &str) -> String {
        match self {
            StringCodec::Plain => raw.to_string(),
            StringCodec::Quoted => {
                let mut chars = raw.chars();
                chars.next();
                chars.next_back();
                chars.as_str().to_string()
            }
        }
    }
}

/// Codec for one schema column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCodec {
    /// String cell, formatted unchanged
    Text(StringCodec),
    /// Base-10 `i32`, with "NA" or empty text meaning missing
    Integer,
    /// Categorical code replaced by its id from the category's table
    Lookup(LookupCategory),
}

impl FieldCodec {
    /// Parse raw cell text (already cut at the delimiter)
    ///
    /// Only `Integer` can fail. Unknown categorical codes resolve to
    /// `FieldValue::Missing` without an error.
    pub fn parse(&self, raw: &str, tables: &LookupTables) -> Result<FieldValue, FieldError> {
        match self {
            FieldCodec::Text(codec) => Ok(FieldValue::Text(codec.decode(raw))),
            FieldCodec::Integer => {
                if is_missing(raw) {
                    return Ok(FieldValue::Missing);
                }
                raw.parse::<i32>()
                    .map(FieldValue::Integer)
                    .map_err(|reason| FieldError::InvalidInteger {
                        value: raw.to_string(),
                        reason,
                    })
            }
            FieldCodec::Lookup(category) => {
                if is_missing(raw) {
                    return Ok(FieldValue::Missing);
                }
                match tables.get(*category).and_then(|table| table.id_for(raw)) {
                    Some(id) => Ok(FieldValue::Integer(id)),
                    None => {
                        trace!("Unknown {} code '{}', using missing value", category, raw);
                        Ok(FieldValue::Missing)
                    }
                }
            }
        }
    }

    /// Append the output text for a parsed value
    pub fn format(&self, value: &FieldValue, missing_value: i32, out: &mut String) {
        value.write_to(out, missing_value);
    }

    /// Check if the codec consults a lookup table
    pub fn lookup_category(&self) -> Option<LookupCategory> {
        match self {
            FieldCodec::Lookup(category) => Some(*category),
            _ => None,
        }
    }
}

fn is_missing(raw: &str) -> bool {
    raw == MISSING_MARKER || raw.is_empty()
}
