//! Row transcoding: one input line in, one output line out

use super::schema::Schema;
use crate::app::models::FieldValue;
use crate::app::services::field_codec::{FieldCursor, FieldError};
use crate::app::services::lookup_table::LookupTables;
use crate::{Error, Result};

/// Error raised while transcoding one row
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// A cell failed to parse
    #[error("column '{column}': {error}")]
    Field {
        column: &'static str,
        error: FieldError,
    },

    /// The row ended before every column was read
    #[error("expected {expected} columns, found {found}")]
    ShortRow { expected: usize, found: usize },

    /// The row is not valid UTF-8
    #[error("invalid UTF-8 after byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },
}

/// Applies a schema's codecs to raw lines
///
/// Tables are borrowed read-only for the lifetime of the transcoder.
#[derive(Debug, Clone, Copy)]
pub struct RowTranscoder<'a> {
    schema: &'a Schema,
    tables: &'a LookupTables,
    missing_value: i32,
}

impl<'a> RowTranscoder<'a> {
    /// Create a transcoder, checking that every lookup column has a table
    pub fn new(schema: &'a Schema, tables: &'a LookupTables, missing_value: i32) -> Result<Self> {
        if let Some(category) = schema
            .required_categories()
            .into_iter()
            .find(|&category| !tables.contains(category))
        {
            return Err(Error::configuration(format!(
                "no lookup table loaded for {} codes",
                category
            )));
        }

        Ok(Self {
            schema,
            tables,
            missing_value,
        })
    }

    pub fn schema(&self) -> &Schema {
        self.schema
    }

    pub fn missing_value(&self) -> i32 {
        self.missing_value
    }

    /// Parse a line into one typed value per column
    ///
    /// Fields past the last column are ignored.
    pub fn parse_row(&self, line: &str) -> std::result::Result<Vec<FieldValue>, RowError> {
        let mut cursor = FieldCursor::new(line);
        let mut values = Vec::with_capacity(self.schema.len());

        for column in self.schema.columns() {
            let raw = cursor.next_field().ok_or(RowError::ShortRow {
                expected: self.schema.len(),
                found: cursor.fields_read(),
            })?;
            let value = column
                .codec
                .parse(raw, self.tables)
                .map_err(|error| RowError::Field {
                    column: column.name,
                    error,
                })?;
            values.push(value);
        }

        Ok(values)
    }

    /// Write parsed values as one comma-joined line (no terminator)
    pub fn format_row(&self, values: &[FieldValue], out: &mut String) {
        for (index, (column, value)) in self.schema.columns().iter().zip(values).enumerate() {
            if index > 0 {
                out.push(',');
            }
            column.codec.format(value, self.missing_value, out);
        }
    }

    /// Transcode a line into `out`, which is cleared first
    pub fn transcode_into(
        &self,
        line: &str,
        out: &mut String,
    ) -> std::result::Result<(), RowError> {
        out.clear();
        let values = self.parse_row(line)?;
        self.format_row(&values, out);
        Ok(())
    }

    /// Transcode a raw line into `out`, which is cleared first
    ///
    /// Lines that are not valid UTF-8 are rejected rather than repaired, so
    /// text columns never change on the way through.
    pub fn transcode_bytes_into(
        &self,
        line: &[u8],
        out: &mut String,
    ) -> std::result::Result<(), RowError> {
        out.clear();
        let text = std::str::from_utf8(line).map_err(|e| RowError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })?;
        self.transcode_into(text, out)
    }

    /// Transcode a line into a new string
    pub fn transcode(&self, line: &str) -> std::result::Result<String, RowError> {
        let mut out = String::with_capacity(line.len());
        self.transcode_into(line, &mut out)?;
        Ok(out)
    }
}
