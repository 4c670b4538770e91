//! Row transcoder for the airline dataset
//!
//! A [`Schema`] lists the columns of a row and the codec each one uses. The
//! [`RowTranscoder`] walks a raw line with a field cursor, parses each cell
//! with its column's codec and joins the formatted values with commas.
//!
//! Rows with fewer fields than the schema are rejected with
//! [`RowError::ShortRow`] whatever the column types, while a field that is
//! present but empty resolves to the missing value.
//!
//! ## Usage
//!
//! ```rust
//! use airline_prep::app::services::lookup_table::LookupTables;
//! use airline_prep::app::services::row_transcoder::{RowTranscoder, Schema};
//!
//! # fn example() -> airline_prep::Result<()> {
//! let schema = Schema::airline_reformat();
//! let tables = LookupTables::new();
//! let transcoder = RowTranscoder::new(&schema, &tables, -1)?;
//!
//! let line = "1987,10,14,3,741,730,912,849,PS,1451,NA,91,79,NA,23,11,SAN,SFO,447,NA,NA,0,NA,0,NA,NA,NA,NA,NA";
//! let output = transcoder.transcode(line).expect("well-formed row");
//! assert!(output.starts_with("1987,10,14,3,741,730,912,849,PS,1451,NA,91,79,-1"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod schema;
pub mod transcoder;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use schema::{ColumnSpec, Schema};
pub use transcoder::{RowError, RowTranscoder};
