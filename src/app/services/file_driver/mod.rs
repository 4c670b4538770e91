//! File driver for preprocessing runs
//!
//! This module ties the services together for a complete run over one
//! source file and one destination file.
//!
//! ## Architecture
//!
//! - [`driver`] - Opening files, loading lookup tables and streaming rows
//! - [`ascii_filter`] - Printable-ASCII byte filter
//! - [`stats`] - Run statistics
//!
//! ## Usage
//!
//! ```rust,no_run
//! use airline_prep::app::services::file_driver::FileDriver;
//! use airline_prep::config::PrepConfig;
//! use std::path::Path;
//!
//! # fn example() -> airline_prep::Result<()> {
//! let driver = FileDriver::new(PrepConfig::default().with_reference_dir("reference"))?;
//! let stats = driver.map_fields(Path::new("2008.csv"), Path::new("2008-mapped.csv"))?;
//!
//! println!("Transcoded {} rows", stats.stream.rows_written);
//! # Ok(())
//! # }
//! ```

pub mod ascii_filter;
pub mod driver;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use ascii_filter::{clean_stream, is_kept};
pub use driver::{FileDriver, transcode_stream};
pub use stats::{CleanStats, RunStats, StreamStats};
