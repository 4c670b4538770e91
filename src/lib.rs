//! Airline Preprocessor Library
//!
//! A Rust library for preparing the airline on-time-performance CSV dataset
//! for statistical tools that only accept uniformly typed integer matrices.
//!
//! This library provides tools for:
//! - Stripping non-printable bytes from raw data files
//! - Building code -> integer lookup tables from reference CSV files
//! - Parsing and re-serializing the fixed 29-column schema with typed field codecs
//! - Replacing categorical strings with integer ids and missing values with a sentinel
//! - Streaming whole files through the transcoder with per-run statistics

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod field_codec;
        pub mod file_driver;
        pub mod lookup_table;
        pub mod row_transcoder;
    }
    pub mod adapters {
        pub mod line_reader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FieldValue, LookupCategory};
pub use app::services::field_codec::{FieldCodec, FieldError, StringCodec};
pub use app::services::lookup_table::{LookupTable, LookupTables};
pub use app::services::row_transcoder::{RowError, RowTranscoder, Schema};
pub use config::{MalformedRowPolicy, PrepConfig};

use std::path::PathBuf;

/// Result type alias for the airline preprocessor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for preprocessing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// An input, output or reference file could not be opened
    #[error("Cannot open {role} file: {}", path.display())]
    FileOpen {
        role: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data row could not be transcoded
    #[error("Malformed row at line {line} (raw: '{raw}')")]
    MalformedRow {
        line: u64,
        raw: String,
        #[source]
        source: RowError,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Command line usage error
    #[error("Usage error: {message}")]
    Usage { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file open error for the given path
    pub fn file_open(
        role: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileOpen {
            role: role.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a malformed row error
    pub fn malformed_row(line: u64, raw: impl Into<String>, source: RowError) -> Self {
        Self::MalformedRow {
            line,
            raw: raw.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
