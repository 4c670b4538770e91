//! Run statistics for the file driver

use crate::app::services::lookup_table::LoadStats;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Counts from streaming one data file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreamStats {
    /// Lines read, header included
    pub lines_read: u64,

    /// Whether a header line was present and copied
    pub header_copied: bool,

    /// Data rows transcoded and written
    pub rows_written: u64,

    /// Data rows left out under the skip policy
    pub rows_skipped: u64,
}

impl StreamStats {
    /// Data lines seen, header excluded
    pub fn data_lines(&self) -> u64 {
        self.rows_written + self.rows_skipped
    }
}

/// Statistics for one end-to-end transcoding run
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub source: PathBuf,
    pub destination: PathBuf,

    /// Local time the run started
    pub started_at: DateTime<Local>,

    /// Wall-clock duration of the whole run
    pub elapsed: Duration,

    /// One entry per lookup table built
    pub tables: Vec<LoadStats>,

    pub stream: StreamStats,
}

/// Statistics for one byte-filter run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanStats {
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub lines_written: u64,
}

impl CleanStats {
    /// Bytes dropped by the filter
    pub fn bytes_removed(&self) -> u64 {
        self.bytes_read - self.bytes_written
    }
}
