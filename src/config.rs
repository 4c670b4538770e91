//! Configuration management and validation.
//!
//! Holds the run parameters shared by every subcommand: the sentinel written
//! for missing data, where the reference files live, and how malformed rows
//! are treated.

use crate::app::models::LookupCategory;
use crate::constants::{DEFAULT_MISSING_VALUE, DEFAULT_REFERENCE_DIR};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// What to do with a data row that cannot be transcoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MalformedRowPolicy {
    /// Stop the run and report the line number and raw content
    #[default]
    Abort,
    /// Log the row at warn level, leave it out of the output and continue
    Skip,
}

/// Global configuration for a preprocessing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Integer written for "NA", empty and unknown categorical values
    pub missing_value: i32,

    /// Directory holding carriers.csv, plane-data.csv and airports.csv
    pub reference_dir: PathBuf,

    /// Treatment of rows that fail to transcode
    pub malformed_rows: MalformedRowPolicy,

    /// Show a spinner while streaming the data file
    pub show_progress: bool,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            missing_value: DEFAULT_MISSING_VALUE,
            reference_dir: PathBuf::from(DEFAULT_REFERENCE_DIR),
            malformed_rows: MalformedRowPolicy::Abort,
            show_progress: false,
        }
    }
}

impl PrepConfig {
    /// Set the sentinel for missing values
    pub fn with_missing_value(mut self, missing_value: i32) -> Self {
        self.missing_value = missing_value;
        self
    }

    /// Set the reference file directory
    pub fn with_reference_dir(mut self, reference_dir: impl Into<PathBuf>) -> Self {
        self.reference_dir = reference_dir.into();
        self
    }

    /// Set the malformed row policy
    pub fn with_malformed_rows(mut self, policy: MalformedRowPolicy) -> Self {
        self.malformed_rows = policy;
        self
    }

    /// Enable the progress spinner
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    /// Path of the reference file for a category, `None` for inline tables
    pub fn reference_path(&self, category: LookupCategory) -> Option<PathBuf> {
        category
            .reference_file_name()
            .map(|name| self.reference_dir.join(name))
    }

    /// Validate the configuration
    ///
    /// Lookup ids start at 1, so a positive sentinel would be
    /// indistinguishable from a real code.
    pub fn validate(&self) -> Result<()> {
        if self.missing_value >= 1 {
            return Err(Error::configuration(format!(
                "missing value {} collides with lookup ids (must be <= 0)",
                self.missing_value
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
