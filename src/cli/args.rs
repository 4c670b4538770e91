//! Command-line argument definitions for the airline preprocessor
//!
//! This module defines the CLI interface using the clap derive API. Each
//! subcommand takes a source and a destination path, like the standalone
//! utilities it replaces.

use crate::config::{MalformedRowPolicy, PrepConfig};
use crate::constants::{DEFAULT_MISSING_VALUE, DEFAULT_REFERENCE_DIR};
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the airline data preprocessor
///
/// Prepares the airline on-time-performance CSV files for tools that need
/// every column to be an integer.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "airline-prep",
    version,
    about = "Preprocess airline on-time-performance CSV files into integer-coded CSV",
    long_about = "Preprocesses the airline on-time-performance dataset before it is loaded into a \
                  statistical analysis tool. Strips non-printable bytes, re-serializes the 29 fixed \
                  columns, and replaces carrier, tail number, airport and cancellation codes with \
                  integer ids taken from the reference CSV files. Missing values become a sentinel."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Remove every byte that is not printable ASCII or a newline
    Clean(CleanArgs),
    /// Re-parse and re-serialize rows, replacing missing integers with the sentinel
    Reformat(TranscodeArgs),
    /// Replace categorical codes with integer ids from the reference files
    Map(MapArgs),
}

/// Source and destination paths shared by all subcommands
#[derive(Debug, Clone, ClapArgs)]
pub struct FileArgs {
    /// Source CSV file
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination file, created or truncated
    #[arg(value_name = "DESTINATION")]
    pub destination: PathBuf,
}

impl FileArgs {
    /// Refuse to write over the file being read
    pub fn validate(&self) -> Result<()> {
        if self.source == self.destination {
            return Err(Error::usage(format!(
                "source and destination are the same file: {}",
                self.source.display()
            )));
        }
        Ok(())
    }
}

/// Logging flags shared by all subcommands
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct LoggingArgs {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl LoggingArgs {
    /// Get the log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Arguments for the clean command
#[derive(Debug, Clone, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub files: FileArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Arguments for commands that transcode rows
#[derive(Debug, Clone, Parser)]
pub struct TranscodeArgs {
    #[command(flatten)]
    pub files: FileArgs,

    /// Integer written for "NA", empty and unknown values
    #[arg(
        long = "missing-value",
        value_name = "INT",
        default_value_t = DEFAULT_MISSING_VALUE,
        allow_negative_numbers = true,
        help = "Integer written for missing values (must be <= 0)"
    )]
    pub missing_value: i32,

    /// Skip rows that fail to parse instead of stopping
    ///
    /// Skipped rows are logged with their line number and left out of the
    /// output. By default the first bad row ends the run.
    #[arg(long = "skip-malformed", help = "Skip and log rows that fail to parse")]
    pub skip_malformed: bool,

    /// Show a progress spinner while streaming
    #[arg(long = "progress", help = "Show a progress spinner")]
    pub progress: bool,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl TranscodeArgs {
    /// Build the run configuration from the flags
    pub fn to_config(&self) -> PrepConfig {
        let policy = if self.skip_malformed {
            MalformedRowPolicy::Skip
        } else {
            MalformedRowPolicy::Abort
        };

        let config = PrepConfig::default()
            .with_missing_value(self.missing_value)
            .with_malformed_rows(policy);

        if self.progress && !self.logging.quiet {
            config.with_progress()
        } else {
            config
        }
    }
}

/// Arguments for the map command
#[derive(Debug, Clone, Parser)]
pub struct MapArgs {
    #[command(flatten)]
    pub transcode: TranscodeArgs,

    /// Directory containing carriers.csv, plane-data.csv and airports.csv
    #[arg(
        short = 'r',
        long = "reference-dir",
        value_name = "DIR",
        default_value = DEFAULT_REFERENCE_DIR,
        help = "Directory containing the reference CSV files"
    )]
    pub reference_dir: PathBuf,
}

impl MapArgs {
    pub fn to_config(&self) -> PrepConfig {
        self.transcode
            .to_config()
            .with_reference_dir(self.reference_dir.clone())
    }
}

impl Commands {
    /// Logging flags of the selected subcommand
    pub fn logging(&self) -> &LoggingArgs {
        match self {
            Commands::Clean(args) => &args.logging,
            Commands::Reformat(args) => &args.logging,
            Commands::Map(args) => &args.transcode.logging,
        }
    }

    /// Source and destination of the selected subcommand
    pub fn files(&self) -> &FileArgs {
        match self {
            Commands::Clean(args) => &args.files,
            Commands::Reformat(args) => &args.files,
            Commands::Map(args) => &args.transcode.files,
        }
    }
}
