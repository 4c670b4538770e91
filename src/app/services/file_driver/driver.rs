//! End-to-end runs: open files, build tables, stream rows
//!
//! Every file handle is owned by a local value, so handles are closed on all
//! return paths including errors. Output already written before a fatal
//! error is left in place.

use super::ascii_filter::clean_stream;
use super::stats::{CleanStats, RunStats, StreamStats};
use crate::app::adapters::line_reader::LineReader;
use crate::app::services::lookup_table::LookupTables;
use crate::app::services::row_transcoder::{RowTranscoder, Schema};
use crate::config::{MalformedRowPolicy, PrepConfig};
use crate::constants::{LINE_TERMINATOR, PROGRESS_REFRESH_LINES};
use crate::{Error, Result};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Orchestrates preprocessing runs for one configuration
#[derive(Debug, Clone)]
pub struct FileDriver {
    config: PrepConfig,
}

impl FileDriver {
    /// Create a driver, validating the configuration
    pub fn new(config: PrepConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PrepConfig {
        &self.config
    }

    /// Replace categorical codes with lookup ids and missing values with the sentinel
    pub fn map_fields(&self, source: &Path, destination: &Path) -> Result<RunStats> {
        self.run_schema(&Schema::airline(), source, destination)
    }

    /// Re-parse and re-serialize every row without lookups
    pub fn reformat_fields(&self, source: &Path, destination: &Path) -> Result<RunStats> {
        self.run_schema(&Schema::airline_reformat(), source, destination)
    }

    /// Strip everything but printable ASCII and newlines
    pub fn clean_to_ascii(&self, source: &Path, destination: &Path) -> Result<CleanStats> {
        info!("Source file path: {}", source.display());
        let input = open_source(source)?;
        info!("Destination file path: {}", destination.display());
        let output = create_destination(destination)?;

        let stats = clean_stream(BufReader::new(input), BufWriter::new(output))
            .map_err(|e| Error::io(format!("Failed to clean {}", source.display()), e))?;

        info!(
            "Kept {} of {} bytes ({} lines)",
            stats.bytes_written, stats.bytes_read, stats.lines_written
        );
        Ok(stats)
    }

    fn run_schema(&self, schema: &Schema, source: &Path, destination: &Path) -> Result<RunStats> {
        let started_at = Local::now();
        let start_time = Instant::now();
        info!("Started at {}", started_at.format("%c"));

        info!("Source file path: {}", source.display());
        let input = open_source(source)?;

        // Reference files are opened before the destination so a missing
        // table never truncates an existing output file.
        let (tables, table_stats) = LookupTables::load(&self.config, schema.required_categories())?;
        debug!("{} lookup tables ready", tables.table_count());

        info!("Destination file path: {}", destination.display());
        let output = create_destination(destination)?;

        let transcoder = RowTranscoder::new(schema, &tables, self.config.missing_value)?;

        let progress_bar = self.config.show_progress.then(create_progress_bar);
        let stream = transcode_stream(
            BufReader::new(input),
            BufWriter::new(output),
            &transcoder,
            self.config.malformed_rows,
            progress_bar.as_ref(),
        )?;
        if let Some(pb) = &progress_bar {
            pb.finish_with_message("done");
        }

        let elapsed = start_time.elapsed();
        info!(
            "Line count: {} ({} written, {} skipped)",
            stream.data_lines(),
            stream.rows_written,
            stream.rows_skipped
        );
        info!(
            "Finished at {} after {:.2}s",
            Local::now().format("%c"),
            elapsed.as_secs_f64()
        );

        Ok(RunStats {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            started_at,
            elapsed,
            tables: table_stats,
            stream,
        })
    }
}

/// Stream lines from `reader` to `writer`
///
/// Line 1 is copied byte-for-byte. Every later line must be valid UTF-8; it
/// is transcoded and written with a `\n` terminator. A row that fails to transcode either
/// ends the run with [`Error::MalformedRow`] or is skipped, per `policy`.
pub fn transcode_stream<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    transcoder: &RowTranscoder<'_>,
    policy: MalformedRowPolicy,
    progress: Option<&ProgressBar>,
) -> Result<StreamStats> {
    let mut stats = StreamStats::default();
    let mut lines = LineReader::new(reader);
    let mut output = String::new();

    while let Some(line) = lines
        .next_line()
        .map_err(|e| Error::io("Failed to read source data", e))?
    {
        stats.lines_read += 1;
        let line_number = stats.lines_read;

        if line_number == 1 {
            write_line(&mut writer, line)?;
            stats.header_copied = true;
            debug!("Header copied: {}", String::from_utf8_lossy(line));
            continue;
        }

        match transcoder.transcode_bytes_into(line, &mut output) {
            Ok(()) => {
                write_line(&mut writer, output.as_bytes())?;
                stats.rows_written += 1;
            }
            Err(e) => {
                // Lossy text is only used for reporting, never written
                let raw = String::from_utf8_lossy(line);
                match policy {
                    MalformedRowPolicy::Abort => {
                        return Err(Error::malformed_row(line_number, raw, e));
                    }
                    MalformedRowPolicy::Skip => {
                        warn!("Skipping line {}: {} (raw: '{}')", line_number, e, raw);
                        stats.rows_skipped += 1;
                    }
                }
            }
        }

        if let Some(pb) = progress {
            if line_number % PROGRESS_REFRESH_LINES == 0 {
                pb.set_position(line_number);
            }
        }
    }

    writer
        .flush()
        .map_err(|e| Error::io("Failed to flush output", e))?;
    if let Some(pb) = progress {
        pb.set_position(stats.lines_read);
    }

    Ok(stats)
}

fn write_line<W: Write>(writer: &mut W, line: &[u8]) -> Result<()> {
    writer
        .write_all(line)
        .and_then(|_| writer.write_all(&[LINE_TERMINATOR]))
        .map_err(|e| Error::io("Failed to write output", e))
}

fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| Error::file_open("input", path, e))
}

fn create_destination(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| Error::file_open("output", path, e))
}

fn create_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) =
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {pos} lines {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message("Transcoding...");
    pb
}
