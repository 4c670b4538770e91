//! Command implementations for the airline preprocessor CLI
//!
//! This module contains the command dispatch, logging setup and the final
//! summaries printed after each run.

use crate::app::services::file_driver::{CleanStats, FileDriver, RunStats};
use crate::cli::args::{Args, CleanArgs, Commands, LoggingArgs, MapArgs, TranscodeArgs};
use crate::config::PrepConfig;
use crate::{Error, Result};
use anyhow::Context;
use colored::*;
use indicatif::HumanDuration;
use tracing::debug;

/// Main command runner
///
/// 1. Set up logging
/// 2. Validate the file arguments
/// 3. Run the selected subcommand
/// 4. Print a summary unless quiet
pub fn run(args: Args) -> anyhow::Result<()> {
    let command = args
        .command
        .ok_or_else(|| Error::usage("no command given (expected clean, reformat or map)"))?;

    setup_logging(command.logging())?;
    debug!("Command line arguments: {:?}", command);

    command.files().validate()?;

    match &command {
        Commands::Clean(clean) => run_clean(clean),
        Commands::Reformat(reformat) => run_reformat(reformat),
        Commands::Map(map) => run_map(map),
    }
}

fn run_clean(args: &CleanArgs) -> anyhow::Result<()> {
    let driver = FileDriver::new(PrepConfig::default())?;
    let stats = driver
        .clean_to_ascii(&args.files.source, &args.files.destination)
        .context("clean failed")?;

    if !args.logging.quiet {
        print_clean_summary(&stats);
    }
    Ok(())
}

fn run_reformat(args: &TranscodeArgs) -> anyhow::Result<()> {
    let driver = FileDriver::new(args.to_config())?;
    let stats = driver
        .reformat_fields(&args.files.source, &args.files.destination)
        .context("reformat failed")?;

    if !args.logging.quiet {
        print_run_summary(&stats);
    }
    Ok(())
}

fn run_map(args: &MapArgs) -> anyhow::Result<()> {
    let driver = FileDriver::new(args.to_config())?;
    let stats = driver
        .map_fields(&args.transcode.files.source, &args.transcode.files.destination)
        .context("map failed")?;

    if !args.transcode.logging.quiet {
        print_run_summary(&stats);
    }
    Ok(())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &LoggingArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("airline_prep={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

fn print_run_summary(stats: &RunStats) {
    println!("\n{}", "Processing Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Source:".bright_cyan(),
        stats.source.display()
    );
    println!(
        "  {} {}",
        "Destination:".bright_cyan(),
        stats.destination.display()
    );
    for table in &stats.tables {
        println!(
            "  {} {}",
            format!("{} codes:", table.category).bright_cyan(),
            table.distinct_codes.to_string().bright_white()
        );
    }
    println!(
        "  {} {}",
        "Line count:".bright_cyan(),
        stats.stream.data_lines().to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Rows written:".bright_cyan(),
        stats.stream.rows_written.to_string().bright_white()
    );
    if stats.stream.rows_skipped > 0 {
        println!(
            "  {} {}",
            "Rows skipped:".bright_red(),
            stats.stream.rows_skipped.to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {}",
        "Started:".bright_cyan(),
        stats.started_at.format("%c")
    );
    println!(
        "  {} {}",
        "Duration:".bright_cyan(),
        HumanDuration(stats.elapsed).to_string().bright_white()
    );
}

fn print_clean_summary(stats: &CleanStats) {
    println!("\n{}", "Cleaning Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Bytes read:".bright_cyan(),
        stats.bytes_read.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Bytes written:".bright_cyan(),
        stats.bytes_written.to_string().bright_white()
    );
    if stats.bytes_removed() > 0 {
        println!(
            "  {} {}",
            "Bytes removed:".bright_yellow(),
            stats.bytes_removed().to_string().bright_yellow().bold()
        );
    }
    println!(
        "  {} {}",
        "Lines written:".bright_cyan(),
        stats.lines_written.to_string().bright_white()
    );
}
