use airline_prep::cli::{args::Args, commands};
use clap::Parser;
use clap::error::ErrorKind;
use std::process;

fn main() {
    // Usage errors exit with 1; help and version exit with 0
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let code = match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = error.print();
            process::exit(code);
        }
    };

    // If no subcommand was provided, show help and exit with a usage error
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(1);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Airline Prep - On-time-performance CSV preprocessor");
    println!("===================================================");
    println!();
    println!("Prepare the airline on-time-performance CSV files for analysis tools");
    println!("that require every column to be an integer.");
    println!();
    println!("USAGE:");
    println!("    airline-prep <COMMAND> <SOURCE> <DESTINATION> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    clean       Remove bytes that are not printable ASCII or newlines");
    println!("    reformat    Re-serialize rows, writing missing integers as the sentinel");
    println!("    map         Replace carrier, tail number, airport and cancellation codes with ids");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    airline-prep clean 2008-raw.csv 2008.csv");
    println!("    airline-prep map 2008.csv 2008-mapped.csv --reference-dir reference/");
    println!();
    println!("For detailed help on any command, use:");
    println!("    airline-prep <COMMAND> --help");
}
