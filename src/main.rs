use clap::Parser;
use hurdat_processor::cli::{Args, commands, setup_logging};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    setup_logging(&args);

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("HURDAT Processor - Hurricane Track and Sea Surface Temperature Loader");
    println!("=====================================================================");
    println!();
    println!("Convert NHC HURDAT2 best-track text files and ERSST v5 ASCII grids");
    println!("into tables for analysis, cached locally as Parquet.");
    println!();
    println!("USAGE:");
    println!("    hurdat-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    hurdat      Download HURDAT2 and build the merged track table");
    println!("    parse       Parse a local HURDAT2 file");
    println!("    ersst       Download ERSST grids for a range of years");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    hurdat-processor hurdat -o tracks.csv");
    println!("    hurdat-processor parse hurdat2.txt -o tracks.parquet");
    println!("    hurdat-processor ersst --start 1990 --end 2016 --bbox 70,250,0,358");
    println!();
    println!("For detailed help on any command, use:");
    println!("    hurdat-processor <COMMAND> --help");
}
