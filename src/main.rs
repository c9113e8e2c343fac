use clap::Parser;
use std::process;
use tidekit::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("tidekit - Yearly Tide Table Browser");
    println!("===================================");
    println!();
    println!("Read yearly fixed-width tide files ({{year}}_{{code}}.txt) and show the");
    println!("hourly water levels and high/low tides for a station and day.");
    println!();
    println!("USAGE:");
    println!("    tidekit <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    stations    List the stations available for the configured year");
    println!("    day         Show one day of tide data (--date YYYY-MM-DD)");
    println!("    check       Diagnose the data directory and station mapping");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    tidekit stations --data-dir ./jmadata");
    println!("    tidekit day --date 2026-01-15 --station 東京");
    println!("    tidekit check -v");
    println!();
    println!("For more information on a specific command, use:");
    println!("    tidekit <COMMAND> --help");
}
