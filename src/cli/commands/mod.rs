//! Command implementations for the tidekit CLI
//!
//! Each subcommand is implemented in its own module:
//! - `stations`: list discovered stations
//! - `day`: show one day of tide data
//! - `check`: diagnose the data directory

pub mod check;
pub mod day;
pub mod shared;
pub mod stations;

use crate::cli::args::Commands;

/// Dispatch to the subcommand handler
pub fn run(command: Commands) -> anyhow::Result<()> {
    shared::setup_logging(command.source())?;

    match command {
        Commands::Stations(args) => stations::run_stations(args),
        Commands::Day(args) => day::run_day(args),
        Commands::Check(args) => check::run_check(args),
    }
}
