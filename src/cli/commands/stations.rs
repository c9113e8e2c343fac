//! Stations command: list the station files discovered for a year

use anyhow::Context;
use colored::*;
use tracing::info;

use super::shared::{load_configuration, load_station_mapping};
use crate::cli::args::{OutputFormat, StationsArgs};
use crate::config::TideConfig;
use crate::models::StationEntry;

/// Run the stations command
pub fn run_stations(args: StationsArgs) -> anyhow::Result<()> {
    let config = load_configuration(&args.source)?;
    let mapping = load_station_mapping(&config)?;

    let stations = config
        .station_index()
        .discover(&mapping)
        .with_context(|| format!("Failed to list stations in {}", config.data_dir.display()))?;

    info!("Listing {} stations", stations.len());

    let output = match args.output_format {
        OutputFormat::Human => render_human(&config, &stations),
        OutputFormat::Json => serde_json::to_string_pretty(&stations)
            .context("Failed to serialize station list")?,
    };
    println!("{}", output);

    Ok(())
}

fn render_human(config: &TideConfig, stations: &[StationEntry]) -> String {
    let mut output = format!(
        "{}\n{}\n",
        format!("Stations for {}", config.year).bright_green().bold(),
        format!("Data directory: {}", config.data_dir.display()).bright_black()
    );

    if stations.is_empty() {
        output.push_str(&format!(
            "{}\n",
            format!("No {}_XX.txt files found", config.year).yellow()
        ));
        return output;
    }

    for (i, station) in stations.iter().enumerate() {
        output.push_str(&format!(
            "  {}. {} {}\n",
            (i + 1).to_string().bright_yellow().bold(),
            station.display_name.bright_cyan(),
            format!("({})", station.code).bright_black()
        ));
    }

    output
}
