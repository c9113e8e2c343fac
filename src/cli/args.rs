//! Command-line argument definitions for tidekit
//!
//! This module defines the CLI interface using the clap derive API. Every
//! subcommand shares the data source flags in [`SourceArgs`].

use crate::config::TideConfig;
use crate::{Result, TideError};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the tide data browser
///
/// Reads yearly fixed-width tide files, one per station, and shows the
/// hourly water levels and high/low tides for a chosen day.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tidekit",
    version,
    about = "Browse hourly tide heights and high/low tides from yearly station files",
    long_about = "Reads yearly fixed-width tide observation files named {year}_{code}.txt, \
                  resolves station codes to names through a mapping document, and prints the \
                  24 hourly heights and the high/low tide times for a chosen station and day."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List the stations available for the configured year
    Stations(StationsArgs),
    /// Show one day of tide data for a station
    Day(DayArgs),
    /// Diagnose the data directory and station mapping
    Check(CheckArgs),
}

/// Data source and logging flags shared by all subcommands
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SourceArgs {
    /// Directory holding the yearly station files
    #[arg(
        short = 'D',
        long = "data-dir",
        value_name = "PATH",
        help = "Directory holding the {year}_{code}.txt station files"
    )]
    pub data_dir: Option<PathBuf>,

    /// Station code mapping document (Markdown with an embedded JSON object)
    #[arg(
        short = 'm',
        long = "mapping",
        value_name = "FILE",
        help = "Station code mapping document"
    )]
    pub mapping: Option<PathBuf>,

    /// Year of the station files to read
    #[arg(short = 'y', long = "year", value_name = "YEAR", help = "Data year")]
    pub year: Option<i32>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/tidekit/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the stations command
#[derive(Debug, Clone, Parser)]
pub struct StationsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format for the station list
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the station list"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the day command
#[derive(Debug, Clone, Parser)]
pub struct DayArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Day to show, within the configured year
    #[arg(
        short = 'd',
        long = "date",
        value_name = "YYYY-MM-DD",
        help = "Day to show (YYYY-MM-DD)"
    )]
    pub date: NaiveDate,

    /// Station display name or 2-character code
    ///
    /// Defaults to the configured default station, or the first station
    /// when that one is not available.
    #[arg(
        short = 's',
        long = "station",
        value_name = "NAME|CODE",
        help = "Station display name or code"
    )]
    pub station: Option<String>,

    /// Output format for the day report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the day report"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl SourceArgs {
    /// Determine the appropriate log level based on verbosity flags
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

    /// Validate the source flags for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(TideError::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply_to(&self, mut config: TideConfig) -> TideConfig {
        if let Some(data_dir) = &self.data_dir {
            config = config.with_data_dir(data_dir);
        }
        if let Some(mapping) = &self.mapping {
            config = config.with_mapping_path(mapping);
        }
        if let Some(year) = self.year {
            config = config.with_year(year);
        }
        config
    }
}

impl Commands {
    /// Shared source flags of the selected subcommand
    pub fn source(&self) -> &SourceArgs {
        match self {
            Commands::Stations(args) => &args.source,
            Commands::Day(args) => &args.source,
            Commands::Check(args) => &args.source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["tidekit"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_day_command() {
        let args = Args::try_parse_from([
            "tidekit",
            "day",
            "--date",
            "2026-01-15",
            "--station",
            "TK",
            "--data-dir",
            "/data",
            "-vv",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Day(day)) => {
                assert_eq!(day.date, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
                assert_eq!(day.station.as_deref(), Some("TK"));
                assert_eq!(day.source.data_dir, Some(PathBuf::from("/data")));
                assert_eq!(day.source.get_log_level(), "debug");
                assert_eq!(day.output_format, OutputFormat::Human);
            }
            other => panic!("Expected day command, got {:?}", other),
        }
    }

    #[test]
    fn test_day_requires_valid_date() {
        assert!(Args::try_parse_from(["tidekit", "day"]).is_err());
        assert!(Args::try_parse_from(["tidekit", "day", "--date", "2026-02-30"]).is_err());
    }

    #[test]
    fn test_parse_stations_json() {
        let args =
            Args::try_parse_from(["tidekit", "stations", "--format", "json", "--year", "2027"])
                .unwrap();

        let command = args.command.unwrap();
        assert_eq!(command.source().year, Some(2027));
        match command {
            Commands::Stations(stations) => assert_eq!(stations.output_format, OutputFormat::Json),
            other => panic!("Expected stations command, got {:?}", other),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["tidekit", "check", "-q", "-v"]).is_err());

        let args = Args::try_parse_from(["tidekit", "check", "-q"]).unwrap();
        assert_eq!(args.command.unwrap().source().get_log_level(), "error");
    }

    #[test]
    fn test_apply_overrides() {
        let source = SourceArgs {
            data_dir: Some(PathBuf::from("/cli/data")),
            year: Some(2030),
            ..SourceArgs::default()
        };

        let config = source.apply_to(TideConfig::default());
        assert_eq!(config.data_dir, PathBuf::from("/cli/data"));
        assert_eq!(config.year, 2030);
        assert_eq!(config.mapping_path, PathBuf::from("station_code_mapping.md"));
    }

    #[test]
    fn test_validate_missing_config_file() {
        let source = SourceArgs {
            config_file: Some(PathBuf::from("/definitely/not/here.toml")),
            ..SourceArgs::default()
        };
        assert!(source.validate().is_err());
    }
}
