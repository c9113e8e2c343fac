//! Shared components for CLI commands
//!
//! Logging setup, configuration loading and station selection used by more
//! than one subcommand.

use crate::cli::args::SourceArgs;
use crate::config::TideConfig;
use crate::models::StationEntry;
use crate::stations::StationMapping;
use crate::{Result, TideError};
use tracing::{debug, warn};

/// Set up structured logging on stderr
pub fn setup_logging(args: &SourceArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tidekit={}", log_level)));

    if args.quiet {
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
            .map_err(|e| TideError::configuration(format!("Failed to set up logging: {}", e)))?;
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
            .map_err(|e| TideError::configuration(format!("Failed to set up logging: {}", e)))?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load layered configuration and apply command-line overrides
pub fn load_configuration(args: &SourceArgs) -> Result<TideConfig> {
    args.validate()?;

    let config = args.apply_to(TideConfig::load_layered(args.config_file.as_deref())?);
    config.validate()?;

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Load the station mapping, falling back to an empty one when the document
/// is absent so every station shows its unmapped label
pub fn load_station_mapping(config: &TideConfig) -> Result<StationMapping> {
    if !config.mapping_path.exists() {
        warn!(
            "Station mapping {} not found, station names will be unmapped",
            config.mapping_path.display()
        );
        return Ok(StationMapping::new());
    }

    config.load_mapping()
}

/// Pick a station by display name or code.
///
/// With no request, the configured default station is used when present,
/// otherwise the first entry.
pub fn select_station<'a>(
    stations: &'a [StationEntry],
    requested: Option<&str>,
    default_name: &str,
) -> Result<&'a StationEntry> {
    if let Some(wanted) = requested {
        return stations
            .iter()
            .find(|s| s.display_name == wanted)
            .or_else(|| stations.iter().find(|s| s.code == wanted))
            .ok_or_else(|| {
                TideError::configuration(format!("No station named or coded '{}'", wanted))
            });
    }

    stations
        .iter()
        .find(|s| s.display_name == default_name)
        .or_else(|| stations.first())
        .ok_or_else(|| TideError::configuration("No stations available"))
}
