//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `TIDEKIT_*` environment variables. Command-line flags are applied last by
//! the CLI through the `with_*` builders.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DATA_DIR, DEFAULT_MAPPING_FILE,
    DEFAULT_STATION_NAME, DEFAULT_YEAR, YEAR_BASE, YEAR_MAX, env,
};
use crate::error::{Result, TideError};
use crate::stations::{StationIndex, StationMapping};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime configuration for station discovery and day lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TideConfig {
    /// Directory holding the `{year}_{code}.txt` station files
    pub data_dir: PathBuf,

    /// Markdown document embedding the code → name mapping
    pub mapping_path: PathBuf,

    /// Year whose station files are served
    pub year: i32,

    /// Station selected when none is requested
    pub default_station: String,
}

impl Default for TideConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            mapping_path: PathBuf::from(DEFAULT_MAPPING_FILE),
            year: DEFAULT_YEAR,
            default_station: DEFAULT_STATION_NAME.to_string(),
        }
    }
}

impl TideConfig {
    /// Set the data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set the mapping document path
    pub fn with_mapping_path(mut self, mapping_path: impl Into<PathBuf>) -> Self {
        self.mapping_path = mapping_path.into();
        self
    }

    /// Set the data year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Set the default station name
    pub fn with_default_station(mut self, name: impl Into<String>) -> Self {
        self.default_station = name.into();
        self
    }

    /// Standard config file location (`<config dir>/tidekit/config.toml`)
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load a TOML config file; missing keys keep their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            TideError::configuration(format!(
                "Cannot read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&contents).map_err(|e| {
            TideError::configuration(format!(
                "Invalid config file {}: {}",
                path.display(),
                e
            ))
        })?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Defaults, then the config file, then environment overrides.
    ///
    /// An explicit path must exist. Without one the standard location is
    /// used only when a file is present there.
    pub fn load_layered(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.is_file() => Self::load_from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env()
    }

    /// Apply `TIDEKIT_*` environment variables
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source
    pub fn apply_env_from<F>(mut self, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(data_dir) = var(env::DATA_DIR) {
            debug!("{} overrides data directory", env::DATA_DIR);
            self.data_dir = PathBuf::from(data_dir);
        }

        if let Some(mapping) = var(env::MAPPING) {
            debug!("{} overrides mapping path", env::MAPPING);
            self.mapping_path = PathBuf::from(mapping);
        }

        if let Some(year) = var(env::YEAR) {
            self.year = year.trim().parse().map_err(|_| {
                TideError::configuration(format!("{} must be a year, got '{}'", env::YEAR, year))
            })?;
        }

        Ok(self)
    }

    /// Check that the configuration can address station files
    pub fn validate(&self) -> Result<()> {
        if !(YEAR_BASE..=YEAR_MAX).contains(&self.year) {
            return Err(TideError::configuration(format!(
                "Year {} is outside the supported range {}-{}",
                self.year, YEAR_BASE, YEAR_MAX
            )));
        }

        if self.data_dir.as_os_str().is_empty() {
            return Err(TideError::configuration("Data directory cannot be empty"));
        }

        Ok(())
    }

    /// Station index over the configured directory and year
    pub fn station_index(&self) -> StationIndex {
        StationIndex::new(&self.data_dir, self.year)
    }

    /// Load the station mapping document
    pub fn load_mapping(&self) -> Result<StationMapping> {
        StationMapping::load_from_file(&self.mapping_path)
    }
}
