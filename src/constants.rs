//! Application constants for tidekit
//!
//! This module contains the fixed-width record layout, sentinel values,
//! file naming rules and configuration defaults used throughout the crate.

// =============================================================================
// Fixed-Width Record Layout
// =============================================================================

/// Character offsets and widths of every field in a daily tide record.
///
/// Ranges are half-open `[start, end)` and counted in characters from the
/// start of the line.
pub mod layout {
    /// Number of hourly height fields per line
    pub const HOURLY_COUNT: usize = 24;

    /// Width of a single hourly height field
    pub const HOURLY_WIDTH: usize = 3;

    /// Start of the hourly heights block
    pub const HOURLY_START: usize = 0;

    /// End of the hourly heights block
    pub const HOURLY_END: usize = HOURLY_START + HOURLY_COUNT * HOURLY_WIDTH; // 72

    /// Start of the `yymmdd` date field
    pub const DATE_START: usize = HOURLY_END;

    /// Width of the date field
    pub const DATE_WIDTH: usize = 6;

    /// End of the date field
    pub const DATE_END: usize = DATE_START + DATE_WIDTH; // 78

    /// Start of the station code field
    pub const STATION_START: usize = DATE_END;

    /// Width of the station code field
    pub const STATION_WIDTH: usize = 2;

    /// End of the station code field
    pub const STATION_END: usize = STATION_START + STATION_WIDTH; // 80

    /// Width of the time part of an extreme slot (`HHMM`)
    pub const EXTREME_TIME_WIDTH: usize = 4;

    /// Width of the height part of an extreme slot
    pub const EXTREME_HEIGHT_WIDTH: usize = 3;

    /// Width of one extreme slot
    pub const EXTREME_SLOT_WIDTH: usize = EXTREME_TIME_WIDTH + EXTREME_HEIGHT_WIDTH; // 7

    /// Number of slots in each extreme block
    pub const EXTREME_SLOTS: usize = 4;

    /// Width of one extreme block
    pub const EXTREME_BLOCK_WIDTH: usize = EXTREME_SLOT_WIDTH * EXTREME_SLOTS; // 28

    /// Start of the high tide block
    pub const HIGH_TIDE_START: usize = STATION_END;

    /// End of the high tide block
    pub const HIGH_TIDE_END: usize = HIGH_TIDE_START + EXTREME_BLOCK_WIDTH; // 108

    /// Start of the low tide block
    pub const LOW_TIDE_START: usize = HIGH_TIDE_END;

    /// End of the low tide block
    pub const LOW_TIDE_END: usize = LOW_TIDE_START + EXTREME_BLOCK_WIDTH; // 136

    /// Minimum line width that still carries a date and station code
    pub const MIN_HEADER_WIDTH: usize = STATION_END;

    /// Width of a complete record
    pub const RECORD_WIDTH: usize = LOW_TIDE_END;
}

// =============================================================================
// Sentinel Values
// =============================================================================

/// Reserved literals meaning "no entry" inside extreme slots
pub mod sentinel {
    /// Time field value for an unused slot
    pub const MISSING_TIME: &str = "9999";

    /// Height field value for an unused slot
    pub const MISSING_HEIGHT: &str = "999";

    /// A fully unused slot as written by the encoder
    pub const EMPTY_SLOT: &str = "9999999";
}

// =============================================================================
// Calendar Rules
// =============================================================================

/// Century base for the 2-digit year field
pub const YEAR_BASE: i32 = 2000;

/// Last year expressible with a 2-digit offset from [`YEAR_BASE`]
pub const YEAR_MAX: i32 = YEAR_BASE + 99;

// =============================================================================
// Station Files
// =============================================================================

/// Extension of yearly station files
pub const STATION_FILE_SUFFIX: &str = ".txt";

/// Separator between year and station code in file names
pub const STATION_FILE_SEPARATOR: char = '_';

/// Label used when a station code has no mapping entry
pub fn unmapped_label(code: &str) -> String {
    format!("unmapped ({})", code)
}

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Default directory holding the yearly station files
pub const DEFAULT_DATA_DIR: &str = "jmadata";

/// Default station mapping document
pub const DEFAULT_MAPPING_FILE: &str = "station_code_mapping.md";

/// Default data year
pub const DEFAULT_YEAR: i32 = 2026;

/// Station preselected by the front end when present
pub const DEFAULT_STATION_NAME: &str = "東京";

/// Application directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "tidekit";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overrides
pub mod env {
    pub const DATA_DIR: &str = "TIDEKIT_DATA_DIR";
    pub const MAPPING: &str = "TIDEKIT_MAPPING";
    pub const YEAR: &str = "TIDEKIT_YEAR";
}

/// Number of file names shown by the diagnostics command
pub const DIAGNOSTIC_SAMPLE_SIZE: usize = 5;
