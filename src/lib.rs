//! Tidekit Library
//!
//! A Rust library for reading yearly fixed-width tide observation files, one
//! file per station and year, one line per day.
//!
//! This library provides tools for:
//! - Decoding a 136-character daily line into hourly heights and high/low
//!   tide extremes, with sentinel slots dropped
//! - Discovering `{year}_{code}.txt` station files and resolving their codes
//!   to display names through a station mapping
//! - Finding and decoding the line for a given date in a station file
//! - Encoding records back into the canonical line layout

pub mod config;
pub mod constants;
pub mod error;
pub mod lookup;
pub mod models;
pub mod record;
pub mod stations;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::TideConfig;
pub use error::{Result, TideError};
pub use lookup::{DayLookup, find_day};
pub use models::{StationEntry, TideDayRecord, TideExtreme, TideKind};
pub use record::{decode_line, encode_record};
pub use stations::{StationIndex, StationLookup, StationMapping, discover};
