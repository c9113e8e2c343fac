//! Core data structures for decoded tide records and discovered stations.
//!
//! Defines the per-day record produced by the decoder, the high/low tide
//! extremes it carries, and the station entries produced by discovery.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::constants::layout::HOURLY_COUNT;

/// Which block of the record an extreme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TideKind {
    High,
    Low,
}

impl TideKind {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            TideKind::High => "high",
            TideKind::Low => "low",
        }
    }
}

impl fmt::Display for TideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A high or low water event with both time and height present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TideExtreme {
    /// Local wall-clock time of the event, serialized as `HH:MM`
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    /// Height in centimeters
    pub height_cm: i32,
}

impl TideExtreme {
    pub fn new(time: NaiveTime, height_cm: i32) -> Self {
        Self { time, height_cm }
    }

    /// Time formatted as `HH:MM`
    pub fn time_label(&self) -> String {
        format!("{:02}:{:02}", self.time.hour(), self.time.minute())
    }
}

impl fmt::Display for TideExtreme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}cm", self.time_label(), self.height_cm)
    }
}

/// One decoded extreme slot before the both-present rule is applied.
///
/// `None` marks a sentinel (`9999` time or `999` height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtremeSlot {
    pub time: Option<NaiveTime>,
    pub height_cm: Option<i32>,
}

impl ExtremeSlot {
    /// Convert to an extreme when both parts are present
    pub fn into_extreme(self) -> Option<TideExtreme> {
        match (self.time, self.height_cm) {
            (Some(time), Some(height_cm)) => Some(TideExtreme { time, height_cm }),
            _ => None,
        }
    }
}

/// A full day of tide data for one station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TideDayRecord {
    pub date: NaiveDate,
    pub station_code: String,
    /// Water level in centimeters, index = hour of day
    pub hourly_heights: [i32; HOURLY_COUNT],
    pub high_tides: Vec<TideExtreme>,
    pub low_tides: Vec<TideExtreme>,
}

impl TideDayRecord {
    /// `(hour, height_cm)` pairs in hour order
    pub fn hourly_series(&self) -> impl Iterator<Item = (u32, i32)> + '_ {
        self.hourly_heights
            .iter()
            .enumerate()
            .map(|(hour, &height)| (hour as u32, height))
    }

    /// All extremes, high tides first then low tides, each in slot order
    pub fn all_extremes(&self) -> impl Iterator<Item = (TideKind, &TideExtreme)> + '_ {
        self.high_tides
            .iter()
            .map(|e| (TideKind::High, e))
            .chain(self.low_tides.iter().map(|e| (TideKind::Low, e)))
    }

    pub fn has_extremes(&self) -> bool {
        !self.high_tides.is_empty() || !self.low_tides.is_empty()
    }

    /// Highest and lowest hourly sample
    pub fn hourly_range(&self) -> (i32, i32) {
        self.hourly_heights
            .iter()
            .fold((i32::MAX, i32::MIN), |(min, max), &h| (min.min(h), max.max(h)))
    }
}

/// A station file found by discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationEntry {
    /// Resolved name, or the unmapped fallback label
    pub display_name: String,
    /// Two-character station code taken from the file name
    pub code: String,
    /// Path of the station's yearly data file
    pub source_path: PathBuf,
}

mod hhmm {
    use chrono::{NaiveTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:02}:{:02}", time.hour(), time.minute()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M").map_err(D::Error::custom)
    }
}
