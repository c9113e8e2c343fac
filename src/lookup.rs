//! Day lookup within a yearly station file
//!
//! A station file holds one line per day. Lookup scans the file line by line,
//! compares the `yymmdd` date field of each line with the requested date and
//! decodes the first line that matches.

use chrono::{Datelike, NaiveDate};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::constants::layout::{DATE_END, DATE_START, MIN_HEADER_WIDTH};
use crate::constants::{YEAR_BASE, YEAR_MAX};
use crate::error::{Result, TideError};
use crate::models::{StationEntry, TideDayRecord};
use crate::record::{date_key, decode_line};
use crate::record::field_parsers::{char_field, char_width};

/// Search key (`yymmdd`) for a date, or `None` when the two-digit year field
/// cannot represent it
pub fn search_key(date: NaiveDate) -> Option<String> {
    if !(YEAR_BASE..=YEAR_MAX).contains(&date.year()) {
        return None;
    }
    Some(format!(
        "{:02}{:02}{:02}",
        date.year() - YEAR_BASE,
        date.month(),
        date.day()
    ))
}

/// Find and decode the record for `date` in the station file at `path`.
///
/// Lines shorter than the 80-character header are skipped, as are lines
/// whose date field differs. Only the first matching line is decoded.
///
/// Returns `Ok(None)` when no line matches, including dates outside the
/// representable year range (the file is not opened in that case).
///
/// # Errors
/// * Returns `TideError::FileUnavailable` if the file cannot be opened
/// * Returns `TideError::Io` if reading fails part way through
/// * Returns `TideError::MalformedRecord` if the matching line cannot be decoded
pub fn find_day(path: &Path, date: NaiveDate) -> Result<Option<TideDayRecord>> {
    let Some(key) = search_key(date) else {
        debug!("Date {} is outside the two-digit year range", date);
        return Ok(None);
    };

    let file = File::open(path).map_err(|e| TideError::file_unavailable(path, e))?;
    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();
    let mut line_number = 0;

    loop {
        buffer.clear();
        let read = reader.read_until(b'\n', &mut buffer).map_err(|e| {
            TideError::io(
                format!("Failed to read line {} of {}", line_number + 1, path.display()),
                e,
            )
        })?;
        if read == 0 {
            break;
        }
        line_number += 1;

        // Undecodable bytes become U+FFFD so short junk lines are still skipped
        let text = String::from_utf8_lossy(&buffer);
        let line = text.trim_end_matches(['\n', '\r']);

        if char_width(line) < MIN_HEADER_WIDTH {
            trace!("Skipping short line {} in {}", line_number, path.display());
            continue;
        }

        let Some(raw_date) = char_field(line, DATE_START, DATE_END) else {
            continue;
        };

        if date_key(raw_date) == key {
            debug!("Found {} at line {} of {}", date, line_number, path.display());
            return decode_line(line).map(Some);
        }
    }

    debug!("No record for {} in {}", date, path.display());
    Ok(None)
}

/// Day lookup bound to one station file
#[derive(Debug, Clone)]
pub struct DayLookup {
    path: PathBuf,
}

impl DayLookup {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Lookup over a discovered station's file
    pub fn for_station(entry: &StationEntry) -> Self {
        Self::new(entry.source_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Find the record for `date`; see [`find_day`]
    pub fn find(&self, date: NaiveDate) -> Result<Option<TideDayRecord>> {
        find_day(&self.path, date)
    }
}
