//! Field parsing utilities for fixed-width tide records
//!
//! This module provides helpers for slicing character ranges out of a line
//! and parsing the numeric fields found there, including the `9999`/`999`
//! sentinels used by extreme slots.

use chrono::{NaiveDate, NaiveTime};

use crate::constants::{YEAR_BASE, sentinel};
use crate::error::{Result, TideError};

/// Slice the half-open character range `[start, end)` out of `line`.
///
/// Returns `None` when the line holds fewer than `end` characters.
pub fn char_field(line: &str, start: usize, end: usize) -> Option<&str> {
    debug_assert!(start <= end);
    let mut boundaries = line
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()));

    let start_byte = boundaries.nth(start)?;
    if start == end {
        return Some(&line[start_byte..start_byte]);
    }
    let end_byte = boundaries.nth(end - start - 1)?;
    Some(&line[start_byte..end_byte])
}

/// Width of a line in characters
pub fn char_width(line: &str) -> usize {
    line.chars().count()
}

/// Replace blanks with `0`, rejecting any other non-digit character
pub fn digits_blank_as_zero(raw: &str, field: &'static str) -> Result<String> {
    raw.chars()
        .map(|c| match c {
            ' ' => Ok('0'),
            c if c.is_ascii_digit() => Ok(c),
            other => Err(TideError::malformed(
                field,
                format!("unexpected character {:?} in '{}'", other, raw),
            )),
        })
        .collect()
}

/// Build the comparison key for a raw date field.
///
/// Blanks read as `0`; other characters pass through so they simply fail to
/// match a numeric search key.
pub fn date_key(raw: &str) -> String {
    raw.replace(' ', "0")
}

/// Parse a `yymmdd` date field into a calendar date (`year = 2000 + yy`)
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let digits = digits_blank_as_zero(raw, "date")?;
    if digits.len() != 6 {
        return Err(TideError::malformed(
            "date",
            format!("expected 6 characters, found '{}'", raw),
        ));
    }

    // All six characters are ASCII digits, so these parses cannot fail
    let yy: u32 = digits[0..2].parse().unwrap_or_default();
    let mm: u32 = digits[2..4].parse().unwrap_or_default();
    let dd: u32 = digits[4..6].parse().unwrap_or_default();

    NaiveDate::from_ymd_opt(YEAR_BASE + yy as i32, mm, dd)
        .ok_or(TideError::InvalidDate { yy, mm, dd })
}

/// Parse a 4-character `HHMM` time field; `9999` means no entry
pub fn parse_time(raw: &str, field: &'static str) -> Result<Option<NaiveTime>> {
    let digits = digits_blank_as_zero(raw, field)?;
    if digits == sentinel::MISSING_TIME {
        return Ok(None);
    }
    if digits.len() != 4 {
        return Err(TideError::malformed(
            field,
            format!("expected 4 character time, found '{}'", raw),
        ));
    }

    let hour: u32 = digits[0..2].parse().unwrap_or_default();
    let minute: u32 = digits[2..4].parse().unwrap_or_default();

    NaiveTime::from_hms_opt(hour, minute, 0)
        .map(Some)
        .ok_or_else(|| TideError::malformed(field, format!("time '{}' is out of range", raw)))
}

/// Parse a 3-character extreme height field; `999` means no entry
pub fn parse_height(raw: &str, field: &'static str) -> Result<Option<i32>> {
    let trimmed = raw.trim();
    if trimmed == sentinel::MISSING_HEIGHT {
        return Ok(None);
    }
    parse_centimeters(trimmed, field).map(Some)
}

/// Parse a 3-character hourly height field (no sentinel)
pub fn parse_hourly_height(raw: &str) -> Result<i32> {
    parse_centimeters(raw.trim(), "hourly_heights")
}

fn parse_centimeters(trimmed: &str, field: &'static str) -> Result<i32> {
    trimmed.parse::<i32>().map_err(|e| {
        TideError::malformed(
            field,
            format!("invalid height '{}' ({})", trimmed, e),
        )
    })
}
