//! Decoding of a single fixed-width daily tide line
//!
//! A line carries 24 hourly heights, a `yymmdd` date, a 2-character station
//! code and two blocks of four extreme slots (high tides, then low tides).
//! Decoding is all-or-nothing: any failure returns an error and no partial
//! record.

use tracing::trace;

use super::field_parsers::{
    char_field, char_width, parse_date, parse_height, parse_hourly_height, parse_time,
};
use crate::constants::layout::*;
use crate::error::{Result, TideError};
use crate::models::{ExtremeSlot, TideDayRecord, TideExtreme, TideKind};

/// Decode one line into a [`TideDayRecord`].
///
/// A trailing `\n` or `\r\n` is ignored. Lines narrower than 80 characters
/// cannot carry a date and station code and fail as malformed; lines of at
/// least 80 but fewer than 136 characters fail on the truncated extreme block.
pub fn decode_line(line: &str) -> Result<TideDayRecord> {
    let line = line.trim_end_matches(['\n', '\r']);
    let width = char_width(line);

    if width < MIN_HEADER_WIDTH {
        return Err(TideError::malformed(
            "header",
            format!(
                "line is {} characters, at least {} are needed for date and station code",
                width, MIN_HEADER_WIDTH
            ),
        ));
    }

    let hourly_heights = decode_hourly(line)?;

    let date = parse_date(required(line, DATE_START, DATE_END, "date")?)?;
    let station_code = required(line, STATION_START, STATION_END, "station_code")?.to_string();

    let high_tides = decode_block(line, TideKind::High)?;
    let low_tides = decode_block(line, TideKind::Low)?;

    trace!(
        "Decoded {} {}: {} high, {} low",
        station_code,
        date,
        high_tides.len(),
        low_tides.len()
    );

    Ok(TideDayRecord {
        date,
        station_code,
        hourly_heights,
        high_tides,
        low_tides,
    })
}

/// Decode the 24 hourly height fields
pub fn decode_hourly(line: &str) -> Result<[i32; HOURLY_COUNT]> {
    let mut heights = [0; HOURLY_COUNT];
    for (hour, height) in heights.iter_mut().enumerate() {
        let start = HOURLY_START + hour * HOURLY_WIDTH;
        let raw = required(line, start, start + HOURLY_WIDTH, "hourly_heights")?;
        *height = parse_hourly_height(raw)?;
    }
    Ok(heights)
}

/// Decode the high or low tide block of a line.
///
/// Slots whose time or height is a sentinel are skipped; slot order is kept.
pub fn decode_block(line: &str, kind: TideKind) -> Result<Vec<TideExtreme>> {
    let (start, end, field) = block_bounds(kind);
    let block = char_field(line, start, end).ok_or_else(|| {
        TideError::malformed(
            field,
            format!(
                "line is {} characters, the {} tide block needs {}",
                char_width(line),
                kind,
                end
            ),
        )
    })?;

    let mut extremes = Vec::with_capacity(EXTREME_SLOTS);
    for slot_index in 0..EXTREME_SLOTS {
        let slot_start = slot_index * EXTREME_SLOT_WIDTH;
        let raw = char_field(block, slot_start, slot_start + EXTREME_SLOT_WIDTH)
            .ok_or_else(|| TideError::malformed(field, "truncated slot"))?;

        if let Some(extreme) = decode_slot(raw, field)?.into_extreme() {
            extremes.push(extreme);
        }
    }
    Ok(extremes)
}

/// Decode one 7-character slot (`HHMM` + `HHH`) without dropping sentinels
pub fn decode_slot(raw: &str, field: &'static str) -> Result<ExtremeSlot> {
    let time_raw = char_field(raw, 0, EXTREME_TIME_WIDTH)
        .ok_or_else(|| TideError::malformed(field, "truncated slot time"))?;
    let height_raw = char_field(raw, EXTREME_TIME_WIDTH, EXTREME_SLOT_WIDTH)
        .ok_or_else(|| TideError::malformed(field, "truncated slot height"))?;

    Ok(ExtremeSlot {
        time: parse_time(time_raw, field)?,
        height_cm: parse_height(height_raw, field)?,
    })
}

fn block_bounds(kind: TideKind) -> (usize, usize, &'static str) {
    match kind {
        TideKind::High => (HIGH_TIDE_START, HIGH_TIDE_END, "high_tides"),
        TideKind::Low => (LOW_TIDE_START, LOW_TIDE_END, "low_tides"),
    }
}

fn required<'a>(line: &'a str, start: usize, end: usize, field: &'static str) -> Result<&'a str> {
    char_field(line, start, end)
        .ok_or_else(|| TideError::malformed(field, format!("missing characters {}..{}", start, end)))
}
