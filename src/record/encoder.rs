//! Encoding of decoded records back into the fixed-width layout
//!
//! The encoder writes the canonical form: zero-padded 3-digit heights,
//! `HHMM` times, occupied slots first and `9999999` for unused slots.

use chrono::Datelike;

use crate::constants::layout::{EXTREME_SLOTS, RECORD_WIDTH, STATION_WIDTH};
use crate::constants::{YEAR_BASE, YEAR_MAX, sentinel};
use crate::error::{Result, TideError};
use crate::models::{TideDayRecord, TideExtreme, TideKind};

const MIN_HEIGHT: i32 = -99;
const MAX_HOURLY_HEIGHT: i32 = 999;
// 999 is the "no entry" sentinel in extreme slots
const MAX_EXTREME_HEIGHT: i32 = 998;

/// Encode a record as one 136-character line (without a line terminator)
pub fn encode_record(record: &TideDayRecord) -> Result<String> {
    let mut line = String::with_capacity(RECORD_WIDTH);

    for &height in &record.hourly_heights {
        push_height(&mut line, height, MAX_HOURLY_HEIGHT, "hourly height")?;
    }

    let year = record.date.year();
    if !(YEAR_BASE..=YEAR_MAX).contains(&year) {
        return Err(TideError::encoding(format!(
            "year {} cannot be written as a 2-digit offset from {}",
            year, YEAR_BASE
        )));
    }
    line.push_str(&format!(
        "{:02}{:02}{:02}",
        year - YEAR_BASE,
        record.date.month(),
        record.date.day()
    ));

    if record.station_code.chars().count() != STATION_WIDTH {
        return Err(TideError::encoding(format!(
            "station code '{}' is not {} characters",
            record.station_code, STATION_WIDTH
        )));
    }
    line.push_str(&record.station_code);

    push_block(&mut line, &record.high_tides, TideKind::High)?;
    push_block(&mut line, &record.low_tides, TideKind::Low)?;

    Ok(line)
}

fn push_block(line: &mut String, extremes: &[TideExtreme], kind: TideKind) -> Result<()> {
    if extremes.len() > EXTREME_SLOTS {
        return Err(TideError::encoding(format!(
            "{} {} tides do not fit in {} slots",
            extremes.len(),
            kind,
            EXTREME_SLOTS
        )));
    }

    for extreme in extremes {
        line.push_str(&extreme.time.format("%H%M").to_string());
        push_height(line, extreme.height_cm, MAX_EXTREME_HEIGHT, "extreme height")?;
    }
    for _ in extremes.len()..EXTREME_SLOTS {
        line.push_str(sentinel::EMPTY_SLOT);
    }
    Ok(())
}

fn push_height(line: &mut String, height: i32, max: i32, what: &str) -> Result<()> {
    if !(MIN_HEIGHT..=max).contains(&height) {
        return Err(TideError::encoding(format!(
            "{} {} is outside {}..={}",
            what, height, MIN_HEIGHT, max
        )));
    }
    line.push_str(&format!("{:03}", height));
    Ok(())
}
