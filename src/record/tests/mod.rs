//! Test utilities for fixed-width record decoding
//!
//! Helpers build lines field by field so each test states only the fields
//! it cares about.


/// Empty extreme block (four unused slots)
pub const EMPTY_BLOCK: &str = "9999999999999999999999999999";

/// Hourly block with heights 100, 101, ... 123
pub fn rising_hourly() -> String {
    (0..24).map(|h| format!("{:03}", 100 + h)).collect()
}

/// Assemble a line from its five fields
pub fn build_line(hourly: &str, date: &str, code: &str, high: &str, low: &str) -> String {
    format!("{}{}{}{}{}", hourly, date, code, high, low)
}

/// A complete canonical line for 2026-01-15 at station TK
pub fn sample_line() -> String {
    build_line(
        &rising_hourly(),
        "260115",
        "TK",
        "0530150173214299999999999999",
        "1145020234501299999999999999",
    )
}
