//! Fixed-width tide record decoder
//!
//! Each line of a yearly station file describes one day. This module turns a
//! line into a [`TideDayRecord`](crate::models::TideDayRecord) and back.
//!
//! ## Architecture
//!
//! - [`field_parsers`] - Character-range slicing and numeric field parsing
//! - [`decoder`] - Line decoding with sentinel handling
//! - [`encoder`] - Canonical line encoding for fixtures and round trips
//!
//! ## Usage
//!
//! ```rust
//! use tidekit::record::decode_line;
//!
//! let line = format!(
//!     "{}260115TK{}{}",
//!     "100".repeat(24),
//!     "0530150".to_string() + &"9999999".repeat(3),
//!     "9999999".repeat(4),
//! );
//! let record = decode_line(&line)?;
//! assert_eq!(record.date.to_string(), "2026-01-15");
//! assert_eq!(record.high_tides.len(), 1);
//! # Ok::<(), tidekit::TideError>(())
//! ```

pub mod decoder;
pub mod encoder;
pub mod field_parsers;

#[cfg(test)]
pub mod tests;

pub use decoder::{decode_block, decode_line, decode_slot};
pub use encoder::encode_record;
pub use field_parsers::date_key;
