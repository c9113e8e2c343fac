//! Error handling for tide file discovery and record decoding.
//!
//! Provides typed errors so a caller can tell "no data for this day"
//! (an `Ok(None)` from the lookup) apart from a broken directory, file or line.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TideError {
    #[error("Data directory not found: {path}")]
    PathNotFound { path: PathBuf },

    #[error("Station file unavailable: {path} - {source}")]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record in {field}: {reason}")]
    MalformedRecord { field: &'static str, reason: String },

    #[error("Invalid date in record: yy={yy} mm={mm} dd={dd}")]
    InvalidDate { yy: u32, mm: u32, dd: u32 },

    #[error("Station mapping could not be loaded from {path}: {reason}")]
    MappingLoad { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Record cannot be encoded: {reason}")]
    Encoding { reason: String },

    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl TideError {
    /// Create a malformed record error for the named field
    pub fn malformed(field: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            field,
            reason: reason.into(),
        }
    }

    /// Create a file unavailable error
    pub fn file_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a mapping load error
    pub fn mapping_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MappingLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an encoding error
    pub fn encoding(reason: impl Into<String>) -> Self {
        Self::Encoding {
            reason: reason.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// True for failures caused by the content of a single line
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            TideError::MalformedRecord { .. } | TideError::InvalidDate { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_field() {
        let err = TideError::malformed("date", "found 'x' at offset 74");
        assert_eq!(
            err.to_string(),
            "Malformed record in date: found 'x' at offset 74"
        );
        assert!(err.is_record_error());
    }

    #[test]
    fn test_invalid_date_message() {
        let err = TideError::InvalidDate {
            yy: 26,
            mm: 2,
            dd: 30,
        };
        assert!(err.to_string().contains("mm=2"));
        assert!(err.is_record_error());
    }

    #[test]
    fn test_io_errors_are_not_record_errors() {
        let err = TideError::file_unavailable(
            "/missing/2026_TK.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(!err.is_record_error());
        assert!(err.to_string().contains("2026_TK.txt"));
    }
}
