//! Station mapping document loading
//!
//! The mapping is distributed as a Markdown document that embeds a single
//! JSON object of `"code": "name"` pairs. Everything before the first `{`
//! and after the last `}` is prose and is ignored.

use super::StationMapping;
use crate::error::{Result, TideError};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

impl StationMapping {
    /// Load a mapping from a document on disk
    ///
    /// # Errors
    /// * Returns `TideError::MappingLoad` if the file cannot be read, holds no
    ///   JSON object, or the object is not a flat string-to-string map
    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!("Loading station mapping from {}", path.display());

        let text = fs::read_to_string(path)
            .map_err(|e| TideError::mapping_load(path, format!("cannot read file: {}", e)))?;

        let mut mapping = Self::parse_document(&text, path)?;
        mapping.source = Some(path.to_path_buf());

        info!(
            "Loaded {} station names from {}",
            mapping.len(),
            path.display()
        );
        Ok(mapping)
    }

    /// Parse the embedded JSON object out of a mapping document.
    ///
    /// `origin` is only used in error messages.
    pub fn parse_document(text: &str, origin: &Path) -> Result<Self> {
        let object = extract_json_object(text).ok_or_else(|| {
            TideError::mapping_load(origin, "no JSON object found in document")
        })?;

        let names: HashMap<String, String> = serde_json::from_str(object)
            .map_err(|e| TideError::mapping_load(origin, format!("invalid mapping JSON: {}", e)))?;

        Ok(Self::from(names))
    }
}

/// Slice from the first `{` to the last `}` inclusive
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}
