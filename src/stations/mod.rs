//! Station name mapping and yearly station file discovery
//!
//! Station files carry only a 2-character code in their name. This module
//! resolves those codes to display names through a [`StationLookup`] and
//! builds the sorted station list the front end offers for selection.
//!
//! - [`loader`] - Loading a [`StationMapping`] from its mapping document
//! - [`index`] - Discovery of `{year}_{code}.txt` files in a data directory

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::constants::unmapped_label;

pub mod index;
pub mod loader;

#[cfg(test)]
pub mod tests;

pub use index::{StationIndex, discover, match_station_code, station_file_name};

/// Resolves a station code to its display name.
///
/// Discovery never fails because a code is missing here; it substitutes the
/// unmapped label instead.
pub trait StationLookup {
    fn lookup(&self, code: &str) -> Option<&str>;

    /// Mapped name, or the unmapped fallback label
    fn display_name(&self, code: &str) -> String {
        self.lookup(code)
            .map(str::to_string)
            .unwrap_or_else(|| unmapped_label(code))
    }
}

/// Code → display name mapping, loaded once and shared across lookups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationMapping {
    /// Display names indexed by station code
    pub(crate) names: HashMap<String, String>,

    /// Document the mapping was loaded from, if any
    pub(crate) source: Option<PathBuf>,
}

impl StationMapping {
    /// Create an empty mapping (every code resolves to the unmapped label)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from `(code, name)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
            source: None,
        }
    }

    /// Number of mapped codes
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Document this mapping was loaded from
    pub fn source(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }
}

impl From<HashMap<String, String>> for StationMapping {
    fn from(names: HashMap<String, String>) -> Self {
        Self {
            names,
            source: None,
        }
    }
}

impl StationLookup for StationMapping {
    fn lookup(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }
}

impl StationLookup for HashMap<String, String> {
    fn lookup(&self, code: &str) -> Option<&str> {
        self.get(code).map(String::as_str)
    }
}

impl StationLookup for BTreeMap<String, String> {
    fn lookup(&self, code: &str) -> Option<&str> {
        self.get(code).map(String::as_str)
    }
}
