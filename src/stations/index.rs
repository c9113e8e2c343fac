//! Station file discovery for a data directory
//!
//! Yearly station files are named `{year}_{code}.txt` where `code` is exactly
//! two characters. Matching is anchored on the exact prefix and suffix; any
//! other file in the directory is ignored.

use super::StationLookup;
use crate::constants::layout::STATION_WIDTH;
use crate::constants::{STATION_FILE_SEPARATOR, STATION_FILE_SUFFIX};
use crate::error::{Result, TideError};
use crate::models::StationEntry;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Index of the station files available for one year
#[derive(Debug, Clone)]
pub struct StationIndex {
    data_dir: PathBuf,
    year: i32,
}

impl StationIndex {
    /// Create an index over `data_dir` for `year`
    pub fn new(data_dir: impl Into<PathBuf>, year: i32) -> Self {
        Self {
            data_dir: data_dir.into(),
            year,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Expected path of a station's yearly file
    pub fn station_path(&self, code: &str) -> PathBuf {
        self.data_dir.join(station_file_name(self.year, code))
    }

    /// Discover station files and resolve their display names.
    ///
    /// Entries are sorted by display name using byte-wise, case-sensitive
    /// `String` ordering. The sort is stable over a scan ordered by file
    /// name, so stations sharing a name appear in code order.
    ///
    /// # Errors
    /// * Returns `TideError::PathNotFound` if the data directory does not exist
    /// * Returns `TideError::Io` if the directory cannot be read
    pub fn discover<L>(&self, mapping: &L) -> Result<Vec<StationEntry>>
    where
        L: StationLookup + ?Sized,
    {
        if !self.data_dir.is_dir() {
            return Err(TideError::PathNotFound {
                path: self.data_dir.clone(),
            });
        }

        debug!(
            "Scanning {} for {} station files",
            self.data_dir.display(),
            self.year
        );

        let mut entries = Vec::new();

        for entry in WalkDir::new(&self.data_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(TideError::io(
                        format!("Failed to read data directory {}", self.data_dir.display()),
                        e.into(),
                    ));
                }
                Err(e) => {
                    warn!(
                        "Error reading entry in {}: {}",
                        self.data_dir.display(),
                        e
                    );
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(file_name) = entry.file_name().to_str() else {
                debug!("Skipping non UTF-8 file name: {:?}", entry.file_name());
                continue;
            };

            let Some(code) = match_station_code(file_name, self.year) else {
                continue;
            };

            let display_name = match mapping.lookup(code) {
                Some(name) => name.to_string(),
                None => {
                    warn!("Station code '{}' has no mapping entry", code);
                    mapping.display_name(code)
                }
            };

            entries.push(StationEntry {
                display_name,
                code: code.to_string(),
                source_path: entry.path().to_path_buf(),
            });
        }

        entries.sort_by(|a, b| a.display_name.cmp(&b.display_name));

        info!(
            "Found {} station files for {} in {}",
            entries.len(),
            self.year,
            self.data_dir.display()
        );

        Ok(entries)
    }
}

/// Discover the station files of `year` in `data_dir`
pub fn discover<L>(data_dir: &Path, year: i32, mapping: &L) -> Result<Vec<StationEntry>>
where
    L: StationLookup + ?Sized,
{
    StationIndex::new(data_dir, year).discover(mapping)
}

/// Extract the station code from a `{year}_{code}.txt` file name.
///
/// Returns `None` unless the name has the exact prefix, the exact suffix and
/// exactly two characters between them.
pub fn match_station_code(file_name: &str, year: i32) -> Option<&str> {
    let prefix = format!("{}{}", year, STATION_FILE_SEPARATOR);
    let code = file_name
        .strip_prefix(prefix.as_str())?
        .strip_suffix(STATION_FILE_SUFFIX)?;

    (code.chars().count() == STATION_WIDTH).then_some(code)
}

/// File name of a station's yearly file
pub fn station_file_name(year: i32, code: &str) -> String {
    format!(
        "{}{}{}{}",
        year, STATION_FILE_SEPARATOR, code, STATION_FILE_SUFFIX
    )
}
