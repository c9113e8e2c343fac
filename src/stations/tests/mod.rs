//! Shared test utilities and fixtures for station mapping and discovery tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod mapping_tests;

/// Create a data directory containing empty files with the given names
pub fn create_data_dir(temp_dir: &TempDir, file_names: &[&str]) -> PathBuf {
    let data_dir = temp_dir.path().join("jmadata");
    fs::create_dir_all(&data_dir).unwrap();
    for name in file_names {
        fs::write(data_dir.join(name), "").unwrap();
    }
    data_dir
}

/// Write a Markdown mapping document embedding `json`
pub fn create_mapping_document(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("station_code_mapping.md");
    let content = format!(
        "# Station code mapping\n\nCodes used in the yearly tide files.\n\n```json\n{}\n```\n",
        json
    );
    fs::write(&path, content).unwrap();
    path
}
