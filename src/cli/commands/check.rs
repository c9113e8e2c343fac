//! Check command: data directory diagnostics

use anyhow::Context;
use colored::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::shared::{load_configuration, load_station_mapping};
use crate::cli::args::CheckArgs;
use crate::constants::{DIAGNOSTIC_SAMPLE_SIZE, STATION_FILE_SUFFIX};

/// Snapshot of what the data directory looks like
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    pub resolved_path: PathBuf,
    pub exists: bool,
    pub sample_files: Vec<String>,
    pub station_count: Option<usize>,
    pub mapped_codes: usize,
}

/// Run the check command
pub fn run_check(args: CheckArgs) -> anyhow::Result<()> {
    let config = load_configuration(&args.source)?;
    let mapping = load_station_mapping(&config)?;

    let station_count = match config.station_index().discover(&mapping) {
        Ok(stations) => Some(stations.len()),
        Err(e) => {
            tracing::warn!("Station discovery failed: {}", e);
            None
        }
    };

    let diagnostics = Diagnostics {
        resolved_path: resolve_path(&config.data_dir),
        exists: config.data_dir.is_dir(),
        sample_files: sample_text_files(&config.data_dir, DIAGNOSTIC_SAMPLE_SIZE)?,
        station_count,
        mapped_codes: mapping.len(),
    };

    println!("{}", render(&diagnostics, config.year));
    Ok(())
}

fn resolve_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    })
}

/// First `limit` `*.txt` names in the directory, sorted by name
pub fn sample_text_files(dir: &Path, limit: usize) -> anyhow::Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let pattern = glob::Pattern::new(&format!("*{}", STATION_FILE_SUFFIX))
        .context("Invalid station file pattern")?;

    let names = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| pattern.matches(name))
        .take(limit)
        .collect();

    Ok(names)
}

fn render(diagnostics: &Diagnostics, year: i32) -> String {
    let exists = if diagnostics.exists {
        "yes".green()
    } else {
        "no".red()
    };

    let mut output = format!(
        "{}\n  Data path: {}\n  Exists: {}\n",
        "Data directory diagnostics".bright_green().bold(),
        diagnostics.resolved_path.display(),
        exists
    );

    if diagnostics.sample_files.is_empty() {
        output.push_str("  Sample .txt files: none\n");
    } else {
        output.push_str(&format!(
            "  Sample .txt files: {}\n",
            diagnostics.sample_files.join(", ")
        ));
    }

    match diagnostics.station_count {
        Some(count) => output.push_str(&format!("  Stations for {}: {}\n", year, count)),
        None => output.push_str(&format!(
            "  Stations for {}: {}\n",
            year,
            "unavailable".red()
        )),
    }
    output.push_str(&format!("  Mapped station codes: {}", diagnostics.mapped_codes));

    output
}
