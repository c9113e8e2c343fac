//! Integration tests for station discovery and day lookup over generated data
//!
//! These tests build a small data directory of yearly station files with the
//! record encoder, then exercise discovery, mapping and lookup end to end.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tidekit::{
    StationMapping, TideConfig, TideDayRecord, TideError, TideExtreme, TideKind, decode_line,
    discover, encode_record, find_day,
};

const YEAR: i32 = 2026;

/// Deterministic record for a station and day
fn synthetic_record(code: &str, date: NaiveDate) -> TideDayRecord {
    let base = (date.ordinal() % 50) as i32;
    let mut hourly_heights = [0; 24];
    for (hour, height) in hourly_heights.iter_mut().enumerate() {
        *height = 100 + base + hour as i32;
    }

    TideDayRecord {
        date,
        station_code: code.to_string(),
        hourly_heights,
        high_tides: vec![
            TideExtreme::new(NaiveTime::from_hms_opt(5, 30, 0).unwrap(), 150 + base),
            TideExtreme::new(NaiveTime::from_hms_opt(17, 45, 0).unwrap(), 140 + base),
        ],
        low_tides: vec![TideExtreme::new(
            NaiveTime::from_hms_opt(11, 15, 0).unwrap(),
            -5,
        )],
    }
}

/// Write a station file covering `days` consecutive days from January 1st
fn write_station_file(data_dir: &Path, code: &str, days: i64) -> PathBuf {
    let start = NaiveDate::from_ymd_opt(YEAR, 1, 1).unwrap();
    let mut content = String::new();
    for offset in 0..days {
        let record = synthetic_record(code, start + Duration::days(offset));
        content.push_str(&encode_record(&record).unwrap());
        content.push('\n');
    }

    let path = data_dir.join(format!("{}_{}.txt", YEAR, code));
    fs::write(&path, content).unwrap();
    path
}

fn setup_data_dir() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("jmadata");
    fs::create_dir(&data_dir).unwrap();

    write_station_file(&data_dir, "TK", 60);
    write_station_file(&data_dir, "OS", 60);
    write_station_file(&data_dir, "ZZ", 3);
    fs::write(data_dir.join("2025_TK.txt"), "").unwrap();
    fs::write(data_dir.join("README.txt"), "station files").unwrap();

    let mapping_path = temp_dir.path().join("station_code_mapping.md");
    fs::write(
        &mapping_path,
        "# Stations\n\n```json\n{\n  \"TK\": \"東京\",\n  \"OS\": \"大阪\"\n}\n```\n",
    )
    .unwrap();

    (temp_dir, data_dir, mapping_path)
}

/// Discover stations, pick one and read a day back
///
/// Purpose: Validate the full path from data directory to decoded record
/// Benefit: Catches layout drift between encoder, discovery and lookup
#[test]
fn test_discover_then_find_day() {
    let (_temp_dir, data_dir, mapping_path) = setup_data_dir();
    let mapping = StationMapping::load_from_file(&mapping_path).unwrap();

    let stations = discover(&data_dir, YEAR, &mapping).unwrap();
    let names: Vec<&str> = stations.iter().map(|s| s.display_name.as_str()).collect();
    assert_eq!(names, vec!["unmapped (ZZ)", "大阪", "東京"]);

    let tokyo = stations.iter().find(|s| s.code == "TK").unwrap();
    let date = NaiveDate::from_ymd_opt(YEAR, 2, 10).unwrap();
    let record = find_day(&tokyo.source_path, date).unwrap().unwrap();

    assert_eq!(record, synthetic_record("TK", date));
    assert_eq!(record.hourly_heights.len(), 24);
    let kinds: Vec<TideKind> = record.all_extremes().map(|(kind, _)| kind).collect();
    assert_eq!(kinds, vec![TideKind::High, TideKind::High, TideKind::Low]);
}

/// Every written day is found, and days past the end of the file are not
#[test]
fn test_find_day_over_whole_file() {
    let (_temp_dir, data_dir, _) = setup_data_dir();
    let path = data_dir.join("2026_OS.txt");
    let start = NaiveDate::from_ymd_opt(YEAR, 1, 1).unwrap();

    for offset in 0..60 {
        let date = start + Duration::days(offset);
        let record = find_day(&path, date).unwrap().unwrap();
        assert_eq!(record.date, date);
        assert_eq!(record.station_code, "OS");
    }

    let after = start + Duration::days(60);
    assert!(find_day(&path, after).unwrap().is_none());
}

/// Encoded lines decode back to the same record
#[test]
fn test_encoded_lines_decode_identically() {
    let (_temp_dir, data_dir, _) = setup_data_dir();
    let content = fs::read_to_string(data_dir.join("2026_ZZ.txt")).unwrap();

    for line in content.lines() {
        assert_eq!(line.chars().count(), 136);
        let record = decode_line(line).unwrap();
        assert_eq!(encode_record(&record).unwrap(), line);
    }
}

/// Configuration drives discovery over the same directory
#[test]
fn test_config_station_index() {
    let (_temp_dir, data_dir, mapping_path) = setup_data_dir();
    let config = TideConfig::default()
        .with_data_dir(&data_dir)
        .with_mapping_path(&mapping_path);

    let mapping = config.load_mapping().unwrap();
    let stations = config.station_index().discover(&mapping).unwrap();
    assert_eq!(stations.len(), 3);

    let other_year = config.clone().with_year(2025).station_index();
    let stations_2025 = other_year.discover(&mapping).unwrap();
    assert_eq!(stations_2025.len(), 1);
    assert_eq!(stations_2025[0].display_name, "東京");
}

/// A station whose file disappeared after discovery reports it as unavailable
#[test]
fn test_removed_station_file() {
    let (_temp_dir, data_dir, _) = setup_data_dir();
    let stations = discover(&data_dir, YEAR, &StationMapping::new()).unwrap();
    let entry = stations.iter().find(|s| s.code == "ZZ").unwrap();

    fs::remove_file(&entry.source_path).unwrap();

    let date = NaiveDate::from_ymd_opt(YEAR, 1, 1).unwrap();
    assert!(matches!(
        find_day(&entry.source_path, date),
        Err(TideError::FileUnavailable { .. })
    ));
}
