//! Day command: hourly heights and high/low tides for one station and day

use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use colored::*;
use serde::Serialize;
use tracing::info;

use super::shared::{load_configuration, load_station_mapping, select_station};
use crate::TideError;
use crate::cli::args::{DayArgs, OutputFormat};
use crate::lookup::DayLookup;
use crate::models::{StationEntry, TideDayRecord};

/// JSON shape of a day report
#[derive(Debug, Serialize)]
struct DayReport<'a> {
    station: &'a StationEntry,
    date: NaiveDate,
    record: Option<&'a TideDayRecord>,
}

/// Run the day command
pub fn run_day(args: DayArgs) -> anyhow::Result<()> {
    let config = load_configuration(&args.source)?;

    if args.date.year() != config.year {
        return Err(TideError::configuration(format!(
            "Date {} is outside the configured year {}",
            args.date, config.year
        ))
        .into());
    }

    let mapping = load_station_mapping(&config)?;
    let stations = config
        .station_index()
        .discover(&mapping)
        .with_context(|| format!("Failed to list stations in {}", config.data_dir.display()))?;

    let station = select_station(&stations, args.station.as_deref(), &config.default_station)?;
    info!("Looking up {} for {} ({})", args.date, station.display_name, station.code);

    let record = DayLookup::for_station(station)
        .find(args.date)
        .with_context(|| format!("Failed to read tide data for {}", station.display_name))?;

    let output = match args.output_format {
        OutputFormat::Human => match &record {
            Some(record) => render_human(station, record),
            None => render_no_data(station, args.date),
        },
        OutputFormat::Json => serde_json::to_string_pretty(&DayReport {
            station,
            date: args.date,
            record: record.as_ref(),
        })
        .context("Failed to serialize day report")?,
    };
    println!("{}", output);

    Ok(())
}

fn render_no_data(station: &StationEntry, date: NaiveDate) -> String {
    format!(
        "{}",
        format!("No data for {} at {}", date, station.display_name).yellow()
    )
}

fn render_human(station: &StationEntry, record: &TideDayRecord) -> String {
    let mut output = format!(
        "{}\n{}\n\n",
        format!("{} ({})", station.display_name, station.code)
            .bright_green()
            .bold(),
        record.date.format("%Y-%m-%d (%a)").to_string().bright_black()
    );

    let (low, high) = record.hourly_range();
    output.push_str(&format!(
        "{}\n",
        format!("Hourly heights (cm), range {}..{}", low, high).bold()
    ));
    for (hour, height) in record.hourly_series() {
        output.push_str(&format!("  {:02}:00  {:>4}\n", hour, height));
    }

    output.push('\n');
    output.push_str(&format!("{}\n", "High / low tides".bold()));
    if !record.has_extremes() {
        output.push_str(&format!("  {}\n", "none recorded".bright_black()));
    }
    for (kind, extreme) in record.all_extremes() {
        output.push_str(&format!(
            "  {:<4}  {}  {:>4} cm\n",
            kind.label(),
            extreme.time_label(),
            extreme.height_cm
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TideExtreme;
    use chrono::NaiveTime;
    use std::path::PathBuf;

    fn station() -> StationEntry {
        StationEntry {
            display_name: "東京".to_string(),
            code: "TK".to_string(),
            source_path: PathBuf::from("jmadata/2026_TK.txt"),
        }
    }

    fn record() -> TideDayRecord {
        TideDayRecord {
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            station_code: "TK".to_string(),
            hourly_heights: [120; 24],
            high_tides: vec![TideExtreme::new(
                NaiveTime::from_hms_opt(5, 30, 0).unwrap(),
                150,
            )],
            low_tides: vec![TideExtreme::new(
                NaiveTime::from_hms_opt(11, 45, 0).unwrap(),
                20,
            )],
        }
    }

    #[test]
    fn test_render_human() {
        colored::control::set_override(false);
        let output = render_human(&station(), &record());

        assert!(output.starts_with("東京 (TK)"));
        assert!(output.contains("2026-01-15"));
        assert!(output.contains("  00:00   120"));
        assert!(output.contains("  23:00   120"));
        assert!(output.contains("high  05:30   150 cm"));
        assert!(output.contains("low   11:45    20 cm"));
        assert!(!output.contains("none recorded"));
    }

    #[test]
    fn test_render_no_data() {
        colored::control::set_override(false);
        let output = render_no_data(&station(), NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(output, "No data for 2026-02-01 at 東京");
    }

    #[test]
    fn test_json_report_shape() {
        let station = station();
        let record = record();
        let report = DayReport {
            station: &station,
            date: record.date,
            record: Some(&record),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["station"]["code"], "TK");
        assert_eq!(value["date"], "2026-01-15");
        assert_eq!(value["record"]["high_tides"][0]["time"], "05:30");
        assert_eq!(value["record"]["hourly_heights"].as_array().unwrap().len(), 24);

        let empty = DayReport {
            station: &station,
            date: record.date,
            record: None,
        };
        assert!(serde_json::to_value(&empty).unwrap()["record"].is_null());
    }
}
