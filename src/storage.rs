//! Configuration loading and the weekly CSV report sink.
//!
//! One report file exists per ISO week, keyed by its Monday. A re-run in
//! the same week overwrites; a run in a later week appends to the file
//! it finds, dropping exact-duplicate rows.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};

use crate::types::{Config, ReportRow, ROW_DATE_FORMAT};
use crate::window::ReportWindow;

const REPORT_HEADERS: [&str; 7] = [
    "Date", "Rank", "Division", "School", "Score", "Location", "Host",
];

/// Load config.yml from the root, falling back to defaults when absent.
pub fn load_config(root: &str) -> Result<Config> {
    let path = PathBuf::from(root).join("config.yml");

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {:?}", path))?;
    let config: Config =
        serde_yaml::from_str(&content).with_context(|| "Failed to parse config YAML")?;
    Ok(config)
}

/// Merge this run's rows into the weekly report file and return its path.
pub fn write_report(rows: &[ReportRow], window: &ReportWindow, root: &str) -> Result<PathBuf> {
    let dir = PathBuf::from(root).join("csv_files");
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {:?}", dir))?;

    let path = dir.join(format!(
        "all_scores_for_the_week_of_{}.csv",
        window.week_label()
    ));

    let merged = if path.exists() {
        let existing = read_report(&path)?;
        let first_date = existing
            .first()
            .and_then(|row| NaiveDate::parse_from_str(&row.date, ROW_DATE_FORMAT).ok());

        if first_date == Some(window.week_start) {
            // same-week re-run, replace wholesale
            println!("Overwriting existing CSV file: {}", path.display());
            rows.to_vec()
        } else {
            println!("Appending to CSV file: {}", path.display());
            let mut combined = existing;
            for row in rows {
                if !combined.contains(row) {
                    combined.push(row.clone());
                }
            }
            combined
        }
    } else {
        println!("Creating new CSV file: {}", path.display());
        rows.to_vec()
    };

    write_rows(&path, &merged)?;
    Ok(path)
}

/// Read the data rows back out of a report file, skipping the blank
/// division separator rows.
pub fn read_report(path: &Path) -> Result<Vec<ReportRow>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open report {:?}", path))?;

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        let row: ReportRow = record
            .deserialize(Some(&headers))
            .with_context(|| "Failed to parse report row")?;
        rows.push(row);
    }

    Ok(rows)
}

/// Write header plus rows, with one blank row between division groups.
fn write_rows(path: &Path, rows: &[ReportRow]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to write report {:?}", path))?;

    writer.write_record(REPORT_HEADERS)?;

    let mut previous_division: Option<&str> = None;
    for row in rows {
        if let Some(prev) = previous_division {
            if prev != row.division {
                writer.write_record(&[""; 7])?;
            }
        }
        writer.serialize(row)?;
        previous_division = Some(&row.division);
    }

    writer.flush()?;
    Ok(())
}
