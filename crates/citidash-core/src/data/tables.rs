//! Typed rows for the CSV tables and their readers.
//!
//! Columns are bound by header name; extra columns are ignored. A missing
//! column or an unparseable value is a schema error and fails the load.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// One sampled trip (`df_sample_100.csv`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TripRecord {
    pub rideable_type: String,
    pub member_casual: String,
    /// Minutes.
    pub trip_duration: f64,
}

/// One day of weather joined with the trip count (`df_weather.csv`).
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherDay {
    pub date: NaiveDate,
    /// Daily average, °C.
    pub temperature: Option<f64>,
    /// Millimetres.
    pub precipitation: Option<f64>,
    pub trip_count: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherRow {
    date: String,
    temperature: Option<f64>,
    precipitation: Option<f64>,
    trip_count: f64,
}

/// Trips started at one station (`top_20.csv`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationCount {
    pub start_station_name: String,
    pub num_trips: f64,
}

/// Parses `YYYY-MM-DD`, optionally followed by a time of day.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open table {}", path.display()))?;
    let mut rows = Vec::new();
    for row in reader.deserialize::<T>() {
        rows.push(row.with_context(|| format!("Schema mismatch in {}", path.display()))?);
    }
    Ok(rows)
}

/// Reads the trip sample table.
///
/// # Errors
/// Returns an error if the file is unreadable or a row does not match the schema.
pub fn read_trips(path: &Path) -> Result<Vec<TripRecord>> {
    read_rows(path)
}

/// Reads the weather table, sorted by date.
///
/// # Errors
/// Returns an error if the file is unreadable, a row does not match the
/// schema, or a date cannot be parsed.
pub fn read_weather(path: &Path) -> Result<Vec<WeatherDay>> {
    let rows: Vec<WeatherRow> = read_rows(path)?;
    let mut days = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let date = parse_date(&row.date).with_context(|| {
                format!(
                    "Invalid date '{}' in row {} of {}",
                    row.date,
                    i + 1,
                    path.display()
                )
            })?;
            Ok(WeatherDay {
                date,
                temperature: row.temperature,
                precipitation: row.precipitation,
                trip_count: row.trip_count,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    days.sort_by_key(|day| day.date);
    Ok(days)
}

/// Reads the top start stations table.
///
/// # Errors
/// Returns an error if the file is unreadable or a row does not match the schema.
pub fn read_top_stations(path: &Path) -> Result<Vec<StationCount>> {
    read_rows(path)
}
