//! CSV persistence for CPU series.
//!
//! Files carry a `timestamp,cpu_percent` header. Timestamps are written as
//! `YYYY-MM-DD HH:MM:SS`; the reader also accepts the ISO-8601 `T` separator.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use series_spi::{Observation, Result, SeriesError, TimeSeries, TIMESTAMP_FORMAT};
use tracing::info;

const ISO_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

#[derive(Debug, Serialize, Deserialize)]
struct SeriesRow {
    timestamp: String,
    cpu_percent: f64,
}

/// Parse a timestamp in any of the accepted layouts.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    std::iter::once(TIMESTAMP_FORMAT)
        .chain(ISO_FORMATS)
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Write `series` to `path`, replacing any existing file.
pub fn write_series_csv(series: &TimeSeries, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| SeriesError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    let csv_err = |e: csv::Error| SeriesError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    for obs in series {
        writer
            .serialize(SeriesRow {
                timestamp: obs.timestamp_string(),
                cpu_percent: obs.value,
            })
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|source| SeriesError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), rows = series.len(), "series written");
    Ok(())
}

/// Load a `timestamp,cpu_percent` CSV file.
///
/// Rejects empty files, unparseable rows, values outside `[0, 100]` and
/// timestamps that are not strictly increasing at a fixed interval.
pub fn read_series_csv(path: &Path) -> Result<TimeSeries> {
    let file = File::open(path).map_err(|source| SeriesError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let mut observations = Vec::new();
    for (row, result) in reader.deserialize::<SeriesRow>().enumerate() {
        let record = result.map_err(|e| SeriesError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let timestamp = parse_timestamp(&record.timestamp).ok_or_else(|| SeriesError::ParseError {
            row,
            reason: format!("unrecognised timestamp '{}'", record.timestamp),
        })?;
        if !(0.0..=100.0).contains(&record.cpu_percent) {
            return Err(SeriesError::ParseError {
                row,
                reason: format!("cpu_percent {} outside [0, 100]", record.cpu_percent),
            });
        }
        observations.push(Observation::new(timestamp, record.cpu_percent));
    }

    if observations.is_empty() {
        return Err(SeriesError::InvalidData(format!(
            "'{}' contains no rows",
            path.display()
        )));
    }

    let series = TimeSeries::new(observations)?;
    info!(path = %path.display(), rows = series.len(), "series loaded");
    Ok(series)
}
