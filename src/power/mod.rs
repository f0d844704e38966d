//! Power-log parsing.
//!
//! Reads a power-measurement CSV, infers its time and power columns from the
//! header and reduces the samples to average power, duration and energy.
//! Individual rows are never fatal: a cell that is missing or does not parse
//! is simply not collected.

pub mod columns;
pub mod energy;

use self::columns::{POWER_RULE, TIME_RULE};
use self::energy::PowerStats;

use crate::classifier::{PatternFamily, classify_path};
use crate::error::Result;
use crate::models::PowerMeasurement;
use crate::reader::{csv_reader, parse_float_cell, read_lossy};
use std::path::Path;
use tracing::{debug, warn};

/// Parse the power log at `path`
pub fn parse_power_log(path: &Path) -> Result<PowerMeasurement> {
    let classified = classify_path(path, PatternFamily::PowerLog)?;
    let contents = read_lossy(path)?;
    let mut measurement = PowerMeasurement::for_file(path);

    let mut reader = csv_reader(&contents);
    let headers: Vec<String> = match reader.headers() {
        Ok(headers) => headers.iter().map(str::to_string).collect(),
        Err(e) => {
            warn!("Unreadable header in {}: {}", path.display(), e);
            return Ok(measurement);
        }
    };
    if headers.is_empty() {
        debug!("Power log {} has no header row", path.display());
        return Ok(measurement);
    }

    let time_column = TIME_RULE.pick(&headers);
    let power_column = POWER_RULE.pick(&headers);

    if time_column.is_none() {
        warn!("No time column found in {}: {:?}", path.display(), headers);
    }
    if power_column.is_none() {
        warn!("No power column found in {}: {:?}", path.display(), headers);
    }

    let mut times = Vec::new();
    let mut powers = Vec::new();
    let mut rows_skipped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                rows_skipped += 1;
                debug!("Skipping malformed row in {}: {}", path.display(), e);
                continue;
            }
        };

        let sample = |column: &Option<columns::ColumnChoice>| {
            column
                .as_ref()
                .and_then(|c| record.get(c.index))
                .and_then(parse_float_cell)
        };

        if let Some(power) = sample(&power_column) {
            powers.push(power);
        }
        if let Some(time) = sample(&time_column) {
            times.push(time);
        }
    }

    let stats = PowerStats::from_samples(&times, &powers);

    debug!(
        "Parsed power log {} (run_id={}, mode={}): time={:?} power={:?}, {} time / {} power samples, {} rows skipped",
        path.display(),
        classified.run.run_id,
        classified.run.mode,
        time_column.as_ref().map(|c| c.name.as_str()),
        power_column.as_ref().map(|c| c.name.as_str()),
        times.len(),
        powers.len(),
        rows_skipped
    );

    measurement.avg_power_w = stats.avg_power_w;
    measurement.duration_s = stats.duration_s;
    measurement.energy_j = stats.energy_j;
    measurement.time_column = time_column.map(|c| c.name);
    measurement.power_column = power_column.map(|c| c.name);

    Ok(measurement)
}
