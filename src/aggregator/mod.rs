//! Aggregation of summaries and power logs into one report.
//!
//! Every summary artifact becomes exactly one row. Its power log is found
//! by constructing `run_<run_id>_<mode>.csv` and looking that name up
//! verbatim; a missing power log leaves the power fields empty.

pub mod discovery;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::discovery::ArtifactInventory;
use self::writer::write_report;

use crate::config::AggregatorConfig;
use crate::error::Result;
use crate::models::{AggregateRow, AggregationStats, PowerMeasurement};
use crate::power::parse_power_log;
use crate::summary::parse_summary;
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, info};

/// Rows produced by one pass, before anything is written
#[derive(Debug, Default)]
pub struct Aggregation {
    pub rows: Vec<AggregateRow>,
    /// Power logs that no summary claimed
    pub unmatched_power_logs: Vec<String>,
}

impl Aggregation {
    pub fn rows_with_power(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.powerlog_file.is_some())
            .count()
    }
}

/// Joins summary and power-log artifacts for one logs directory
#[derive(Debug, Clone)]
pub struct Aggregator {
    config: AggregatorConfig,
}

impl Aggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Discover, parse and join every artifact without writing anything
    ///
    /// Fails on the first artifact whose name breaks its convention or whose
    /// tabular summary has no data row.
    pub fn collect(&self) -> Result<Aggregation> {
        let inventory = ArtifactInventory::discover(&self.config.logs_dir)?;
        info!(
            "Found {} summaries and {} power logs in {}",
            inventory.summaries.len(),
            inventory.power_logs.len(),
            self.config.logs_dir.display()
        );

        let mut rows = Vec::with_capacity(inventory.summaries.len());
        let mut claimed: HashSet<String> = HashSet::new();

        for summary_path in &inventory.summaries {
            let summary = parse_summary(summary_path)?;
            let expected = summary.run.power_log_name();

            let power = match inventory.power_log(&expected) {
                Some(power_path) => {
                    let measurement = parse_power_log(power_path)?;
                    claimed.insert(expected);
                    measurement
                }
                None => {
                    info!(
                        "No power log {} for {}, power fields left empty",
                        expected,
                        summary_path.display()
                    );
                    PowerMeasurement::absent()
                }
            };

            rows.push(AggregateRow::from_parts(summary, power));
        }

        let unmatched_power_logs: Vec<String> = inventory
            .power_logs
            .keys()
            .filter(|name| !claimed.contains(*name))
            .cloned()
            .collect();

        for name in &unmatched_power_logs {
            info!("Power log {} has no matching summary", name);
        }

        Ok(Aggregation {
            rows,
            unmatched_power_logs,
        })
    }

    /// Run a full pass and write the report (unless in dry-run mode)
    pub fn run(&self) -> Result<AggregationStats> {
        let start_time = Instant::now();
        self.config.validate()?;

        if !self.config.dry_run {
            self.config.ensure_output_directory()?;
        }

        let aggregation = self.collect()?;
        let output_path = self.config.output_path();

        if self.config.dry_run {
            info!(
                "Dry run: {} rows would be written to {}",
                aggregation.rows.len(),
                output_path.display()
            );
        } else {
            write_report(&output_path, &aggregation.rows)?;
        }

        let stats = AggregationStats {
            summaries_parsed: aggregation.rows.len(),
            rows_written: if self.config.dry_run {
                0
            } else {
                aggregation.rows.len()
            },
            rows_with_power: aggregation.rows_with_power(),
            unmatched_power_logs: aggregation.unmatched_power_logs,
            output_path,
            dry_run: self.config.dry_run,
            processing_time: start_time.elapsed(),
        };

        debug!("Aggregation stats: {:?}", stats);
        Ok(stats)
    }
}
