//! Core data structures for aggregation.
//!
//! Defines run identity, the entropy and power measurements attached to a
//! run, the flattened output row and the statistics reported after a pass.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Directional mode of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// A → B
    #[serde(rename = "A2B")]
    Forward,
    /// B → A
    #[serde(rename = "B2A")]
    Reverse,
    /// Combined trial running both directions
    #[serde(rename = "BOTH")]
    Both,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Forward => "A2B",
            Mode::Reverse => "B2A",
            Mode::Both => "BOTH",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A2B" => Ok(Mode::Forward),
            "B2A" => Ok(Mode::Reverse),
            "BOTH" => Ok(Mode::Both),
            other => Err(format!("Unknown mode tag: {}", other)),
        }
    }
}

/// Direction of an entropy block inside a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Identity of one experimental trial
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunRecord {
    pub run_id: String,
    pub mode: Mode,
}

impl RunRecord {
    pub fn new(run_id: impl Into<String>, mode: Mode) -> Self {
        Self {
            run_id: run_id.into(),
            mode,
        }
    }

    /// File name of the power log that belongs to this run
    pub fn power_log_name(&self) -> String {
        format!("run_{}_{}.csv", self.run_id, self.mode)
    }
}

/// Entropy before/after and its change for one direction, in bits
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectionalEntropy {
    pub h_before: Option<f64>,
    pub h_after: Option<f64>,
    pub delta_h: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EntropyMeasurement {
    pub forward: DirectionalEntropy,
    pub reverse: DirectionalEntropy,
    pub order_effect: Option<f64>,
}

impl EntropyMeasurement {
    pub fn direction_mut(&mut self, direction: Direction) -> &mut DirectionalEntropy {
        match direction {
            Direction::Forward => &mut self.forward,
            Direction::Reverse => &mut self.reverse,
        }
    }

    /// Fill in the order effect as ΔH(A→B) − ΔH(B→A) when it was not given
    /// explicitly and both deltas are known.
    pub fn with_derived_order_effect(mut self) -> Self {
        if self.order_effect.is_none() {
            if let (Some(forward), Some(reverse)) = (self.forward.delta_h, self.reverse.delta_h) {
                self.order_effect = Some(forward - reverse);
            }
        }
        self
    }
}

/// A parsed summary artifact
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRecord {
    pub run: RunRecord,
    pub entropy: EntropyMeasurement,
    pub summary_file: PathBuf,
}

/// Power and energy figures derived from one power log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PowerMeasurement {
    pub avg_power_w: Option<f64>,
    pub duration_s: Option<f64>,
    pub energy_j: Option<f64>,
    pub powerlog_file: Option<PathBuf>,
    pub power_column: Option<String>,
    pub time_column: Option<String>,
}

impl PowerMeasurement {
    /// Stand-in for a run without a power log
    pub fn absent() -> Self {
        Self::default()
    }

    /// Measurement for a power log that could be opened, before any samples
    pub fn for_file(path: &Path) -> Self {
        Self {
            powerlog_file: Some(path.to_path_buf()),
            ..Self::default()
        }
    }
}

/// One line of the consolidated report
///
/// Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    #[serde(rename = "run_id")]
    pub run_id: String,
    #[serde(rename = "mode")]
    pub mode: Mode,
    #[serde(rename = "energy_J")]
    pub energy_j: Option<f64>,
    #[serde(rename = "avg_power_W")]
    pub avg_power_w: Option<f64>,
    #[serde(rename = "duration_s")]
    pub duration_s: Option<f64>,
    #[serde(rename = "H_before_A2B_bits")]
    pub h_before_a2b: Option<f64>,
    #[serde(rename = "H_after_A2B_bits")]
    pub h_after_a2b: Option<f64>,
    #[serde(rename = "delta_H_A2B_bits")]
    pub delta_h_a2b: Option<f64>,
    #[serde(rename = "H_before_B2A_bits")]
    pub h_before_b2a: Option<f64>,
    #[serde(rename = "H_after_B2A_bits")]
    pub h_after_b2a: Option<f64>,
    #[serde(rename = "delta_H_B2A_bits")]
    pub delta_h_b2a: Option<f64>,
    #[serde(rename = "order_effect_bits")]
    pub order_effect: Option<f64>,
    #[serde(rename = "summary_file")]
    pub summary_file: String,
    #[serde(rename = "powerlog_file")]
    pub powerlog_file: Option<String>,
    #[serde(rename = "power_col_used")]
    pub power_col_used: Option<String>,
    #[serde(rename = "time_col_used")]
    pub time_col_used: Option<String>,
}

impl AggregateRow {
    /// Flatten a summary and its (possibly absent) power measurement
    pub fn from_parts(summary: SummaryRecord, power: PowerMeasurement) -> Self {
        let SummaryRecord {
            run,
            entropy,
            summary_file,
        } = summary;

        Self {
            run_id: run.run_id,
            mode: run.mode,
            energy_j: power.energy_j,
            avg_power_w: power.avg_power_w,
            duration_s: power.duration_s,
            h_before_a2b: entropy.forward.h_before,
            h_after_a2b: entropy.forward.h_after,
            delta_h_a2b: entropy.forward.delta_h,
            h_before_b2a: entropy.reverse.h_before,
            h_after_b2a: entropy.reverse.h_after,
            delta_h_b2a: entropy.reverse.delta_h,
            order_effect: entropy.order_effect,
            summary_file: summary_file.display().to_string(),
            powerlog_file: power.powerlog_file.map(|p| p.display().to_string()),
            power_col_used: power.power_column,
            time_col_used: power.time_column,
        }
    }
}

/// Outcome of one aggregation pass
#[derive(Debug, Default)]
pub struct AggregationStats {
    pub summaries_parsed: usize,
    pub rows_written: usize,
    pub rows_with_power: usize,
    /// Power logs that no summary claimed
    pub unmatched_power_logs: Vec<String>,
    pub output_path: PathBuf,
    pub dry_run: bool,
    pub processing_time: Duration,
}
