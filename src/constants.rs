//! Application constants for the aggregator
//!
//! Naming conventions, recognized field names, column-inference tokens and
//! the fixed output layout used throughout the crate.

// =============================================================================
// Locations and File Patterns
// =============================================================================

/// Directory scanned when no logs directory is given
pub const DEFAULT_LOGS_DIR: &str = "logs";

/// Name of the consolidated report written into the logs directory
pub const OUTPUT_FILE_NAME: &str = "aggregate_results.csv";

/// Discovery globs for summary artifacts (text and tabular variants)
pub const SUMMARY_GLOBS: &[&str] = &["summary_*_*.txt", "summary_*_*.csv"];

/// Discovery glob for power-log artifacts
pub const POWER_LOG_GLOB: &str = "run_*_*.csv";

/// Filename regexes; `run_id` is non-greedy so the mode binds to the last tag
pub const TEXT_SUMMARY_PATTERN: &str = r"^summary_(?P<run_id>.+?)_(?P<mode>A2B|B2A|BOTH)\.txt$";
pub const TABULAR_SUMMARY_PATTERN: &str =
    r"^summary_(?P<run_id>.+?)_(?P<mode>A2B|B2A|BOTH)\.csv$";
pub const POWER_LOG_PATTERN: &str = r"^run_(?P<run_id>.+?)_(?P<mode>A2B|B2A|BOTH)\.csv$";

// =============================================================================
// Text Summary Format
// =============================================================================

pub mod text_summary {
    /// Section header opening the forward block
    pub const FORWARD_HEADER: &str = "A → B";

    /// Section header opening the reverse block
    pub const REVERSE_HEADER: &str = "B → A";

    pub const H_BEFORE_PREFIX: &str = "H_before:";
    pub const H_AFTER_PREFIX: &str = "H_after:";
    pub const DELTA_H_PREFIX: &str = "ΔH:";

    /// Not section-scoped
    pub const ORDER_EFFECT_PREFIX: &str = "Order Effect";

    /// First signed decimal literal on a line
    pub const FLOAT_PATTERN: &str = r"[-+]?\d+(?:\.\d+)?";
}

// =============================================================================
// Field and Column Names
// =============================================================================

pub mod fields {
    pub const RUN_ID: &str = "run_id";
    pub const MODE: &str = "mode";

    pub const ENERGY_J: &str = "energy_J";
    pub const AVG_POWER_W: &str = "avg_power_W";
    pub const DURATION_S: &str = "duration_s";

    pub const H_BEFORE_A2B: &str = "H_before_A2B_bits";
    pub const H_AFTER_A2B: &str = "H_after_A2B_bits";
    pub const DELTA_H_A2B: &str = "delta_H_A2B_bits";
    pub const H_BEFORE_B2A: &str = "H_before_B2A_bits";
    pub const H_AFTER_B2A: &str = "H_after_B2A_bits";
    pub const DELTA_H_B2A: &str = "delta_H_B2A_bits";
    pub const ORDER_EFFECT: &str = "order_effect_bits";

    pub const SUMMARY_FILE: &str = "summary_file";
    pub const POWERLOG_FILE: &str = "powerlog_file";
    pub const POWER_COL_USED: &str = "power_col_used";
    pub const TIME_COL_USED: &str = "time_col_used";

    /// Cell value treated as absent in tabular summaries (case-insensitive)
    pub const NONE_LITERAL: &str = "none";
}

/// Output header, in write order
pub const OUTPUT_COLUMNS: &[&str] = &[
    fields::RUN_ID,
    fields::MODE,
    fields::ENERGY_J,
    fields::AVG_POWER_W,
    fields::DURATION_S,
    fields::H_BEFORE_A2B,
    fields::H_AFTER_A2B,
    fields::DELTA_H_A2B,
    fields::H_BEFORE_B2A,
    fields::H_AFTER_B2A,
    fields::DELTA_H_B2A,
    fields::ORDER_EFFECT,
    fields::SUMMARY_FILE,
    fields::POWERLOG_FILE,
    fields::POWER_COL_USED,
    fields::TIME_COL_USED,
];

// =============================================================================
// Power Log Column Inference
// =============================================================================

pub mod power_columns {
    /// A time column must mention one of these
    pub const TIME_MUST: &[&str] = &["elapsed", "time"];
    pub const TIME_PREFER: &[&str] = &["elapsed time", "elapsed"];

    /// A power column must mention one of these
    pub const POWER_MUST: &[&str] = &["power", "watt"];
    pub const POWER_PREFER: &[&str] = &["package", "processor", "cpu"];
}
