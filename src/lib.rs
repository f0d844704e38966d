//! Energy/Entropy Aggregator Library
//!
//! Joins per-run experiment artifacts into a single CSV report:
//! - Classifying artifact file names into run identity and mode
//! - Parsing entropy summaries in free-text or single-row CSV form
//! - Inferring time and power columns in vendor power logs
//! - Estimating energy by rectangle-rule integration of power over time
//! - Writing one row per summary with its matching power figures

pub mod aggregator;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod power;
pub mod reader;
pub mod summary;

// Re-export commonly used types
pub use aggregator::{Aggregation, Aggregator};
pub use config::AggregatorConfig;
pub use error::{AggregateError, Result};
pub use models::{
    AggregateRow, AggregationStats, EntropyMeasurement, Mode, PowerMeasurement, RunRecord,
    SummaryRecord,
};
