//! Configuration for an aggregation pass.
//!
//! Replaces fixed module-level locations with an explicit value passed into
//! the aggregator. Defaults reproduce the conventional layout: read from
//! `logs/`, write `logs/aggregate_results.csv`.

use crate::constants::{DEFAULT_LOGS_DIR, OUTPUT_FILE_NAME, POWER_LOG_GLOB, SUMMARY_GLOBS};
use crate::error::{AggregateError, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Directory holding summary and power-log artifacts; the report is
    /// written here as well
    pub logs_dir: PathBuf,

    /// File name of the report inside `logs_dir`
    pub output_file_name: String,

    /// Parse and join everything but write nothing
    pub dry_run: bool,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            logs_dir: PathBuf::from(DEFAULT_LOGS_DIR),
            output_file_name: OUTPUT_FILE_NAME.to_string(),
            dry_run: false,
        }
    }
}

impl AggregatorConfig {
    pub fn new(logs_dir: impl Into<PathBuf>) -> Self {
        Self {
            logs_dir: logs_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_output_file_name(mut self, name: impl Into<String>) -> Self {
        self.output_file_name = name.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Full path of the report
    pub fn output_path(&self) -> PathBuf {
        self.logs_dir.join(&self.output_file_name)
    }

    /// Check the configuration before any file is touched
    pub fn validate(&self) -> Result<()> {
        if self.logs_dir.exists() && !self.logs_dir.is_dir() {
            return Err(AggregateError::configuration(format!(
                "Logs path is not a directory: {}",
                self.logs_dir.display()
            )));
        }

        let name = self.output_file_name.trim();
        if name.is_empty() {
            return Err(AggregateError::configuration(
                "Output file name must not be empty",
            ));
        }

        if name.contains('/') || name.contains('\\') {
            return Err(AggregateError::configuration(format!(
                "Output file name must not contain path separators: {}",
                name
            )));
        }

        // The report lives next to its inputs and must never be picked up as one
        for glob in SUMMARY_GLOBS.iter().chain(std::iter::once(&POWER_LOG_GLOB)) {
            let pattern = Pattern::new(glob).map_err(|source| AggregateError::InvalidPattern {
                pattern: glob.to_string(),
                source,
            })?;
            if pattern.matches(name) {
                return Err(AggregateError::configuration(format!(
                    "Output file name {} collides with input pattern {}",
                    name, glob
                )));
            }
        }

        Ok(())
    }

    /// Create the logs directory if it does not exist yet
    pub fn ensure_output_directory(&self) -> Result<()> {
        if !self.logs_dir.exists() {
            debug!("Creating output directory {}", self.logs_dir.display());
        }
        fs::create_dir_all(&self.logs_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AggregatorConfig::default();
        assert_eq!(config.logs_dir, PathBuf::from("logs"));
        assert_eq!(config.output_path(), PathBuf::from("logs/aggregate_results.csv"));
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = AggregatorConfig::new("/tmp/experiment")
            .with_output_file_name("report.csv")
            .with_dry_run(true);

        assert_eq!(config.output_path(), PathBuf::from("/tmp/experiment/report.csv"));
        assert!(config.dry_run);
    }

    #[test]
    fn test_rejects_bad_output_names() {
        for name in ["", "  ", "sub/report.csv", "run_x_A2B.csv", "summary_a_b.txt"] {
            let config = AggregatorConfig::default().with_output_file_name(name);
            let err = config.validate().unwrap_err();
            assert!(
                matches!(err, AggregateError::Configuration { .. }),
                "expected configuration error for {:?}",
                name
            );
        }
    }

    #[test]
    fn test_rejects_file_as_logs_dir() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("logs");
        fs::write(&file_path, "not a directory").unwrap();

        let config = AggregatorConfig::new(&file_path);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ensure_output_directory_creates_nested() {
        let temp_dir = TempDir::new().unwrap();
        let logs_dir = temp_dir.path().join("a").join("b");

        let config = AggregatorConfig::new(&logs_dir);
        config.ensure_output_directory().unwrap();

        assert!(logs_dir.is_dir());
    }
}
