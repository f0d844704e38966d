//! Error handling for aggregation operations.
//!
//! Only two domain failures are fatal: an artifact whose name does not follow
//! its naming convention, and a tabular summary without a data row. Everything
//! else that can go wrong inside an artifact degrades to an absent field.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected {artifact} filename: {name}")]
    UnexpectedFileName { artifact: &'static str, name: String },

    #[error("No data rows in file: {path}")]
    EmptyInput { path: PathBuf },

    #[error("CSV error in file: {path} - {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid discovery pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Discovery failed: {0}")]
    Discovery(#[from] glob::GlobError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl AggregateError {
    pub fn unexpected_file_name(artifact: &'static str, name: impl Into<String>) -> Self {
        Self::UnexpectedFileName {
            artifact,
            name: name.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for the "name does not follow the convention" failure
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::UnexpectedFileName { .. })
    }

    /// True for the "tabular summary has no data row" failure
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, AggregateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let format = AggregateError::unexpected_file_name("summary", "notes.txt");
        assert!(format.is_format_error());
        assert!(!format.is_empty_input());
        assert_eq!(
            format.to_string(),
            "Unexpected summary filename: notes.txt"
        );

        let empty = AggregateError::EmptyInput {
            path: PathBuf::from("logs/summary_r1_A2B.csv"),
        };
        assert!(empty.is_empty_input());
        assert!(!empty.is_format_error());
    }
}
