//! Scenario tests for the aggregator
//!
//! Each test lays out a logs directory in a temp dir and runs a full pass.

pub mod joining;

use std::fs;
use std::path::Path;

/// Write `contents` to `dir/name`
pub fn write_artifact(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// Report contents split into lines
pub fn read_report(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
