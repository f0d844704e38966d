//! Artifact discovery for a logs directory
//!
//! Only files directly inside the directory are considered. Summaries are
//! returned sorted by file name so output order is stable across runs.

use crate::constants::{POWER_LOG_GLOB, SUMMARY_GLOBS};
use crate::error::{AggregateError, Result};
use glob::{Pattern, glob};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything found in one logs directory
#[derive(Debug, Default)]
pub struct ArtifactInventory {
    /// Summary artifacts, both variants, sorted by file name
    pub summaries: Vec<PathBuf>,
    /// Power logs keyed by exact file name
    pub power_logs: BTreeMap<String, PathBuf>,
}

impl ArtifactInventory {
    /// Scan `logs_dir`; a missing directory yields an empty inventory
    pub fn discover(logs_dir: &Path) -> Result<Self> {
        let mut summaries = Vec::new();
        for pattern in SUMMARY_GLOBS {
            summaries.extend(matching_files(logs_dir, pattern)?);
        }
        summaries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let power_logs = matching_files(logs_dir, POWER_LOG_GLOB)?
            .into_iter()
            .filter_map(|path| {
                let name = path.file_name()?.to_string_lossy().into_owned();
                Some((name, path))
            })
            .collect::<BTreeMap<_, _>>();

        debug!(
            "Discovered {} summaries and {} power logs in {}",
            summaries.len(),
            power_logs.len(),
            logs_dir.display()
        );

        Ok(Self {
            summaries,
            power_logs,
        })
    }

    /// Power log for a constructed file name, exact match only
    pub fn power_log(&self, file_name: &str) -> Option<&Path> {
        self.power_logs.get(file_name).map(PathBuf::as_path)
    }
}

/// Regular files in `dir` whose name matches `file_pattern`
fn matching_files(dir: &Path, file_pattern: &str) -> Result<Vec<PathBuf>> {
    let escaped_dir = Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped_dir).join(file_pattern);
    let pattern = pattern.to_string_lossy();

    let paths = glob(&pattern).map_err(|source| AggregateError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}
