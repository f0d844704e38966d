//! Summary artifact parsing.
//!
//! A summary comes in one of two shapes, free text (`.txt`) or a single-row
//! table (`.csv`). Both produce the same [`EntropyMeasurement`]; the strategy
//! is picked from the artifact kind the file name classifies as.

pub mod tabular;
pub mod text;

pub use tabular::TabularSummaryParser;
pub use text::TextSummaryParser;

use crate::classifier::{ArtifactKind, PatternFamily, classify_path};
use crate::error::{AggregateError, Result};
use crate::models::{EntropyMeasurement, SummaryRecord};
use crate::reader::read_lossy;
use std::path::Path;
use tracing::debug;

/// One way of reading entropy figures out of a summary artifact
pub trait SummaryParser {
    /// Short name used in logs
    fn format_name(&self) -> &'static str;

    /// Extract entropy fields from the artifact contents
    ///
    /// `path` is only used for error context. The derived order effect is
    /// applied by the caller, not here.
    fn parse_contents(&self, contents: &str, path: &Path) -> Result<EntropyMeasurement>;
}

/// Strategy for a classified artifact kind
pub fn parser_for(kind: ArtifactKind) -> Option<&'static dyn SummaryParser> {
    match kind {
        ArtifactKind::TextSummary => Some(&TextSummaryParser),
        ArtifactKind::TabularSummary => Some(&TabularSummaryParser),
        ArtifactKind::PowerLog => None,
    }
}

/// Parse a summary artifact of either shape
pub fn parse_summary(path: &Path) -> Result<SummaryRecord> {
    let classified = classify_path(path, PatternFamily::Summary)?;
    let parser = parser_for(classified.kind).ok_or_else(|| {
        AggregateError::unexpected_file_name(
            PatternFamily::Summary.label(),
            path.display().to_string(),
        )
    })?;

    let contents = read_lossy(path)?;
    let entropy = parser
        .parse_contents(&contents, path)?
        .with_derived_order_effect();

    debug!(
        "Parsed {} summary {} (run_id={}, mode={}): {:?}",
        parser.format_name(),
        path.display(),
        classified.run.run_id,
        classified.run.mode,
        entropy
    );

    Ok(SummaryRecord {
        run: classified.run,
        entropy,
        summary_file: path.to_path_buf(),
    })
}
