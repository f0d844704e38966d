//! Filename classification for log artifacts.
//!
//! Summary and power-log artifacts carry their run identity in the file name:
//! `summary_<run_id>_<mode>.{txt,csv}` and `run_<run_id>_<mode>.csv`.

use crate::constants::{POWER_LOG_PATTERN, TABULAR_SUMMARY_PATTERN, TEXT_SUMMARY_PATTERN};
use crate::error::{AggregateError, Result};
use crate::models::{Mode, RunRecord};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static TEXT_SUMMARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TEXT_SUMMARY_PATTERN).expect("text summary pattern is valid"));
static TABULAR_SUMMARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(TABULAR_SUMMARY_PATTERN).expect("tabular summary pattern is valid")
});
static POWER_LOG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(POWER_LOG_PATTERN).expect("power log pattern is valid"));

/// Which naming convention a name is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternFamily {
    Summary,
    PowerLog,
}

impl PatternFamily {
    /// Label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            PatternFamily::Summary => "summary",
            PatternFamily::PowerLog => "powerlog",
        }
    }
}

/// Concrete artifact format implied by a matched name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    TextSummary,
    TabularSummary,
    PowerLog,
}

impl ArtifactKind {
    fn regex(&self) -> &'static Regex {
        match self {
            ArtifactKind::TextSummary => &*TEXT_SUMMARY_RE,
            ArtifactKind::TabularSummary => &*TABULAR_SUMMARY_RE,
            ArtifactKind::PowerLog => &*POWER_LOG_RE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedName {
    pub run: RunRecord,
    pub kind: ArtifactKind,
}

/// Match a bare file name against one pattern family
pub fn classify(file_name: &str, family: PatternFamily) -> Option<ClassifiedName> {
    let candidates: &[ArtifactKind] = match family {
        PatternFamily::Summary => &[ArtifactKind::TextSummary, ArtifactKind::TabularSummary],
        PatternFamily::PowerLog => &[ArtifactKind::PowerLog],
    };

    candidates
        .iter()
        .find_map(|kind| match_kind(file_name, *kind))
}

fn match_kind(file_name: &str, kind: ArtifactKind) -> Option<ClassifiedName> {
    let captures = kind.regex().captures(file_name)?;
    let run_id = captures.name("run_id")?.as_str();
    let mode: Mode = captures.name("mode")?.as_str().parse().ok()?;

    Some(ClassifiedName {
        run: RunRecord::new(run_id, mode),
        kind,
    })
}

/// Classify the file name of `path`, failing with a format error on mismatch
pub fn classify_path(path: &Path, family: PatternFamily) -> Result<ClassifiedName> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    classify(&file_name, family)
        .ok_or_else(|| AggregateError::unexpected_file_name(family.label(), file_name))
}
