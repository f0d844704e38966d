//! Line-oriented summary format.
//!
//! ```text
//! A → B
//!   H_before: 3.000 bits
//!   H_after:  1.500 bits
//!   ΔH:       -1.500 bits
//! B → A
//!   ...
//! Order Effect (A→B minus B→A): -0.250 bits
//! ```
//!
//! Entropy lines are attributed to the most recent section header. The order
//! effect line applies regardless of section.

use super::SummaryParser;
use crate::constants::text_summary::{
    DELTA_H_PREFIX, FLOAT_PATTERN, FORWARD_HEADER, H_AFTER_PREFIX, H_BEFORE_PREFIX,
    ORDER_EFFECT_PREFIX, REVERSE_HEADER,
};
use crate::error::Result;
use crate::models::{Direction, DirectionalEntropy, EntropyMeasurement};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static FLOAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FLOAT_PATTERN).expect("float pattern is valid"));

#[derive(Debug, Clone, Copy, Default)]
pub struct TextSummaryParser;

#[derive(Debug, Clone, Copy)]
enum EntropyField {
    Before,
    After,
    Delta,
}

impl EntropyField {
    fn from_line(line: &str) -> Option<Self> {
        if line.starts_with(H_BEFORE_PREFIX) {
            Some(EntropyField::Before)
        } else if line.starts_with(H_AFTER_PREFIX) {
            Some(EntropyField::After)
        } else if line.starts_with(DELTA_H_PREFIX) {
            Some(EntropyField::Delta)
        } else {
            None
        }
    }

    fn slot(self, block: &mut DirectionalEntropy) -> &mut Option<f64> {
        match self {
            EntropyField::Before => &mut block.h_before,
            EntropyField::After => &mut block.h_after,
            EntropyField::Delta => &mut block.delta_h,
        }
    }
}

impl TextSummaryParser {
    /// Scan summary text; unrecognized lines are skipped
    pub fn parse_str(&self, contents: &str) -> EntropyMeasurement {
        let mut entropy = EntropyMeasurement::default();
        let mut section: Option<Direction> = None;

        for line in contents.lines() {
            let line = line.trim();

            if line == FORWARD_HEADER {
                section = Some(Direction::Forward);
                continue;
            }
            if line == REVERSE_HEADER {
                section = Some(Direction::Reverse);
                continue;
            }

            if let Some(field) = EntropyField::from_line(line) {
                if let Some(direction) = section {
                    *field.slot(entropy.direction_mut(direction)) = first_float(line);
                }
            } else if line.starts_with(ORDER_EFFECT_PREFIX) {
                entropy.order_effect = first_float(line);
            }
        }

        entropy
    }
}

impl SummaryParser for TextSummaryParser {
    fn format_name(&self) -> &'static str {
        "text"
    }

    fn parse_contents(&self, contents: &str, _path: &Path) -> Result<EntropyMeasurement> {
        Ok(self.parse_str(contents))
    }
}

/// First signed decimal literal anywhere on the line
fn first_float(line: &str) -> Option<f64> {
    FLOAT_RE
        .find(line)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
