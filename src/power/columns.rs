//! Header-based column inference for power logs.
//!
//! Exported power logs vary by vendor and tool version ("Elapsed Time (sec)",
//! "Time", "Processor Power_0(Watt)", "CPU Power [W]", ...). Columns are chosen
//! by case-insensitive substring tokens instead of a fixed schema.

use crate::constants::power_columns::{POWER_MUST, POWER_PREFER, TIME_MUST, TIME_PREFER};

/// Token sets that decide which header qualifies for a role
#[derive(Debug, Clone, Copy)]
pub struct ColumnRule {
    pub must_contain_any: &'static [&'static str],
    pub prefer_contain_any: &'static [&'static str],
}

pub const TIME_RULE: ColumnRule = ColumnRule {
    must_contain_any: TIME_MUST,
    prefer_contain_any: TIME_PREFER,
};

pub const POWER_RULE: ColumnRule = ColumnRule {
    must_contain_any: POWER_MUST,
    prefer_contain_any: POWER_PREFER,
};

/// A chosen column: position in the header row and its original name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnChoice {
    pub index: usize,
    pub name: String,
}

impl ColumnRule {
    /// Pick the first qualifying header, or the first preferred one among them
    ///
    /// When the chosen name is repeated, `index` points at its last occurrence.
    pub fn pick<S: AsRef<str>>(&self, headers: &[S]) -> Option<ColumnChoice> {
        let candidates: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .map(|(index, header)| (index, header.as_ref().to_lowercase()))
            .filter(|(_, lowered)| contains_any(lowered, self.must_contain_any))
            .collect();

        let (first, _) = candidates
            .iter()
            .find(|(_, lowered)| contains_any(lowered, self.prefer_contain_any))
            .or_else(|| candidates.first())?;

        let name = headers[*first].as_ref();
        let index = headers
            .iter()
            .rposition(|header| header.as_ref() == name)
            .unwrap_or(*first);

        Some(ColumnChoice {
            index,
            name: name.to_string(),
        })
    }
}

fn contains_any(lowered: &str, tokens: &[&str]) -> bool {
    tokens
        .iter()
        .any(|token| lowered.contains(token.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processor_power_and_elapsed_time() {
        let headers = ["Cumulative Processor Power_0(Watt)", "Elapsed Time (sec)"];

        let power = POWER_RULE.pick(&headers).unwrap();
        assert_eq!(power.name, "Cumulative Processor Power_0(Watt)");
        assert_eq!(power.index, 0);

        let time = TIME_RULE.pick(&headers).unwrap();
        assert_eq!(time.name, "Elapsed Time (sec)");
        assert_eq!(time.index, 1);
    }

    #[test]
    fn test_preferred_token_beats_column_order() {
        let headers = [
            "System Time",
            "RDTSC",
            "Elapsed Time (sec)",
            "IA Power_0 (Watt)",
            "Package Power_0 (Watt)",
        ];

        assert_eq!(TIME_RULE.pick(&headers).unwrap().name, "Elapsed Time (sec)");
        assert_eq!(
            POWER_RULE.pick(&headers).unwrap().name,
            "Package Power_0 (Watt)"
        );
    }

    #[test]
    fn test_first_candidate_without_preference() {
        let headers = ["timestamp", "gpu watts", "dram power"];

        assert_eq!(TIME_RULE.pick(&headers).unwrap().name, "timestamp");
        assert_eq!(POWER_RULE.pick(&headers).unwrap().name, "gpu watts");
    }

    #[test]
    fn test_first_preferred_wins_among_several() {
        let headers = ["DRAM Power", "CPU Power", "Processor Power"];
        assert_eq!(POWER_RULE.pick(&headers).unwrap().name, "CPU Power");
    }

    #[test]
    fn test_duplicate_header_resolves_to_last_occurrence() {
        let headers = ["Elapsed Time", "Processor Power", "Processor Power"];

        let power = POWER_RULE.pick(&headers).unwrap();
        assert_eq!(power.name, "Processor Power");
        assert_eq!(power.index, 2);

        assert_eq!(TIME_RULE.pick(&headers).unwrap().index, 0);
    }

    #[test]
    fn test_no_match_is_absent() {
        let headers = ["Frequency (MHz)", "Temperature (C)"];
        assert!(POWER_RULE.pick(&headers).is_none());

        let empty: [&str; 0] = [];
        assert!(TIME_RULE.pick(&empty).is_none());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let headers = ["ELAPSED", "WATT_METER"];
        assert_eq!(TIME_RULE.pick(&headers).unwrap().name, "ELAPSED");
        assert_eq!(POWER_RULE.pick(&headers).unwrap().name, "WATT_METER");
    }
}
