//! Single-row tabular summary format.
//!
//! Only the first data row is read. Recognized columns are the seven
//! `*_bits` entropy fields; `run_id` and `mode` columns, when present, are
//! ignored in favour of the identity carried by the file name.

use super::SummaryParser;
use crate::constants::fields;
use crate::error::{AggregateError, Result};
use crate::models::EntropyMeasurement;
use crate::reader::{csv_reader, parse_float_cell};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct TabularSummaryParser;

impl SummaryParser for TabularSummaryParser {
    fn format_name(&self) -> &'static str {
        "tabular"
    }

    fn parse_contents(&self, contents: &str, path: &Path) -> Result<EntropyMeasurement> {
        let csv_error = |source| AggregateError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv_reader(contents);
        let headers = reader.headers().map_err(csv_error)?.clone();
        let record = reader
            .records()
            .next()
            .ok_or_else(|| AggregateError::EmptyInput {
                path: path.to_path_buf(),
            })?
            .map_err(csv_error)?;

        // Later duplicate headers win
        let row: HashMap<&str, &str> = headers
            .iter()
            .map(str::trim)
            .zip(record.iter())
            .collect();
        let value = |name: &str| row.get(name).and_then(|cell| parse_float_cell(cell));

        let mut entropy = EntropyMeasurement::default();
        entropy.forward.h_before = value(fields::H_BEFORE_A2B);
        entropy.forward.h_after = value(fields::H_AFTER_A2B);
        entropy.forward.delta_h = value(fields::DELTA_H_A2B);
        entropy.reverse.h_before = value(fields::H_BEFORE_B2A);
        entropy.reverse.h_after = value(fields::H_AFTER_B2A);
        entropy.reverse.delta_h = value(fields::DELTA_H_B2A);
        entropy.order_effect = value(fields::ORDER_EFFECT);

        Ok(entropy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "run_id,mode,H_before_A2B_bits,H_after_A2B_bits,delta_H_A2B_bits,\
H_before_B2A_bits,H_after_B2A_bits,delta_H_B2A_bits,order_effect_bits";

    fn parse(contents: &str) -> Result<EntropyMeasurement> {
        TabularSummaryParser.parse_contents(contents, Path::new("summary_t_BOTH.csv"))
    }

    #[test]
    fn test_parse_all_fields() {
        let contents = format!("{}\nt,BOTH,3.0,1.5,-1.5,2.0,1.0,-1.0,-0.5\n", HEADER);
        let entropy = parse(&contents).unwrap();

        assert_eq!(entropy.forward.h_before, Some(3.0));
        assert_eq!(entropy.forward.h_after, Some(1.5));
        assert_eq!(entropy.forward.delta_h, Some(-1.5));
        assert_eq!(entropy.reverse.h_before, Some(2.0));
        assert_eq!(entropy.reverse.h_after, Some(1.0));
        assert_eq!(entropy.reverse.delta_h, Some(-1.0));
        assert_eq!(entropy.order_effect, Some(-0.5));
    }

    #[test]
    fn test_blank_and_none_cells_are_absent() {
        let contents = format!("{}\nt,BOTH,None,,  ,none,NONE,garbage,\n", HEADER);
        let entropy = parse(&contents).unwrap();

        assert_eq!(entropy, EntropyMeasurement::default());
    }

    #[test]
    fn test_only_first_row_is_used() {
        let contents = "delta_H_A2B_bits\n1.0\n2.0\n";
        let entropy = parse(contents).unwrap();
        assert_eq!(entropy.forward.delta_h, Some(1.0));
    }

    #[test]
    fn test_short_row_leaves_trailing_fields_absent() {
        let contents = "H_before_A2B_bits,H_after_A2B_bits,delta_H_A2B_bits\n3.0\n";
        let entropy = parse(contents).unwrap();

        assert_eq!(entropy.forward.h_before, Some(3.0));
        assert_eq!(entropy.forward.h_after, None);
        assert_eq!(entropy.forward.delta_h, None);
    }

    #[test]
    fn test_header_only_is_empty_input() {
        let err = parse(&format!("{}\n", HEADER)).unwrap_err();
        assert!(err.is_empty_input());
    }

    #[test]
    fn test_empty_file_is_empty_input() {
        let err = parse("").unwrap_err();
        assert!(err.is_empty_input());
    }
}
