//! Artifact reading helpers shared by the summary and power-log parsers.
//!
//! Artifacts are read whole and decoded lossily, so the file handle is
//! released before any parsing starts and stray bytes never abort a run.

use crate::constants::fields::NONE_LITERAL;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Read an artifact as UTF-8, replacing invalid sequences
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Header-aware CSV reader that tolerates ragged rows
pub fn csv_reader(contents: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_bytes())
}

/// Parse a CSV cell as a float; blank, `none` and unparsable cells are absent
pub fn parse_float_cell(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() || cell.eq_ignore_ascii_case(NONE_LITERAL) {
        return None;
    }
    cell.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_float_cell() {
        assert_eq!(parse_float_cell("3.5"), Some(3.5));
        assert_eq!(parse_float_cell(" -1.25 "), Some(-1.25));
        assert_eq!(parse_float_cell("+2"), Some(2.0));
        assert_eq!(parse_float_cell(""), None);
        assert_eq!(parse_float_cell("   "), None);
        assert_eq!(parse_float_cell("None"), None);
        assert_eq!(parse_float_cell("NONE"), None);
        assert_eq!(parse_float_cell("n/a"), None);
    }

    #[test]
    fn test_read_lossy_replaces_invalid_bytes() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"H_before: 3.0\n\xff\xfe\n").unwrap();

        let contents = read_lossy(temp_file.path()).unwrap();
        assert!(contents.starts_with("H_before: 3.0\n"));
        assert!(contents.contains('\u{FFFD}'));
    }

    #[test]
    fn test_csv_reader_accepts_ragged_rows() {
        let mut reader = csv_reader("a,b,c\n1,2\n1,2,3,4\n");
        let rows: Vec<_> = reader.records().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.is_ok()));
    }
}
