//! Report writing for aggregate rows
//!
//! The header is always written, even for an empty report. Absent values
//! become empty fields.

use crate::constants::OUTPUT_COLUMNS;
use crate::error::{AggregateError, Result};
use crate::models::AggregateRow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Serialize `rows` as CSV into any writer
pub fn write_rows<W: Write>(writer: W, rows: &[AggregateRow]) -> csv::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write the report file at `path`, replacing any previous report
pub fn write_report(path: &Path, rows: &[AggregateRow]) -> Result<()> {
    let file = File::create(path)?;
    write_rows(BufWriter::new(file), rows).map_err(|source| AggregateError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
