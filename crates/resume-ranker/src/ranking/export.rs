use std::io::Write;
use std::path::Path;

use super::anonymize::DisplayRecord;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode ranking csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write ranking export: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the ranked rows as CSV with a header line, preserving row order.
pub fn write_csv<W: Write>(writer: W, rows: &[DisplayRecord]) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_csv_file(path: impl AsRef<Path>, rows: &[DisplayRecord]) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_csv(file, rows)
}
