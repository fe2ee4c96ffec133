//! Schedule output writers.
//!
//! Persists a finished schedule twice: `schedule.csv` with a header row
//! and one row per match, and `schedule.json` as an array of objects.
//! Both carry the same nine fields in the same order; the contract lives
//! on [`ScheduledMatch`](crate::models::ScheduledMatch).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::models::ScheduledMatch;

/// Errors raised while writing schedule output.
#[derive(Debug, Error)]
pub enum ExportError {
    /// An output file could not be created or written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV serialization failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// JSON serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes the schedule as CSV to a file.
pub fn write_csv(path: impl AsRef<Path>, matches: &[ScheduledMatch]) -> Result<(), ExportError> {
    write_csv_to(File::create(path)?, matches)
}

/// Writes the schedule as CSV to any sink.
pub fn write_csv_to<W: Write>(writer: W, matches: &[ScheduledMatch]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for m in matches {
        csv_writer.serialize(m)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the schedule as a JSON array to a file.
pub fn write_json(path: impl AsRef<Path>, matches: &[ScheduledMatch]) -> Result<(), ExportError> {
    write_json_to(File::create(path)?, matches)
}

/// Writes the schedule as a JSON array to any sink.
pub fn write_json_to<W: Write>(writer: W, matches: &[ScheduledMatch]) -> Result<(), ExportError> {
    serde_json::to_writer(writer, matches)?;
    Ok(())
}

/// Writes both `schedule.csv` and `schedule.json` into a directory.
pub fn write_outputs(dir: impl AsRef<Path>, matches: &[ScheduledMatch]) -> Result<(), ExportError> {
    let dir = dir.as_ref();
    write_csv(dir.join("schedule.csv"), matches)?;
    write_json(dir.join("schedule.json"), matches)?;
    Ok(())
}
