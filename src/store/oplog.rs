//! Internal operation log: one CSV row per write performed by the tool.

use crate::errors::AppResult;
use crate::models::LogEntry;
use crate::utils::path::ensure_parent_dir;
use chrono::Local;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::OpenOptions;
use std::path::Path;

/// Append an internal log line to the log file at `path`.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    ensure_parent_dir(path)?;

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

    wtr.serialize(LogEntry {
        timestamp: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    })?;

    wtr.flush()?;
    Ok(())
}

/// Read every log line, oldest first. A missing log is empty.
pub fn read_log(path: &Path) -> AppResult<Vec<LogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = ReaderBuilder::new().has_headers(false).from_path(path)?;

    let mut entries = Vec::new();
    for row in rdr.deserialize() {
        let entry: LogEntry = row?;
        entries.push(entry);
    }
    Ok(entries)
}
