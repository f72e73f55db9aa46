use super::RecordStore;
use crate::errors::AppResult;
use crate::models::Record;
use crate::utils::path::ensure_parent_dir;
use csv::{ReaderBuilder, WriterBuilder};
use std::path::{Path, PathBuf};

pub const HEADER: [&str; 4] = ["username", "date", "mood", "activity"];

/// Flat CSV file holding every user's records.
///
/// No locking: two sessions saving at the same time means the last writer
/// wins.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for CsvStore {
    fn load(&self) -> AppResult<Vec<Record>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = ReaderBuilder::new().has_headers(true).from_path(&self.path)?;

        let mut records = Vec::new();
        for row in rdr.deserialize() {
            let record: Record = row?;
            records.push(record);
        }
        Ok(records)
    }

    fn save(&self, records: &[Record]) -> AppResult<()> {
        ensure_parent_dir(&self.path)?;

        // header written by hand so that an empty journal still gets one
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        wtr.write_record(HEADER)?;

        for record in records {
            wtr.serialize(record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}
