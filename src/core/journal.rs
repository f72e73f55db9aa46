use crate::errors::AppResult;
use crate::models::Record;
use crate::models::record::{entry_for, filter_by_user};
use crate::store::RecordStore;
use chrono::NaiveDate;

/// In-memory record collection mirrored to a `RecordStore`.
///
/// Every change rewrites the whole store.
pub struct Journal<S> {
    store: S,
    records: Vec<Record>,
}

impl<S: RecordStore> Journal<S> {
    pub fn open(store: S) -> AppResult<Self> {
        let records = store.load()?;
        Ok(Self { store, records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn user_records(&self, username: &str) -> Vec<&Record> {
        filter_by_user(&self.records, username)
    }

    pub fn entry_for(&self, username: &str, date: NaiveDate) -> Option<&Record> {
        entry_for(&self.records, username, date)
    }

    /// Append `record` and persist.
    pub fn add(&mut self, record: Record) -> AppResult<()> {
        self.records.push(record);
        self.store.save(&self.records)
    }

    /// Drop every record of the same user and day as `record`, then append
    /// it and persist. Returns how many records were dropped.
    pub fn replace_entry(&mut self, record: Record) -> AppResult<usize> {
        let before = self.records.len();
        self.records
            .retain(|r| !r.is_entry_for(&record.username, record.date));
        let removed = before - self.records.len();

        self.add(record)?;
        Ok(removed)
    }
}
