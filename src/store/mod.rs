//! Record persistence.
//!
//! The whole collection is loaded and saved at once; callers never see the
//! backing format, only the `RecordStore` trait.

pub mod csv_store;
pub mod oplog;

use crate::errors::AppResult;
use crate::models::Record;

pub use csv_store::CsvStore;

pub trait RecordStore {
    /// All records of every user, in file order. A missing backing file is
    /// an empty journal.
    fn load(&self) -> AppResult<Vec<Record>>;

    /// Replace the stored collection with `records`.
    fn save(&self, records: &[Record]) -> AppResult<()>;
}
