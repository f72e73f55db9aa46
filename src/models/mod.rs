pub mod log_entry;
pub mod record;

pub use log_entry::LogEntry;
pub use record::Record;
