use serde::{Deserialize, Serialize};

/// One row of the internal operation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String, // RFC 3339, local time
    pub operation: String, // add | reinput | init
    pub target: String,
    pub message: String,
}
