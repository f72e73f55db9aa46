use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One journal entry: a user's mood and activity for a calendar day.
///
/// Field order is the column order of the data file
/// (`username,date,mood,activity`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub username: String,
    pub date: NaiveDate, // ⇔ "YYYY-MM-DD"
    pub mood: String,
    pub activity: String,
}

impl Record {
    pub fn new(username: &str, date: NaiveDate, mood: &str, activity: &str) -> Self {
        Self {
            username: username.to_string(),
            date,
            mood: mood.to_string(),
            activity: activity.to_string(),
        }
    }

    pub fn belongs_to(&self, username: &str) -> bool {
        self.username == username
    }

    pub fn is_entry_for(&self, username: &str, date: NaiveDate) -> bool {
        self.username == username && self.date == date
    }
}

/// Records of a single user, in storage order.
pub fn filter_by_user<'a>(records: &'a [Record], username: &str) -> Vec<&'a Record> {
    records.iter().filter(|r| r.belongs_to(username)).collect()
}

/// Today's entry for `username`, if one was logged.
pub fn entry_for<'a>(records: &'a [Record], username: &str, date: NaiveDate) -> Option<&'a Record> {
    records.iter().find(|r| r.is_entry_for(username, date))
}
