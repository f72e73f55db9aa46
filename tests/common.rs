#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, NaiveDate};
use moodtrack::models::Record;
use moodtrack::store::{CsvStore, RecordStore};
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated HOME plus a data file inside it, so that no test touches the
/// real configuration.
pub struct Sandbox {
    pub home: TempDir,
    pub data: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("create temp home");
        let data = home.path().join("journal").join("mood_activity_data.csv");
        Self { home, data }
    }

    /// The binary, pointed at this sandbox's HOME and data file.
    pub fn cmd(&self) -> Command {
        let mut cmd = self.cmd_without_data();
        cmd.arg("--data").arg(&self.data);
        cmd
    }

    /// The binary with this sandbox's HOME and no `--data` override.
    ///
    /// The session date is pinned to [`TODAY`], so records seeded with
    /// [`today`] or [`days_ago`] match the binary even across midnight.
    pub fn cmd_without_data(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("moodtrack");
        cmd.env("HOME", self.home.path())
            .env("APPDATA", self.home.path())
            .args(["--today", TODAY]);
        cmd
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.path().join(".moodtrack").join("moodtrack.conf")
    }

    pub fn store(&self) -> CsvStore {
        CsvStore::new(&self.data)
    }

    pub fn seed(&self, records: &[Record]) {
        self.store().save(records).expect("seed data file");
    }

    pub fn load(&self) -> Vec<Record> {
        self.store().load().expect("load data file")
    }

    pub fn log_file(&self) -> PathBuf {
        self.home.path().join(".moodtrack").join("moodtrack.log")
    }
}

/// Session date every binary run in the tests is pinned to.
pub const TODAY: &str = "2025-06-15";

pub fn today() -> NaiveDate {
    date(TODAY)
}

pub fn today_str() -> String {
    TODAY.to_string()
}

pub fn days_ago(n: i64) -> NaiveDate {
    today() - Duration::days(n)
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn rec(username: &str, day: NaiveDate, mood: &str, activity: &str) -> Record {
    Record::new(username, day, mood, activity)
}
