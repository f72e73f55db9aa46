use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    /// Minimum number of entries before the chart and the predictor run.
    #[serde(default = "default_min_days")]
    pub min_days: usize,
    #[serde(default = "default_positive_moods")]
    pub positive_moods: Vec<String>,
    #[serde(default = "default_forest_trees")]
    pub forest_trees: usize,
    #[serde(default = "default_forest_seed")]
    pub forest_seed: u64,
    /// Terminal columns reserved for each date on the chart.
    #[serde(default = "default_chart_step")]
    pub chart_step: usize,
}

fn default_data_file() -> String {
    Config::config_dir()
        .join("mood_activity_data.csv")
        .to_string_lossy()
        .to_string()
}
fn default_log_file() -> String {
    Config::config_dir()
        .join("moodtrack.log")
        .to_string_lossy()
        .to_string()
}
fn default_min_days() -> usize {
    3
}
fn default_positive_moods() -> Vec<String> {
    ["happy", "excited", "relaxed", "calm"]
        .iter()
        .map(|m| m.to_string())
        .collect()
}
fn default_forest_trees() -> usize {
    100
}
fn default_forest_seed() -> u64 {
    42
}
fn default_chart_step() -> usize {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_file: default_log_file(),
            min_days: default_min_days(),
            positive_moods: default_positive_moods(),
            forest_trees: default_forest_trees(),
            forest_seed: default_forest_seed(),
            chart_step: default_chart_step(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("moodtrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".moodtrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("moodtrack.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Fields missing from the file fall back to their defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Self::from_yaml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file deserializes to `null`, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Data file path with `~/` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// Operation log path with `~/` expanded.
    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    /// Turn a `--data` override into an absolute path.
    ///
    /// `~/` is expanded and a relative name is taken from the current
    /// directory, so every command sees the same file.
    pub fn resolve_data_file(custom: &str) -> AppResult<String> {
        let path = expand_tilde(custom);
        let path = if path.is_absolute() {
            path
        } else {
            env::current_dir()?.join(path)
        };
        Ok(path.to_string_lossy().to_string())
    }

    /// Initialize the configuration directory and, when missing, the
    /// configuration file.
    ///
    /// An existing file is never rewritten. Returns `true` when the file was
    /// created.
    pub fn init_all(&self, is_test: bool) -> AppResult<bool> {
        fs::create_dir_all(Self::config_dir())?;

        let path = Self::config_file();
        if is_test || path.exists() {
            return Ok(false);
        }

        let mut file = fs::File::create(&path)?;
        file.write_all(self.to_yaml()?.as_bytes())?;
        Ok(true)
    }
}
