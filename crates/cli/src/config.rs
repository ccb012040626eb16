//! Configuration management using tracker.toml

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracker_core::{storage::DEFAULT_DATA_FILE, unlock_stamp, DEFAULT_DATE_FORMAT};

pub const DEFAULT_CONFIG_PATH: &str = "tracker.toml";

const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// JSON file holding every game and achievement
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Directory for the daily rolling log file
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// strftime format used for unlock dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_DIR)
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_dir: default_log_dir(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Load config from file, creating default if it doesn't exist
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Error parsing {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    eprintln!("Error reading {}: {}", path.display(), e);
                }
            }
            return Config::default();
        }

        let config = Config::default();
        let _ = config.save(path); // Try to create the file
        config
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The configured date format, or the default one if it doesn't parse
    /// or only renders whitespace
    pub fn date_format(&self) -> &str {
        let invalid = self.date_format.trim().is_empty()
            || StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error))
            || unlock_stamp(&self.date_format).trim().is_empty();
        if invalid {
            DEFAULT_DATE_FORMAT
        } else {
            &self.date_format
        }
    }
}
