use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "library_data.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Configuration for shelf, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Catalog file; relative paths resolve against the home directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Default tracing level when neither `SHELF_LOG` nor `--verbose` is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn data_path(&self, home: &Path) -> PathBuf {
        let path = Path::new(&self.data_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            home.join(path)
        }
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        match key {
            "data-file" => Ok(&self.data_file),
            "log-level" => Ok(&self.log_level),
            other => Err(ShelfError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err(ShelfError::Config("data-file cannot be empty".to_string()));
                }
                self.data_file = value.trim().to_string();
            }
            "log-level" => {
                let level = value.trim().to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(ShelfError::Config(format!(
                        "Invalid log-level '{}' (expected one of: {})",
                        value,
                        LOG_LEVELS.join(", ")
                    )));
                }
                self.log_level = level;
            }
            other => {
                return Err(ShelfError::Config(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("data-file", self.data_file.as_str()),
            ("log-level", self.log_level.as_str()),
        ]
    }
}
