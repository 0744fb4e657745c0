use crate::error::{Result, ShelfError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "books.json";
const DEFAULT_HISTORY_FILE: &str = "history.log";

/// Configuration for shelf, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// File name of the book data, relative to the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// File name of the action history, relative to the data directory
    #[serde(default = "default_history_file")]
    pub history_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_history_file() -> String {
    DEFAULT_HISTORY_FILE.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            history_file: default_history_file(),
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

    pub fn data_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.data_file)
    }

    pub fn history_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.history_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.data_file, "books.json");
        assert_eq!(config.history_file, "history.log");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_load_custom_file_names() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "data_file": "catalog.json", "history_file": "actions.log" }"#,
        )
        .unwrap();

        let loaded = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_path(dir.path()), dir.path().join("catalog.json"));
        assert_eq!(loaded.history_path(dir.path()), dir.path().join("actions.log"));
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{ "data_file": "mine.json" }"#).unwrap();

        let config = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(config.data_file, "mine.json");
        assert_eq!(config.history_file, "history.log");
    }
}
