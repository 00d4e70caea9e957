use crate::error::{KeeplinkError, Result};
use crate::store::fs::DATA_FILENAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for keeplink, stored in config.json next to the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeeplinkConfig {
    /// File name of the bookmark blob inside the store directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DATA_FILENAME.to_string()
}

impl Default for KeeplinkConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl KeeplinkConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(KeeplinkError::Io)?;
        let config: KeeplinkConfig =
            serde_json::from_str(&content).map_err(KeeplinkError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(KeeplinkError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(KeeplinkError::Serialization)?;
        fs::write(config_path, content).map_err(KeeplinkError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = value.trim().to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = KeeplinkConfig::default();
        assert_eq!(config.data_file, "bookmarks.json");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = KeeplinkConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, KeeplinkConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = KeeplinkConfig::default();
        config.set("data-file", "links.json").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = KeeplinkConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "links.json");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut config = KeeplinkConfig::default();
        assert!(config.set("nope", "x").is_err());
        assert!(config.get("nope").is_none());
    }
}
