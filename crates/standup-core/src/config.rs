//! Configuration management for Standup.
//!
//! Stored in `~/.config/standup/config.toml` (platform config dir). A missing
//! file, or missing keys, fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StandupError};

const CONFIG_DIR: &str = "standup";
const CONFIG_FILE: &str = "config.toml";

/// User settings for the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colorize output by tone.
    pub color: bool,
    /// Keep answered lines in the line editor's in-memory history.
    pub history: bool,
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            history: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR))
            .ok_or_else(|| StandupError::config("Could not determine config directory"))
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.color);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");
        let config = Config {
            color: false,
            history: false,
            log_filter: "standup_core=debug".to_string(),
        };

        config.save_to(&path).expect("Should save config");
        let loaded = Config::load_from(&path).expect("Should load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "color = false\nunknown_key = 1\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.color);
        assert!(config.history);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_invalid_file_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "color = \"maybe\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, StandupError::Serialization { .. }));
    }
}
