//! File-based logger configuration (YAML)
//!
//! A config file can carry the destination path and the level table:
//!
//! ```yaml
//! file_path: /var/log/app.log
//! log_levels:
//!   0: debug
//!   1: info
//!   2: error
//! ```
//!
//! Both fields are optional; omitted fields fall back to the built-in
//! defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::levels::LevelMap;
use crate::logger::Logger;

/// Errors from loading a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading the config file failed
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid YAML
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Logger configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggerConfig {
    /// Destination file for all appends
    #[serde(default)]
    pub file_path: Option<PathBuf>,

    /// Level table, key → name
    #[serde(default)]
    pub log_levels: Option<BTreeMap<u32, String>>,
}

impl LoggerConfig {
    /// Load config from a YAML file
    ///
    /// A missing file yields the default config.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Serialize this config to a YAML file
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path.as_ref(), content)?;
        Ok(())
    }
}

impl Logger {
    /// Build a logger from a config, defaulting omitted fields
    pub fn from_config(config: &LoggerConfig) -> Self {
        let levels = config
            .log_levels
            .clone()
            .map(LevelMap::from)
            .unwrap_or_default();
        match &config.file_path {
            Some(path) => Logger::with_levels(path, levels),
            None => Logger::with_levels(crate::logger::DEFAULT_LOG_PATH, levels),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = LoggerConfig::load("/no/such/config.yaml").unwrap();
        assert!(config.file_path.is_none());
        assert!(config.log_levels.is_none());

        let logger = Logger::from_config(&config);
        assert_eq!(logger.path(), Path::new("default.log"));
        assert_eq!(logger.level_names().len(), 6);
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "file_path: app.log\nlog_levels:\n  0: quiet\n  1: loud\n",
        )
        .unwrap();

        let config = LoggerConfig::load(&path).unwrap();
        let logger = Logger::from_config(&config);
        assert_eq!(logger.path(), Path::new("app.log"));
        assert_eq!(logger.level_names(), vec!["loud", "quiet"]);
    }

    #[test]
    fn test_invalid_yaml_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "log_levels: [not, a, map]").unwrap();

        let err = LoggerConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut levels = BTreeMap::new();
        levels.insert(0, "only".to_string());
        let config = LoggerConfig {
            file_path: Some(PathBuf::from("x.log")),
            log_levels: Some(levels),
        };
        config.save(&path).unwrap();

        let loaded = LoggerConfig::load(&path).unwrap();
        assert_eq!(loaded.file_path.as_deref(), Some(Path::new("x.log")));
        assert_eq!(
            loaded.log_levels.unwrap().get(&0).map(String::as_str),
            Some("only")
        );
    }
}
