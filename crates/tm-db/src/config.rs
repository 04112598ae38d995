//! Tool configuration
//!
//! A small JSON file under the platform config directory. Every field is
//! optional; missing fields fall back to the built-in mod metadata.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mod author written into exported files
    pub author: String,
    /// Prefix applied to generated identifiers
    pub prefix: String,
    /// Default directory for exports
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: tm_data::AUTHOR.to_string(),
            prefix: tm_data::PREFIX.to_string(),
            export_dir: default_export_dir(),
        }
    }
}

/// Data directory for exports, or the working directory if the platform has none
pub fn default_export_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("taskmaker"))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Config {
    /// `<config dir>/taskmaker/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("taskmaker").join("config.json"))
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `path`, or the default path when `None`.
    ///
    /// An explicit path must exist. A missing default file gives the
    /// defaults. A malformed file is always an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.exists() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) => Self::load_optional(&path),
                None => Ok(Self::default()),
            },
        }
    }

    fn load_optional(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save as pretty JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Apply the configured prefix to a generated identifier
    pub fn prefixed(&self, id: &str) -> String {
        format!("{}{}", self.prefix, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_mod_metadata() {
        let config = Config::default();
        assert_eq!(config.author, "no_author");
        assert_eq!(config.prefix, "");
        assert_eq!(config.prefixed("quest_1"), "quest_1");
    }

    #[test]
    fn test_partial_config() {
        let config: Config = serde_json::from_str(r#"{ "prefix": "tm_" }"#).unwrap();
        assert_eq!(config.prefix, "tm_");
        assert_eq!(config.author, "no_author");
        assert_eq!(config.export_dir, default_export_dir());
        assert_eq!(config.prefixed("quest_1"), "tm_quest_1");
    }

    #[test]
    fn test_missing_optional_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let config = Config::load_optional(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        match Config::load_or_default(Some(&path)) {
            Err(ConfigError::NotFound(missing)) => assert_eq!(missing, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "author": "someone" }"#).unwrap();
        let config = Config::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.author, "someone");
        assert_eq!(config.prefix, "");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ author: ").unwrap();
        assert!(matches!(
            Config::load_or_default(Some(&path)),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            author: "someone".to_string(),
            prefix: "x_".to_string(),
            export_dir: PathBuf::from("/tmp/out"),
        };
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
