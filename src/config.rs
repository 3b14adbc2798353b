//! Configuration file support.
//!
//! Settings live in `<config_dir>/emotion-vote/config.json`. Every field has a
//! default, so a missing or partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::i18n::Language;
use crate::state::json;

/// Side length in pixels of each displayed frame
pub const DEFAULT_IMAGE_SIZE: u32 = 350;

/// Number of decoded frames kept in memory
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Folder holding one sub-folder per scene
    pub data_root: PathBuf,

    /// Flat array of votes, rewritten after every vote
    pub votes_path: PathBuf,

    /// Scene -> role assignments, rewritten after every role change
    pub roles_path: PathBuf,

    /// UI language
    pub language: Language,

    /// Frame side length in pixels
    pub image_size: u32,

    /// Maximum number of decoded frames kept in memory
    pub cache_capacity: usize,

    /// Log verbosity (RUST_LOG still wins when set)
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("Output"),
            votes_path: PathBuf::from("votes_ver2.json"),
            roles_path: PathBuf::from("roles_ver2.json"),
            language: Language::default(),
            image_size: DEFAULT_IMAGE_SIZE,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            log_level: LogLevel::default(),
        }
    }
}

impl AppConfig {
    /// Load the config from the user's config directory.
    ///
    /// - Linux: ~/.config/emotion-vote/config.json
    /// - macOS: ~/Library/Application Support/emotion-vote/config.json
    /// - Windows: %APPDATA%\emotion-vote\config.json
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from an explicit file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(json::read_optional(path)?.unwrap_or_default())
    }

    /// Get the path where the config file is expected
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("emotion-vote");
        path.push("config.json");
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.cache_capacity, 50);
        assert_eq!(config.image_size, 350);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "language": "en", "log_level": "debug" }"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.data_root, PathBuf::from("Output"));
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
    }
}
