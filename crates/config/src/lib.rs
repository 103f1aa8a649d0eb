//! Configuration management for notepad.
//!
//! Loads and saves a TOML config file under the XDG config directory,
//! filling in defaults for missing keys.

mod settings;
mod xdg;

pub use settings::{Config, LoggingSettings, SearchSettings};
pub use xdg::{get_cache_dir, get_config_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const LOG_FILE_NAME: &str = "notepad.log";
}

const LOG_LEVELS: [&str; 5] = ["debug", "info", "warn", "warning", "error"];

impl Config {
    /// Load configuration from the default location.
    ///
    /// On first run, creates the config file with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`.
    ///
    /// Missing keys are filled with defaults and the normalized file is
    /// written back when it differs from what was read.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::validate_content(&original_content)?;

        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Log file path: the configured one, or `notepad.log` in the cache dir.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        match &self.logging.file_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(get_cache_dir()?.join(defaults::LOG_FILE_NAME)),
        }
    }

    /// Parse and validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.logging.file_path {
            if path.trim().is_empty() {
                anyhow::bail!("Log file path must not be empty");
            }
        }
        if !LOG_LEVELS.contains(&self.logging.min_level.to_lowercase().as_str()) {
            anyhow::bail!("Unknown log level: {}", self.logging.min_level);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.search.match_whole_word);
        assert_eq!(config.logging.min_level, "info");
        assert_eq!(config.logging.file_path, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_content_fills_defaults() {
        let config = Config::validate_content("[search]\nmatch_whole_word = true\n").unwrap();
        assert!(config.search.match_whole_word);
        assert_eq!(config.logging, LoggingSettings::default());
    }

    #[test]
    fn test_unknown_sections_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[editor]\nfont_size = 13\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("[editor]"));
    }

    #[test]
    fn test_empty_log_path() {
        let err = Config::validate_content("[logging]\nfile_path = \" \"\n").unwrap_err();
        assert!(err.to_string().contains("Log file path"));
    }

    #[test]
    fn test_invalid_log_level() {
        assert!(Config::validate_content("[logging]\nmin_level = \"loud\"\n").is_err());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(Config::validate_content("[search\n").is_err());
    }

    #[test]
    fn test_load_creates_and_normalizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        std::fs::write(&path, "[search]\nmatch_whole_word = true\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert!(config.search.match_whole_word);

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("min_level"));
    }

    #[test]
    fn test_log_file_path() {
        let mut config = Config::default();
        config.logging.file_path = Some("/tmp/custom.log".to_string());
        assert_eq!(
            config.log_file_path().unwrap(),
            PathBuf::from("/tmp/custom.log")
        );
    }
}
