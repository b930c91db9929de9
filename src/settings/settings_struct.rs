use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::constants::log_level::DEFAULT_LOG_LEVEL;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for the command-line tool
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Config file edited when `--file` is not given
    #[serde(default = "default_config_path")]
    pub config_path: PathBuf,
    /// Default `env_logger` filter: `off`, `error`, `warn`, `info`, `debug`, `trace`
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Skip writes that would not change anything
    #[serde(default = "default_true")]
    pub check_first: bool,
}

// Default value functions for serde
pub fn default_config_path() -> PathBuf {
    PathBuf::from("/boot/config.txt")
}

pub fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

pub fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            config_path: default_config_path(),
            log_level: default_log_level(),
            check_first: default_true(),
        }
    }
}

impl Settings {
    /// Create a new settings instance with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_content(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_content(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_fields() {
        let settings = Settings::load_from_content("log_level = \"debug\"\n").unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.config_path, PathBuf::from("/boot/config.txt"));
        assert!(settings.check_first);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(Settings::load_from_content("").unwrap(), Settings::default());
    }

    #[test]
    fn test_full_settings() {
        let settings = Settings::load_from_content(
            r#"
config_path = "/tmp/config.txt"
log_level = "info"
check_first = false
"#,
        )
        .unwrap();
        assert_eq!(settings.config_path, PathBuf::from("/tmp/config.txt"));
        assert!(!settings.check_first);
    }

    #[test]
    fn test_parse_error() {
        let err = Settings::load_from_content("check_first = \"maybe\"").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load_from_file(Path::new("/nonexistent/bootconf.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
