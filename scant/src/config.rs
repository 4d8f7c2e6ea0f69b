//! Configuration module for the scant CLI.
//!
//! This module handles locating and loading `scant.toml`. Every field has a
//! default, so an empty or partial file is valid.

use dirs::{config_dir, home_dir};
use scanc_lex::{NewlineMode, ScannerConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{Result, ScantError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "scant.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// How token listings are printed.
    #[serde(default)]
    pub output: OutputConfig,

    /// Scanner options.
    #[serde(default)]
    pub scanner: ScannerSection,
}

/// Output options for the `tokens` command.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Listing format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the span of every token.
    #[serde(default)]
    pub show_spans: bool,
}

/// The `[scanner]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScannerSection {
    /// Treat newlines as layout instead of dispatching on them.
    #[serde(default)]
    pub fold_newlines: bool,
}

impl ScannerSection {
    /// Scanner configuration for these settings, with `fold_newlines`
    /// forced on when `force_fold` is set.
    pub fn to_scanner_config(&self, force_fold: bool) -> ScannerConfig {
        let mode = if self.fold_newlines || force_fold {
            NewlineMode::Layout
        } else {
            NewlineMode::Dispatch
        };
        ScannerConfig::new().newline_mode(mode)
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/scant/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScantError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ScantError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("scant").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("scant").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.show_spans);
        assert!(!config.scanner.fold_newlines);
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            r#"
verbose = true

[output]
format = "json"
show_spans = true

[scanner]
fold_newlines = true
"#,
        );

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.verbose);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_spans);
        assert!(config.scanner.fold_newlines);
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[output]\nshow_spans = true\n");

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.output.show_spans);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.scanner, ScannerSection::default());
    }

    #[test]
    fn test_serialized_default_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let content = toml::to_string_pretty(&Config::default()).unwrap();
        let path = write_config(&temp_dir, &content);
        assert_eq!(Config::load_from_path(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[output]\nformat = \"xml\"\n");

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ScantError::Config(_)));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/scant.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_scanner_config_from_section() {
        let section = ScannerSection::default();
        assert_eq!(section.to_scanner_config(false).newline_mode, NewlineMode::Dispatch);
        assert_eq!(section.to_scanner_config(true).newline_mode, NewlineMode::Layout);

        let section = ScannerSection { fold_newlines: true };
        assert_eq!(section.to_scanner_config(false).newline_mode, NewlineMode::Layout);
    }
}
