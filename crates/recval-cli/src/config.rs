//! Configuration management for the CLI
//!
//! This module handles loading and merging configuration from:
//! - Default values
//! - Configuration files (YAML/JSON)
//! - Command-line arguments
//!
//! Environment overrides for logging are applied in [`crate::logging`].

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::logging::LoggingConfig;
use recval_core::ValidatorOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Record validation behavior
    pub validation: ValidatorOptions,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config = if is_yaml(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in &Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".recval.yaml"),
            PathBuf::from(".recval.yml"),
            PathBuf::from(".recval.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let recval_dir = config_dir.join("recval");
            paths.push(recval_dir.join("config.yaml"));
            paths.push(recval_dir.join("config.json"));
        }

        paths
    }

    /// Apply command-line overrides (command line takes precedence)
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(extra_fields) = cli.extra_fields {
            self.validation.extra_fields = extra_fields.into();
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogFormat;
    use clap::Parser;
    use recval_core::ExtraFieldsPolicy;

    #[test]
    fn test_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recval.yaml");
        std::fs::write(
            &path,
            "validation:\n  extra_fields: truncate\n  duplicate_not_found: false\n\
             logging:\n  format: json\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.validation.extra_fields, ExtraFieldsPolicy::Truncate);
        assert!(!config.validation.duplicate_not_found);
        assert!(config.validation.echo_lines);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_json_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recval.json");
        std::fs::write(&path, r#"{"validation": {"echo_lines": false}}"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(!config.validation.echo_lines);
        assert_eq!(config.validation.extra_fields, ExtraFieldsPolicy::Reject);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let err = Config::load_with_file(Some(Path::new("/no/such/recval.yaml"))).unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recval.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Config::from_file(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = Config::default();
        let cli = Cli::parse_from(["recval", "--extra-fields", "truncate", "users.csv"]);
        config.apply_cli(&cli);
        assert_eq!(config.validation.extra_fields, ExtraFieldsPolicy::Truncate);

        let cli = Cli::parse_from(["recval", "users.csv"]);
        config.apply_cli(&cli);
        assert_eq!(config.validation.extra_fields, ExtraFieldsPolicy::Truncate);
    }
}
