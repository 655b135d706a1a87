//! Error types and handling for the CLI
//!
//! This module provides the error type for everything that can end a run
//! early, and maps each failure to a process exit code.

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Wrong number of input files
    #[error("Usage: {program} <filename>")]
    Usage { program: String },

    /// Error from recval-core
    #[error("{0}")]
    Core(#[from] recval_core::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON configuration could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration could not be parsed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Logging could not be set up
    #[error("Logging error: {0}")]
    Logging(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a logging error
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging(message.into())
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => 1,
            // A missing source is reported by the validator itself and never
            // reaches here as an error.
            Self::Core(recval_core::Error::Decode { .. }) => 4,
            Self::Core(_) => 1,
            Self::Config(_) => 5,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Logging(_) => 14,
        }
    }
}

/// Format an error for display to the user
///
/// Usage errors are printed as-is; everything else gets an `Error:` prefix.
pub fn format_error(error: &Error, use_color: bool) -> String {
    if let Error::Usage { .. } = error {
        return error.to_string();
    }

    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_usage_error_is_unprefixed() {
        let err = Error::Usage {
            program: "recval".to_string(),
        };
        assert_eq!(format_error(&err, false), "Usage: recval <filename>");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_core_error_formatting() {
        let err = Error::from(recval_core::Error::Io {
            path: PathBuf::from("data"),
            message: "Is a directory".to_string(),
            source: io::Error::new(io::ErrorKind::Other, "Is a directory"),
        });
        assert_eq!(
            format_error(&err, false),
            "Error: Cannot read file 'data': Is a directory"
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_exit_code() {
        assert_eq!(Error::config("bad").exit_code(), 5);
        assert_eq!(Error::config("bad").to_string(), "Configuration error: bad");
    }
}
