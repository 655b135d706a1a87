//! Logging utilities for the recval CLI
//!
//! This module provides:
//! - Structured logging setup (compact, full or JSON output)
//! - Run ID generation and tracking
//! - Performance timing spans
//!
//! Logs go to stderr unless a file is configured. Nothing is logged at the
//! default `warn` level during a normal run, so stderr carries only record
//! diagnostics.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use tracing::{field, Span};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Global run ID for the current invocation
static RUN_ID: OnceLock<String> = OnceLock::new();

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Output format: compact, full, json
    pub format: LogFormat,
    /// Write logs to stderr when no file is set
    pub console: bool,
    /// Optional file output path
    pub file: Option<PathBuf>,
    /// Include thread IDs
    pub thread_ids: bool,
    /// Include file and line numbers
    pub source_location: bool,
    /// Log span close events with their duration
    pub span_events: bool,
    /// Module-based filtering
    pub module_filter: Option<HashMap<String, String>>,
}

/// Log output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact format for production
    Compact,
    /// Full format with all details
    Full,
    /// JSON structured format
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            console: true,
            file: None,
            thread_ids: false,
            source_location: false,
            span_events: false,
            module_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Raise detail according to the `-v` count; zero keeps the configured level
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        match verbosity {
            0 => {}
            1 => {
                self.level = "info".to_string();
            }
            2 => {
                self.level = "debug".to_string();
                self.source_location = true;
            }
            _ => {
                self.level = "trace".to_string();
                self.format = LogFormat::Full;
                self.source_location = true;
                self.thread_ids = true;
                self.span_events = true;
            }
        }

        self
    }

    /// Apply environment overrides
    pub fn merge_with_env(&mut self) {
        self.merge_with(|key| std::env::var(key).ok());
    }

    fn merge_with(&mut self, var: impl Fn(&str) -> Option<String>) {
        // RUST_LOG takes precedence
        if let Some(rust_log) = var("RUST_LOG") {
            self.level = rust_log;
        }

        if let Some(format) = var("RECVAL_LOG_FORMAT") {
            match format.to_lowercase().as_str() {
                "compact" => self.format = LogFormat::Compact,
                "full" => self.format = LogFormat::Full,
                "json" => self.format = LogFormat::Json,
                _ => {}
            }
        }

        if let Some(file) = var("RECVAL_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }

        if let Some(console) = var("RECVAL_LOG_CONSOLE") {
            self.console = console.to_lowercase() == "true" || console == "1";
        }
    }
}

/// Initialize the global logging system
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = create_env_filter(&config)?;
    let ansi = config.file.is_none() && config.console && std::io::stderr().is_terminal();
    let writer = create_writer(&config)?;
    let span_events = if config.span_events {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    // Different subscriber types per format
    match config.format {
        LogFormat::Compact => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_target(true)
                .with_ansi(ansi)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .with_span_events(span_events)
                .compact()
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::logging(e.to_string()))?;
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .with_span_events(span_events)
                .json()
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::logging(e.to_string()))?;
        }
        LogFormat::Full => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_target(true)
                .with_ansi(ansi)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .with_span_events(span_events)
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::logging(e.to_string()))?;
        }
    }

    let run_id = generate_run_id();
    RUN_ID
        .set(run_id.clone())
        .map_err(|_| Error::logging("run ID already set"))?;

    tracing::info!(run_id = %run_id, config = ?config, "Logging system initialized");

    Ok(())
}

/// Create environment filter based on configuration
fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if let Some(module_filters) = &config.module_filter {
        for (module, level) in module_filters {
            filter = filter.add_directive(
                format!("{}={}", module, level)
                    .parse()
                    .map_err(|e| Error::logging(format!("Invalid filter directive: {}", e)))?,
            );
        }
    }

    Ok(filter)
}

fn create_writer(config: &LoggingConfig) -> Result<BoxMakeWriter> {
    match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    Error::logging(format!("cannot open log file {}: {}", path.display(), e))
                })?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
        None if config.console => Ok(BoxMakeWriter::new(std::io::stderr)),
        None => Ok(BoxMakeWriter::new(std::io::sink)),
    }
}

/// Generate a unique ID for this invocation
pub fn generate_run_id() -> String {
    format!("run_{}", Uuid::new_v4().simple())
}

/// Get the current run ID
pub fn current_run_id() -> Option<&'static str> {
    RUN_ID.get().map(|s| s.as_str())
}

/// Create a span with run ID and timing
pub fn create_operation_span(operation: &str, details: Option<&str>) -> Span {
    tracing::info_span!(
        "operation",
        operation = operation,
        run_id = current_run_id().unwrap_or("unknown"),
        details = details.unwrap_or(""),
        duration_ms = field::Empty,
    )
}

/// Performance timing utilities
pub mod timing {
    use std::time::Instant;
    use tracing::Span;

    /// A timer that logs its duration when dropped
    pub struct Timer {
        start: Instant,
        span: Span,
        operation: String,
    }

    impl Timer {
        pub fn new(operation: &str) -> Self {
            Self {
                start: Instant::now(),
                span: super::create_operation_span(operation, None),
                operation: operation.to_string(),
            }
        }

        pub fn with_details(operation: &str, details: &str) -> Self {
            Self {
                start: Instant::now(),
                span: super::create_operation_span(operation, Some(details)),
                operation: operation.to_string(),
            }
        }

        /// The span covering this operation
        pub fn span(&self) -> &Span {
            &self.span
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            let duration = self.start.elapsed();
            self.span.record("duration_ms", duration.as_millis() as u64);

            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration.as_millis() as u64,
                "Operation completed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_quiet() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn test_logging_config_with_verbosity() {
        let config = LoggingConfig::default().with_verbosity(0);
        assert_eq!(config.level, "warn");
        assert!(!config.source_location);

        let config = LoggingConfig::default().with_verbosity(2);
        assert_eq!(config.level, "debug");
        assert!(config.source_location);

        let config = LoggingConfig::default().with_verbosity(3);
        assert_eq!(config.level, "trace");
        assert_eq!(config.format, LogFormat::Full);
        assert!(config.thread_ids);
        assert!(config.span_events);
    }

    #[test]
    fn test_configured_level_survives_zero_verbosity() {
        let config = LoggingConfig {
            level: "info".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(config.with_verbosity(0).level, "info");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("RUST_LOG", "recval_core=debug"),
            ("RECVAL_LOG_FORMAT", "JSON"),
            ("RECVAL_LOG_FILE", "/tmp/recval.log"),
            ("RECVAL_LOG_CONSOLE", "0"),
        ]
        .into_iter()
        .collect();

        let mut config = LoggingConfig::default();
        config.merge_with(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.level, "recval_core=debug");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.file, Some(PathBuf::from("/tmp/recval.log")));
        assert!(!config.console);
    }

    #[test]
    fn test_unknown_env_format_is_ignored() {
        let mut config = LoggingConfig::default();
        config.merge_with(|key| (key == "RECVAL_LOG_FORMAT").then(|| "xml".to_string()));
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn test_run_id_format() {
        let id = generate_run_id();
        assert!(id.starts_with("run_"));
        assert_eq!(id.len(), "run_".len() + 32);
    }
}
