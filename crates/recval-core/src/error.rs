//! Error types for the recval core library
//!
//! [`Error`] covers the input source and output sinks and ends an invocation.
//! [`RecordError`] describes a single bad record and never stops processing.

use std::path::PathBuf;
use thiserror::Error;

/// Source- and sink-level failures
#[derive(Error, Debug)]
pub enum Error {
    /// The input file does not exist
    #[error("File '{}' not found.", path.display())]
    NotFound { path: PathBuf },

    /// The input file exists but could not be read
    #[error("Cannot read file '{}': {message}", path.display())]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid UTF-8 text
    #[error("File '{}' is not valid UTF-8 text", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Writing to stdout or stderr failed
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Classify a failed read of `path`
    pub fn from_read(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound { path },
            _ => Error::Io {
                path,
                message: err.to_string(),
                source: err,
            },
        }
    }

    /// Whether this error ends the invocation without a failing exit status
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Per-record validation failures
///
/// The `Display` output is the diagnostic body written after the `Error: `
/// prefix on standard error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Fewer than three comma-separated fields
    #[error("Missing parameters '{line}'")]
    MissingParameters { line: String },

    /// More than three comma-separated fields under the reject policy
    #[error("Too many parameters '{line}'")]
    TooManyParameters { line: String },

    /// Email without exactly one `@`, or with a dotless domain
    #[error("Invalid email '{email}'")]
    InvalidEmail { email: String },

    /// Identifier that is not a base-10 integer
    #[error("Invalid user ID '{id}'")]
    InvalidUserId { id: String },
}

impl RecordError {
    /// Short machine-friendly name used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            RecordError::MissingParameters { .. } => "missing_parameters",
            RecordError::TooManyParameters { .. } => "too_many_parameters",
            RecordError::InvalidEmail { .. } => "invalid_email",
            RecordError::InvalidUserId { .. } => "invalid_user_id",
        }
    }
}
