//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API. The input
//! file is collected as a list so that a wrong number of files, like an
//! unknown flag, is reported with the short usage line instead of clap's own
//! error.

use crate::error::{Error, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use recval_core::ExtraFieldsPolicy;
use std::io::IsTerminal;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// recval - validate `name,email,id` record files
///
/// Reads a comma-separated file whose first line is a header, echoes every
/// data line, and reports the parity of each valid record's ID. Invalid
/// records are reported on standard error.
#[derive(Parser, Debug)]
#[command(name = "recval", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, env = "RECVAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// How to treat lines with more than three fields
    #[arg(long, value_enum)]
    pub extra_fields: Option<ExtraFields>,

    /// Disable colored error output
    #[arg(long)]
    pub no_color: bool,

    /// Input file; its first line is a header and is skipped
    #[arg(value_name = "FILENAME")]
    pub files: Vec<PathBuf>,
}

/// Policy for lines with more than three comma-separated fields
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExtraFields {
    /// Report the line as having too many parameters
    Reject,
    /// Validate the first three fields and ignore the rest
    Truncate,
}

impl Cli {
    /// Parse command-line arguments
    ///
    /// `--help` and `--version` print and exit as usual.
    pub fn parse_args() -> Result<Self> {
        Self::parse_args_from(std::env::args_os())
    }

    /// Parse from an explicit argument list
    ///
    /// Unknown flags become a usage error; other clap errors exit through
    /// clap.
    pub fn parse_args_from<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(e) if e.kind() == ErrorKind::UnknownArgument => Err(Error::Usage {
                program: program_name(),
            }),
            Err(e) => e.exit(),
        }
    }

    /// The single input file, or a usage error
    pub fn input(&self) -> Result<&Path> {
        match self.files.as_slice() {
            [file] => Ok(file.as_path()),
            _ => Err(Error::Usage {
                program: program_name(),
            }),
        }
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored error output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stderr().is_terminal()
    }
}

impl From<ExtraFields> for ExtraFieldsPolicy {
    fn from(mode: ExtraFields) -> Self {
        match mode {
            ExtraFields::Reject => ExtraFieldsPolicy::Reject,
            ExtraFields::Truncate => ExtraFieldsPolicy::Truncate,
        }
    }
}

/// Name the program was invoked as, for the usage line
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_stem)
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "recval".to_string())
}
