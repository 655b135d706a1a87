//! The record validation pipeline
//!
//! [`RecordValidator::process`] reads a whole file, skips the header line and
//! classifies every remaining line, writing echoes and success lines to the
//! output stream and diagnostics to the error stream. A bad record never stops
//! the run; a missing file ends it before any line is read.

use crate::error::{Error, Result, RecordError};
use crate::output::Streams;
use crate::record::{mask_email, parse_record, validate_record, ExtraFieldsPolicy, ValidatedRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, instrument, trace};

/// Behavior switches for [`RecordValidator`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    /// Treatment of lines with more than three fields
    pub extra_fields: ExtraFieldsPolicy,

    /// Also report a missing input file on the output stream
    pub duplicate_not_found: bool,

    /// Echo every trimmed data line to the output stream
    pub echo_lines: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            extra_fields: ExtraFieldsPolicy::Reject,
            duplicate_not_found: true,
            echo_lines: true,
        }
    }
}

/// Classification of one data line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Empty after trimming
    Blank,
    Valid(ValidatedRecord),
    Invalid(RecordError),
}

/// Per-run counters, reported through logging only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Data lines seen (header excluded)
    pub lines: usize,
    pub valid: usize,
    pub invalid: usize,
    pub blank: usize,
}

impl Summary {
    fn record(&mut self, outcome: &LineOutcome) {
        self.lines += 1;
        match outcome {
            LineOutcome::Blank => self.blank += 1,
            LineOutcome::Valid(_) => self.valid += 1,
            LineOutcome::Invalid(_) => self.invalid += 1,
        }
    }
}

/// How a call to [`RecordValidator::process`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every line was processed
    Completed(Summary),
    /// The input file did not exist; nothing was processed
    SourceMissing,
}

/// Validates `name,email,id` records from a headed text file
#[derive(Debug, Clone, Default)]
pub struct RecordValidator {
    options: ValidatorOptions,
}

impl RecordValidator {
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    /// Validate the file at `path`
    ///
    /// A missing file is reported as `Error: File '<path>' not found.` and
    /// yields [`Outcome::SourceMissing`]. Any other read failure, and any
    /// failure to write to the streams, is returned as an [`Error`].
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn process<P, O, E>(&self, path: P, streams: &mut Streams<O, E>) -> Result<Outcome>
    where
        P: AsRef<Path>,
        O: Write,
        E: Write,
    {
        let content = match read_source(path.as_ref()) {
            Ok(content) => content,
            Err(err) if err.is_not_found() => {
                debug!("Input file not found");
                if self.options.duplicate_not_found {
                    streams.notice(&err)?;
                }
                streams.diagnostic(&err)?;
                return Ok(Outcome::SourceMissing);
            }
            Err(err) => return Err(err),
        };

        debug!(bytes = content.len(), "Input file read");
        let summary = self.process_str(&content, streams)?;
        Ok(Outcome::Completed(summary))
    }

    /// Run the pipeline over in-memory file content
    ///
    /// The first line is the header and is skipped. Lines end at `\n`,
    /// `\r\n` or a lone `\r`.
    pub fn process_str<O: Write, E: Write>(
        &self,
        content: &str,
        streams: &mut Streams<O, E>,
    ) -> Result<Summary> {
        let mut summary = Summary::default();

        let content = content.replace("\r\n", "\n").replace('\r', "\n");

        for (index, raw) in content.lines().enumerate().skip(1) {
            let line = raw.trim();
            let line_no = index + 1;

            if self.options.echo_lines {
                streams.echo(line)?;
            }

            let outcome = self.check_line(line);
            match &outcome {
                LineOutcome::Blank => {
                    trace!(line_no, "Blank line skipped");
                }
                LineOutcome::Valid(record) => {
                    debug!(
                        line_no,
                        email = %mask_email(&record.email),
                        parity = %record.parity,
                        "Record accepted"
                    );
                    streams.success(record)?;
                }
                LineOutcome::Invalid(err) => {
                    debug!(line_no, kind = err.kind(), "Record rejected");
                    streams.diagnostic(err)?;
                }
            }
            summary.record(&outcome);
        }

        info!(
            lines = summary.lines,
            valid = summary.valid,
            invalid = summary.invalid,
            blank = summary.blank,
            "Validation finished"
        );
        Ok(summary)
    }

    /// Classify a single line without writing anything
    pub fn check_line(&self, line: &str) -> LineOutcome {
        let line = line.trim();
        if line.is_empty() {
            return LineOutcome::Blank;
        }

        match parse_record(line, self.options.extra_fields).and_then(validate_record) {
            Ok(record) => LineOutcome::Valid(record),
            Err(err) => LineOutcome::Invalid(err),
        }
    }
}

/// Read the whole input file as UTF-8 text
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::from_read(path, e))?;
    String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}
