//! Output and diagnostic streams
//!
//! Every write is flushed immediately so the two streams interleave in the
//! order records are processed.

use crate::error::{Error, Result};
use crate::record::ValidatedRecord;
use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};

/// Prefix written before every diagnostic on the error stream
pub const DIAGNOSTIC_PREFIX: &str = "Error: ";

/// A pair of output (stdout) and diagnostic (stderr) writers
pub struct Streams<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Streams<Stdout, Stderr> {
    /// Streams bound to the process stdout and stderr
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Streams<O, E> {
    /// Create streams over custom writers
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Echo a trimmed input line to the output stream
    pub fn echo(&mut self, line: &str) -> Result<()> {
        Self::write_line(&mut self.out, line)
    }

    /// Write the success line for a validated record
    pub fn success(&mut self, record: &ValidatedRecord) -> Result<()> {
        Self::write_line(&mut self.out, record)
    }

    /// Write `Error: <message>` to the diagnostic stream
    pub fn diagnostic(&mut self, message: &dyn Display) -> Result<()> {
        Self::write_line(&mut self.err, format_args!("{}{}", DIAGNOSTIC_PREFIX, message))
    }

    /// Write `Error: <message>` to the output stream
    pub fn notice(&mut self, message: &dyn Display) -> Result<()> {
        Self::write_line(&mut self.out, format_args!("{}{}", DIAGNOSTIC_PREFIX, message))
    }

    /// Consume the streams and return the underlying writers
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn write_line<W: Write>(writer: &mut W, content: impl Display) -> Result<()> {
        writeln!(writer, "{}", content).map_err(Error::Output)?;
        writer.flush().map_err(Error::Output)
    }
}
