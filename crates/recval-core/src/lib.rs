//! recval core - validation of `name,email,id` record files
//!
//! This crate provides the record model, the per-field validation rules and
//! the [`RecordValidator`] pipeline that turns a headed text file into
//! success lines on one stream and diagnostics on another.
//!
//! # Example
//!
//! ```no_run
//! use recval_core::{Outcome, RecordValidator, Streams, ValidatorOptions};
//!
//! fn example() -> recval_core::Result<()> {
//!     let validator = RecordValidator::new(ValidatorOptions::default());
//!     let mut streams = Streams::stdio();
//!     if let Outcome::Completed(summary) = validator.process("users.csv", &mut streams)? {
//!         println!("{} valid records", summary.valid);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod output;
pub mod record;
pub mod validator;


pub use error::{Error, RecordError, Result};
pub use output::Streams;
pub use record::{
    mask_email, parse_record, validate_email, validate_record, ExtraFieldsPolicy, Parity, Record,
    UserId, ValidatedRecord,
};
pub use validator::{read_source, LineOutcome, Outcome, RecordValidator, Summary, ValidatorOptions};
