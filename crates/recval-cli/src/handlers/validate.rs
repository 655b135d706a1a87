//! Validation command handler

use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use recval_core::{Outcome, RecordValidator, Streams};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Validate `input` and stream results to stdout and stderr
///
/// A missing input file is reported by the validator and is not an error
/// here; the run still ends with a zero exit status.
#[instrument(skip(config), fields(file = %input.display()))]
pub fn handle_validate(input: &Path, config: &Config) -> Result<Outcome> {
    let timer = Timer::with_details("validate_file", &input.display().to_string());
    let _entered = timer.span().enter();

    debug!(options = ?config.validation, "Starting validation");
    let validator = RecordValidator::new(config.validation.clone());
    let mut streams = Streams::stdio();

    let outcome = validator.process(input, &mut streams)?;
    match outcome {
        Outcome::Completed(summary) => {
            info!(
                valid = summary.valid,
                invalid = summary.invalid,
                "Validation completed"
            );
        }
        Outcome::SourceMissing => {
            info!("Input file not found; nothing was processed");
        }
    }

    Ok(outcome)
}
