//! recval - command-line entry point
//!
//! Parses arguments, loads configuration, sets up logging and hands the input
//! file to the record validator. Exit status is `1` on a usage error and `0`
//! once the file has been processed, however many records were invalid.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;

use cli::Cli;
use colored::control;
use config::Config;
use error::Result;
use logging::timing::Timer;
use std::process;

fn main() {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", error::format_error(&e, false));
            process::exit(e.exit_code());
        }
    };

    control::set_override(cli.use_color());

    match run(cli) {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    let input = cli.input()?.to_path_buf();

    let mut config = Config::load_with_file(cli.config.as_deref())?;
    config.apply_cli(&cli);

    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let _timer = Timer::new("cli_execution");
    tracing::info!(
        input = %input.display(),
        verbosity = cli.verbosity_level(),
        "Executing validation"
    );

    handlers::handle_validate(&input, &config)?;
    Ok(())
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let mut logging_config = config.logging.clone().with_verbosity(cli.verbosity_level());

    logging_config.merge_with_env();

    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    logging::init_logging(logging_config)
}
