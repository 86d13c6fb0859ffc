//! Pathfinder - shortest paths over weighted undirected graphs
//!
//! Builds a graph from edges given on the command line and prints the
//! minimum-weight path between two vertices.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use pathfinder_core::config::PathfinderConfig;
use pathfinder_core::error::{ExitCode as PathfinderExitCode, PathfinderError};
use pathfinder_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is a global flag, but clap may fail parsing before we can
            // inspect `Cli.format`. If the user requested JSON output, emit a
            // structured error envelope.
            if argv_format_json {
                let error = match err.kind() {
                    // Help and version are informational, not errors - let clap handle them
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::ArgumentConflict
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        PathfinderError::UsageError(err.to_string())
                    }
                    _ => PathfinderError::Other(err.to_string()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    let config = PathfinderConfig::resolve(cli.config.as_deref());

    // Command-line flags win over the config file
    let (log_level, log_json) = match &config {
        Ok(config) => (
            cli.log_level.clone().or_else(|| config.log.level.clone()),
            cli.log_json || config.log.json,
        ),
        Err(_) => (cli.log_level.clone(), cli.log_json),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, log_level.as_deref(), log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = config.and_then(|config| commands::dispatch::run(&cli, &config, start));

    match result {
        Ok(()) => ExitCode::from(PathfinderExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
