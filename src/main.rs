//! Graphkit - graph engine CLI
//!
//! Loads a graph description (JSON or YAML) and runs one traversal,
//! shortest-path, ordering, clique, export or recommendation command on it.

mod cli;
mod commands;
mod document;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, OutputFormat};
use graphkit_core::error::GraphError;
use graphkit_core::logging;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return reject_arguments(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match commands::dispatch::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&cli, &err),
    }
}

/// Handle a command line clap could not parse.
///
/// `--format` may not have been parsed yet, so a JSON request is read off the
/// raw arguments. Help and version output always go through clap.
fn reject_arguments(err: clap::Error) -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !err.use_stderr() || !wants_json(&args) {
        err.exit();
    }

    let error = if err.exit_code() == 2 {
        GraphError::UsageError(err.to_string())
    } else {
        GraphError::Other(err.to_string())
    };
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

fn report(cli: &Cli, err: &GraphError) -> ExitCode {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human if !cli.quiet => eprintln!("error: {}", err),
        OutputFormat::Human => {}
    }
    ExitCode::from(err.exit_code() as u8)
}

/// True when the arguments ask for JSON output, in either `--format json`
/// or `--format=json` form
fn wants_json(args: &[String]) -> bool {
    args.iter().enumerate().any(|(i, arg)| {
        arg == "--format=json" || (arg == "--format" && args.get(i + 1).is_some_and(|v| v == "json"))
    })
}
