//! # create-microservice
//!
//! Scaffolds a new usvc-lib microservice project.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (`--help` / `--version` print and exit 0).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Generate shell completions and exit, if asked.
//! 4. Load configuration (file + defaults).
//! 5. Build the [`OutputManager`].
//! 6. Run the scaffold command.
//! 7. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                          |
//! |------|--------------------------------------------------|
//! |  0   | Success (a failed git step is only a warning)    |
//! |  1   | Invalid name, existing directory, I/O failure    |
//! |  2   | Argument-parse error                             |
//! |  4   | Configuration error                              |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::Cli,
    commands::create::CreateOptions,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // ── 1. Parse arguments ────────────────────────────────────────────────
    // Help and version carry exit code 0; real parse failures carry 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let mut use_color = !cli.global.no_color;

    // ── 3. Completions need neither config nor a name ─────────────────────
    if let Some(shell) = cli.completions {
        return match commands::completions::execute(shell) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => handle_error(e, verbose, use_color),
        };
    }

    // ── 4. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose, use_color),
    };
    use_color &= !config.output.no_color;

    // ── 5. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 6. Run + 7. Error handling ────────────────────────────────────────
    match run(cli, config, &output) {
        Ok(()) => {
            info!("create-microservice completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, use_color),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let Some(name) = cli.name.clone() else {
        // clap enforces `--name` unless `--completions` was given.
        return Err(CliError::InvalidProjectName {
            name: String::new(),
            reason: "no project name given".into(),
        });
    };

    let options = CreateOptions::resolve(name, &cli, &config);
    let cwd = std::env::current_dir()?;
    commands::create::execute(options, &cwd, output)
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// `use_color` reflects `--no-color`, `NO_COLOR` and `[output] no_color`;
/// colour is further limited to a terminal stderr.
fn handle_error(err: CliError, verbose: bool, use_color: bool) -> ExitCode {
    err.log();

    let use_color = use_color && std::io::IsTerminal::is_terminal(&std::io::stderr());
    eprint!("{}", error_message(&err, verbose, use_color));

    ExitCode::from(err.exit_code())
}

fn error_message(err: &CliError, verbose: bool, use_color: bool) -> String {
    if use_color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
