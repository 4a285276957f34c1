//! Main entry point for the symscope CLI.
//!
//! Commands:
//! - `resolve`: Resolve a path without leaving a scope directory
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use error::CliError;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    match run(cli.command, &global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn run(command: cli::Command, global: &GlobalOptions) -> Result<(), CliError> {
    let config = utils::load_configuration(global)?;

    // Library diagnostics go through the log facade
    let logger = symscope::init_logger(global.verbose, global.quiet, config.log_mode.as_deref());
    if logger.install().is_err() {
        eprintln!("WARN: a logger was already installed");
    }

    match command {
        cli::Command::Resolve(cmd) => cmd.execute(global, &config),
        cli::Command::Completions(cmd) => cmd.execute(global),
    }
}
