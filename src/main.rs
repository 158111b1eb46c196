//! stepmanager: step development manager.
//!
//! This is the main entry point for the `stepmanager` CLI. It parses
//! arguments, dispatches to the generate or init flow, and turns errors
//! into a logged message and a non-zero exit code.

mod cli;
mod commands;
pub mod codegen;
pub mod config;
pub mod editor;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod process;
pub mod step;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(code) => return ExitCode::from(code as u8),
    };
    logging::init();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
