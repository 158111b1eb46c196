//! Command implementations for stepmanager.
//!
//! Routes the parsed CLI to the generate or init flow. The working
//! directory is resolved here once and passed down explicitly.

mod generate;
mod init;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;
use std::path::PathBuf;

pub use generate::cmd_generate;
pub use init::cmd_init;

/// Dispatch a parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;

    match cli.command {
        None => {
            // clap enforces --dir when no subcommand is given.
            let dir = cli.dir.unwrap_or_else(|| PathBuf::from("."));
            cmd_generate(&dir, &config)
        }
        Some(Command::Init(args)) => {
            let dir = args
                .dir
                .or(cli.dir)
                .unwrap_or_else(|| PathBuf::from("."));
            let editor = crate::editor::CodeCli::new(config.editor_command.clone());
            cmd_init(&dir, &config, &editor)
        }
    }
}
