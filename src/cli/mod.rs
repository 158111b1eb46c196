//! CLI argument parsing for stepmanager.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::exit_codes;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Step development manager.
///
/// Generates `step_config.go` from the inputs declared in `step.yml`, so a
/// Go step can read every input through a typed `inputs` struct.
#[derive(Parser, Debug)]
#[command(name = "stepmanager")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Step directory containing step.yml; step_config.go is written here.
    #[arg(short, long, value_name = "DIR", required = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prepare VS Code and the step repo for step input handling.
    ///
    /// Installs the run-on-save extension if missing, configures it to
    /// regenerate the config whenever step.yml is saved, then generates
    /// the config once.
    Init(InitArgs),
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Step directory (default: current directory).
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// On failure clap's message is printed and the process exit code is
    /// returned: 0 for `--help`/`--version`, `FAILURE` for usage errors.
    pub fn parse_args() -> Result<Self, i32> {
        Cli::try_parse().map_err(|err| {
            let _ = err.print();
            usage_exit_code(&err)
        })
    }
}

/// Map a clap error onto the tool's exit codes.
///
/// clap uses 2 for usage errors; everything that is not a help or version
/// display becomes `FAILURE`.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.exit_code() == exit_codes::SUCCESS {
        exit_codes::SUCCESS
    } else {
        exit_codes::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_short_flag() {
        let cli = Cli::try_parse_from(["stepmanager", "-d", "/work/step"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/work/step")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_generate_long_flag() {
        let cli = Cli::try_parse_from(["stepmanager", "--dir", "step"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("step")));
    }

    #[test]
    fn generate_requires_dir() {
        let err = Cli::try_parse_from(["stepmanager"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn parse_init_without_dir() {
        let cli = Cli::try_parse_from(["stepmanager", "init"]).unwrap();
        assert!(cli.dir.is_none());
        match cli.command {
            Some(Command::Init(args)) => assert!(args.dir.is_none()),
            other => panic!("Expected Init command, got {:?}", other),
        }
    }

    #[test]
    fn parse_init_with_dir() {
        let cli = Cli::try_parse_from(["stepmanager", "init", "-d", "step"]).unwrap();
        match cli.command {
            Some(Command::Init(args)) => assert_eq!(args.dir, Some(PathBuf::from("step"))),
            other => panic!("Expected Init command, got {:?}", other),
        }
    }

    #[test]
    fn parse_root_dir_before_init() {
        let cli = Cli::try_parse_from(["stepmanager", "-d", "step", "init"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("step")));
        assert!(matches!(cli.command, Some(Command::Init(_))));
    }

    #[test]
    fn missing_dir_exits_with_failure() {
        let err = Cli::try_parse_from(["stepmanager"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(usage_exit_code(&err), exit_codes::FAILURE);
    }

    #[test]
    fn invalid_arguments_exit_with_failure() {
        let err = Cli::try_parse_from(["stepmanager", "-d"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), exit_codes::FAILURE);

        let err = Cli::try_parse_from(["stepmanager", "bogus"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), exit_codes::FAILURE);
    }

    #[test]
    fn help_and_version_exit_with_success() {
        let err = Cli::try_parse_from(["stepmanager", "--help"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), exit_codes::SUCCESS);

        let err = Cli::try_parse_from(["stepmanager", "--version"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), exit_codes::SUCCESS);

        let err = Cli::try_parse_from(["stepmanager", "init", "--help"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), exit_codes::SUCCESS);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["stepmanager", "-d", "x", "--force"]).is_err());
    }
}
