//! External command runner.
//!
//! Wraps `std::process::Command` with combined, trimmed output capture and
//! structured errors. The editor CLI is the only external program the tool
//! talks to, and every call goes through here.

use crate::error::{Result, StepManagerError};
use std::process::{Command, Output};
use tracing::debug;

/// Result of a successful command execution.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Standard output followed by standard error, trimmed.
    pub combined: String,
}

impl CommandOutput {
    fn from_output(output: &Output) -> Self {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let combined = match (stdout.trim(), stderr.trim()) {
            (out, "") => out.to_string(),
            ("", err) => err.to_string(),
            (out, err) => format!("{}\n{}", out, err),
        };
        Self { combined }
    }
}

/// Render a command line the way a user would type it in a shell.
pub fn printable_command(program: &str, args: &[&str]) -> String {
    let mut words = Vec::with_capacity(args.len() + 1);
    words.push(program);
    words.extend_from_slice(args);
    shell_words::join(words)
}

/// Run `program` with `args` and wait for it to finish.
///
/// # Returns
///
/// * `Ok(CommandOutput)` - The command exited with status 0
/// * `Err(StepManagerError::ProcessStart)` - The command could not be spawned
/// * `Err(StepManagerError::ProcessFailed)` - The command exited non-zero
pub fn run_command(program: &str, args: &[&str]) -> Result<CommandOutput> {
    let command = printable_command(program, args);
    debug!(%command, "running command");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| StepManagerError::ProcessStart {
            command: command.clone(),
            source,
        })?;

    let captured = CommandOutput::from_output(&output);

    if output.status.success() {
        Ok(captured)
    } else {
        Err(StepManagerError::ProcessFailed {
            command,
            code: output.status.code().unwrap_or(-1),
            output: captured.combined,
        })
    }
}
