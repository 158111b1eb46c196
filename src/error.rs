//! Error types for the stepmanager CLI.
//!
//! Uses thiserror for derive macros. Every variant names the operation that
//! was attempted and the underlying cause, and every variant is fatal.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for stepmanager operations.
#[derive(Error, Debug)]
pub enum StepManagerError {
    /// A required file does not exist.
    #[error("{} not found: {}", .what, .path.display())]
    NotFound { what: String, path: PathBuf },

    /// A file exists but could not be read.
    #[error("failed to read '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be deserialized.
    #[error("failed to parse '{}': {}", .path.display(), .message)]
    Parse { path: PathBuf, message: String },

    /// The step definition parsed, but one of its inputs is malformed.
    #[error("invalid input #{}: {}", .index + 1, .message)]
    InvalidInput { index: usize, message: String },

    /// A file could not be written.
    #[error("failed to write '{}': {}", .path.display(), .message)]
    Write { path: PathBuf, message: String },

    /// An external command could not be started.
    #[error("failed to run command: $ {command}, error: {source}")]
    ProcessStart {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// An external command exited with a non-zero status.
    #[error("command failed: $ {command} (exit code {code}), output: {output}")]
    ProcessFailed {
        command: String,
        code: i32,
        output: String,
    },

    /// Invalid tool configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl StepManagerError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }
}

/// Result type alias for stepmanager operations.
pub type Result<T> = std::result::Result<T, StepManagerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_exits_with_failure() {
        let errors = [
            StepManagerError::NotFound {
                what: "step.yml".to_string(),
                path: PathBuf::from("/tmp/step.yml"),
            },
            StepManagerError::Parse {
                path: PathBuf::from("step.yml"),
                message: "bad yaml".to_string(),
            },
            StepManagerError::ProcessFailed {
                command: "code --list-extensions".to_string(),
                code: 2,
                output: String::new(),
            },
            StepManagerError::Config("empty editor".to_string()),
        ];
        for err in &errors {
            assert_eq!(err.exit_code(), exit_codes::FAILURE);
        }
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = StepManagerError::NotFound {
            what: "step.yml".to_string(),
            path: PathBuf::from("/work/step.yml"),
        };
        assert_eq!(err.to_string(), "step.yml not found: /work/step.yml");

        let err = StepManagerError::InvalidInput {
            index: 0,
            message: "no environment key specified".to_string(),
        };
        assert_eq!(err.to_string(), "invalid input #1: no environment key specified");

        let err = StepManagerError::ProcessFailed {
            command: "code --install-extension emeraldwalk.runonsave".to_string(),
            code: 1,
            output: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "command failed: $ code --install-extension emeraldwalk.runonsave (exit code 1), output: boom"
        );
    }

    #[test]
    fn read_error_keeps_io_source() {
        use std::error::Error as _;

        let err = StepManagerError::Read {
            path: PathBuf::from("step.yml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("denied"));
    }
}
