//! Exit code constants for the stepmanager CLI.
//!
//! The tool has a flat failure model:
//! - 0: Success
//! - 1: Any failure (missing files, parse errors, write errors, subprocess errors)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any failure. The cause is logged to stderr before exiting.
pub const FAILURE: i32 = 1;
