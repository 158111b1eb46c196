//! Filesystem utilities for stepmanager.
//!
//! Reads map io errors onto the flat error taxonomy; writes go through a
//! temp-file-then-rename so a generated file or the editor settings are
//! never observed half-written.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file};

use crate::error::{Result, StepManagerError};
use std::io::ErrorKind;
use std::path::Path;

/// Read a UTF-8 file, distinguishing a missing file from other read failures.
///
/// `what` names the file in the not-found message (e.g. "step.yml").
pub fn read_to_string<P: AsRef<Path>>(path: P, what: &str) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StepManagerError::NotFound {
                what: what.to_string(),
                path: path.to_path_buf(),
            }
        } else {
            StepManagerError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_to_string(temp_dir.path().join("step.yml"), "step.yml").unwrap_err();
        assert!(matches!(err, StepManagerError::NotFound { .. }));
    }

    #[test]
    fn test_read_directory_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_to_string(temp_dir.path(), "step.yml").unwrap_err();
        assert!(matches!(err, StepManagerError::Read { .. }));
    }

    #[test]
    fn test_read_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("step.yml");
        std::fs::write(&path, "inputs: []\n").unwrap();
        assert_eq!(read_to_string(&path, "step.yml").unwrap(), "inputs: []\n");
    }
}
