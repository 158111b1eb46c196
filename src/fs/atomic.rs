//! Atomic file writes.
//!
//! All writes follow the same pattern:
//! 1. Write content to `.{filename}.tmp` in the target's directory
//! 2. Sync the file to disk
//! 3. Rename it over the target
//!
//! `std::fs::rename` replaces an existing destination on both POSIX and
//! Windows. Unlike a plain `create`, the parent directory is never created:
//! writing into a missing directory is an error.
//!
//! A symlinked target is resolved first so the link survives and the file
//! it points at receives the content. An existing target's permissions are
//! copied onto the temp file before the rename.

use crate::error::{Result, StepManagerError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, replacing any existing content.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = resolve_target(path.as_ref())?;
    let path = path.as_path();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        return Err(write_error(
            path,
            format!("directory '{}' does not exist", parent.display()),
        ));
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(path, &temp_path, content)?;
    copy_permissions(path, &temp_path)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        write_error(path, format!("failed to replace file: {}", e))
    })
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Follow a symlinked target to the file it points at.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path)
            .map_err(|e| write_error(path, format!("failed to resolve symlink: {}", e))),
        _ => Ok(path.to_path_buf()),
    }
}

/// Give `temp_path` the permissions of the existing `target`, if any.
fn copy_permissions(target: &Path, temp_path: &Path) -> Result<()> {
    let Ok(meta) = fs::metadata(target) else {
        return Ok(());
    };

    fs::set_permissions(temp_path, meta.permissions()).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        write_error(target, format!("failed to copy permissions: {}", e))
    })
}

fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| write_error(target, "invalid file path".to_string()))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(target: &Path, temp_path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(temp_path).map_err(|e| {
        write_error(
            target,
            format!("failed to create '{}': {}", temp_path.display(), e),
        )
    })?;

    file.write_all(content)
        .and_then(|_| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(temp_path);
            write_error(target, e.to_string())
        })
}

fn write_error(path: &Path, message: String) -> StepManagerError {
    StepManagerError::Write {
        path: path.to_path_buf(),
        message,
    }
}
