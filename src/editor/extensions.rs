//! Editor extension presence check and install.
//!
//! The editor CLI sits behind [`ExtensionManager`] so the orchestration can
//! be exercised without a real `code` binary.

use crate::error::Result;
use crate::process::run_command;
use tracing::{info, warn};

/// The two editor CLI capabilities setup relies on.
pub trait ExtensionManager {
    /// Raw listing of installed extensions (combined stdout/stderr).
    fn list_installed(&self) -> Result<String>;

    /// Install an extension by id.
    fn install(&self, extension_id: &str) -> Result<()>;
}

/// VS Code compatible CLI (`code`, `codium`, ...).
#[derive(Debug, Clone)]
pub struct CodeCli {
    program: String,
}

impl CodeCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ExtensionManager for CodeCli {
    fn list_installed(&self) -> Result<String> {
        Ok(run_command(&self.program, &["--list-extensions"])?.combined)
    }

    fn install(&self, extension_id: &str) -> Result<()> {
        run_command(&self.program, &["--install-extension", extension_id])?;
        Ok(())
    }
}

/// What `ensure_extension` had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionStatus {
    AlreadyInstalled,
    Installed,
}

/// Whether `listing` mentions `extension_id`, ignoring case.
pub fn is_listed(listing: &str, extension_id: &str) -> bool {
    listing
        .to_lowercase()
        .contains(&extension_id.to_lowercase())
}

/// Install `extension_id` unless the manager already lists it.
pub fn ensure_extension<M>(manager: &M, extension_id: &str) -> Result<ExtensionStatus>
where
    M: ExtensionManager + ?Sized,
{
    let listing = manager.list_installed()?;

    if is_listed(&listing, extension_id) {
        info!("Already installed, skipping...");
        return Ok(ExtensionStatus::AlreadyInstalled);
    }

    warn!("{} is not installed yet, installing...", extension_id);
    manager.install(extension_id)?;
    Ok(ExtensionStatus::Installed)
}
