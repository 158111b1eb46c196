//! Implementation of `stepmanager init`.
//!
//! # What `stepmanager init` does
//!
//! 1. Checks that the step directory contains `step.yml`
//! 2. Installs the run-on-save extension unless the editor already lists it
//! 3. Points the extension at `stepmanager -d ${fileDirname}` for `step.yml`
//! 4. Generates `step_config.go` once
//!
//! Each step aborts the whole command on failure; nothing is rolled back.


use super::generate::cmd_generate;
use crate::config::Config;
use crate::editor::{
    ExtensionManager, RunOnSaveConfig, ensure_extension, patch_settings, settings_path,
};
use crate::error::{Result, StepManagerError};
use std::path::Path;
use tracing::info;

/// Execute the `stepmanager init` command for the step in `dir`.
pub fn cmd_init<M>(dir: &Path, config: &Config, editor: &M) -> Result<()>
where
    M: ExtensionManager + ?Sized,
{
    let step_path = dir.join(&config.step_file);
    if !step_path.is_file() {
        return Err(StepManagerError::NotFound {
            what: config.step_file.clone(),
            path: step_path,
        });
    }

    info!("Installing code extension");
    ensure_extension(editor, &config.extension_id)?;
    info!("- Done");

    info!("Configure code settings");
    let path = settings_path(config)?;
    patch_settings(&path, &config.extension_id, &RunOnSaveConfig::for_config(config))?;
    info!("Updated {}", path.display());

    cmd_generate(dir, config)
}
