//! Runtime configuration for stepmanager.
//!
//! Every value has a default matching the Bitrise step layout and VS Code's
//! run-on-save extension. Two environment variables override the
//! machine-specific parts:
//!
//! - `STEPMANAGER_EDITOR`: editor CLI used to list/install extensions (default `code`)
//! - `STEPMANAGER_SETTINGS_PATH`: editor `settings.json` location
//!   (default: the platform's VS Code user settings file)

use crate::error::{Result, StepManagerError};
use std::path::PathBuf;

/// Environment variable overriding the editor executable.
pub const EDITOR_ENV: &str = "STEPMANAGER_EDITOR";

/// Environment variable overriding the editor settings file path.
pub const SETTINGS_PATH_ENV: &str = "STEPMANAGER_SETTINGS_PATH";

/// Configuration shared by the generate and init commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Step definition file name inside the working directory.
    pub step_file: String,

    /// Generated source file name inside the working directory.
    pub output_file: String,

    /// Editor CLI executable.
    pub editor_command: String,

    /// Extension that re-runs commands on save.
    pub extension_id: String,

    /// Command the extension runs when the step file is saved.
    /// `${fileDirname}` is expanded by the extension, not by us.
    pub on_save_command: String,

    /// Explicit settings file path; `None` means the platform default.
    pub settings_path: Option<PathBuf>,
}

fn default_step_file() -> String {
    "step.yml".to_string()
}
fn default_output_file() -> String {
    "step_config.go".to_string()
}
fn default_editor_command() -> String {
    "code".to_string()
}
fn default_extension_id() -> String {
    "emeraldwalk.runonsave".to_string()
}
fn default_on_save_command() -> String {
    "stepmanager -d ${fileDirname}".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_file: default_step_file(),
            output_file: default_output_file(),
            editor_command: default_editor_command(),
            extension_id: default_extension_id(),
            on_save_command: default_on_save_command(),
            settings_path: None,
        }
    }
}

impl Config {
    /// Build the config from defaults plus process environment overrides.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from defaults plus overrides returned by `lookup`.
    ///
    /// Empty override values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(editor) = get(EDITOR_ENV) {
            config.editor_command = editor;
        }
        if let Some(path) = get(SETTINGS_PATH_ENV) {
            config.settings_path = Some(PathBuf::from(path));
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// File names must be bare names (no path separators), and the editor
    /// command and extension id must be non-empty.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("step_file", &self.step_file),
            ("output_file", &self.output_file),
        ] {
            if value.is_empty() || value.contains(['/', '\\']) {
                return Err(StepManagerError::Config(format!(
                    "{} must be a bare file name (found '{}')",
                    name, value
                )));
            }
        }

        if self.editor_command.trim().is_empty() {
            return Err(StepManagerError::Config(
                "editor_command must not be empty".to_string(),
            ));
        }

        if self.extension_id.trim().is_empty() {
            return Err(StepManagerError::Config(
                "extension_id must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
