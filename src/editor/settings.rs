//! Editor settings patch.
//!
//! `settings.json` is treated as an opaque, insertion-ordered map of raw
//! JSON values. Only the run-on-save key is replaced; every other key is
//! written back exactly as it was parsed, in its original position.

use crate::config::Config;
use crate::error::{Result, StepManagerError};
use crate::fs::{atomic_write, read_to_string};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Settings file location relative to the platform config directory.
const SETTINGS_RELATIVE_PATH: [&str; 3] = ["Code", "User", "settings.json"];

/// One run-on-save rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOnSaveCommand {
    /// Regex matched against the saved file path.
    #[serde(rename = "match")]
    pub match_pattern: String,
    pub is_async: bool,
    pub cmd: String,
}

/// Value stored under the extension's settings key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOnSaveConfig {
    pub commands: Vec<RunOnSaveCommand>,
}

impl RunOnSaveConfig {
    /// The single rule regenerating the config whenever the step file is saved.
    pub fn for_config(config: &Config) -> Self {
        Self {
            commands: vec![RunOnSaveCommand {
                match_pattern: config.step_file.clone(),
                is_async: true,
                cmd: config.on_save_command.clone(),
            }],
        }
    }
}

/// Resolve the editor settings file: the configured override, or the
/// platform's VS Code user settings.
///
/// - macOS: `~/Library/Application Support/Code/User/settings.json`
/// - Linux: `$XDG_CONFIG_HOME/Code/User/settings.json` (or `~/.config/...`)
/// - Windows: `%APPDATA%\Code\User\settings.json`
pub fn settings_path(config: &Config) -> Result<PathBuf> {
    if let Some(path) = &config.settings_path {
        return Ok(path.clone());
    }

    let mut path = dirs::config_dir().ok_or_else(|| {
        StepManagerError::Config(
            "cannot determine the user config directory; set STEPMANAGER_SETTINGS_PATH"
                .to_string(),
        )
    })?;
    path.extend(SETTINGS_RELATIVE_PATH);
    Ok(path)
}

/// Replace `key` in the JSON object at `path` with `patch`.
///
/// Fails if the file is missing, is not a JSON object, or cannot be written.
pub fn patch_settings<T: Serialize>(path: &Path, key: &str, patch: &T) -> Result<()> {
    let content = read_to_string(path, "editor settings")?;
    let mut settings = parse_settings(&content, path)?;

    let value = serde_json::to_value(patch).map_err(|e| StepManagerError::Write {
        path: path.to_path_buf(),
        message: format!("failed to serialize '{}': {}", key, e),
    })?;
    settings.insert(key.to_string(), value);

    atomic_write(path, &to_settings_json(&settings, path)?)
}

fn parse_settings(content: &str, path: &Path) -> Result<Map<String, Value>> {
    serde_json::from_str(content).map_err(|e| StepManagerError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Serialize with a single-space indent, no trailing newline.
fn to_settings_json(settings: &Map<String, Value>, path: &Path) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    settings
        .serialize(&mut ser)
        .map_err(|e| StepManagerError::Write {
            path: path.to_path_buf(),
            message: format!("failed to serialize settings: {}", e),
        })?;
    Ok(buf)
}
