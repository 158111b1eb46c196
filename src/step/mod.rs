//! Step definition loading.
//!
//! Reads `step.yml` and exposes its input keys in declaration order, the
//! only part of the definition the generator consumes.

mod model;


pub use model::{EnvironmentItem, OPTIONS_KEY, StepModel};

use crate::error::{Result, StepManagerError};
use crate::fs::read_to_string;
use std::path::Path;

impl StepModel {
    /// Parse a step definition from YAML.
    ///
    /// `path` is only used for error messages. An empty document is a step
    /// with no inputs.
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml).map_err(|e| StepManagerError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load and parse a step definition file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let what = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "step definition".to_string());

        let content = read_to_string(path, &what)?;
        Self::from_yaml(&content, path)
    }

    /// Input keys in declaration order.
    ///
    /// Fails on the first input whose key cannot be extracted.
    pub fn input_keys(&self) -> Result<Vec<String>> {
        self.inputs
            .iter()
            .enumerate()
            .map(|(index, input)| {
                input
                    .key_value_pair()
                    .map(|(key, _)| key)
                    .map_err(|message| StepManagerError::InvalidInput { index, message })
            })
            .collect()
    }
}
