use crate::editor::ExtensionManager;
use crate::error::{Result, StepManagerError};
use std::cell::RefCell;
use std::path::Path;
use tempfile::TempDir;

pub(crate) const SSH_STEP_YML: &str = r#"title: Activate SSH key
summary: Adds a private SSH key to the ssh-agent
inputs:
  - ssh_rsa_private_key: $SSH_RSA_PRIVATE_KEY
    opts:
      title: SSH private key
      is_required: true
  - verbose: "no"
    opts:
      value_options: ["yes", "no"]
"#;

/// Temp directory holding `step.yml` with the given content.
pub(crate) fn create_step_dir(step_yml: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("step.yml"), step_yml).unwrap();
    temp_dir
}

pub(crate) fn write_settings(path: &Path, json: &str) {
    std::fs::write(path, json).unwrap();
}

pub(crate) fn read_settings(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// In-memory extension manager that records install calls.
#[derive(Default)]
pub(crate) struct FakeExtensions {
    pub listing: String,
    pub fail_list: bool,
    pub fail_install: bool,
    pub installs: RefCell<Vec<String>>,
}

impl FakeExtensions {
    pub(crate) fn with_listing(listing: &str) -> Self {
        Self {
            listing: listing.to_string(),
            ..Self::default()
        }
    }
}

impl ExtensionManager for FakeExtensions {
    fn list_installed(&self) -> Result<String> {
        if self.fail_list {
            return Err(StepManagerError::ProcessFailed {
                command: "code --list-extensions".to_string(),
                code: 1,
                output: "list failed".to_string(),
            });
        }
        Ok(self.listing.clone())
    }

    fn install(&self, extension_id: &str) -> Result<()> {
        if self.fail_install {
            return Err(StepManagerError::ProcessFailed {
                command: format!("code --install-extension {}", extension_id),
                code: 1,
                output: "install failed".to_string(),
            });
        }
        self.installs.borrow_mut().push(extension_id.to_string());
        Ok(())
    }
}
