//! Editor integration: run-on-save extension install and settings patch.

pub mod extensions;
pub mod settings;


pub use extensions::{CodeCli, ExtensionManager, ExtensionStatus, ensure_extension};
pub use settings::{RunOnSaveConfig, patch_settings, settings_path};
