//! Implementation of `stepmanager -d <dir>`.

use crate::codegen::generate_config;
use crate::config::Config;
use crate::error::Result;
use std::path::Path;
use tracing::info;

/// Regenerate the config file for the step in `dir`.
pub fn cmd_generate(dir: &Path, config: &Config) -> Result<()> {
    let report = generate_config(dir, config)?;
    info!(
        "Wrote {} ({} inputs)",
        report.output_path.display(),
        report.fields.len()
    );
    Ok(())
}
