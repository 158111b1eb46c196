//! Go config generation from a step definition.
//!
//! `generate_config` is the whole pipeline: load `step.yml`, turn each input
//! key into a field identifier, render the template and write
//! `step_config.go` next to the definition.

pub mod ident;
mod template;


pub use template::render;

use crate::config::Config;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::step::StepModel;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One generated field: the Go identifier and the env var it reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub ident: String,
    pub key: String,
}

impl Field {
    pub fn from_key(key: &str) -> Self {
        Self {
            ident: ident::field_identifier(key),
            key: key.to_string(),
        }
    }
}

/// Outcome of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// The file that was written.
    pub output_path: PathBuf,
    /// Fields in the order they were emitted.
    pub fields: Vec<Field>,
}

/// Build the field list for a parsed step, in input declaration order.
pub fn fields_for(step: &StepModel) -> Result<Vec<Field>> {
    Ok(step
        .input_keys()?
        .iter()
        .map(|key| Field::from_key(key))
        .collect())
}

/// Generate `config.output_file` inside `dir` from `config.step_file`.
///
/// Nothing is written unless the step definition loads and every input key
/// can be extracted. An existing output file is overwritten.
pub fn generate_config(dir: &Path, config: &Config) -> Result<GenerateReport> {
    info!("Generating config: {}", dir.display());

    let step = StepModel::load(dir.join(&config.step_file))?;
    if let Some(title) = &step.title {
        info!(step = %title, inputs = step.inputs.len(), "loaded step definition");
    }

    let fields = fields_for(&step)?;

    for field in fields.iter().filter(|f| !ident::is_usable_identifier(&f.ident)) {
        warn!(
            "input '{}' maps to field '{}', which is not a valid Go identifier; generated code will not compile",
            field.key, field.ident
        );
    }

    let collisions = ident::duplicate_identifiers(fields.iter().map(|f| f.key.as_str()));
    for (ident, keys) in &collisions {
        warn!(
            "inputs {} all map to field '{}'; generated code will not compile",
            keys.join(", "),
            ident
        );
    }

    let output_path = dir.join(&config.output_file);
    atomic_write_file(&output_path, &render(&fields))?;

    Ok(GenerateReport {
        output_path,
        fields,
    })
}
