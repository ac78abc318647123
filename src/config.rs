//! Wizard definition loading for the demo binary.
//!
//! Plays the "discovery" collaborator: turns a TOML file into the typed
//! descriptor list the engine consumes. Ships a built-in onboarding wizard
//! so the demo runs without any file at all.

use std::path::Path;

use anyhow::{Context, Result};

use stepflow::WizardDefinition;

/// Load a wizard definition from a TOML file
pub fn load_definition(path: &Path) -> Result<WizardDefinition> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read wizard definition {}", path.display()))?;
    let definition: WizardDefinition = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse wizard definition {}", path.display()))?;
    if definition.steps.is_empty() {
        anyhow::bail!("Wizard definition {} declares no steps", path.display());
    }
    Ok(definition)
}

/// The bundled demo wizard
pub fn builtin_definition() -> Result<WizardDefinition> {
    toml::from_str(include_str!("../demos/onboarding.toml"))
        .context("Failed to parse built-in demo definition")
}
