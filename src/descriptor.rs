//! Typed descriptors consumed at wizard construction.
//!
//! Discovery of steps, indicators, and guide panes is an external
//! collaborator's job; whatever produces them (the demo binary loads them
//! from a TOML file) hands the wizard one `WizardDefinition` up front.
//! Indicator and guide-pane numbers are 1-based, matching how they are
//! written in a definition file; step indices inside the engine are 0-based.

use serde::{Deserialize, Serialize};

/// One input within a step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// Required fields gate forward navigation until populated
    #[serde(default)]
    pub required: bool,
    /// Initial value, if the field comes pre-filled
    #[serde(default)]
    pub value: String,
}

/// One page of the wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepDescriptor {
    pub title: String,
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldDescriptor>,
}

/// A clickable marker bound to a 1-based step number
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IndicatorDescriptor {
    pub step: usize,
}

/// Auxiliary content bound to a 1-based step number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuidePaneDescriptor {
    pub step: usize,
    pub content: String,
}

/// Complete wizard definition, built once by the discovery collaborator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WizardDefinition {
    #[serde(rename = "step")]
    pub steps: Vec<StepDescriptor>,
    #[serde(default, rename = "indicator")]
    pub indicators: Vec<IndicatorDescriptor>,
    #[serde(default, rename = "guide")]
    pub guides: Vec<GuidePaneDescriptor>,
}

impl WizardDefinition {
    /// Indicators as declared, or one per step when none were declared
    pub fn effective_indicators(&self) -> Vec<IndicatorDescriptor> {
        if self.indicators.is_empty() {
            (1..=self.steps.len())
                .map(|step| IndicatorDescriptor { step })
                .collect()
        } else {
            self.indicators.clone()
        }
    }
}
