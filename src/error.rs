//! Error types for the wizard engine.
//!
//! Validation failures and configuration mismatches are deliberately not
//! errors: the former is surfaced through events and field markers, the
//! latter through warnings with best-effort degradation. Only conditions
//! that make a wizard unusable are real errors.

use thiserror::Error;

/// Errors raised by wizard construction and field access
#[derive(Error, Debug)]
pub enum WizardError {
    #[error("wizard definition has no steps")]
    NoSteps,

    #[error("step index {index} out of range (wizard has {total} steps)")]
    StepOutOfRange { index: usize, total: usize },

    #[error("step {step} has no field named '{name}'")]
    UnknownField { step: usize, name: String },
}
