//! Lifecycle events fired outward by the wizard.

/// Event emitted over the wizard's event channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// The wizard moved to a new step. Fired as soon as a navigation
    /// request is accepted, before the visual transition finishes.
    StepChanged { index: usize },
    /// A forward move was blocked; `first_invalid` names the field that
    /// should receive focus.
    ValidationFailed { step: usize, first_invalid: String },
}
