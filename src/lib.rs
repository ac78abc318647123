//! stepflow - a step-wizard navigation engine.
//!
//! Sequences a user through an ordered set of form steps: forward moves are
//! gated on per-step validation, backward moves are free, direct jumps are
//! allowed within the reachable frontier, and every move is choreographed
//! through fade transitions that cannot strand the wizard mid-animation.
//! Step discovery, field-level rules beyond "is populated," and submission
//! all live outside this crate; hosts hand in a [`WizardDefinition`] and
//! listen for [`WizardEvent`]s.

pub mod controller;
pub mod descriptor;
pub mod error;
pub mod events;
pub mod guide;
pub mod indicator;
pub mod panels;
pub mod state;
pub mod transition;
pub mod validation;

pub use controller::Wizard;
pub use descriptor::{
    FieldDescriptor, GuidePaneDescriptor, IndicatorDescriptor, StepDescriptor, WizardDefinition,
};
pub use error::WizardError;
pub use events::WizardEvent;
pub use indicator::IndicatorState;
pub use panels::FadePhase;
pub use state::WizardState;
