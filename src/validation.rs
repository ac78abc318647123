//! Required-input validation for a single step.
//!
//! The gate is a predicate with marker side effects: it clears and re-applies
//! the error flag on every inspected field, and on failure identifies the
//! first invalid field for focus. It never accepts or rejects navigation
//! itself; the navigation controller consults it.

use std::sync::{Arc, Mutex};

use crate::panels::PanelSet;

/// Result of one validation pass over a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub step: usize,
    /// Name of the first unsatisfied required field, `None` when the step passed
    pub first_invalid: Option<String>,
}

impl ValidationOutcome {
    pub fn passed(&self) -> bool {
        self.first_invalid.is_none()
    }
}

/// Checks whether a step's required inputs are currently satisfied
pub struct ValidationGate {
    panels: Arc<Mutex<PanelSet>>,
}

impl ValidationGate {
    pub fn new(panels: Arc<Mutex<PanelSet>>) -> Self {
        Self { panels }
    }

    /// Re-validate every field of `step_index`, updating error markers.
    ///
    /// A step index with no panel passes vacuously; out-of-range indices are
    /// prevented upstream by the controller's bounds checks.
    pub fn validate(&self, step_index: usize) -> ValidationOutcome {
        let mut panels = self.panels.lock().unwrap();
        let mut first_invalid = None;

        if let Some(panel) = panels.steps.get_mut(step_index) {
            for field in &mut panel.fields {
                field.error = !field.is_satisfied();
                if field.error && first_invalid.is_none() {
                    first_invalid = Some(field.name.clone());
                }
            }
        }

        ValidationOutcome {
            step: step_index,
            first_invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FieldDescriptor, StepDescriptor};

    fn gate_for(fields: Vec<FieldDescriptor>) -> ValidationGate {
        let steps = vec![StepDescriptor {
            title: "Account".to_string(),
            fields,
        }];
        ValidationGate::new(Arc::new(Mutex::new(PanelSet::new(&steps, &[]))))
    }

    fn field(name: &str, required: bool, value: &str) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            required,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_empty_required_field_fails_and_is_marked() {
        let gate = gate_for(vec![field("email", true, "")]);
        let outcome = gate.validate(0);

        assert!(!outcome.passed());
        assert_eq!(outcome.first_invalid.as_deref(), Some("email"));
        assert!(gate.panels.lock().unwrap().steps[0].fields[0].error);
    }

    #[test]
    fn test_first_invalid_is_reported_in_field_order() {
        let gate = gate_for(vec![
            field("email", true, "a@b.c"),
            field("name", true, ""),
            field("role", true, ""),
        ]);
        let outcome = gate.validate(0);
        assert_eq!(outcome.first_invalid.as_deref(), Some("name"));
    }

    #[test]
    fn test_markers_clear_once_fields_are_populated() {
        let gate = gate_for(vec![field("email", true, "")]);
        assert!(!gate.validate(0).passed());

        gate.panels.lock().unwrap().steps[0].fields[0].value = "a@b.c".to_string();
        let outcome = gate.validate(0);

        assert!(outcome.passed());
        assert!(!gate.panels.lock().unwrap().steps[0].fields[0].error);
    }

    #[test]
    fn test_optional_fields_never_block() {
        let gate = gate_for(vec![field("note", false, "")]);
        assert!(gate.validate(0).passed());
    }

    #[test]
    fn test_step_without_fields_passes_vacuously() {
        let gate = gate_for(vec![]);
        assert!(gate.validate(0).passed());
    }
}
