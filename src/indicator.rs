//! Clickable step markers and their derived visual states.
//!
//! Indicators are display-only derivation plus a click-to-jump mapping; the
//! navigation controller remains the sole authority on whether a jump is
//! accepted. An indicator bound to a step number with no matching step is a
//! configuration mismatch: warned at construction, derived as locked, and
//! its clicks are dropped.

use tracing::{debug, warn};

use crate::descriptor::IndicatorDescriptor;
use crate::state::WizardState;

/// Derived visual state of one indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    /// Marks the step currently shown
    Current,
    /// Already visited; clicking jumps straight there
    Reachable,
    /// Not yet reachable through the indicator row
    Locked,
}

/// The set of markers bound to 1-based step numbers
#[derive(Debug)]
pub struct IndicatorBinding {
    numbers: Vec<usize>,
    total_steps: usize,
}

impl IndicatorBinding {
    pub fn new(descriptors: &[IndicatorDescriptor], total_steps: usize) -> Self {
        if descriptors.len() != total_steps {
            warn!(
                indicators = descriptors.len(),
                steps = total_steps,
                "indicator count differs from step count"
            );
        }
        for desc in descriptors {
            if desc.step == 0 || desc.step > total_steps {
                warn!(
                    step = desc.step,
                    steps = total_steps,
                    "indicator bound to a step number with no matching step"
                );
            }
        }

        Self {
            numbers: descriptors.iter().map(|d| d.step).collect(),
            total_steps,
        }
    }

    /// Derive `(step_number, state)` for every indicator from a state snapshot
    pub fn states(&self, state: &WizardState) -> Vec<(usize, IndicatorState)> {
        self.numbers
            .iter()
            .map(|&number| {
                let derived = if number == 0 || number > self.total_steps {
                    IndicatorState::Locked
                } else if number - 1 == state.current_index {
                    IndicatorState::Current
                } else if number - 1 <= state.max_reached_index {
                    IndicatorState::Reachable
                } else {
                    IndicatorState::Locked
                };
                (number, derived)
            })
            .collect()
    }

    /// Map a clicked 1-based indicator number to a 0-based jump target
    pub fn click_target(&self, number: usize) -> Option<usize> {
        if number == 0 || number > self.total_steps {
            debug!(number, "click on indicator without a matching step dropped");
            return None;
        }
        Some(number - 1)
    }
}
