//! Core wizard state: position, frontier, and the transition lock.
//!
//! One `WizardState` exists per wizard instance, created from the discovered
//! step count and mutated only through the navigation entry points. The
//! `is_transitioning` flag is a non-blocking try-lock: requests that arrive
//! while it is held are dropped, never queued.

use crate::error::WizardError;

/// Snapshot-able wizard position state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardState {
    /// 0-based index of the step the wizard currently shows
    pub current_index: usize,
    /// Highest index ever made current in this session; never decreases
    pub max_reached_index: usize,
    /// Transition lock; true only while one transition is in flight
    pub is_transitioning: bool,
    /// Immutable after construction
    pub total_steps: usize,
}

impl WizardState {
    pub fn new(total_steps: usize) -> Result<Self, WizardError> {
        if total_steps == 0 {
            return Err(WizardError::NoSteps);
        }
        Ok(Self {
            current_index: 0,
            max_reached_index: 0,
            is_transitioning: false,
            total_steps,
        })
    }

    /// Whether a jump to `index` is within the reachable frontier:
    /// already visited, current, or exactly one step beyond.
    pub fn is_reachable(&self, index: usize) -> bool {
        index < self.total_steps && index <= self.max_reached_index + 1
    }

    /// Commit an accepted navigation: position moves synchronously and the
    /// transition lock engages before any animation starts.
    pub(crate) fn advance_to(&mut self, target: usize) {
        debug_assert!(target < self.total_steps);
        self.max_reached_index = self.max_reached_index.max(target);
        self.current_index = target;
        self.is_transitioning = true;
    }

    pub(crate) fn release_lock(&mut self) {
        self.is_transitioning = false;
    }
}
