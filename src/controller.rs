//! The navigation state machine.
//!
//! `Wizard` owns the current position, the highest position ever reached,
//! and the transition lock, and orchestrates the gate, coordinator, and
//! bindings on every navigation request. One instance per wizard mount; no
//! globals, so independent wizards coexist freely.
//!
//! Entry points are synchronous and non-blocking: an accepted request
//! commits the position change immediately (indicator state reflects the
//! target step while the animation catches up), then a spawned task drives
//! the fade and finally clears the lock. A request arriving while the lock
//! is held is dropped outright; there is no queue.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::descriptor::WizardDefinition;
use crate::error::WizardError;
use crate::events::WizardEvent;
use crate::indicator::{IndicatorBinding, IndicatorState};
use crate::panels::PanelSet;
use crate::state::WizardState;
use crate::transition::{SettleOnce, TransitionCoordinator};
use crate::validation::{ValidationGate, ValidationOutcome};

/// A step-wizard instance: state machine plus its collaborating components
pub struct Wizard {
    state: Arc<Mutex<WizardState>>,
    panels: Arc<Mutex<PanelSet>>,
    gate: ValidationGate,
    coordinator: TransitionCoordinator,
    indicators: IndicatorBinding,
    events: mpsc::UnboundedSender<WizardEvent>,
    /// Completion signal of the in-flight fade-out, if any
    pending_fade: Arc<Mutex<Option<Arc<SettleOnce>>>>,
}

impl Wizard {
    /// Build a wizard from its descriptors. Fails only when the definition
    /// has no steps; indicator and guide mismatches degrade with a warning.
    pub fn new(
        definition: &WizardDefinition,
        event_tx: mpsc::UnboundedSender<WizardEvent>,
    ) -> Result<Self, WizardError> {
        let state = WizardState::new(definition.steps.len())?;
        let panels = Arc::new(Mutex::new(PanelSet::new(
            &definition.steps,
            &definition.guides,
        )));
        let indicators =
            IndicatorBinding::new(&definition.effective_indicators(), definition.steps.len());

        Ok(Self {
            state: Arc::new(Mutex::new(state)),
            gate: ValidationGate::new(panels.clone()),
            panels,
            coordinator: TransitionCoordinator::new(),
            indicators,
            events: event_tx,
            pending_fade: Arc::new(Mutex::new(None)),
        })
    }

    /// Override the fade duration (and with it the fallback window)
    pub fn with_fade_duration(mut self, duration: Duration) -> Self {
        self.coordinator = self.coordinator.with_fade_duration(duration);
        self
    }

    /// Show the initial step directly, with zero duration and no animation
    pub fn init(&self) {
        let state = self.snapshot();
        self.coordinator
            .apply_immediate(&self.panels, state.current_index);
        info!(total_steps = state.total_steps, "wizard initialized");
    }

    /// Advance one step, gated on the current step's validation
    pub fn next(&self) {
        let state = self.snapshot();
        if state.is_transitioning {
            debug!("next dropped: transition in flight");
            return;
        }

        let outcome = self.gate.validate(state.current_index);
        if !outcome.passed() {
            self.emit_validation_failure(outcome);
            return;
        }
        if state.current_index + 1 >= state.total_steps {
            debug!("next dropped: already on the final step");
            return;
        }

        self.begin_transition(state.current_index, state.current_index + 1);
    }

    /// Step back one step; never consults the validation gate
    pub fn previous(&self) {
        let state = self.snapshot();
        if state.is_transitioning {
            debug!("previous dropped: transition in flight");
            return;
        }
        if state.current_index == 0 {
            debug!("previous dropped: already on the first step");
            return;
        }

        self.begin_transition(state.current_index, state.current_index - 1);
    }

    /// Jump directly to a 0-based step index.
    ///
    /// Accepted only within the reachable frontier (visited, current, or one
    /// beyond). Forward jumps re-validate every intermediate step in order;
    /// the first failure aborts the whole jump with no partial advancement.
    pub fn jump_to(&self, target: usize) {
        let state = self.snapshot();
        if state.is_transitioning {
            debug!(target, "jump dropped: transition in flight");
            return;
        }
        if !state.is_reachable(target) {
            debug!(
                target,
                max_reached = state.max_reached_index,
                "jump rejected: target beyond the reachable frontier"
            );
            return;
        }
        if target == state.current_index {
            debug!(target, "jump to the current step is a no-op");
            return;
        }

        if target > state.current_index {
            for step in state.current_index..target {
                let outcome = self.gate.validate(step);
                if !outcome.passed() {
                    // All-or-nothing: the failing step becomes the focus
                    // target and the wizard stays where it is.
                    self.emit_validation_failure(outcome);
                    return;
                }
            }
        }

        self.begin_transition(state.current_index, target);
    }

    /// Route a click on a 1-based indicator number through `jump_to`
    pub fn click_indicator(&self, number: usize) {
        if let Some(target) = self.indicators.click_target(number) {
            self.jump_to(target);
        }
    }

    /// Animation backend callback: the outgoing fade finished naturally.
    /// Harmless when no transition is in flight or the fallback already won.
    pub fn notify_fade_complete(&self) {
        if let Some(signal) = self.pending_fade.lock().unwrap().as_ref() {
            signal.settle();
        }
    }

    /// Current state snapshot for rendering and tests
    pub fn snapshot(&self) -> WizardState {
        *self.state.lock().unwrap()
    }

    /// Derived indicator states for the current snapshot
    pub fn indicator_states(&self) -> Vec<(usize, IndicatorState)> {
        self.indicators.states(&self.snapshot())
    }

    /// Shared panel state; the renderer and the field-editing host read and
    /// write through this handle
    pub fn panels(&self) -> Arc<Mutex<PanelSet>> {
        self.panels.clone()
    }

    pub fn fade_duration(&self) -> Duration {
        self.coordinator.fade_duration()
    }

    /// Set a field's value by step index and field name
    pub fn set_field_value(&self, step: usize, name: &str, value: &str) -> Result<(), WizardError> {
        let mut panels = self.panels.lock().unwrap();
        let total = panels.steps.len();
        let panel = panels
            .steps
            .get_mut(step)
            .ok_or(WizardError::StepOutOfRange { index: step, total })?;
        let field = panel
            .fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| WizardError::UnknownField {
                step,
                name: name.to_string(),
            })?;
        field.value = value.to_string();
        Ok(())
    }

    /// Commit the move and spawn the transition task. The position change
    /// and the lock engage synchronously, before any animation runs.
    fn begin_transition(&self, from: usize, target: usize) {
        self.state.lock().unwrap().advance_to(target);
        self.emit(WizardEvent::StepChanged { index: target });

        let signal = Arc::new(SettleOnce::new());
        *self.pending_fade.lock().unwrap() = Some(signal.clone());

        let panels = self.panels.clone();
        let state = self.state.clone();
        let pending = self.pending_fade.clone();
        let coordinator = self.coordinator.clone();
        tokio::spawn(async move {
            coordinator.run(&panels, &signal, from, target).await;
            *pending.lock().unwrap() = None;
            state.lock().unwrap().release_lock();
            debug!(step = target, "transition complete; lock released");
        });
    }

    fn emit_validation_failure(&self, outcome: ValidationOutcome) {
        let ValidationOutcome {
            step,
            first_invalid,
        } = outcome;
        let first_invalid = first_invalid.unwrap_or_default();
        debug!(step, field = %first_invalid, "navigation blocked by validation");
        self.emit(WizardEvent::ValidationFailed {
            step,
            first_invalid,
        });
    }

    fn emit(&self, event: WizardEvent) {
        if self.events.send(event).is_err() {
            debug!("event receiver dropped; event discarded");
        }
    }
}
