//! Live panel state: the mutable mirror of the step descriptors.
//!
//! The `PanelSet` is the shared visual state a renderer reads: which step is
//! active, where each panel sits in its fade, and the current field values
//! and error markers. All fade-phase changes go through the
//! `TransitionCoordinator`; field values are edited by the host through the
//! wizard's accessors.

use crate::descriptor::{GuidePaneDescriptor, StepDescriptor};
use crate::guide::GuidePaneBinding;

/// Where a panel sits in its fade animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    Hidden,
    FadingIn,
    Visible,
    FadingOut,
}

/// The live state of one input within a step
#[derive(Debug, Clone)]
pub struct FieldBinding {
    pub name: String,
    pub required: bool,
    pub value: String,
    /// Error marker, re-applied on every validation pass
    pub error: bool,
}

impl FieldBinding {
    /// Is-populated validity: required fields must hold a non-blank value
    pub fn is_satisfied(&self) -> bool {
        !self.required || !self.value.trim().is_empty()
    }
}

/// One step's content region
#[derive(Debug, Clone)]
pub struct StepPanel {
    pub index: usize,
    pub title: String,
    pub active: bool,
    pub fade: FadePhase,
    pub fields: Vec<FieldBinding>,
}

/// All step panels plus the guide panes bound to them
#[derive(Debug)]
pub struct PanelSet {
    pub steps: Vec<StepPanel>,
    pub guides: GuidePaneBinding,
}

impl PanelSet {
    pub fn new(descriptors: &[StepDescriptor], guides: &[GuidePaneDescriptor]) -> Self {
        let steps = descriptors
            .iter()
            .enumerate()
            .map(|(index, desc)| StepPanel {
                index,
                title: desc.title.clone(),
                active: false,
                fade: FadePhase::Hidden,
                fields: desc
                    .fields
                    .iter()
                    .map(|f| FieldBinding {
                        name: f.name.clone(),
                        required: f.required,
                        value: f.value.clone(),
                        error: false,
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        Self {
            guides: GuidePaneBinding::new(guides, steps.len()),
            steps,
        }
    }

    /// Show `target` directly with no animation (initial render)
    pub fn apply_immediate(&mut self, target: usize) {
        for panel in &mut self.steps {
            panel.active = panel.index == target;
            panel.fade = if panel.index == target {
                FadePhase::Visible
            } else {
                FadePhase::Hidden
            };
        }
        self.guides.apply_immediate(target);
    }

    /// Start the outgoing fade: the step loses its active flag immediately
    pub fn begin_fade_out(&mut self, from: usize) {
        if let Some(panel) = self.steps.get_mut(from) {
            panel.active = false;
            panel.fade = FadePhase::FadingOut;
        }
        self.guides.begin_fade_out(from);
    }

    /// Fade-out completion: hide the outgoing step
    pub fn complete_fade_out(&mut self, from: usize) {
        if let Some(panel) = self.steps.get_mut(from) {
            panel.fade = FadePhase::Hidden;
        }
        self.guides.complete_fade_out(from);
    }

    /// Start the incoming fade: the step gains its active flag here
    pub fn begin_fade_in(&mut self, to: usize) {
        if let Some(panel) = self.steps.get_mut(to) {
            panel.active = true;
            panel.fade = FadePhase::FadingIn;
        }
        self.guides.begin_fade_in(to);
    }

    /// Fade-in finished: the incoming step is fully visible
    pub fn settle(&mut self, to: usize) {
        if let Some(panel) = self.steps.get_mut(to) {
            if panel.fade == FadePhase::FadingIn {
                panel.fade = FadePhase::Visible;
            }
        }
        self.guides.settle(to);
    }

    pub fn active_count(&self) -> usize {
        self.steps.iter().filter(|p| p.active).count()
    }
}
