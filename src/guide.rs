//! Guide panes: optional auxiliary content mirrored 1:1 with step number.
//!
//! The binding is purely declarative: whenever the coordinator moves to step
//! N the pane bound to N fades in and every other pane fades out, using the
//! same fade protocol as step panels. A pane count that disagrees with the
//! step count is a configuration mismatch, warned once at construction and
//! degraded by simply showing no pane for unmatched steps.

use tracing::warn;

use crate::descriptor::GuidePaneDescriptor;
use crate::panels::FadePhase;

/// Live state for one guide pane
#[derive(Debug, Clone)]
pub struct GuidePanel {
    /// 1-based step number this pane mirrors
    pub step_number: usize,
    pub content: String,
    pub fade: FadePhase,
}

/// All guide panes plus the step-number mapping
#[derive(Debug, Default)]
pub struct GuidePaneBinding {
    panes: Vec<GuidePanel>,
}

impl GuidePaneBinding {
    pub fn new(descriptors: &[GuidePaneDescriptor], total_steps: usize) -> Self {
        if !descriptors.is_empty() && descriptors.len() != total_steps {
            warn!(
                panes = descriptors.len(),
                steps = total_steps,
                "guide pane count differs from step count; unmatched steps show no pane"
            );
        }
        for desc in descriptors {
            if desc.step == 0 || desc.step > total_steps {
                warn!(
                    step = desc.step,
                    steps = total_steps,
                    "guide pane bound to a step number with no matching step"
                );
            }
        }

        Self {
            panes: descriptors
                .iter()
                .map(|d| GuidePanel {
                    step_number: d.step,
                    content: d.content.clone(),
                    fade: FadePhase::Hidden,
                })
                .collect(),
        }
    }

    /// Pane bound to the 0-based step index, if any
    pub fn pane_for(&self, step_index: usize) -> Option<&GuidePanel> {
        self.panes.iter().find(|p| p.step_number == step_index + 1)
    }

    fn pane_for_mut(&mut self, step_index: usize) -> Option<&mut GuidePanel> {
        self.panes
            .iter_mut()
            .find(|p| p.step_number == step_index + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub(crate) fn apply_immediate(&mut self, target: usize) {
        for pane in &mut self.panes {
            pane.fade = if pane.step_number == target + 1 {
                FadePhase::Visible
            } else {
                FadePhase::Hidden
            };
        }
    }

    pub(crate) fn begin_fade_out(&mut self, from: usize) {
        if let Some(pane) = self.pane_for_mut(from) {
            pane.fade = FadePhase::FadingOut;
        }
    }

    pub(crate) fn complete_fade_out(&mut self, from: usize) {
        if let Some(pane) = self.pane_for_mut(from) {
            pane.fade = FadePhase::Hidden;
        }
    }

    pub(crate) fn begin_fade_in(&mut self, to: usize) {
        for pane in &mut self.panes {
            if pane.step_number == to + 1 {
                pane.fade = FadePhase::FadingIn;
            } else if pane.fade != FadePhase::Hidden {
                // Declarative mirror: only the pane for the target survives
                pane.fade = FadePhase::Hidden;
            }
        }
    }

    pub(crate) fn settle(&mut self, to: usize) {
        if let Some(pane) = self.pane_for_mut(to) {
            if pane.fade == FadePhase::FadingIn {
                pane.fade = FadePhase::Visible;
            }
        }
    }
}
