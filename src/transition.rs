//! Fade choreography between steps.
//!
//! The coordinator guarantees two things: at no observable instant are two
//! fully visible steps competing, and a lost animation-completion signal can
//! never leave the wizard stuck mid-transition. The second guarantee comes
//! from racing the natural completion signal against a fallback timer of the
//! expected fade duration plus a safety margin; whichever fires first runs
//! the fade-out completion exactly once.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Notify;
use tracing::debug;

use crate::panels::PanelSet;

/// Default fade duration, matching a ~300ms CSS-style transition
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(300);

/// Safety margin added to the fallback timer
const FALLBACK_MARGIN: Duration = Duration::from_millis(60);

/// Resolves exactly once: either the animation backend reports completion or
/// the fallback timer settles it. The explicit flag carries the idempotency;
/// a second `settle` is a reported no-op.
#[derive(Debug, Default)]
pub struct SettleOnce {
    settled: AtomicBool,
    notify: Notify,
}

impl SettleOnce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settle the signal. Returns false if it was already settled.
    pub fn settle(&self) -> bool {
        if self.settled.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.notify.notify_waiters();
        true
    }

    pub fn is_settled(&self) -> bool {
        self.settled.load(Ordering::Acquire)
    }

    /// Wait until settled. Registers the waiter before checking the flag so
    /// a settle between check and await cannot be lost.
    pub async fn wait(&self) {
        let notified = self.notify.notified();
        if self.is_settled() {
            return;
        }
        notified.await;
    }
}

/// Sequences the outgoing fade, the incoming fade, and the lock window
#[derive(Debug, Clone)]
pub struct TransitionCoordinator {
    fade_duration: Duration,
}

impl Default for TransitionCoordinator {
    fn default() -> Self {
        Self {
            fade_duration: DEFAULT_FADE_DURATION,
        }
    }
}

impl TransitionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }

    pub fn fade_duration(&self) -> Duration {
        self.fade_duration
    }

    fn fallback_window(&self) -> Duration {
        self.fade_duration + FALLBACK_MARGIN
    }

    /// Apply the target state directly with no animation (initial render)
    pub fn apply_immediate(&self, panels: &Arc<Mutex<PanelSet>>, target: usize) {
        panels.lock().unwrap().apply_immediate(target);
    }

    /// Run one full transition. Returns only after the incoming fade's
    /// duration window has elapsed, so the caller can release the transition
    /// lock without a rapid second request interleaving mid-animation.
    pub async fn run(
        &self,
        panels: &Arc<Mutex<PanelSet>>,
        fade_out_done: &SettleOnce,
        from: usize,
        to: usize,
    ) {
        // Outgoing step loses its active flag immediately; its guide pane
        // (if bound) fades out concurrently.
        panels.lock().unwrap().begin_fade_out(from);

        tokio::select! {
            () = fade_out_done.wait() => {
                debug!(step = from, "fade-out completion signal received");
            }
            () = tokio::time::sleep(self.fallback_window()) => {
                // Settle ourselves so a late natural signal is a no-op
                fade_out_done.settle();
                debug!(step = from, "fade-out signal never arrived; fallback timer fired");
            }
        }

        {
            let mut panels = panels.lock().unwrap();
            panels.complete_fade_out(from);
            panels.begin_fade_in(to);
        }

        tokio::time::sleep(self.fade_duration).await;
        panels.lock().unwrap().settle(to);
    }
}
