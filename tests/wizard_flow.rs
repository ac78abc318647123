//! End-to-end navigation flows through the public wizard API.
//!
//! Timed behavior runs under a paused tokio clock, so fade durations and
//! fallback windows elapse deterministically.

use std::time::Duration;

use tokio::sync::mpsc;

use stepflow::{
    FieldDescriptor, IndicatorState, StepDescriptor, Wizard, WizardDefinition, WizardEvent,
};

const FADE: Duration = Duration::from_millis(300);

/// Three steps, each with one required field named after the step
fn three_step_definition() -> WizardDefinition {
    let step = |title: &str, field: &str| StepDescriptor {
        title: title.to_string(),
        fields: vec![FieldDescriptor {
            name: field.to_string(),
            required: true,
            value: String::new(),
        }],
    };
    WizardDefinition {
        steps: vec![
            step("Account", "email"),
            step("Profile", "name"),
            step("Confirm", "agreement"),
        ],
        indicators: vec![],
        guides: vec![],
    }
}

fn wizard() -> (Wizard, mpsc::UnboundedReceiver<WizardEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let wizard = Wizard::new(&three_step_definition(), tx).unwrap();
    wizard.init();
    (wizard, rx)
}

/// Let any in-flight transition finish, fallback window included
async fn settle() {
    tokio::time::sleep(FADE * 4).await;
}

fn active_steps(wizard: &Wizard) -> Vec<usize> {
    let panels = wizard.panels();
    let panels = panels.lock().unwrap();
    panels
        .steps
        .iter()
        .filter(|p| p.active)
        .map(|p| p.index)
        .collect()
}

// ─── Scenarios ──────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn next_on_unfilled_step_stays_put_and_names_the_step() {
    let (wizard, mut rx) = wizard();

    wizard.next();

    assert_eq!(wizard.snapshot().current_index, 0);
    assert_eq!(
        rx.try_recv().unwrap(),
        WizardEvent::ValidationFailed {
            step: 0,
            first_invalid: "email".to_string(),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn next_after_filling_advances_position_and_frontier() {
    let (wizard, mut rx) = wizard();
    wizard.set_field_value(0, "email", "a@b.c").unwrap();

    wizard.next();
    settle().await;

    let state = wizard.snapshot();
    assert_eq!(state.current_index, 1);
    assert_eq!(state.max_reached_index, 1);
    assert_eq!(rx.try_recv().unwrap(), WizardEvent::StepChanged { index: 1 });
}

#[tokio::test(start_paused = true)]
async fn previous_moves_back_without_validation_and_keeps_frontier() {
    let (wizard, mut rx) = wizard();
    wizard.set_field_value(0, "email", "a@b.c").unwrap();
    wizard.next();
    settle().await;
    while rx.try_recv().is_ok() {}

    // Step 1's required field is empty; previous must succeed regardless
    wizard.previous();
    settle().await;

    let state = wizard.snapshot();
    assert_eq!(state.current_index, 0);
    assert_eq!(state.max_reached_index, 1);
    // A ValidationFailed here would mean the gate ran
    assert_eq!(rx.try_recv().unwrap(), WizardEvent::StepChanged { index: 0 });
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn forward_jump_over_an_invalid_step_is_all_or_nothing() {
    let (wizard, mut rx) = wizard();
    wizard.set_field_value(0, "email", "a@b.c").unwrap();
    wizard.next();
    settle().await;
    wizard.previous();
    settle().await;
    while rx.try_recv().is_ok() {}

    // From step 0 with frontier 1, target 2 is reachable, but step 1 is
    // invalid: the whole jump aborts with no partial advancement.
    wizard.jump_to(2);
    settle().await;

    assert_eq!(wizard.snapshot().current_index, 0);
    assert_eq!(
        rx.try_recv().unwrap(),
        WizardEvent::ValidationFailed {
            step: 1,
            first_invalid: "name".to_string(),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn second_next_during_transition_is_dropped() {
    let (wizard, _rx) = wizard();
    wizard.set_field_value(0, "email", "a@b.c").unwrap();
    wizard.set_field_value(1, "name", "someone").unwrap();

    wizard.next();
    wizard.next(); // lock is held; dropped, not queued

    settle().await;
    assert_eq!(wizard.snapshot().current_index, 1);
}

#[tokio::test(start_paused = true)]
async fn lost_completion_signal_cannot_strand_the_wizard() {
    let (wizard, _rx) = wizard();
    wizard.set_field_value(0, "email", "a@b.c").unwrap();

    // Nobody ever calls notify_fade_complete
    wizard.next();
    settle().await;

    let state = wizard.snapshot();
    assert_eq!(state.current_index, 1);
    assert!(!state.is_transitioning);
    assert_eq!(active_steps(&wizard), vec![1]);
}

#[tokio::test(start_paused = true)]
async fn natural_signal_finishes_ahead_of_the_fallback_window() {
    let (wizard, _rx) = wizard();
    wizard.set_field_value(0, "email", "a@b.c").unwrap();

    wizard.next();
    // Animation backend reports completion almost immediately
    tokio::time::sleep(Duration::from_millis(10)).await;
    wizard.notify_fade_complete();

    // One fade-in window later the transition is fully done, well before
    // the fallback path (fallback window + fade-in) could have finished.
    tokio::time::sleep(FADE + Duration::from_millis(20)).await;
    assert!(!wizard.snapshot().is_transitioning);
    assert_eq!(active_steps(&wizard), vec![1]);
}

// ─── Properties ─────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn jump_beyond_the_frontier_is_always_rejected() {
    let (wizard, mut rx) = wizard();

    wizard.jump_to(2);

    assert_eq!(wizard.snapshot().current_index, 0);
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn exactly_one_step_active_after_every_settled_operation() {
    let (wizard, _rx) = wizard();
    wizard.set_field_value(0, "email", "a@b.c").unwrap();
    wizard.set_field_value(1, "name", "someone").unwrap();
    wizard.set_field_value(2, "agreement", "yes").unwrap();

    assert_eq!(active_steps(&wizard).len(), 1);

    wizard.next();
    settle().await;
    assert_eq!(active_steps(&wizard), vec![1]);

    wizard.next();
    settle().await;
    assert_eq!(active_steps(&wizard), vec![2]);

    wizard.previous();
    settle().await;
    assert_eq!(active_steps(&wizard), vec![1]);

    wizard.jump_to(0);
    settle().await;
    assert_eq!(active_steps(&wizard), vec![0]);

    wizard.jump_to(2);
    settle().await;
    assert_eq!(active_steps(&wizard), vec![2]);
}

#[tokio::test(start_paused = true)]
async fn frontier_never_decreases_across_operations() {
    let (wizard, _rx) = wizard();
    wizard.set_field_value(0, "email", "a@b.c").unwrap();
    wizard.set_field_value(1, "name", "someone").unwrap();

    let mut max_seen = 0;
    let mut check = |state: stepflow::WizardState| {
        assert!(state.max_reached_index >= max_seen);
        max_seen = state.max_reached_index;
    };

    wizard.next();
    settle().await;
    check(wizard.snapshot());

    wizard.next();
    settle().await;
    check(wizard.snapshot());

    wizard.previous();
    settle().await;
    check(wizard.snapshot());

    wizard.jump_to(2);
    settle().await;
    check(wizard.snapshot());

    wizard.previous();
    settle().await;
    check(wizard.snapshot());

    wizard.jump_to(0);
    settle().await;
    check(wizard.snapshot());
    assert_eq!(max_seen, 2);
}

#[tokio::test(start_paused = true)]
async fn indicators_track_position_and_frontier() {
    let (wizard, _rx) = wizard();
    wizard.set_field_value(0, "email", "a@b.c").unwrap();
    wizard.next();
    settle().await;

    let states: Vec<IndicatorState> = wizard
        .indicator_states()
        .into_iter()
        .map(|(_, s)| s)
        .collect();
    assert_eq!(
        states,
        vec![
            IndicatorState::Reachable,
            IndicatorState::Current,
            IndicatorState::Locked,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn indicator_click_routes_through_the_jump_guard() {
    let (wizard, _rx) = wizard();
    wizard.set_field_value(0, "email", "a@b.c").unwrap();
    wizard.next();
    settle().await;

    // Indicator 1 is a visited step: accepted
    wizard.click_indicator(1);
    settle().await;
    assert_eq!(wizard.snapshot().current_index, 0);

    // Indicator 3 maps to index 2: within the frontier's +1, but step 1 is
    // invalid, so the jump aborts at the gate.
    wizard.click_indicator(3);
    settle().await;
    assert_eq!(wizard.snapshot().current_index, 0);
}

#[tokio::test(start_paused = true)]
async fn guide_pane_mismatch_degrades_without_failing() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut definition = three_step_definition();
    definition.guides = vec![
        stepflow::GuidePaneDescriptor {
            step: 1,
            content: "first".to_string(),
        },
        stepflow::GuidePaneDescriptor {
            step: 2,
            content: "second".to_string(),
        },
    ];

    // Two panes for three steps: construction succeeds and step 2 simply
    // has no pane.
    let wizard = Wizard::new(&definition, tx).unwrap();
    wizard.init();
    let panels = wizard.panels();
    let panels = panels.lock().unwrap();
    assert!(panels.guides.pane_for(0).is_some());
    assert!(panels.guides.pane_for(2).is_none());
}

#[tokio::test(start_paused = true)]
async fn independent_wizards_do_not_share_state() {
    let (tx_a, _rx_a) = mpsc::unbounded_channel();
    let (tx_b, _rx_b) = mpsc::unbounded_channel();
    let a = Wizard::new(&three_step_definition(), tx_a).unwrap();
    let b = Wizard::new(&three_step_definition(), tx_b).unwrap();
    a.init();
    b.init();

    a.set_field_value(0, "email", "a@b.c").unwrap();
    a.next();
    settle().await;

    assert_eq!(a.snapshot().current_index, 1);
    assert_eq!(b.snapshot().current_index, 0);
}
