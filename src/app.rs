//! Demo application: hosts one wizard instance in a terminal.
//!
//! The app plays every external collaborator the engine expects: it edits
//! field values, routes key presses to the navigation entry points, drains
//! lifecycle events into a status line, and acts as the animation backend by
//! firing the natural fade-completion signal once a fade-out has been on
//! screen for the full fade duration. Dropping that last duty (say, a stall
//! in the render loop) is absorbed by the engine's fallback timer.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use stepflow::{FadePhase, Wizard, WizardEvent};

use crate::ui;

pub struct App {
    wizard: Wizard,
    events_rx: mpsc::UnboundedReceiver<WizardEvent>,
    tick_rate: Duration,
    /// Focused field within the current step
    focused_field: usize,
    /// When the current fade-out was first observed on screen
    fade_out_since: Option<Instant>,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(
        wizard: Wizard,
        events_rx: mpsc::UnboundedReceiver<WizardEvent>,
        tick_rate: Duration,
    ) -> Self {
        Self {
            wizard,
            events_rx,
            tick_rate,
            focused_field: 0,
            fade_out_since: None,
            status: None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        self.wizard.init();

        while !self.should_quit {
            terminal.draw(|f| {
                ui::render(f, &self.wizard, self.focused_field, self.status.as_deref());
            })?;

            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            self.drive_animation();
            self.drain_events();
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('q' | 'c') if modifiers == KeyModifiers::CONTROL => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                self.status = None;
                self.wizard.next();
                self.focused_field = 0;
            }
            KeyCode::Esc => {
                self.status = None;
                self.wizard.previous();
                self.focused_field = 0;
            }
            KeyCode::F(n) => {
                self.status = None;
                self.wizard.click_indicator(n as usize);
                self.focused_field = 0;
            }
            KeyCode::Tab | KeyCode::Down => self.move_focus(1),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(-1),
            KeyCode::Backspace => self.edit_focused(|value| {
                value.pop();
            }),
            KeyCode::Char(c) => self.edit_focused(|value| value.push(c)),
            _ => {}
        }
    }

    fn move_focus(&mut self, delta: isize) {
        let current = self.wizard.snapshot().current_index;
        let panels = self.wizard.panels();
        let panels = panels.lock().unwrap();
        let field_count = panels
            .steps
            .get(current)
            .map_or(0, |panel| panel.fields.len());
        if field_count == 0 {
            return;
        }
        let next = self.focused_field as isize + delta;
        self.focused_field = next.rem_euclid(field_count as isize) as usize;
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let current = self.wizard.snapshot().current_index;
        let panels = self.wizard.panels();
        let mut panels = panels.lock().unwrap();
        if let Some(field) = panels
            .steps
            .get_mut(current)
            .and_then(|panel| panel.fields.get_mut(self.focused_field))
        {
            edit(&mut field.value);
        }
    }

    /// Fire the natural fade-completion signal once a fade-out has been
    /// rendered for the full fade duration.
    fn drive_animation(&mut self) {
        let fading_out = {
            let panels = self.wizard.panels();
            let panels = panels.lock().unwrap();
            panels.steps.iter().any(|p| p.fade == FadePhase::FadingOut)
        };

        if !fading_out {
            self.fade_out_since = None;
            return;
        }
        let since = *self.fade_out_since.get_or_insert_with(Instant::now);
        if since.elapsed() >= self.wizard.fade_duration() {
            self.wizard.notify_fade_complete();
            self.fade_out_since = None;
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                WizardEvent::StepChanged { index } => {
                    tracing::info!(index, "step changed");
                }
                WizardEvent::ValidationFailed {
                    step,
                    first_invalid,
                } => {
                    self.status = Some(format!(
                        "Step {} blocked: '{}' is required",
                        step + 1,
                        first_invalid
                    ));
                    self.focus_field(step, &first_invalid);
                }
            }
        }
    }

    /// Move focus to the field that blocked navigation
    fn focus_field(&mut self, step: usize, name: &str) {
        let panels = self.wizard.panels();
        let panels = panels.lock().unwrap();
        if let Some(position) = panels
            .steps
            .get(step)
            .and_then(|panel| panel.fields.iter().position(|f| f.name == name))
        {
            self.focused_field = position;
        }
    }
}
