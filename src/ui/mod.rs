//! Rendering for the demo wizard.
//!
//! The engine owns all state; this module just draws a snapshot of it:
//! the indicator row, the active step's fields, the guide pane, and a
//! footer with key hints. Panels mid-fade render dimmed, which is as much
//! of a fade as a terminal grid allows.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use stepflow::{FadePhase, IndicatorState, Wizard};

/// Draw one frame of the wizard
pub fn render(frame: &mut Frame, wizard: &Wizard, focused_field: usize, status: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Indicator row
            Constraint::Min(8),    // Step + guide pane
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_indicators(frame, wizard, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);

    render_step(frame, wizard, focused_field, body[0]);
    render_guide(frame, wizard, body[1]);
    render_footer(frame, status, chunks[2]);
}

fn render_indicators(frame: &mut Frame, wizard: &Wizard, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (number, state) in wizard.indicator_states() {
        let (marker, style) = match state {
            IndicatorState::Current => (
                "●",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            IndicatorState::Reachable => ("●", Style::default().fg(Color::Green)),
            IndicatorState::Locked => ("○", Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(format!("{marker} {number}"), style));
        spans.push(Span::raw("   "));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Steps (F1-F9 to jump) ");
    let row = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(row, area);
}

fn render_step(frame: &mut Frame, wizard: &Wizard, focused_field: usize, area: Rect) {
    let panels = wizard.panels();
    let panels = panels.lock().unwrap();

    // At most one panel is outside Hidden at fade boundaries; prefer the
    // active one, otherwise whichever is still fading out.
    let Some(panel) = panels
        .steps
        .iter()
        .find(|p| p.active)
        .or_else(|| panels.steps.iter().find(|p| p.fade != FadePhase::Hidden))
    else {
        return;
    };

    let fading = matches!(panel.fade, FadePhase::FadingIn | FadePhase::FadingOut);
    let base = if fading {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };

    let mut lines = vec![Line::raw("")];
    for (i, field) in panel.fields.iter().enumerate() {
        let focused = i == focused_field && !fading;
        let marker = if focused { "> " } else { "  " };
        let label_style = if field.error {
            base.fg(Color::Red).add_modifier(Modifier::BOLD)
        } else if focused {
            base.fg(Color::Cyan)
        } else {
            base.fg(Color::Gray)
        };

        let mut spans = vec![
            Span::styled(marker, base.fg(Color::Cyan)),
            Span::styled(format!("{}: ", field.name), label_style),
            Span::styled(field.value.clone(), base.fg(Color::White)),
        ];
        if focused {
            spans.push(Span::styled("|", base.fg(Color::White)));
        }
        if field.error {
            spans.push(Span::styled(" (required)", base.fg(Color::Red)));
        } else if field.required && field.value.trim().is_empty() {
            spans.push(Span::styled(" *", base.fg(Color::DarkGray)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::raw(""));
    }

    let title = format!(
        " Step {}/{}: {} ",
        panel.index + 1,
        panels.steps.len(),
        panel.title
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(base.fg(Color::Cyan))
        .title(title);
    frame.render_widget(Paragraph::new(lines).block(block).style(base), area);
}

fn render_guide(frame: &mut Frame, wizard: &Wizard, area: Rect) {
    let panels = wizard.panels();
    let panels = panels.lock().unwrap();
    if panels.guides.is_empty() {
        return;
    }

    let current = wizard.snapshot().current_index;
    let block = Block::default().borders(Borders::ALL).title(" Guide ");

    let Some(pane) = panels.guides.pane_for(current) else {
        // Count mismatch degrades to an empty frame for this step
        frame.render_widget(block, area);
        return;
    };
    if pane.fade == FadePhase::Hidden {
        frame.render_widget(block, area);
        return;
    }

    let style = if pane.fade == FadePhase::Visible {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
    };
    let paragraph = Paragraph::new(pane.content.clone())
        .block(block)
        .style(style)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, status: Option<&str>, area: Rect) {
    let hints = "Enter next · Esc previous · Tab field · F1-F9 jump · Ctrl-C quit";
    let line = match status {
        Some(status) => Line::from(vec![
            Span::styled(status, Style::default().fg(Color::Red)),
            Span::raw("  —  "),
            Span::styled(hints, Style::default().fg(Color::DarkGray)),
        ]),
        None => Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
    };
    let footer = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
