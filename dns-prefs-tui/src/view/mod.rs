//! View layer: UI rendering
//!
//! Reads the model through the core's query surface and redraws the whole
//! frame; structural deltas never get patched into retained widgets.

mod preferences;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::App;
use crate::view::theme::colors;

/// Render one frame
pub fn render(app: &App, frame: &mut Frame) {
    let c = colors();
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    // Title bar
    let title = if app.service.is_editing() {
        " DNS Preferences — editing "
    } else {
        " DNS Preferences "
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            title,
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );

    // Preference list
    preferences::render(app, frame, chunks[1]);

    // Status line
    if let Some(status) = &app.status {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {status}"),
                Style::default().fg(c.muted),
            ))),
            chunks[2],
        );
    }

    // Key hints
    frame.render_widget(
        Paragraph::new(hints_line(app)),
        chunks[3],
    );
}

/// Context-dependent key hints
fn hints_line(app: &App) -> Line<'static> {
    let c = colors();
    let hints: &[(&str, &str)] = if app.service.is_editing() {
        &[
            ("↑↓", "select"),
            ("Enter", "commit"),
            ("Del", "remove"),
            ("Ctrl+↑↓", "reorder"),
            ("Esc", "done"),
        ]
    } else {
        &[
            ("↑↓", "select"),
            ("Space", "toggle"),
            ("e", "edit servers"),
            ("q", "quit"),
        ]
    };

    let mut spans = Vec::with_capacity(hints.len() * 2 + 1);
    spans.push(Span::raw(" "));
    for (i, (key, action)) in hints.iter().enumerate() {
        let separator = if i + 1 < hints.len() { " | " } else { "" };
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default().fg(c.key_hint),
        ));
        spans.push(Span::styled(
            format!(" {action}{separator}"),
            Style::default().fg(c.muted),
        ));
    }
    Line::from(spans)
}
