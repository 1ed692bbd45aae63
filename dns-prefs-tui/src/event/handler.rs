//! Event handler
//!
//! Translates raw crossterm events into [`AppMessage`]s. The handler is
//! read-only over the app: whether a key is a command or address input
//! depends on what the cursor rests on.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use dns_prefs_core::{validator, Item};

use crate::message::AppMessage;
use crate::model::App;

/// Poll for an event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate an event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Terminal resize redraws automatically
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

/// Whether keystrokes on the focused row feed address text
fn is_text_context(app: &App) -> bool {
    app.service.is_editing()
        && matches!(
            app.focused_item(),
            Some(Item::DnsEntry(_) | Item::AddDnsEntry)
        )
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Only handle Press; ignoring Release and Repeat avoids double input
    // on Windows terminals.
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C: exit from anywhere
    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
        return AppMessage::Quit;
    }

    // Reorder shortcuts, valid only on entry rows
    if key.modifiers == KeyModifiers::CONTROL {
        match key.code {
            KeyCode::Up => return AppMessage::MoveEntryUp,
            KeyCode::Down => return AppMessage::MoveEntryDown,
            _ => {}
        }
    }

    if is_text_context(app) {
        handle_text_keys(key)
    } else {
        handle_navigation_keys(key, app.service.is_editing())
    }
}

/// Keys while the cursor rests on an editable address row
fn handle_text_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Only characters that can appear in an IPv4/IPv6 literal reach
        // the model; everything else is rejected at the keystroke.
        KeyCode::Char(c) if validator::is_allowed_char(c) => AppMessage::Input(c),
        KeyCode::Backspace => AppMessage::Backspace,
        KeyCode::Enter => AppMessage::Activate,
        KeyCode::Delete => AppMessage::DeleteEntry,
        KeyCode::Esc => AppMessage::ToggleEditMode,
        KeyCode::Up => AppMessage::SelectPrevious,
        KeyCode::Down => AppMessage::SelectNext,
        KeyCode::Home => AppMessage::SelectFirst,
        KeyCode::End => AppMessage::SelectLast,
        _ => AppMessage::Noop,
    }
}

/// Keys everywhere else
fn handle_navigation_keys(key: KeyEvent, is_editing: bool) -> AppMessage {
    match key.code {
        // Esc backs out of edit mode first, then out of the app
        KeyCode::Esc if is_editing => AppMessage::ToggleEditMode,
        KeyCode::Char('q') | KeyCode::Esc => AppMessage::Quit,
        KeyCode::Char('e') => AppMessage::ToggleEditMode,
        KeyCode::Up | KeyCode::Char('k') => AppMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => AppMessage::SelectNext,
        KeyCode::Home => AppMessage::SelectFirst,
        KeyCode::End => AppMessage::SelectLast,
        KeyCode::Enter | KeyCode::Char(' ') => AppMessage::Activate,
        KeyCode::Delete => AppMessage::DeleteEntry,
        _ => AppMessage::Noop,
    }
}
