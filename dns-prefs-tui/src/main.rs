//! DNS Preferences TUI
//!
//! Elm Architecture (TEA) layout:
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: UI rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: settings persistence (`backend/`)
//!
//! The preferences state itself lives in `dns-prefs-core`; this binary is
//! the presentation host: it consumes the core's query surface, feeds user
//! intent into the mutation operations and persists every snapshot the
//! core's delegate hands back.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // Logging goes to stderr, which the alternate screen hides; enable by
    // exporting RUST_LOG and redirecting stderr to a file.
    env_logger::init();

    // 1. Initialize the terminal
    let mut terminal = init_terminal()?;

    // 2. Create the application instance
    let mut app = model::App::new();

    // 3. Run the main loop
    let result = app::run(&mut terminal, &mut app);

    // 4. Restore the terminal (on success and failure alike)
    restore_terminal(&mut terminal)?;

    // 5. Return the result
    result
}
