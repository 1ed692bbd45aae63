//! Application main loop

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run the draw/poll/update loop
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. Render the UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. Check whether the app should exit
        if app.should_quit {
            break;
        }

        // 3. Poll for input (100ms timeout)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 4. Translate the event into a message
            let msg = event::handle_event(event, app);

            // 5. Update the state
            update::update(app, msg);
        }
    }

    Ok(())
}
