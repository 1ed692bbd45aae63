//! Event layer: input handling

mod handler;

pub use handler::{handle_event, poll_event};
