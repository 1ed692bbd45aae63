//! Message layer: event message definitions
//!
//! Bridge between Event and Update: raw terminal events are translated
//! into messages the update layer can consume, and every state change in
//! the app is expressed as one of these.

/// All user intents the preferences screen understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// Exit the application
    Quit,
    /// Enter or leave list-edit mode
    ToggleEditMode,
    /// Move the cursor one row up across sections
    SelectPrevious,
    /// Move the cursor one row down across sections
    SelectNext,
    /// Jump to the first row
    SelectFirst,
    /// Jump to the last row
    SelectLast,
    /// Activate the focused row: flip a toggle, or commit the pending entry
    Activate,
    /// Append a character to the focused editable row
    Input(char),
    /// Remove the last character of the focused editable row
    Backspace,
    /// Delete the focused DNS entry row
    DeleteEntry,
    /// Drag the focused DNS entry one row up
    MoveEntryUp,
    /// Drag the focused DNS entry one row down
    MoveEntryDown,
    /// No-op, stands in for `Option::None`
    Noop,
}
