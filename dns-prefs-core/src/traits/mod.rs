//! Capability traits injected by the presentation layer
//!
//! The engine never stores either trait object; both are borrowed for the
//! duration of a single mutation call, so no ownership cycle between the
//! engine and its host can exist.

use crate::types::{DnsSettings, IndexPath, Item, StructuralChange};

/// Receives the structural change feed plus auxiliary presentation hints.
///
/// All callbacks run synchronously before the mutation that triggered them
/// returns; the sink observes an already-updated, consistent model.
pub trait StructuralChangeSink {
    /// Apply one incremental row delta.
    fn apply_change(&mut self, change: StructuralChange);

    /// Every row distribution may have changed shape; re-derive everything.
    /// Emitted on edit-mode transitions.
    fn refresh_all(&mut self) {}

    /// Bring the given row into view. Emitted after the insert from a
    /// committed entry has been applied.
    fn scroll_to_row(&mut self, _index_path: IndexPath) {}

    /// Presentational validity of an editable row changed; restyle it.
    /// Never implies a model change.
    fn entry_validity_changed(&mut self, _item: Item, _is_valid: bool) {}
}

/// Observer of persisted-relevant state changes.
///
/// Invoked with the full snapshot after every mutation that alters what
/// would be persisted; transient keystrokes do not notify.
pub trait PreferencesDelegate {
    fn preferences_changed(&mut self, settings: &DnsSettings);
}
