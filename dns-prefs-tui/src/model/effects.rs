//! Presentation-side sink for the core's change feed

use std::collections::HashSet;

use dns_prefs_core::{IndexPath, Item, StructuralChange, StructuralChangeSink};

/// Collects the emissions of one mutation for the next frame
///
/// The view redraws whole frames from the query surface, so row deltas are
/// not patched incrementally; they are kept for status feedback, while the
/// scroll hint and validity flags steer the cursor and row styling.
#[derive(Debug, Default)]
pub struct ViewEffects {
    /// Row deltas of the most recent mutation
    pub last_changes: Vec<StructuralChange>,
    /// Row the core asked to bring into view
    pub scroll_target: Option<IndexPath>,
    /// Editable rows currently flagged presentationally invalid
    pub invalid_rows: HashSet<Item>,
}

impl StructuralChangeSink for ViewEffects {
    fn apply_change(&mut self, change: StructuralChange) {
        self.last_changes.push(change);

        // Entry indices shift under inserts and deletes; the stale flags
        // are re-derived from row text on the next keystroke.
        if matches!(
            change,
            StructuralChange::InsertRow(_) | StructuralChange::DeleteRow(_)
        ) {
            self.invalid_rows.retain(|item| !matches!(item, Item::DnsEntry(_)));
        }
    }

    fn refresh_all(&mut self) {
        self.last_changes.clear();
        self.invalid_rows.clear();
    }

    fn scroll_to_row(&mut self, index_path: IndexPath) {
        self.scroll_target = Some(index_path);
    }

    fn entry_validity_changed(&mut self, item: Item, is_valid: bool) {
        if is_valid {
            self.invalid_rows.remove(&item);
        } else {
            self.invalid_rows.insert(item);
        }
    }
}
