//! Test helper module
//!
//! Recording implementations of the sink and delegate traits so service
//! tests can assert on the exact emissions of a mutation.

use crate::traits::{PreferencesDelegate, StructuralChangeSink};
use crate::types::{DnsSettings, IndexPath, Item, StructuralChange};

/// Sink that records every emission in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub changes: Vec<StructuralChange>,
    pub refreshes: usize,
    pub scrolls: Vec<IndexPath>,
    pub validity: Vec<(Item, bool)>,
}

impl StructuralChangeSink for RecordingSink {
    fn apply_change(&mut self, change: StructuralChange) {
        self.changes.push(change);
    }

    fn refresh_all(&mut self) {
        self.refreshes += 1;
    }

    fn scroll_to_row(&mut self, index_path: IndexPath) {
        self.scrolls.push(index_path);
    }

    fn entry_validity_changed(&mut self, item: Item, is_valid: bool) {
        self.validity.push((item, is_valid));
    }
}

/// Delegate that keeps every snapshot it was handed
#[derive(Debug, Default)]
pub struct RecordingDelegate {
    pub snapshots: Vec<DnsSettings>,
}

impl PreferencesDelegate for RecordingDelegate {
    fn preferences_changed(&mut self, settings: &DnsSettings) {
        self.snapshots.push(settings.clone());
    }
}

/// Delegate for call sites that must not be notified at all
#[derive(Debug, Default)]
pub struct NullDelegate;

impl PreferencesDelegate for NullDelegate {
    fn preferences_changed(&mut self, settings: &DnsSettings) {
        panic!("unexpected delegate notification: {settings:?}");
    }
}
