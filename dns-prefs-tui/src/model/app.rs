//! Application state

use dns_prefs_core::{DnsSettings, IndexPath, Item, PreferencesService};

use crate::backend::JsonSettingsStore;
use crate::model::ViewEffects;

/// Top-level application state
///
/// The preferences core owns the data model; this struct adds what the
/// terminal needs on top: a cursor, the collected view effects and the
/// persistence store wired up as the core's delegate.
pub struct App {
    /// Preferences state core
    pub service: PreferencesService,
    /// Settings persistence, notified as the core's delegate
    pub store: JsonSettingsStore,
    /// Sink collecting the core's emissions for the next frame
    pub effects: ViewEffects,
    /// Focused row
    pub cursor: IndexPath,
    /// Status line message
    pub status: Option<String>,
    /// Whether the main loop should exit
    pub should_quit: bool,
}

impl App {
    /// Create the initial state, loading the persisted snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(JsonSettingsStore::new())
    }

    /// Create the initial state over an explicit store.
    #[must_use]
    pub fn with_store(store: JsonSettingsStore) -> Self {
        let settings = store.load().unwrap_or_else(|err| {
            log::warn!("falling back to default DNS settings: {err:#}");
            DnsSettings::default()
        });

        Self {
            service: PreferencesService::new(&settings),
            store,
            effects: ViewEffects::default(),
            cursor: IndexPath::new(0, 0),
            status: None,
            should_quit: false,
        }
    }

    /// Item under the cursor, `None` if the cursor went stale.
    #[must_use]
    pub fn focused_item(&self) -> Option<Item> {
        self.service.item_at(self.cursor)
    }

    /// Every currently projected row in presentation order.
    #[must_use]
    pub fn row_paths(&self) -> Vec<IndexPath> {
        let mut paths = Vec::new();
        for (section_index, &section) in self.service.sections().iter().enumerate() {
            for row in 0..self.service.row_count(section) {
                paths.push(IndexPath::new(section_index, row));
            }
        }
        paths
    }

    /// Move the cursor one row up, crossing section boundaries.
    pub fn select_previous(&mut self) {
        let paths = self.row_paths();
        match paths.iter().position(|p| *p == self.cursor) {
            Some(pos) if pos > 0 => self.cursor = paths[pos - 1],
            Some(_) => {}
            None => self.clamp_cursor(),
        }
    }

    /// Move the cursor one row down, crossing section boundaries.
    pub fn select_next(&mut self) {
        let paths = self.row_paths();
        match paths.iter().position(|p| *p == self.cursor) {
            Some(pos) if pos + 1 < paths.len() => self.cursor = paths[pos + 1],
            Some(_) => {}
            None => self.clamp_cursor(),
        }
    }

    /// Jump to the first row.
    pub fn select_first(&mut self) {
        self.cursor = IndexPath::new(0, 0);
    }

    /// Jump to the last row.
    pub fn select_last(&mut self) {
        if let Some(last) = self.row_paths().last() {
            self.cursor = *last;
        }
    }

    /// Re-anchor a cursor left stale by a structural change.
    pub fn clamp_cursor(&mut self) {
        if self.focused_item().is_some() {
            return;
        }

        let section_count = self.service.section_count();
        let section_index = self.cursor.section.min(section_count.saturating_sub(1));
        let section = self.service.sections()[section_index];
        let row = self
            .cursor
            .row
            .min(self.service.row_count(section).saturating_sub(1));
        self.cursor = IndexPath::new(section_index, row);
    }

    /// Replace the status line message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
