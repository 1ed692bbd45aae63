//! Backend layer: settings persistence

mod settings_store;

pub use settings_store::JsonSettingsStore;
