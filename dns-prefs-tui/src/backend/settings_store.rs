//! JSON settings persistence
//!
//! The core never touches a disk; this store is the external collaborator
//! that owns the persisted snapshot. It doubles as the core's delegate, so
//! every persisted-relevant mutation lands on disk as soon as the core
//! reports it.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};

use dns_prefs_core::{DnsSettings, PreferencesDelegate};

/// Settings snapshot stored as pretty-printed JSON
#[derive(Debug)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    /// Store under the platform config directory
    /// (`<config>/dns-prefs/settings.json`).
    #[must_use]
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::at(base.join("dns-prefs").join("settings.json"))
    }

    /// Store at an explicit path.
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the snapshot; a missing file yields the defaults.
    pub fn load(&self) -> Result<DnsSettings> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(DnsSettings::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read {}", self.path.display()));
            }
        };

        serde_json::from_str(&data)
            .with_context(|| format!("malformed settings file {}", self.path.display()))
    }

    /// Write the snapshot, creating parent directories on first save.
    pub fn save(&self, settings: &DnsSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let data = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, data)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

impl Default for JsonSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferencesDelegate for JsonSettingsStore {
    fn preferences_changed(&mut self, settings: &DnsSettings) {
        if let Err(err) = self.save(settings) {
            // The in-memory state stays authoritative; surface and move on.
            log::warn!("failed to persist DNS settings: {err:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> JsonSettingsStore {
        let path = std::env::temp_dir()
            .join(format!("dns-prefs-test-{}-{name}", std::process::id()))
            .join("settings.json");
        let _ = std::fs::remove_file(&path);
        JsonSettingsStore::at(path)
    }

    #[test]
    fn missing_file_loads_defaults() {
        let store = temp_store("missing");
        assert_eq!(store.load().expect("defaults"), DnsSettings::default());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let store = temp_store("roundtrip");
        let settings = DnsSettings {
            block_tracking: true,
            enable_custom_dns: true,
            custom_dns_domains: vec!["10.0.0.1".parse().expect("valid")],
            ..DnsSettings::default()
        };

        store.save(&settings).expect("save");
        assert_eq!(store.load().expect("load"), settings);
    }

    #[test]
    fn delegate_notification_persists() {
        let mut store = temp_store("delegate");
        let settings = DnsSettings {
            block_advertising: true,
            ..DnsSettings::default()
        };

        store.preferences_changed(&settings);
        assert_eq!(store.load().expect("load"), settings);
    }
}
