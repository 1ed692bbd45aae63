//! In-memory preferences data model

use crate::types::DnsSettings;
use crate::validator;

/// Canonical preferences state, value semantics
///
/// Domains are kept as strings rather than parsed addresses because rows
/// are directly editable while the list is in edit mode: an entry may hold
/// transient, not-yet-valid text between keystrokes. Entries are guaranteed
/// valid only after a commit boundary, and [`PreferencesModel::to_settings`]
/// drops anything that still fails to parse as the last line of defense.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesModel {
    pub block_advertising: bool,
    pub block_tracking: bool,
    pub enable_custom_dns: bool,
    /// Custom DNS servers in user-controlled order
    pub custom_dns_domains: Vec<String>,
    /// Transient input buffer of the trailing "add entry" row; never part
    /// of the persisted snapshot
    pub pending_entry_text: String,
}

impl PreferencesModel {
    /// Build the model from a persisted snapshot, mapping each address to
    /// its canonical textual form and clearing the input buffer.
    #[must_use]
    pub fn from_settings(settings: &DnsSettings) -> Self {
        Self {
            block_advertising: settings.block_advertising,
            block_tracking: settings.block_tracking,
            enable_custom_dns: settings.enable_custom_dns,
            custom_dns_domains: settings
                .custom_dns_domains
                .iter()
                .map(ToString::to_string)
                .collect(),
            pending_entry_text: String::new(),
        }
    }

    /// Convert back to the persisted representation.
    ///
    /// Domain strings that fail to parse are dropped rather than rejecting
    /// the whole snapshot; `pending_entry_text` is omitted.
    #[must_use]
    pub fn to_settings(&self) -> DnsSettings {
        DnsSettings {
            block_advertising: self.block_advertising,
            block_tracking: self.block_tracking,
            enable_custom_dns: self.enable_custom_dns,
            custom_dns_domains: self
                .custom_dns_domains
                .iter()
                .filter_map(|domain| validator::parse_ip_address(domain))
                .collect(),
        }
    }

    /// The custom DNS toggle is only meaningful while neither blocking
    /// flag is set; the built-in blocking resolver takes precedence.
    #[must_use]
    pub fn can_enable_custom_dns(&self) -> bool {
        !self.block_advertising && !self.block_tracking
    }

    /// Effective state of the custom DNS toggle, never stored
    /// independently.
    #[must_use]
    pub fn effective_enable_custom_dns(&self) -> bool {
        self.can_enable_custom_dns() && self.enable_custom_dns
    }

    /// Whether entry text should be presented as valid.
    ///
    /// Empty is treated as valid: a not-yet-typed field is not shown as an
    /// error. This is a display relaxation only; empty never commits.
    #[must_use]
    pub fn is_valid_for_presentation(text: &str) -> bool {
        text.is_empty() || validator::is_valid_ip_address(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_domains(domains: &[&str]) -> DnsSettings {
        DnsSettings {
            custom_dns_domains: domains
                .iter()
                .map(|d| d.parse().expect("valid test address"))
                .collect(),
            ..DnsSettings::default()
        }
    }

    #[test]
    fn from_settings_maps_addresses_to_canonical_strings() {
        let model = PreferencesModel::from_settings(&settings_with_domains(&["8.8.8.8", "::1"]));
        assert_eq!(model.custom_dns_domains, vec!["8.8.8.8", "::1"]);
        assert!(model.pending_entry_text.is_empty());
    }

    #[test]
    fn to_settings_drops_unparsable_entries() {
        let model = PreferencesModel {
            custom_dns_domains: vec![
                "192.168.1.1".to_string(),
                "not-an-ip".to_string(),
                "::1".to_string(),
            ],
            ..PreferencesModel::default()
        };

        let settings = model.to_settings();
        let domains: Vec<String> = settings
            .custom_dns_domains
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(domains, vec!["192.168.1.1", "::1"]);
    }

    #[test]
    fn settings_roundtrip_is_idempotent() {
        let settings = DnsSettings {
            block_advertising: true,
            enable_custom_dns: true,
            ..settings_with_domains(&["1.1.1.1", "2001:db8::1"])
        };

        let once = PreferencesModel::from_settings(&settings).to_settings();
        let twice = PreferencesModel::from_settings(&once).to_settings();
        assert_eq!(once, settings);
        assert_eq!(twice, once);
    }

    #[test]
    fn effective_enable_truth_table() {
        for block_ads in [false, true] {
            for block_trackers in [false, true] {
                for enabled in [false, true] {
                    let model = PreferencesModel {
                        block_advertising: block_ads,
                        block_tracking: block_trackers,
                        enable_custom_dns: enabled,
                        ..PreferencesModel::default()
                    };

                    assert_eq!(
                        model.can_enable_custom_dns(),
                        !block_ads && !block_trackers
                    );
                    assert_eq!(
                        model.effective_enable_custom_dns(),
                        enabled && !block_ads && !block_trackers
                    );
                }
            }
        }
    }

    #[test]
    fn presentation_validity_relaxes_empty() {
        assert!(PreferencesModel::is_valid_for_presentation(""));
        assert!(PreferencesModel::is_valid_for_presentation("10.0.0.1"));
        assert!(!PreferencesModel::is_valid_for_presentation("10.0."));
    }
}
