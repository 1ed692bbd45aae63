//! Persisted DNS settings snapshot

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// Persisted DNS preference snapshot
///
/// This is the representation that crosses the core boundary: the model is
/// constructed from it at load time and converted back to it for every
/// delegate notification. Every field defaults independently so a snapshot
/// with a single corrupt field still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsSettings {
    /// Block DNS lookups against known advertising domains
    #[serde(default)]
    pub block_advertising: bool,

    /// Block DNS lookups against known tracker domains
    #[serde(default)]
    pub block_tracking: bool,

    /// Use the custom server list instead of the built-in resolver
    #[serde(default)]
    pub enable_custom_dns: bool,

    /// Custom DNS servers in user-controlled order
    #[serde(default)]
    pub custom_dns_domains: Vec<IpAddr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_empty() {
        let s = DnsSettings::default();
        assert!(!s.block_advertising);
        assert!(!s.block_tracking);
        assert!(!s.enable_custom_dns);
        assert!(s.custom_dns_domains.is_empty());
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let s: DnsSettings = serde_json::from_str(r#"{"blockAdvertising":true}"#)
            .expect("partial snapshot should load");
        assert!(s.block_advertising);
        assert!(!s.enable_custom_dns);
        assert!(s.custom_dns_domains.is_empty());
    }

    #[test]
    fn serializes_camel_case_addresses() {
        let s = DnsSettings {
            enable_custom_dns: true,
            custom_dns_domains: vec!["8.8.8.8".parse().expect("valid"), "::1".parse().expect("valid")],
            ..DnsSettings::default()
        };
        let json = serde_json::to_string(&s).expect("serializable");
        assert!(json.contains(r#""enableCustomDns":true"#));
        assert!(json.contains(r#""8.8.8.8""#));
        assert!(json.contains(r#""::1""#));
    }
}
