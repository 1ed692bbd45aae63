//! IP address input validation
//!
//! Leaf helpers used both for full validation on commit and for
//! character-level filtering while an address is still being typed.

use std::net::IpAddr;

/// Parse a candidate string as an IPv4 or IPv6 literal.
///
/// IPv4 must be a dotted quad; IPv6 accepts compressed and IPv4-mapped
/// forms. An unparsable string yields `None`, never an error.
#[must_use]
pub fn parse_ip_address(candidate: &str) -> Option<IpAddr> {
    candidate.parse::<IpAddr>().ok()
}

/// Whether the candidate is a well-formed IPv4 or IPv6 literal.
#[must_use]
pub fn is_valid_ip_address(candidate: &str) -> bool {
    parse_ip_address(candidate).is_some()
}

/// Canonical textual form of a valid address, `None` if unparsable.
///
/// IPv6 canonicalization compresses the longest zero run and lowercases
/// hex digits, so `"0:0:0:0:0:0:0:1"` becomes `"::1"`.
#[must_use]
pub fn canonicalize_ip_address(candidate: &str) -> Option<String> {
    parse_ip_address(candidate).map(|addr| addr.to_string())
}

/// Whether a single character could appear in a valid IPv4 *or* IPv6
/// literal.
///
/// The address family is unknown mid-entry, so this accepts the union of
/// both alphabets: hex digits, `.` and `:`. Used to reject keystrokes
/// before a full parse is possible.
#[must_use]
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_hexdigit() || c == '.' || c == ':'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ipv4_dotted_quad() {
        assert!(is_valid_ip_address("192.168.1.1"));
        assert!(is_valid_ip_address("0.0.0.0"));
        assert!(is_valid_ip_address("255.255.255.255"));
    }

    #[test]
    fn accepts_ipv6_forms() {
        assert!(is_valid_ip_address("::1"));
        assert!(is_valid_ip_address("2001:db8::8a2e:370:7334"));
        assert!(is_valid_ip_address("fe80:0:0:0:0:0:0:1"));
        // IPv4-mapped
        assert!(is_valid_ip_address("::ffff:192.0.2.1"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_ip_address(""));
        assert!(!is_valid_ip_address("not-an-ip"));
        assert!(!is_valid_ip_address("256.1.1.1"));
        assert!(!is_valid_ip_address("1.2.3"));
        assert!(!is_valid_ip_address("1.2.3.4.5"));
        assert!(!is_valid_ip_address("2001:db8:::1"));
        assert!(!is_valid_ip_address("192.168.1.1 "));
    }

    #[test]
    fn canonicalizes_ipv6() {
        assert_eq!(
            canonicalize_ip_address("0:0:0:0:0:0:0:1").as_deref(),
            Some("::1")
        );
        assert_eq!(
            canonicalize_ip_address("2001:DB8::1").as_deref(),
            Some("2001:db8::1")
        );
        assert_eq!(canonicalize_ip_address("10.0.0.1").as_deref(), Some("10.0.0.1"));
        assert_eq!(canonicalize_ip_address("garbage"), None);
    }

    #[test]
    fn char_filter_accepts_union_alphabet() {
        for c in "0123456789abcdefABCDEF.:".chars() {
            assert!(is_allowed_char(c), "expected {c:?} to be allowed");
        }
    }

    #[test]
    fn char_filter_rejects_everything_else() {
        for c in ['g', 'z', ' ', '-', '/', ',', 'G'] {
            assert!(!is_allowed_char(c), "expected {c:?} to be rejected");
        }
    }
}
