//! Address normalization and ownership tagging.
//!
//! Rules carry bare IP addresses or full CIDR blocks; firewall state always
//! carries CIDRs. Both matching and entry construction go through
//! [`to_cidr`] so the two representations compare equal.

use std::net::Ipv6Addr;

/// Description prefix marking an address entry as reconciler-owned.
///
/// This is the only signal distinguishing entries the engine may revoke
/// from entries a human created by hand.
pub const AUTOGENERATED_PREFIX: &str = "AUTOGENERATED: ";

/// The ownership description written for entries created on behalf of
/// the named rule
#[must_use]
pub fn ownership_tag(rule_name: &str) -> String {
    format!("{AUTOGENERATED_PREFIX}{rule_name}")
}

/// Whether a description marks its entry as reconciler-owned
#[must_use]
pub fn is_reconciler_owned(description: Option<&str>) -> bool {
    description.is_some_and(|d| d.starts_with(AUTOGENERATED_PREFIX))
}

/// Normalize an address to CIDR prefix notation.
///
/// A bare IPv4 address becomes a `/32`, a bare IPv6 address a `/128`;
/// anything already containing a prefix length passes through unchanged.
#[must_use]
pub fn to_cidr(address: &str) -> String {
    if address.contains('/') {
        return address.to_string();
    }

    if address.parse::<Ipv6Addr>().is_ok() {
        format!("{address}/128")
    } else {
        format!("{address}/32")
    }
}
