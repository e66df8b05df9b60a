//! Predicate deciding whether an address is already permitted for a rule.

use crate::address::to_cidr;
use crate::types::{Rule, SecurityGroup};

/// Returns true iff the group's permission list for the rule's direction
/// already permits `address` at the rule's port and protocol.
///
/// An entry matches only when both port bounds are present and equal the
/// rule's port (a range spanning the port does not match), the protocol is
/// present and string-equal, and some address entry carries exactly the
/// normalized CIDR. Absence of any field is a non-match, not an error:
/// partial upstream state is treated as "not yet permitted".
#[must_use]
pub fn exists(address: &str, rule: &Rule, group: &SecurityGroup) -> bool {
    let cidr = to_cidr(address);

    group.permissions(rule.direction).iter().any(|entry| {
        entry.from_port == Some(rule.port)
            && entry.to_port == Some(rule.port)
            && entry.protocol.as_deref() == Some(rule.protocol.as_str())
            && entry
                .ranges
                .iter()
                .any(|range| range.cidr.as_deref() == Some(cidr.as_str()))
    })
}
