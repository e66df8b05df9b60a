//! Add and cleanup synchronizers.
//!
//! Both run one pass per direction against a freshly described security
//! group. Each direction gets at most one authorize and one revoke call
//! per pass, so repeated invocations with unchanged desired state issue
//! no calls at all. Mutation errors are returned immediately; the next
//! pass is expected to complete convergence.

use crate::address::{is_reconciler_owned, ownership_tag, to_cidr};
use crate::error::Result;
use crate::firewall::FirewallMutator;
use crate::matcher::exists;
use crate::types::{AddressEntry, Direction, PermissionEntry, Rule, SecurityGroup};
use tracing::debug;

const DIRECTIONS: [Direction; 2] = [Direction::Egress, Direction::Ingress];

/// Authorize every desired (rule, address) pair not already permitted.
///
/// Unmatched addresses are grouped into one [`PermissionEntry`] per rule,
/// each tagged with the rule's ownership description, and all entries for
/// a direction are carried in a single authorize call. Directions with no
/// unmatched addresses issue no call.
pub async fn add<F>(rules: &[Rule], group: &SecurityGroup, firewall: &F) -> Result<()>
where
    F: FirewallMutator + ?Sized,
{
    for direction in DIRECTIONS {
        let pending = pending_entries(rules, group, direction);
        if pending.is_empty() {
            continue;
        }

        debug!(
            group = %group.id,
            %direction,
            blocks = pending.len(),
            "authorizing permissions"
        );

        match direction {
            Direction::Egress => firewall.authorize_egress(&group.id, pending).await?,
            Direction::Ingress => firewall.authorize_ingress(&group.id, pending).await?,
        }
    }

    Ok(())
}

/// Revoke reconciler-owned entries no longer claimed by any rule.
///
/// Only entries carrying the ownership tag are candidates; manually
/// created entries are never revoked regardless of whether any rule
/// references them. Candidates are regrouped mirroring the block
/// boundaries in which they were found, so an unowned CIDR sharing a
/// block with an owned one is left untouched.
pub async fn cleanup<F>(rules: &[Rule], group: &SecurityGroup, firewall: &F) -> Result<()>
where
    F: FirewallMutator + ?Sized,
{
    for direction in DIRECTIONS {
        let stale = stale_entries(rules, group, direction);
        if stale.is_empty() {
            continue;
        }

        debug!(
            group = %group.id,
            %direction,
            blocks = stale.len(),
            "revoking stale permissions"
        );

        match direction {
            Direction::Egress => firewall.revoke_egress(&group.id, stale).await?,
            Direction::Ingress => firewall.revoke_ingress(&group.id, stale).await?,
        }
    }

    Ok(())
}

/// Candidate permission blocks for one direction: one block per rule
/// holding its not-yet-permitted addresses
fn pending_entries(
    rules: &[Rule],
    group: &SecurityGroup,
    direction: Direction,
) -> Vec<PermissionEntry> {
    rules
        .iter()
        .filter(|rule| rule.direction == direction)
        .filter_map(|rule| {
            let ranges: Vec<AddressEntry> = rule
                .addresses
                .iter()
                .filter(|address| !exists(address, rule, group))
                .map(|address| AddressEntry::new(to_cidr(address), ownership_tag(&rule.name)))
                .collect();

            if ranges.is_empty() {
                None
            } else {
                Some(PermissionEntry::single_port(
                    rule.port,
                    rule.protocol.as_str(),
                    ranges,
                ))
            }
        })
        .collect()
}

/// Stale owned ranges for one direction, regrouped into blocks mirroring
/// the structure they were found in
fn stale_entries(
    rules: &[Rule],
    group: &SecurityGroup,
    direction: Direction,
) -> Vec<PermissionEntry> {
    group
        .permissions(direction)
        .iter()
        .filter_map(|entry| {
            let stale: Vec<AddressEntry> = entry
                .ranges
                .iter()
                .filter(|range| {
                    // A tagged range without a CIDR has nothing addressable
                    // to revoke.
                    let Some(cidr) = range.cidr.as_deref() else {
                        return false;
                    };

                    is_reconciler_owned(range.description.as_deref())
                        && !claimed(cidr, entry, rules, direction)
                })
                .cloned()
                .collect();

            if stale.is_empty() {
                None
            } else {
                Some(PermissionEntry {
                    from_port: entry.from_port,
                    to_port: entry.to_port,
                    protocol: entry.protocol.clone(),
                    ranges: stale,
                })
            }
        })
        .collect()
}

/// Whether some rule still claims this CIDR under the entry's port and
/// protocol. Matches on port/protocol/address equality, never on the
/// rule name embedded in the ownership tag.
fn claimed(cidr: &str, entry: &PermissionEntry, rules: &[Rule], direction: Direction) -> bool {
    rules.iter().any(|rule| {
        rule.direction == direction
            && entry.from_port == Some(rule.port)
            && entry.to_port == Some(rule.port)
            && entry.protocol.as_deref() == Some(rule.protocol.as_str())
            && rule.addresses.iter().any(|address| to_cidr(address) == cidr)
    })
}
