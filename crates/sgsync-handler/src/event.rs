//! Invocation event payloads.
//!
//! Field names match the camelCase JSON the reconciliation trigger sends.

use serde::Deserialize;
use sgsync_core::{Direction, Protocol, Rule};

/// Event carrying fully-specified rules (the DNS firewall entrypoint)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesEvent {
    /// Rules to apply
    pub rules: Vec<RuleSpec>,

    /// Security groups to apply them to
    pub security_groups: Vec<String>,
}

/// Event naming AWS services to whitelist (the API egress entrypoint).
///
/// See <https://docs.aws.amazon.com/general/latest/gr/aws-ip-ranges.html>
/// for a complete list of services.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesEvent {
    /// AWS services to whitelist
    pub services: Vec<String>,

    /// Regions to whitelist addresses in
    pub regions: Vec<String>,

    /// Security groups to apply them to
    pub security_groups: Vec<String>,
}

/// Wire form of a single rule
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSpec {
    /// Peer name, used for the ownership tag
    pub name: String,

    /// Single port to permit
    pub port: u16,

    /// Transport protocol
    pub protocol: Protocol,

    /// Outbound when true, inbound otherwise
    #[serde(default)]
    pub egress: bool,

    /// Addresses currently associated with the peer
    #[serde(default)]
    pub ip_addresses: Vec<String>,
}

impl From<RuleSpec> for Rule {
    fn from(spec: RuleSpec) -> Self {
        let direction = if spec.egress {
            Direction::Egress
        } else {
            Direction::Ingress
        };

        Self::new(spec.name, spec.port, spec.protocol, direction, spec.ip_addresses)
    }
}
