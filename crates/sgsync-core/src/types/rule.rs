use crate::error::SyncError;
use serde::{Deserialize, Serialize};

/// Transport protocol for a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// TCP protocol
    Tcp,
    /// UDP protocol
    Udp,
}

impl Protocol {
    /// The exact lowercase identifier used when comparing against
    /// firewall state
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tcp => "tcp",
            Self::Udp => "udp",
        }
    }
}

impl Default for Protocol {
    fn default() -> Self {
        Self::Tcp
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Protocol {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Self::Tcp),
            "udp" => Ok(Self::Udp),
            other => Err(SyncError::UnsupportedProtocol(other.to_string())),
        }
    }
}

/// Traffic direction of a permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Inbound traffic
    Ingress,
    /// Outbound traffic
    Egress,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ingress => f.write_str("ingress"),
            Self::Egress => f.write_str("egress"),
        }
    }
}

/// A desired allow-rule for a logical peer.
///
/// Built fresh on every reconciliation pass from rule configuration plus
/// the current address set for the peer; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Human-readable tag for the peer this rule permits. Unique per
    /// direction within a pass; not used as a lookup key for matching.
    pub name: String,

    /// Single port permitted by this rule (ranges are not supported)
    pub port: u16,

    /// Transport protocol
    pub protocol: Protocol,

    /// Traffic direction
    pub direction: Direction,

    /// CIDR blocks (or bare IPs) currently associated with the peer.
    /// Duplicates produce redundant work, not errors.
    pub addresses: Vec<String>,
}

impl Rule {
    /// Create a new rule
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        port: u16,
        protocol: Protocol,
        direction: Direction,
        addresses: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            port,
            protocol,
            direction,
            addresses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_round_trips_lowercase() {
        assert_eq!("tcp".parse::<Protocol>().unwrap(), Protocol::Tcp);
        assert_eq!("udp".parse::<Protocol>().unwrap(), Protocol::Udp);
        assert_eq!(Protocol::Tcp.to_string(), "tcp");
        assert_eq!(Protocol::Udp.to_string(), "udp");
    }

    #[test]
    fn protocol_rejects_unknown_identifiers() {
        assert!("TCP".parse::<Protocol>().is_err());
        assert!("icmp".parse::<Protocol>().is_err());
    }
}
