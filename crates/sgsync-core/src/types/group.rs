use super::rule::Direction;
use serde::{Deserialize, Serialize};

/// One CIDR block within a permission entry, with its optional
/// ownership description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressEntry {
    /// CIDR in prefix notation (e.g. `10.0.0.0/8`)
    #[serde(default)]
    pub cidr: Option<String>,

    /// Free-form description. Reconciler-owned entries carry the
    /// autogenerated ownership tag here.
    #[serde(default)]
    pub description: Option<String>,
}

impl AddressEntry {
    /// Create an entry with a CIDR and description
    #[must_use]
    pub fn new(cidr: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            cidr: Some(cidr.into()),
            description: Some(description.into()),
        }
    }
}

/// One block of a security group's current permission state.
///
/// All fields are genuinely optional: the upstream representation may omit
/// any of them. An absent field is never a wildcard match; it makes the
/// entry unmatchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionEntry {
    /// Lower port bound; a valid single-port entry has `from_port == to_port`
    #[serde(default)]
    pub from_port: Option<u16>,

    /// Upper port bound
    #[serde(default)]
    pub to_port: Option<u16>,

    /// Transport protocol as a lowercase string
    #[serde(default)]
    pub protocol: Option<String>,

    /// CIDR blocks covered by this entry
    #[serde(default)]
    pub ranges: Vec<AddressEntry>,
}

impl PermissionEntry {
    /// Create a single-port entry for the given port and protocol
    #[must_use]
    pub fn single_port(port: u16, protocol: impl Into<String>, ranges: Vec<AddressEntry>) -> Self {
        Self {
            from_port: Some(port),
            to_port: Some(port),
            protocol: Some(protocol.into()),
            ranges,
        }
    }
}

/// Current state of one firewall resource: an identifier plus independent
/// ingress and egress permission lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityGroup {
    /// Resource identifier (e.g. `sg-123`)
    pub id: String,

    /// Inbound permission entries
    #[serde(default)]
    pub ingress: Vec<PermissionEntry>,

    /// Outbound permission entries
    #[serde(default)]
    pub egress: Vec<PermissionEntry>,
}

impl SecurityGroup {
    /// Create an empty security group with the given identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ingress: Vec::new(),
            egress: Vec::new(),
        }
    }

    /// The permission list for one traffic direction
    #[must_use]
    pub fn permissions(&self, direction: Direction) -> &[PermissionEntry] {
        match direction {
            Direction::Ingress => &self.ingress,
            Direction::Egress => &self.egress,
        }
    }
}
