//! Abstraction over the cloud firewall API.
//!
//! The reconciliation engine depends only on these traits, never on a
//! concrete cloud SDK type, so it is portable across providers and
//! testable with an in-memory fake. Implementations are capability
//! objects passed in at call time; there is no shared client singleton.

use crate::error::Result;
use crate::types::{PermissionEntry, SecurityGroup};
use async_trait::async_trait;

/// Read access to firewall resource state
#[async_trait]
pub trait FirewallReader {
    /// Describe a single security group by identifier.
    ///
    /// Errors if the identifier resolves to zero or more than one resource.
    async fn describe(&self, group_id: &str) -> Result<SecurityGroup>;
}

/// The four mutation operations of the firewall API.
///
/// Each call is an independent remote operation returning only
/// success or error; there is no partial-success result shape.
#[async_trait]
pub trait FirewallMutator {
    /// Grant inbound permissions on a security group
    async fn authorize_ingress(
        &self,
        group_id: &str,
        permissions: Vec<PermissionEntry>,
    ) -> Result<()>;

    /// Grant outbound permissions on a security group
    async fn authorize_egress(
        &self,
        group_id: &str,
        permissions: Vec<PermissionEntry>,
    ) -> Result<()>;

    /// Revoke inbound permissions from a security group
    async fn revoke_ingress(
        &self,
        group_id: &str,
        permissions: Vec<PermissionEntry>,
    ) -> Result<()>;

    /// Revoke outbound permissions from a security group
    async fn revoke_egress(
        &self,
        group_id: &str,
        permissions: Vec<PermissionEntry>,
    ) -> Result<()>;
}
