//! DNS resolution for host-based peers.

use crate::error::{ProviderError, ProviderResult};
use std::net::IpAddr;

/// Resolver turning a hostname into its current IP addresses
#[derive(Debug, Default)]
pub struct HostResolver {
    _private: (),
}

impl HostResolver {
    /// Create a resolver using the system DNS configuration
    #[must_use]
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Resolve a hostname to IP addresses using system DNS
    pub async fn resolve(&self, hostname: &str) -> ProviderResult<Vec<IpAddr>> {
        use tokio::net::lookup_host;

        // Port 0 satisfies the socket-address form lookup_host expects.
        let addr_str = format!("{hostname}:0");
        let addrs = lookup_host(&addr_str)
            .await
            .map_err(|e| ProviderError::Dns(format!("{hostname}: {e}")))?;

        Ok(addrs.map(|a| a.ip()).collect())
    }
}
