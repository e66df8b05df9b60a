//! External collaborators for dynamic security group sync.
//!
//! Two address sources feed the reconciliation engine:
//!
//! - [`IpRangesClient`]: the published AWS IP ranges file, fetched once per
//!   process and filtered by service and region
//! - [`HostResolver`]: DNS resolution for host-based peers

#![doc(html_root_url = "https://docs.rs/sgsync-provider/1.0.0")]

pub mod dns;
mod error;
pub mod ipranges;

pub use dns::HostResolver;
pub use error::{ProviderError, ProviderResult};
pub use ipranges::{IpRanges, IpRangesClient, Prefix, IP_RANGES_URL};
