//! Core types and reconciliation engine for dynamic security group sync.
//!
//! This crate holds the parts with real invariants:
//!
//! - **Types**: [`Rule`], [`PermissionEntry`], [`SecurityGroup`] and friends
//! - **Matcher**: [`exists`], deciding whether an address is already permitted
//! - **Synchronizers**: [`add`] and [`cleanup`], computing and issuing the
//!   minimal authorize/revoke calls
//! - **Traits**: [`FirewallReader`] and [`FirewallMutator`], the only view
//!   the engine has of the cloud API
//!
//! Reconciliation is a single stateless pass per security group:
//! describe, add what is missing, revoke what is stale and owned. The
//! ownership tag ([`AUTOGENERATED_PREFIX`]) is the only signal separating
//! revocable entries from manually created ones.

#![doc(html_root_url = "https://docs.rs/sgsync-core/1.0.0")]

pub mod address;
mod error;
pub mod firewall;
pub mod matcher;
pub mod sync;
pub mod types;

pub use address::{is_reconciler_owned, ownership_tag, to_cidr, AUTOGENERATED_PREFIX};
pub use error::{Result, SyncError};
pub use firewall::{FirewallMutator, FirewallReader};
pub use matcher::exists;
pub use sync::{add, cleanup};
pub use types::{AddressEntry, Direction, PermissionEntry, Protocol, Rule, SecurityGroup};
