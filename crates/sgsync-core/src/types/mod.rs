//! Types shared across the reconciliation engine.

mod group;
mod rule;

pub use group::{AddressEntry, PermissionEntry, SecurityGroup};
pub use rule::{Direction, Protocol, Rule};
