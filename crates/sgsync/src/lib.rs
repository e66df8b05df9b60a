//! Keep cloud security groups in sync with dynamic address sets.
//!
//! Each invocation is a stateless reconciliation pass: describe the
//! current permission state, authorize whatever the desired rules still
//! lack, and revoke stale entries the reconciler owns. Entries created by
//! hand are never touched; ownership is tracked through the
//! `AUTOGENERATED:` description tag.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sgsync::{handle_services_event, outcome, ServicesEvent};
//!
//! #[tokio::main]
//! async fn main() {
//!     let event: ServicesEvent = serde_json::from_str(
//!         r#"{
//!             "services": ["S3"],
//!             "regions": ["us-east-1"],
//!             "securityGroups": ["sg-123"]
//!         }"#,
//!     )
//!     .unwrap();
//!
//!     // `firewall` is any implementation of FirewallReader + FirewallMutator.
//!     let result = handle_services_event(&event, &firewall).await;
//!     println!("{}", outcome(&result));
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/sgsync/1.0.0")]

// Re-export core types and the reconciliation engine
pub use sgsync_core::*;

// Re-export providers
pub use sgsync_provider::{HostResolver, IpRangesClient, ProviderError, IP_RANGES_URL};

// Re-export handlers and orchestration
pub use sgsync_handler::{
    handle_rules_event, handle_services_event, outcome, reconcile_groups, resolved_host_rule,
    service_egress_rules, Outcome, RuleSpec, RulesEvent, ServicesEvent,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
