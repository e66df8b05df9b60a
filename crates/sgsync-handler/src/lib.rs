//! Invocation handlers and orchestration for dynamic security group sync.
//!
//! This crate is the boundary between the reconciliation engine and its
//! trigger: it deserializes event payloads, builds the desired rule set
//! (from the event itself, the AWS IP ranges file, or DNS), runs the
//! describe → add → cleanup pass over every named security group, and
//! aggregates errors into a single ok/failed outcome.

#![doc(html_root_url = "https://docs.rs/sgsync-handler/1.0.0")]

pub mod event;
mod handlers;
mod orchestrator;

#[cfg(test)]
pub(crate) mod testing;

pub use event::{RuleSpec, RulesEvent, ServicesEvent};
pub use handlers::{
    handle_rules_event, handle_services_event, resolved_host_rule, service_egress_rules,
};
pub use orchestrator::{outcome, reconcile_groups, Outcome};
