//! Entry points wiring events, providers and the firewall together.

use crate::event::{RulesEvent, ServicesEvent};
use crate::orchestrator::reconcile_groups;
use sgsync_core::{Direction, FirewallMutator, FirewallReader, Protocol, Result, Rule};
use sgsync_provider::{HostResolver, IpRangesClient};
use tracing::error;

/// Port permitted for whitelisted AWS services
const HTTPS_PORT: u16 = 443;

/// Protocol permitted for whitelisted AWS services
const SERVICE_PROTOCOL: Protocol = Protocol::Tcp;

/// Reconcile security groups against rules carried in the event
pub async fn handle_rules_event<F>(event: RulesEvent, firewall: &F) -> Result<()>
where
    F: FirewallReader + FirewallMutator,
{
    let rules: Vec<Rule> = event.rules.into_iter().map(Rule::from).collect();
    reconcile_groups(&rules, &event.security_groups, firewall).await
}

/// Reconcile security groups against HTTPS egress rules for the AWS
/// services named in the event.
///
/// A provider failure aborts before any mutation is attempted.
pub async fn handle_services_event<F>(event: &ServicesEvent, firewall: &F) -> Result<()>
where
    F: FirewallReader + FirewallMutator,
{
    let provider = IpRangesClient::new(event.regions.iter().cloned());
    let rules = service_egress_rules(&provider, &event.services).await?;
    reconcile_groups(&rules, &event.security_groups, firewall).await
}

/// Build one HTTPS egress rule per service from the address-list provider
pub async fn service_egress_rules(
    provider: &IpRangesClient,
    services: &[String],
) -> Result<Vec<Rule>> {
    let mut rules = Vec::with_capacity(services.len());

    for service in services {
        let addresses = provider.service_cidrs(service).await.map_err(|err| {
            error!(%service, %err, "failed to read CIDRs for service");
            sgsync_core::SyncError::from(err)
        })?;

        rules.push(Rule::new(
            service.clone(),
            HTTPS_PORT,
            SERVICE_PROTOCOL,
            Direction::Egress,
            addresses,
        ));
    }

    Ok(rules)
}

/// Build a rule for a DNS-resolved host. The rule is named after the
/// host; its addresses are the host's current A/AAAA records.
pub async fn resolved_host_rule(
    resolver: &HostResolver,
    hostname: &str,
    port: u16,
    protocol: Protocol,
    direction: Direction,
) -> Result<Rule> {
    let addresses = resolver
        .resolve(hostname)
        .await
        .map_err(sgsync_core::SyncError::from)?
        .into_iter()
        .map(|ip| ip.to_string())
        .collect();

    Ok(Rule::new(hostname, port, protocol, direction, addresses))
}
