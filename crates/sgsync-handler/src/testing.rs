//! In-memory firewall fake shared by the handler tests.

use async_trait::async_trait;
use sgsync_core::{
    FirewallMutator, FirewallReader, PermissionEntry, Result, SecurityGroup, SyncError,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// One recorded mutation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    AuthorizeIngress(String, Vec<PermissionEntry>),
    AuthorizeEgress(String, Vec<PermissionEntry>),
    RevokeIngress(String, Vec<PermissionEntry>),
    RevokeEgress(String, Vec<PermissionEntry>),
}

/// Records mutation calls and serves described groups from a map.
/// Unknown group identifiers fail describe, as the real accessor would.
#[derive(Default)]
pub struct FakeFirewall {
    groups: HashMap<String, SecurityGroup>,
    calls: Mutex<Vec<Call>>,
    fail_mutations: bool,
}

impl FakeFirewall {
    pub fn with_groups(groups: impl IntoIterator<Item = SecurityGroup>) -> Self {
        Self {
            groups: groups
                .into_iter()
                .map(|group| (group.id.clone(), group))
                .collect(),
            calls: Mutex::new(Vec::new()),
            fail_mutations: false,
        }
    }

    pub fn failing_mutations(mut self) -> Self {
        self.fail_mutations = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail_mutations {
            Err(SyncError::api("mutation", "rejected by fake"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl FirewallReader for FakeFirewall {
    async fn describe(&self, group_id: &str) -> Result<SecurityGroup> {
        self.groups
            .get(group_id)
            .cloned()
            .ok_or_else(|| SyncError::GroupResolution {
                id: group_id.to_string(),
                matches: 0,
            })
    }
}

#[async_trait]
impl FirewallMutator for FakeFirewall {
    async fn authorize_ingress(
        &self,
        group_id: &str,
        permissions: Vec<PermissionEntry>,
    ) -> Result<()> {
        self.record(Call::AuthorizeIngress(group_id.to_string(), permissions))
    }

    async fn authorize_egress(
        &self,
        group_id: &str,
        permissions: Vec<PermissionEntry>,
    ) -> Result<()> {
        self.record(Call::AuthorizeEgress(group_id.to_string(), permissions))
    }

    async fn revoke_ingress(
        &self,
        group_id: &str,
        permissions: Vec<PermissionEntry>,
    ) -> Result<()> {
        self.record(Call::RevokeIngress(group_id.to_string(), permissions))
    }

    async fn revoke_egress(
        &self,
        group_id: &str,
        permissions: Vec<PermissionEntry>,
    ) -> Result<()> {
        self.record(Call::RevokeEgress(group_id.to_string(), permissions))
    }
}
