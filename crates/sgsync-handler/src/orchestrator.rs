//! Per-invocation reconciliation loop.

use sgsync_core::{add, cleanup, FirewallMutator, FirewallReader, Result, Rule, SyncError};
use tracing::error;

/// Coarse result of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every security group converged cleanly
    Ok,
    /// At least one security group's processing produced an error
    Failed,
}

impl Outcome {
    /// The trigger payload string for this outcome
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a pass result to its trigger outcome
#[must_use]
pub const fn outcome<T>(result: &Result<T>) -> Outcome {
    match result {
        Ok(_) => Outcome::Ok,
        Err(_) => Outcome::Failed,
    }
}

/// Reconcile every named security group against the desired rules.
///
/// Groups are processed sequentially and independently: a failure in one
/// does not stop the others, and an add failure does not prevent the
/// cleanup attempt for the same group. Every error is logged; the first
/// one encountered is returned as representative of the batch.
pub async fn reconcile_groups<F>(rules: &[Rule], group_ids: &[String], firewall: &F) -> Result<()>
where
    F: FirewallReader + FirewallMutator,
{
    let mut first_error: Option<SyncError> = None;

    for group_id in group_ids {
        let group = match firewall.describe(group_id).await {
            Ok(group) => group,
            Err(err) => {
                error!(group = %group_id, %err, "failed to describe security group");
                first_error.get_or_insert(err);
                continue;
            }
        };

        if let Err(err) = add(rules, &group, firewall).await {
            error!(group = %group.id, %err, "failed to add rules");
            first_error.get_or_insert(err);
        }

        if let Err(err) = cleanup(rules, &group, firewall).await {
            error!(group = %group.id, %err, "failed to clean up rules");
            first_error.get_or_insert(err);
        }
    }

    first_error.map_or(Ok(()), Err)
}
