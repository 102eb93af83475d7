//! Core engine. The public API for assignment, escalation, and rebalancing.
//!
//! The engine is an explicitly constructed service object holding its two
//! collaborators; it keeps no mutable state of its own between operations.
//! Each operation starts from a fresh store query, builds one frozen
//! [`Snapshot`], and works items sequentially against it.

pub mod assign;
pub mod escalate;
pub mod rebalance;
pub mod scoring;

pub use assign::AssignOutcome;
pub use escalate::{EscalationPolicy, EscalationReport};
pub use rebalance::{RebalancePolicy, RebalanceReport};
pub use scoring::{ScoreWeights, score};

use std::sync::Arc;

use crate::error::Result;
use crate::model::{Role, StaffMember};
use crate::snapshot::Snapshot;
use crate::store::{StaffDirectory, StatusFilter, WorkItemStore};

/// Tunable policies for all three operations. Defaults match the heuristics
/// described in the module docs of each submodule.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub weights: ScoreWeights,
    pub escalation: EscalationPolicy,
    pub rebalance: RebalancePolicy,
}

/// The assignment engine. Owns nothing but its collaborator handles.
pub struct Engine {
    store: Arc<dyn WorkItemStore>,
    directory: Arc<dyn StaffDirectory>,
    config: EngineConfig,
}

impl Engine {
    pub fn new(store: Arc<dyn WorkItemStore>, directory: Arc<dyn StaffDirectory>) -> Self {
        Self::with_config(store, directory, EngineConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn WorkItemStore>,
        directory: Arc<dyn StaffDirectory>,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            directory,
            config,
        }
    }

    pub(crate) fn store(&self) -> &dyn WorkItemStore {
        self.store.as_ref()
    }

    pub(crate) fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// One fresh point-in-time view of all open items.
    pub(crate) async fn open_snapshot(&self) -> Result<Snapshot> {
        let items = self.store.list_open_items(StatusFilter::Open).await?;
        Ok(Snapshot::build(items))
    }

    /// Eligible staff, in directory order.
    pub(crate) async fn caseworkers(&self) -> Result<Vec<StaffMember>> {
        self.directory.list_staff(Role::Caseworker).await
    }
}
