//! Collaborator seams: the work item store and the staff directory.
//!
//! Both are external systems from the engine's point of view. The engine
//! holds them as trait objects and performs one call at a time; it never
//! caches their state across sweeps. The crate ships two reference
//! implementations: [`memory::MemoryStore`] (tests, embedding) and
//! [`json::JsonStore`] (the operator CLI).

pub mod json;
pub mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{ItemId, Role, StaffId, StaffMember, Status, WorkItem};

/// Which open statuses a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Pending,
    InProgress,
    /// Both pending and in-progress.
    Open,
}

impl StatusFilter {
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::Pending => status == Status::Pending,
            StatusFilter::InProgress => status == Status::InProgress,
            StatusFilter::Open => status.is_open(),
        }
    }
}

/// Outcome of a conditional assignment write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignWrite {
    /// The item was unassigned and is now owned by the requested staff.
    Assigned,
    /// Someone else got there first; carries the current owner.
    Lost(StaffId),
}

/// Read/query work items, mutate assignment and escalation fields.
#[async_trait]
pub trait WorkItemStore: Send + Sync {
    /// Open items matching the filter, in the store's stable listing order.
    /// Rebalancing depends on that order being stable within one sweep.
    async fn list_open_items(&self, filter: StatusFilter) -> Result<Vec<WorkItem>>;

    async fn get_item(&self, id: ItemId) -> Result<WorkItem>;

    /// Assign only if the item is currently unassigned. This is the
    /// concurrency guard for racing auto-assign calls: the store decides
    /// atomically, the engine never read-then-writes.
    async fn assign_if_unassigned(&self, id: ItemId, staff: StaffId) -> Result<AssignWrite>;

    /// Unconditional assignment overwrite, used when re-pointing an item
    /// that already has an owner.
    async fn set_assignee(&self, id: ItemId, staff: StaffId) -> Result<()>;

    /// Append an escalation record. Additive: repeated calls for the same
    /// item produce repeated records.
    async fn record_escalation(&self, id: ItemId, reason: &str) -> Result<()>;
}

/// Read caseworkers filtered by role.
#[async_trait]
pub trait StaffDirectory: Send + Sync {
    /// Staff with the given role, in the directory's stable listing order.
    /// Score ties are broken by this order, first-listed wins.
    async fn list_staff(&self, role: Role) -> Result<Vec<StaffMember>>;
}
