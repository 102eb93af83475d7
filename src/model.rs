//! Core data model.
//!
//! A work item is a case-like record (complaint, report) moving through
//! pending → in-progress → resolved/closed. The engine never creates or
//! destroys items or staff; it only reads them and writes `assigned_to`
//! and escalation records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Work Item
// ---------------------------------------------------------------------------

/// A unit of casework tracked by the external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    /// Unique identifier.
    pub id: ItemId,

    /// Classifier used for the category-expertise bonus (e.g. "noise",
    /// "billing"). Opaque to the engine beyond equality.
    pub category: String,

    /// Urgency. High-priority items favor lightly loaded staff more strongly
    /// and escalate on a shorter clock.
    pub priority: Priority,

    /// Current lifecycle status.
    pub status: Status,

    /// Owning caseworker, if any. The only item field this engine mutates.
    pub assigned_to: Option<StaffId>,

    /// Set once at creation, immutable thereafter.
    pub created_at: DateTime<Utc>,
}

impl WorkItem {
    /// A fresh, unassigned, pending item created now.
    pub fn new(category: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: ItemId::new(),
            category: category.into(),
            priority,
            status: Status::Pending,
            assigned_to: None,
            created_at: Utc::now(),
        }
    }
}

/// Newtype for work item IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Short display: first 8 chars of UUID
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("unknown priority: {s}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Received, not yet worked.
    Pending,
    /// A caseworker is actively on it.
    InProgress,
    /// Done. Terminal for this engine.
    Resolved,
    /// Administratively closed. Terminal for this engine.
    Closed,
}

impl Status {
    /// Open items are the only candidates for assignment, escalation,
    /// and rebalancing.
    pub fn is_open(self) -> bool {
        matches!(self, Status::Pending | Status::InProgress)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::Pending => "pending",
            Status::InProgress => "in_progress",
            Status::Resolved => "resolved",
            Status::Closed => "closed",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Status::Pending),
            "in_progress" => Ok(Status::InProgress),
            "resolved" => Ok(Status::Resolved),
            "closed" => Ok(Status::Closed),
            _ => Err(format!("unknown status: {s}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Staff
// ---------------------------------------------------------------------------

/// A human user who can receive assigned work items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,

    /// Display name. Not used in any engine decision.
    pub name: String,

    /// Only caseworkers are eligible for assignment and rebalancing.
    pub role: Role,
}

impl StaffMember {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            id: StaffId::new(),
            name: name.into(),
            role,
        }
    }
}

/// Newtype for staff IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaffId(pub Uuid);

impl StaffId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for StaffId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

impl Default for StaffId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Caseworker,
    Supervisor,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Caseworker => "caseworker",
            Role::Supervisor => "supervisor",
            Role::Admin => "admin",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "caseworker" => Ok(Role::Caseworker),
            "supervisor" => Ok(Role::Supervisor),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Escalation
// ---------------------------------------------------------------------------

/// An annotation recorded when an item breaches a time-based expectation.
/// Additive — repeated escalations of the same item append, never toggle.
/// Does not alter item status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationRecord {
    pub item_id: ItemId,
    pub reason: String,
    pub at: DateTime<Utc>,
}
