//! Assignment coordination: pick the best caseworker for an item, and
//! auto-assign newly arrived items.

use tracing::{info, warn};

use crate::error::Result;
use crate::model::{ItemId, StaffId, StaffMember, WorkItem};
use crate::snapshot::Snapshot;
use crate::store::AssignWrite;

use super::scoring::{ScoreWeights, score};
use super::Engine;

/// What happened when an item was auto-assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOutcome {
    /// The item is now owned by this staff member.
    Assigned(StaffId),
    /// The item already had an owner (possibly one who won a concurrent
    /// race); nothing was written.
    AlreadyAssigned(StaffId),
    /// The item is resolved or closed and not a candidate for assignment.
    NotOpen,
    /// No caseworkers in the directory; the item was left untouched.
    NoCaseworkers,
}

impl Engine {
    /// Recommend the most suitable caseworker for `item`.
    ///
    /// Returns `Ok(None)` only when the directory has no caseworkers.
    /// When every score computes to zero the first staff member in
    /// directory order is returned anyway, so an item is never left
    /// unassignable purely on score.
    pub async fn find_best_staff(&self, item: &WorkItem) -> Result<Option<StaffId>> {
        let staff = self.caseworkers().await?;
        let snapshot = self.open_snapshot().await?;
        Ok(best_staff(item, &staff, &snapshot, &self.config().weights))
    }

    /// Assign an unassigned open item to the best available caseworker.
    ///
    /// Idempotent: an item that already has an owner is left untouched,
    /// including when a concurrent caller wins the conditional write.
    pub async fn auto_assign(&self, id: ItemId) -> Result<AssignOutcome> {
        let item = self.store().get_item(id).await?;

        if !item.status.is_open() {
            warn!(item = %id, status = %item.status, "refusing to assign a non-open item");
            return Ok(AssignOutcome::NotOpen);
        }
        if let Some(owner) = item.assigned_to {
            return Ok(AssignOutcome::AlreadyAssigned(owner));
        }

        let Some(best) = self.find_best_staff(&item).await? else {
            warn!(item = %id, "no caseworkers available, item left unassigned");
            return Ok(AssignOutcome::NoCaseworkers);
        };

        match self.store().assign_if_unassigned(id, best).await? {
            AssignWrite::Assigned => {
                info!(item = %id, staff = %best, category = %item.category, "item assigned");
                Ok(AssignOutcome::Assigned(best))
            }
            AssignWrite::Lost(owner) => {
                info!(item = %id, owner = %owner, "lost assignment race, keeping existing owner");
                Ok(AssignOutcome::AlreadyAssigned(owner))
            }
        }
    }
}

/// Shared best-staff routine: the auto-assign path fetches fresh state and
/// calls this; the rebalancer calls it directly against its own frozen
/// snapshot.
pub(crate) fn best_staff(
    item: &WorkItem,
    staff: &[StaffMember],
    snapshot: &Snapshot,
    weights: &ScoreWeights,
) -> Option<StaffId> {
    if staff.is_empty() {
        return None;
    }

    let mut scored: Vec<(u32, StaffId)> = staff
        .iter()
        .map(|member| (score(member, item, snapshot, weights), member.id))
        .collect();

    // Stable sort: equal scores keep directory order, first-listed wins.
    // Arbitrary but deterministic; callers must not read meaning into it.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let (top_score, top) = scored[0];
    if top_score > 0 {
        Some(top)
    } else {
        // Round-robin-style fallback: all scores zero still gets an owner.
        Some(staff[0].id)
    }
}
