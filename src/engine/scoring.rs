//! Suitability scoring: how good a fit is this caseworker for this item,
//! given the current open workload?
//!
//! The heuristic balances three competing goals: spread load evenly, route
//! to staff with relevant prior experience, and fast-track high-priority
//! work to the least-loaded eligible staff. It is recomputed on every item,
//! so "good enough, immediately" beats a global optimizer here.

use crate::model::{Priority, StaffMember, WorkItem};
use crate::snapshot::Snapshot;

/// Scoring constants. All of them integer so the result is exactly
/// reproducible; fractional factors are expressed as ratios.
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    /// Starting score before any adjustment.
    pub base: i64,
    /// Subtracted per open item already assigned to the staff member.
    pub workload_penalty: i64,
    /// Added per open item matching the incoming item's category.
    pub category_bonus: i64,
    /// Ceiling on the total category bonus.
    pub category_bonus_cap: i64,
    /// Added for high-priority items, before the load correction.
    pub high_priority_boost: i64,
    /// Open-item count at which the flat overload penalty kicks in.
    pub overload_threshold: usize,
    /// Flat penalty discouraging saturation regardless of other bonuses.
    pub overload_penalty: i64,
    /// Subtracted per still-pending open item on the staff member's plate.
    pub pending_penalty: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base: 100,
            workload_penalty: 10,
            category_bonus: 5,
            category_bonus_cap: 25,
            high_priority_boost: 20,
            overload_threshold: 10,
            overload_penalty: 50,
            pending_penalty: 5,
        }
    }
}

/// Suitability of `staff` for `item` given the frozen workload view.
///
/// Deterministic and side-effect-free: identical inputs always produce the
/// identical score. Never negative.
pub fn score(
    staff: &StaffMember,
    item: &WorkItem,
    snapshot: &Snapshot,
    weights: &ScoreWeights,
) -> u32 {
    let open = snapshot.open_count(staff.id);
    let n = open as i64;

    let mut score = weights.base;

    // Workload penalty: every open item costs.
    score -= weights.workload_penalty * n;

    // Category-expertise bonus, capped.
    let matching = snapshot.category_count(staff.id, &item.category) as i64;
    score += (weights.category_bonus * matching).min(weights.category_bonus_cap);

    // High-priority items favor lightly loaded staff more strongly: the
    // boost shrinks by half the workload penalty and goes negative past
    // the break-even load.
    if item.priority == Priority::High {
        score += weights.high_priority_boost - (weights.workload_penalty * n) / 2;
    }

    // Hard cap discouraging saturation.
    if open >= weights.overload_threshold {
        score -= weights.overload_penalty;
    }

    // Untouched pending items count against taking on more.
    let pending = snapshot.pending_count(staff.id) as i64;
    score -= weights.pending_penalty * pending;

    score.max(0) as u32
}
