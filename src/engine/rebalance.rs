//! Rebalance sweep: move excess items away from overloaded caseworkers.
//!
//! A staff member is overloaded when their open-item count exceeds
//! `max(average workload × factor, floor)`. Items past the threshold
//! position in their list (store order, not re-sorted) are offered to the
//! shared best-staff routine against the sweep's single frozen snapshot.
//! Single pass: the sweep does not re-check whether a receiving staff
//! member becomes overloaded within the same run.

use tracing::{info, warn};

use crate::error::Result;

use super::Engine;
use super::assign::best_staff;

/// Overload detection knobs.
#[derive(Debug, Clone)]
pub struct RebalancePolicy {
    /// Multiplier over the average per-staff open workload.
    pub overload_factor: f64,
    /// Lower bound on the threshold, so tiny teams aren't shuffled
    /// constantly.
    pub min_threshold: f64,
}

impl Default for RebalancePolicy {
    fn default() -> Self {
        Self {
            overload_factor: 1.5,
            min_threshold: 8.0,
        }
    }
}

/// Per-run rebalance counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RebalanceReport {
    /// Caseworkers considered.
    pub staff_count: usize,
    /// Caseworkers over the threshold.
    pub overloaded: usize,
    /// Excess items actually moved to a different owner.
    pub reassigned: usize,
    /// Excess items skipped because the store write failed.
    pub failed: usize,
}

impl Engine {
    /// One rebalancing pass over all caseworkers.
    ///
    /// Every reassignment decision in the pass uses the same snapshot taken
    /// at the start; per-item write failures are logged and skipped.
    pub async fn rebalance_workload(&self) -> Result<RebalanceReport> {
        let staff = self.caseworkers().await?;
        let snapshot = self.open_snapshot().await?;
        let policy = &self.config().rebalance;

        let avg = snapshot.total_open() as f64 / staff.len().max(1) as f64;
        let threshold = (avg * policy.overload_factor).max(policy.min_threshold);
        let keep = threshold.floor() as usize;

        let mut report = RebalanceReport {
            staff_count: staff.len(),
            ..Default::default()
        };

        for member in &staff {
            let assigned = snapshot.assigned_to(member.id);
            if (assigned.len() as f64) <= threshold {
                continue;
            }
            report.overloaded += 1;
            info!(
                staff = %member.id,
                open = assigned.len(),
                threshold,
                "caseworker overloaded, moving excess items"
            );

            for item in &assigned[keep..] {
                let Some(best) = best_staff(item, &staff, &snapshot, &self.config().weights)
                else {
                    continue;
                };
                if best == member.id {
                    continue;
                }
                match self.store().set_assignee(item.id, best).await {
                    Ok(()) => {
                        info!(item = %item.id, from = %member.id, to = %best, "item reassigned");
                        report.reassigned += 1;
                    }
                    Err(e) => {
                        warn!(item = %item.id, "reassignment failed, skipping item: {e}");
                        report.failed += 1;
                    }
                }
            }
        }

        info!(
            staff = report.staff_count,
            overloaded = report.overloaded,
            reassigned = report.reassigned,
            failed = report.failed,
            "rebalance sweep complete"
        );
        Ok(report)
    }
}
