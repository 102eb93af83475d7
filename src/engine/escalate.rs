//! Escalation sweep: flag open items that breached a time-based
//! service-level expectation.
//!
//! Two independent rules, both checked per item per run:
//! pending items older than the pending threshold, and high-priority
//! pending items older than the (shorter) high-priority threshold.
//! Both may fire for the same item in one run, producing two records.
//! No de-duplication across runs; the store treats escalations as an
//! additive log.

use chrono::{Duration, Utc};
use tracing::{info, warn};

use crate::error::Result;
use crate::model::{Priority, Status, WorkItem};
use crate::store::StatusFilter;

use super::Engine;

pub const REASON_EXTENDED_PENDING: &str = "extended pending time";
pub const REASON_HIGH_PRIORITY_PENDING: &str = "high priority pending";

/// Age thresholds for the two escalation rules.
#[derive(Debug, Clone)]
pub struct EscalationPolicy {
    /// Pending items at least this old are escalated.
    pub pending_after: Duration,
    /// High-priority pending items at least this old are escalated.
    pub high_priority_after: Duration,
}

impl Default for EscalationPolicy {
    fn default() -> Self {
        Self {
            pending_after: Duration::hours(72),
            high_priority_after: Duration::hours(24),
        }
    }
}

/// Per-run escalation counters. Which individual items failed is in the
/// logs, not here.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EscalationReport {
    /// Open items examined.
    pub scanned: usize,
    /// Escalation records written (an item can contribute two).
    pub escalated: usize,
    /// Items skipped because a store write failed.
    pub failed: usize,
}

impl Engine {
    /// Scan all open items and escalate the overdue ones.
    ///
    /// A store failure on one item skips that item and moves on; the sweep
    /// itself only fails if the initial listing does.
    pub async fn check_and_escalate_overdue(&self) -> Result<EscalationReport> {
        let items = self.store().list_open_items(StatusFilter::Open).await?;
        let now = Utc::now();
        let policy = &self.config().escalation;

        let mut report = EscalationReport::default();

        for item in &items {
            report.scanned += 1;
            match self.escalate_item(item, now, policy).await {
                Ok(written) => report.escalated += written,
                Err(e) => {
                    warn!(item = %item.id, "escalation failed, skipping item: {e}");
                    report.failed += 1;
                }
            }
        }

        info!(
            scanned = report.scanned,
            escalated = report.escalated,
            failed = report.failed,
            "escalation sweep complete"
        );
        Ok(report)
    }

    /// Apply both rules to one item. Returns how many records were written.
    async fn escalate_item(
        &self,
        item: &WorkItem,
        now: chrono::DateTime<Utc>,
        policy: &EscalationPolicy,
    ) -> Result<usize> {
        let age = now - item.created_at;
        let mut written = 0;

        if item.status == Status::Pending && age >= policy.pending_after {
            self.store()
                .record_escalation(item.id, REASON_EXTENDED_PENDING)
                .await?;
            info!(item = %item.id, age_hours = age.num_hours(), "escalated: extended pending time");
            written += 1;
        }

        // Checked independently of the rule above.
        if item.priority == Priority::High
            && item.status == Status::Pending
            && age >= policy.high_priority_after
        {
            self.store()
                .record_escalation(item.id, REASON_HIGH_PRIORITY_PENDING)
                .await?;
            info!(item = %item.id, age_hours = age.num_hours(), "escalated: high priority pending");
            written += 1;
        }

        Ok(written)
    }
}
