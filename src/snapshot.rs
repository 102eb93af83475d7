//! Point-in-time view of open work items, grouped by assignee.
//!
//! Built once from a single store query at the start of each batch operation
//! and read-only for that operation's lifetime. Decisions within one sweep
//! all see the same view; nothing here is updated mid-run.

use std::collections::HashMap;

use crate::model::{StaffId, Status, WorkItem};

/// Frozen per-sweep view of the open workload.
#[derive(Debug, Default)]
pub struct Snapshot {
    /// Per-staff open items, in the order the store returned them.
    by_staff: HashMap<StaffId, Vec<WorkItem>>,
    /// All open items, assigned or not.
    total_open: usize,
}

impl Snapshot {
    /// Group a store's open-item listing by current assignee.
    ///
    /// Non-open items are dropped here regardless of what the store
    /// returned: resolved/closed items are never candidates for anything.
    pub fn build(items: impl IntoIterator<Item = WorkItem>) -> Self {
        let mut by_staff: HashMap<StaffId, Vec<WorkItem>> = HashMap::new();
        let mut total_open = 0;

        for item in items {
            if !item.status.is_open() {
                continue;
            }
            total_open += 1;
            if let Some(staff) = item.assigned_to {
                by_staff.entry(staff).or_default().push(item);
            }
        }

        Self {
            by_staff,
            total_open,
        }
    }

    /// Open items assigned to `staff`, store order preserved.
    pub fn assigned_to(&self, staff: StaffId) -> &[WorkItem] {
        self.by_staff.get(&staff).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Count of open items assigned to `staff`.
    pub fn open_count(&self, staff: StaffId) -> usize {
        self.assigned_to(staff).len()
    }

    /// Count of `staff`'s open items in the given category.
    pub fn category_count(&self, staff: StaffId, category: &str) -> usize {
        self.assigned_to(staff)
            .iter()
            .filter(|item| item.category == category)
            .count()
    }

    /// Count of `staff`'s open items still pending.
    pub fn pending_count(&self, staff: StaffId) -> usize {
        self.assigned_to(staff)
            .iter()
            .filter(|item| item.status == Status::Pending)
            .count()
    }

    /// All open items in this view, including unassigned ones.
    pub fn total_open(&self) -> usize {
        self.total_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn item_for(staff: Option<StaffId>, category: &str, status: Status) -> WorkItem {
        let mut item = WorkItem::new(category, Priority::Medium);
        item.assigned_to = staff;
        item.status = status;
        item
    }

    #[test]
    fn groups_by_assignee_and_counts_unassigned() {
        let a = StaffId::new();
        let b = StaffId::new();

        let snapshot = Snapshot::build(vec![
            item_for(Some(a), "noise", Status::Pending),
            item_for(Some(a), "noise", Status::InProgress),
            item_for(Some(b), "billing", Status::Pending),
            item_for(None, "noise", Status::Pending),
        ]);

        assert_eq!(snapshot.open_count(a), 2);
        assert_eq!(snapshot.open_count(b), 1);
        assert_eq!(snapshot.total_open(), 4);
        assert_eq!(snapshot.category_count(a, "noise"), 2);
        assert_eq!(snapshot.category_count(a, "billing"), 0);
        assert_eq!(snapshot.pending_count(a), 1);
    }

    #[test]
    fn terminal_items_are_dropped() {
        let a = StaffId::new();

        let snapshot = Snapshot::build(vec![
            item_for(Some(a), "noise", Status::Resolved),
            item_for(Some(a), "noise", Status::Closed),
            item_for(Some(a), "noise", Status::Pending),
        ]);

        assert_eq!(snapshot.open_count(a), 1);
        assert_eq!(snapshot.total_open(), 1);
    }

    #[test]
    fn preserves_store_order_per_staff() {
        let a = StaffId::new();
        let first = item_for(Some(a), "one", Status::Pending);
        let second = item_for(Some(a), "two", Status::Pending);
        let first_id = first.id;

        let snapshot = Snapshot::build(vec![first, second]);
        assert_eq!(snapshot.assigned_to(a)[0].id, first_id);
    }

    #[test]
    fn unknown_staff_has_empty_slice() {
        let snapshot = Snapshot::build(vec![]);
        assert!(snapshot.assigned_to(StaffId::new()).is_empty());
        assert_eq!(snapshot.open_count(StaffId::new()), 0);
    }
}
