//! In-memory store (for testing and in-process embedding).
//!
//! Items and staff live in insertion order, which is also the listing
//! order both traits promise.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::{Error, Result};
use crate::model::{EscalationRecord, ItemId, Role, StaffId, StaffMember, WorkItem};

use super::{AssignWrite, StaffDirectory, StatusFilter, WorkItemStore};

#[derive(Default)]
struct Inner {
    items: Vec<WorkItem>,
    staff: Vec<StaffMember>,
    escalations: Vec<EscalationRecord>,
}

/// In-memory backend implementing both collaborator traits.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_item(&self, item: WorkItem) -> Result<()> {
        self.write()?.items.push(item);
        Ok(())
    }

    pub fn insert_staff(&self, member: StaffMember) -> Result<()> {
        self.write()?.staff.push(member);
        Ok(())
    }

    /// All escalation records, in the order they were appended.
    pub fn escalations(&self) -> Result<Vec<EscalationRecord>> {
        Ok(self.read()?.escalations.clone())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| Error::Store("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| Error::Store("store lock poisoned".to_string()))
    }
}

#[async_trait]
impl WorkItemStore for MemoryStore {
    async fn list_open_items(&self, filter: StatusFilter) -> Result<Vec<WorkItem>> {
        Ok(self
            .read()?
            .items
            .iter()
            .filter(|item| filter.matches(item.status))
            .cloned()
            .collect())
    }

    async fn get_item(&self, id: ItemId) -> Result<WorkItem> {
        self.read()?
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    async fn assign_if_unassigned(&self, id: ItemId, staff: StaffId) -> Result<AssignWrite> {
        let mut inner = self.write()?;
        let item = inner
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        match item.assigned_to {
            Some(owner) => Ok(AssignWrite::Lost(owner)),
            None => {
                item.assigned_to = Some(staff);
                Ok(AssignWrite::Assigned)
            }
        }
    }

    async fn set_assignee(&self, id: ItemId, staff: StaffId) -> Result<()> {
        let mut inner = self.write()?;
        let item = inner
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        item.assigned_to = Some(staff);
        Ok(())
    }

    async fn record_escalation(&self, id: ItemId, reason: &str) -> Result<()> {
        let mut inner = self.write()?;
        if !inner.items.iter().any(|item| item.id == id) {
            return Err(Error::NotFound(id.to_string()));
        }
        inner.escalations.push(EscalationRecord {
            item_id: id,
            reason: reason.to_string(),
            at: Utc::now(),
        });
        Ok(())
    }
}

#[async_trait]
impl StaffDirectory for MemoryStore {
    async fn list_staff(&self, role: Role) -> Result<Vec<StaffMember>> {
        Ok(self
            .read()?
            .staff
            .iter()
            .filter(|member| member.role == role)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, Status};

    fn item_with_status(status: Status) -> WorkItem {
        let mut item = WorkItem::new("noise", Priority::Medium);
        item.status = status;
        item
    }

    #[tokio::test]
    async fn status_filters_select_the_right_items() {
        let store = MemoryStore::new();
        store.insert_item(item_with_status(Status::Pending)).unwrap();
        store
            .insert_item(item_with_status(Status::InProgress))
            .unwrap();
        store.insert_item(item_with_status(Status::Resolved)).unwrap();
        store.insert_item(item_with_status(Status::Closed)).unwrap();

        let pending = store.list_open_items(StatusFilter::Pending).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].status, Status::Pending);

        let in_progress = store
            .list_open_items(StatusFilter::InProgress)
            .await
            .unwrap();
        assert_eq!(in_progress.len(), 1);

        // Open covers both; terminal items never show up.
        let open = store.list_open_items(StatusFilter::Open).await.unwrap();
        assert_eq!(open.len(), 2);
    }

    #[tokio::test]
    async fn get_item_reports_not_found() {
        let store = MemoryStore::new();
        let missing = ItemId::new();
        assert!(matches!(
            store.get_item(missing).await,
            Err(Error::NotFound(_))
        ));
    }
}
