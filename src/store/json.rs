//! Single-file JSON store backing the operator CLI.
//!
//! The whole state (items, staff, escalations) lives in one pretty-printed
//! JSON document, rewritten after every mutation. Fine for an operator tool;
//! a production deployment would point the engine at a real case-management
//! backend instead.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{EscalationRecord, ItemId, Role, StaffId, StaffMember, WorkItem};

use super::{AssignWrite, StaffDirectory, StatusFilter, WorkItemStore};

#[derive(Debug, Default, Serialize, Deserialize)]
struct FileState {
    items: Vec<WorkItem>,
    staff: Vec<StaffMember>,
    escalations: Vec<EscalationRecord>,
}

/// JSON-file-backed store implementing both collaborator traits.
pub struct JsonStore {
    path: PathBuf,
    state: Mutex<FileState>,
}

impl JsonStore {
    /// Open an existing store file, or start empty if it doesn't exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            FileState::default()
        };
        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    pub fn insert_item(&self, item: WorkItem) -> Result<()> {
        let mut state = self.lock()?;
        state.items.push(item);
        self.flush(&state)
    }

    pub fn insert_staff(&self, member: StaffMember) -> Result<()> {
        let mut state = self.lock()?;
        state.staff.push(member);
        self.flush(&state)
    }

    /// All items, store order. Used by the CLI for listing and id-prefix
    /// resolution.
    pub fn items(&self) -> Result<Vec<WorkItem>> {
        Ok(self.lock()?.items.clone())
    }

    pub fn staff(&self) -> Result<Vec<StaffMember>> {
        Ok(self.lock()?.staff.clone())
    }

    pub fn escalations(&self) -> Result<Vec<EscalationRecord>> {
        Ok(self.lock()?.escalations.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, FileState>> {
        self.state
            .lock()
            .map_err(|_| Error::Store("store lock poisoned".to_string()))
    }

    fn flush(&self, state: &FileState) -> Result<()> {
        let raw = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[async_trait]
impl WorkItemStore for JsonStore {
    async fn list_open_items(&self, filter: StatusFilter) -> Result<Vec<WorkItem>> {
        Ok(self
            .lock()?
            .items
            .iter()
            .filter(|item| filter.matches(item.status))
            .cloned()
            .collect())
    }

    async fn get_item(&self, id: ItemId) -> Result<WorkItem> {
        self.lock()?
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    async fn assign_if_unassigned(&self, id: ItemId, staff: StaffId) -> Result<AssignWrite> {
        let mut state = self.lock()?;
        let item = state
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        match item.assigned_to {
            Some(owner) => Ok(AssignWrite::Lost(owner)),
            None => {
                item.assigned_to = Some(staff);
                self.flush(&state)?;
                Ok(AssignWrite::Assigned)
            }
        }
    }

    async fn set_assignee(&self, id: ItemId, staff: StaffId) -> Result<()> {
        let mut state = self.lock()?;
        let item = state
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        item.assigned_to = Some(staff);
        self.flush(&state)
    }

    async fn record_escalation(&self, id: ItemId, reason: &str) -> Result<()> {
        let mut state = self.lock()?;
        if !state.items.iter().any(|item| item.id == id) {
            return Err(Error::NotFound(id.to_string()));
        }
        state.escalations.push(EscalationRecord {
            item_id: id,
            reason: reason.to_string(),
            at: Utc::now(),
        });
        self.flush(&state)
    }
}

#[async_trait]
impl StaffDirectory for JsonStore {
    async fn list_staff(&self, role: Role) -> Result<Vec<StaffMember>> {
        Ok(self
            .lock()?
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
    use crate::model::Priority;

    #[tokio::test]
    async fn state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.json");

        let item = WorkItem::new("noise", Priority::High);
        let id = item.id;
        {
            let store = JsonStore::open(&path).unwrap();
            store.insert_item(item).unwrap();
            store
                .insert_staff(StaffMember::new("ada", Role::Caseworker))
                .unwrap();
            store.record_escalation(id, "extended pending time").await.unwrap();
        }

        let store = JsonStore::open(&path).unwrap();
        let reloaded = store.get_item(id).await.unwrap();
        assert_eq!(reloaded.category, "noise");
        assert_eq!(store.staff().unwrap().len(), 1);
        assert_eq!(store.escalations().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("absent.json")).unwrap();
        assert!(store.items().unwrap().is_empty());
        assert!(
            store
                .list_open_items(StatusFilter::Open)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
