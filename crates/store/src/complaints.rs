//! Durable complaint collection over the key-value store.

use std::sync::Arc;

use campusfix_core::{Complaint, ComplaintId};

use crate::error::StoreError;
use crate::kv::KvStore;

const COMPLAINT_PREFIX: &str = "complaints";

/// Keyed collection of complaints: `complaints/<id> -> Complaint` JSON.
#[derive(Clone)]
pub struct ComplaintStore {
    store: Arc<dyn KvStore>,
}

impl ComplaintStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    fn key(id: &ComplaintId) -> String {
        format!("{}/{}", COMPLAINT_PREFIX, id)
    }

    /// Persist a newly reported complaint.
    pub fn insert(&self, complaint: &Complaint) -> Result<(), StoreError> {
        self.put(complaint)?;
        tracing::info!(complaint_id = %complaint.id, title = %complaint.title, "complaint stored");
        Ok(())
    }

    /// Fetch by id. Unknown ids yield `None`, not an error.
    pub fn get(&self, id: &ComplaintId) -> Result<Option<Complaint>, StoreError> {
        match self.store.get(&Self::key(id))? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Overwrite an existing complaint record.
    pub fn update(&self, complaint: &Complaint) -> Result<(), StoreError> {
        self.put(complaint)
    }

    /// All complaints, newest first.
    pub fn list(&self) -> Result<Vec<Complaint>, StoreError> {
        let mut complaints = Vec::new();
        for key in self.store.keys(COMPLAINT_PREFIX)? {
            if let Some(raw) = self.store.get(&key)? {
                complaints.push(serde_json::from_str(&raw)?);
            }
        }
        complaints.sort_by(|a: &Complaint, b: &Complaint| b.created_at.cmp(&a.created_at));
        Ok(complaints)
    }

    fn put(&self, complaint: &Complaint) -> Result<(), StoreError> {
        let raw = serde_json::to_string(complaint)?;
        self.store.put(&Self::key(&complaint.id), &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use campusfix_core::{Category, NewComplaint, Priority};
    use chrono::{TimeZone, Utc};

    fn make(title: &str, hour: u32) -> Complaint {
        Complaint::report(
            NewComplaint {
                title: title.to_string(),
                description: "desc".to_string(),
                location: "Block B".to_string(),
                category: Category::Water,
                priority: Priority::Low,
                image_url: None,
            },
            Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0).unwrap(),
        )
    }

    #[test]
    fn insert_get_update_round_trip() {
        let store = ComplaintStore::new(Arc::new(MemoryStore::new()));
        let mut complaint = make("Leaky tap", 8);

        store.insert(&complaint).unwrap();
        let loaded = store.get(&complaint.id).unwrap().unwrap();
        assert_eq!(loaded.title, "Leaky tap");

        complaint.assigned_to = "Plumbing".to_string();
        store.update(&complaint).unwrap();
        let loaded = store.get(&complaint.id).unwrap().unwrap();
        assert_eq!(loaded.assigned_to, "Plumbing");
    }

    #[test]
    fn unknown_id_is_none() {
        let store = ComplaintStore::new(Arc::new(MemoryStore::new()));
        assert!(store.get(&ComplaintId::new()).unwrap().is_none());
    }

    #[test]
    fn list_is_newest_first() {
        let store = ComplaintStore::new(Arc::new(MemoryStore::new()));
        store.insert(&make("first", 6)).unwrap();
        store.insert(&make("second", 9)).unwrap();
        store.insert(&make("third", 7)).unwrap();

        let titles: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["second", "third", "first"]);
    }
}
