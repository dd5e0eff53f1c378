//! Per-complaint, per-track reminder timestamps.
//!
//! Two independent tracks are kept per complaint:
//! - **pending** — a reporter nudging the admin about an unassigned
//!   complaint; stores the last-reminder instant.
//! - **maintenance** — nudging the admin to chase maintenance about an
//!   assigned complaint; stores the assignment instant plus the
//!   last-reminder instant.
//!
//! The ledger is the sole writer of this state. Absence of a record is a
//! valid "no reminder yet" state, never an error.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campusfix_core::ComplaintId;

use crate::error::StoreError;
use crate::kv::KvStore;

const PENDING_PREFIX: &str = "pending_reminders";
const MAINTENANCE_PREFIX: &str = "maintenance_reminders";

/// Maintenance-track state for one complaint.
///
/// `assigned_at` is set once when the complaint moves to `InProgress` and
/// never overwritten; `last_reminder_at` starts empty and is only set by an
/// explicit reminder send. When present, `last_reminder_at >= assigned_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub assigned_at: DateTime<Utc>,
    pub last_reminder_at: Option<DateTime<Utc>>,
}

/// Durable mapping `(complaint id, track) -> reminder record`.
#[derive(Clone)]
pub struct ReminderLedger {
    store: Arc<dyn KvStore>,
}

impl ReminderLedger {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    fn pending_key(id: &ComplaintId) -> String {
        format!("{}/{}", PENDING_PREFIX, id)
    }

    fn maintenance_key(id: &ComplaintId) -> String {
        format!("{}/{}", MAINTENANCE_PREFIX, id)
    }

    // ── Pending track ───────────────────────────────────────────

    /// Last pending-track reminder instant, if any was ever sent.
    pub fn pending_reminder(&self, id: &ComplaintId) -> Result<Option<DateTime<Utc>>, StoreError> {
        match self.store.get(&Self::pending_key(id))? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Record a pending-track reminder. Overwrites any previous instant.
    pub fn record_pending_reminder(
        &self,
        id: &ComplaintId,
        at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&at)?;
        self.store.put(&Self::pending_key(id), &raw)?;
        tracing::debug!(complaint_id = %id, at = %at, "recorded pending reminder");
        Ok(())
    }

    // ── Maintenance track ───────────────────────────────────────

    pub fn maintenance_record(
        &self,
        id: &ComplaintId,
    ) -> Result<Option<MaintenanceRecord>, StoreError> {
        match self.store.get(&Self::maintenance_key(id))? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Mark the complaint as assigned to maintenance.
    ///
    /// Idempotent: an existing `assigned_at` is never overwritten, so the
    /// first assignment instant wins even if the transition is replayed.
    pub fn mark_assigned(&self, id: &ComplaintId, at: DateTime<Utc>) -> Result<(), StoreError> {
        if self.maintenance_record(id)?.is_some() {
            return Ok(());
        }
        let record = MaintenanceRecord {
            assigned_at: at,
            last_reminder_at: None,
        };
        self.put_maintenance(id, &record)?;
        tracing::debug!(complaint_id = %id, at = %at, "marked assigned to maintenance");
        Ok(())
    }

    /// Record a maintenance-track reminder.
    ///
    /// Creates the record with `assigned_at = at` if the complaint was never
    /// tracked as assigned; otherwise sets `last_reminder_at`, preserving
    /// the existing `assigned_at`.
    pub fn record_maintenance_reminder(
        &self,
        id: &ComplaintId,
        at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let record = match self.maintenance_record(id)? {
            Some(mut record) => {
                record.last_reminder_at = Some(at);
                record
            }
            None => MaintenanceRecord {
                assigned_at: at,
                last_reminder_at: Some(at),
            },
        };
        self.put_maintenance(id, &record)?;
        tracing::debug!(complaint_id = %id, at = %at, "recorded maintenance reminder");
        Ok(())
    }

    // ── Clearing ────────────────────────────────────────────────

    /// Drop the pending-track record. No error if absent.
    pub fn clear_pending(&self, id: &ComplaintId) -> Result<(), StoreError> {
        self.store.delete(&Self::pending_key(id))
    }

    /// Drop the maintenance-track record. No error if absent.
    pub fn clear_maintenance(&self, id: &ComplaintId) -> Result<(), StoreError> {
        self.store.delete(&Self::maintenance_key(id))
    }

    fn put_maintenance(
        &self,
        id: &ComplaintId,
        record: &MaintenanceRecord,
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(record)?;
        self.store.put(&Self::maintenance_key(id), &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use chrono::TimeZone;

    fn ledger() -> ReminderLedger {
        ReminderLedger::new(Arc::new(MemoryStore::new()))
    }

    fn t(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn pending_starts_absent_and_overwrites() {
        let ledger = ledger();
        let id = ComplaintId::new();

        assert!(ledger.pending_reminder(&id).unwrap().is_none());

        ledger.record_pending_reminder(&id, t(1)).unwrap();
        assert_eq!(ledger.pending_reminder(&id).unwrap(), Some(t(1)));

        // Repeated sends keep only the most recent instant, not a count.
        ledger.record_pending_reminder(&id, t(5)).unwrap();
        assert_eq!(ledger.pending_reminder(&id).unwrap(), Some(t(5)));
    }

    #[test]
    fn mark_assigned_is_idempotent() {
        let ledger = ledger();
        let id = ComplaintId::new();

        ledger.mark_assigned(&id, t(2)).unwrap();
        ledger.mark_assigned(&id, t(9)).unwrap();

        let record = ledger.maintenance_record(&id).unwrap().unwrap();
        assert_eq!(record.assigned_at, t(2));
        assert_eq!(record.last_reminder_at, None);
    }

    #[test]
    fn maintenance_reminder_preserves_assignment_instant() {
        let ledger = ledger();
        let id = ComplaintId::new();

        ledger.mark_assigned(&id, t(2)).unwrap();
        ledger.record_maintenance_reminder(&id, t(6)).unwrap();

        let record = ledger.maintenance_record(&id).unwrap().unwrap();
        assert_eq!(record.assigned_at, t(2));
        assert_eq!(record.last_reminder_at, Some(t(6)));
    }

    #[test]
    fn maintenance_reminder_without_assignment_creates_record() {
        let ledger = ledger();
        let id = ComplaintId::new();

        ledger.record_maintenance_reminder(&id, t(4)).unwrap();

        let record = ledger.maintenance_record(&id).unwrap().unwrap();
        assert_eq!(record.assigned_at, t(4));
        assert_eq!(record.last_reminder_at, Some(t(4)));
    }

    #[test]
    fn clear_is_total_and_tolerates_absence() {
        let ledger = ledger();
        let id = ComplaintId::new();

        ledger.record_pending_reminder(&id, t(1)).unwrap();
        ledger.mark_assigned(&id, t(1)).unwrap();

        ledger.clear_pending(&id).unwrap();
        ledger.clear_maintenance(&id).unwrap();
        assert!(ledger.pending_reminder(&id).unwrap().is_none());
        assert!(ledger.maintenance_record(&id).unwrap().is_none());

        // Clearing again is fine.
        ledger.clear_pending(&id).unwrap();
        ledger.clear_maintenance(&id).unwrap();
    }
}
