//! Facade the application calls to record reminders and render labels.
//!
//! Recording is deliberately unconditional: eligibility gating lives with
//! the caller (the UI hides the control when ineligible), and the
//! predicates here are exposed read-only for exactly that purpose.
//! Repeated sends overwrite the last instant; nothing is counted.

use chrono::{DateTime, Utc};
use serde::Serialize;

use campusfix_core::{Complaint, ComplaintId, Status};
use campusfix_store::ReminderLedger;

use crate::error::TrackerError;
use crate::policy::{humanize_elapsed, ReminderPolicy};

/// Confirmation returned by a reminder send.
#[derive(Debug, Clone, Serialize)]
pub struct ReminderReceipt {
    pub sent: bool,
    pub at: DateTime<Utc>,
}

/// Composes [`ReminderPolicy`] with the [`ReminderLedger`].
pub struct ReminderService {
    ledger: ReminderLedger,
    policy: ReminderPolicy,
}

impl ReminderService {
    pub fn new(ledger: ReminderLedger, policy: ReminderPolicy) -> Self {
        Self { ledger, policy }
    }

    pub fn policy(&self) -> &ReminderPolicy {
        &self.policy
    }

    // ── Sending ─────────────────────────────────────────────────

    /// Record a reporter-to-admin nudge about an unassigned complaint.
    pub fn send_pending_reminder(
        &self,
        id: &ComplaintId,
        now: DateTime<Utc>,
    ) -> Result<ReminderReceipt, TrackerError> {
        self.ledger.record_pending_reminder(id, now)?;
        tracing::info!(complaint_id = %id, "pending reminder sent to admin");
        Ok(ReminderReceipt { sent: true, at: now })
    }

    /// Record a chase-maintenance nudge about an assigned complaint.
    pub fn send_maintenance_reminder(
        &self,
        id: &ComplaintId,
        now: DateTime<Utc>,
    ) -> Result<ReminderReceipt, TrackerError> {
        self.ledger.record_maintenance_reminder(id, now)?;
        tracing::info!(complaint_id = %id, "maintenance follow-up reminder sent");
        Ok(ReminderReceipt { sent: true, at: now })
    }

    // ── Eligibility (read-only, drives UI gating) ───────────────

    /// Whether the pending-track "send reminder" control should show.
    pub fn pending_eligible(
        &self,
        complaint: &Complaint,
        now: DateTime<Utc>,
    ) -> Result<bool, TrackerError> {
        let last = self.ledger.pending_reminder(&complaint.id)?;
        Ok(self.policy.pending_eligible(complaint.created_at, last, now))
    }

    /// Whether the maintenance-track "send reminder" control should show.
    /// Always false for complaints never tracked as assigned.
    pub fn maintenance_eligible(
        &self,
        id: &ComplaintId,
        now: DateTime<Utc>,
    ) -> Result<bool, TrackerError> {
        let record = self.ledger.maintenance_record(id)?;
        Ok(self.policy.maintenance_eligible(record.as_ref(), now))
    }

    // ── "Last reminder" labels ──────────────────────────────────

    pub fn time_since_pending_reminder(
        &self,
        id: &ComplaintId,
        now: DateTime<Utc>,
    ) -> Result<Option<String>, TrackerError> {
        let last = self.ledger.pending_reminder(id)?;
        Ok(humanize_elapsed(last, now))
    }

    pub fn time_since_maintenance_reminder(
        &self,
        id: &ComplaintId,
        now: DateTime<Utc>,
    ) -> Result<Option<String>, TrackerError> {
        let last = self
            .ledger
            .maintenance_record(id)?
            .and_then(|r| r.last_reminder_at);
        Ok(humanize_elapsed(last, now))
    }

    // ── Staleness sweep ─────────────────────────────────────────

    /// Pending complaints whose pending track is due a nudge.
    pub fn pending_needing_reminder(
        &self,
        complaints: &[Complaint],
        now: DateTime<Utc>,
    ) -> Result<Vec<ComplaintId>, TrackerError> {
        let mut due = Vec::new();
        for complaint in complaints.iter().filter(|c| c.status == Status::Pending) {
            if self.pending_eligible(complaint, now)? {
                due.push(complaint.id);
            }
        }
        Ok(due)
    }

    /// In-progress complaints whose maintenance track is due a nudge.
    /// Complaints assigned outside the tracker (no ledger record) are
    /// skipped rather than treated as overdue.
    pub fn in_progress_needing_reminder(
        &self,
        complaints: &[Complaint],
        now: DateTime<Utc>,
    ) -> Result<Vec<ComplaintId>, TrackerError> {
        let mut due = Vec::new();
        for complaint in complaints.iter().filter(|c| c.status == Status::InProgress) {
            if self.maintenance_eligible(&complaint.id, now)? {
                due.push(complaint.id);
            }
        }
        Ok(due)
    }
}
