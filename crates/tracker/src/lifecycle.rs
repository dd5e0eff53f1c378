//! The complaint state machine and its ledger side effects.
//!
//! Statuses move forward only: `Pending -> InProgress -> Resolved`. No step
//! is skipped and nothing moves backward. Authorization (only an
//! admin-capable actor may transition) is a precondition the caller
//! enforces; this component checks legality of the state change only.

use chrono::{DateTime, Utc};

use campusfix_core::{Complaint, ComplaintId, NewComplaint, Status, DEFAULT_ASSIGNEE};
use campusfix_store::{ComplaintStore, ReminderLedger};

use crate::error::TrackerError;

/// Governs status transitions and the reminder-ledger bookkeeping they
/// trigger. The ledger is only ever written here and in the reminder
/// service; the lifecycle never reads eligibility itself.
pub struct ComplaintLifecycle {
    complaints: ComplaintStore,
    ledger: ReminderLedger,
}

impl ComplaintLifecycle {
    pub fn new(complaints: ComplaintStore, ledger: ReminderLedger) -> Self {
        Self { complaints, ledger }
    }

    /// File a new complaint: status `Pending`, unassigned.
    pub fn report(&self, input: NewComplaint, now: DateTime<Utc>) -> Result<Complaint, TrackerError> {
        let complaint = Complaint::report(input, now);
        self.complaints.insert(&complaint)?;
        Ok(complaint)
    }

    /// Move a complaint to `new_status`, applying ledger side effects.
    ///
    /// Legality is checked before anything is written: an illegal request
    /// fails with [`TrackerError::InvalidTransition`] and leaves both the
    /// complaint and the ledger untouched. Ledger effects run only after
    /// the status update has been persisted.
    pub fn transition(
        &self,
        id: &ComplaintId,
        new_status: Status,
        assignee: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Complaint, TrackerError> {
        let mut complaint = self
            .complaints
            .get(id)?
            .ok_or(TrackerError::NotFound(*id))?;

        let from = complaint.status;
        match (from, new_status) {
            (Status::Pending, Status::InProgress) => {
                complaint.status = Status::InProgress;
                complaint.assigned_to = match assignee {
                    Some(label) if !label.trim().is_empty() => label.to_string(),
                    _ => DEFAULT_ASSIGNEE.to_string(),
                };
                self.complaints.update(&complaint)?;
                self.ledger.mark_assigned(id, now)?;
                tracing::info!(
                    complaint_id = %id,
                    assigned_to = %complaint.assigned_to,
                    "complaint assigned"
                );
            }
            (Status::InProgress, Status::Resolved) => {
                complaint.status = Status::Resolved;
                self.complaints.update(&complaint)?;
                // Resolution retires both reminder tracks, whether or not
                // either record exists.
                self.ledger.clear_pending(id)?;
                self.ledger.clear_maintenance(id)?;
                tracing::info!(complaint_id = %id, "complaint resolved");
            }
            (from, to) => {
                tracing::warn!(complaint_id = %id, %from, %to, "rejected status transition");
                return Err(TrackerError::InvalidTransition { from, to });
            }
        }

        Ok(complaint)
    }
}
