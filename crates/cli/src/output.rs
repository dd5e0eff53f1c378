//! JSON views rendered by the CLI.

use chrono::{DateTime, Utc};
use serde::Serialize;

use campusfix_core::{Complaint, Status};
use campusfix_tracker::{ReminderService, TrackerError};

/// A complaint plus the reminder state that drives the operator's
/// "send reminder" controls and "last reminder" labels.
#[derive(Debug, Serialize)]
pub struct ComplaintView {
    #[serde(flatten)]
    pub complaint: Complaint,
    pub reminders: ReminderView,
}

#[derive(Debug, Serialize)]
pub struct ReminderView {
    /// Reporter may nudge the admin (pending track).
    pub pending_eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_pending_reminder: Option<String>,
    /// Admin may chase maintenance (maintenance track).
    pub maintenance_eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_maintenance_reminder: Option<String>,
}

impl ComplaintView {
    pub fn build(
        complaint: &Complaint,
        service: &ReminderService,
        now: DateTime<Utc>,
    ) -> Result<Self, TrackerError> {
        // Resolved complaints have no live reminder state; their ledger
        // entries were cleared on resolution.
        let pending_eligible = complaint.status == Status::Pending
            && service.pending_eligible(complaint, now)?;
        let maintenance_eligible = complaint.status == Status::InProgress
            && service.maintenance_eligible(&complaint.id, now)?;

        Ok(Self {
            reminders: ReminderView {
                pending_eligible,
                last_pending_reminder: service.time_since_pending_reminder(&complaint.id, now)?,
                maintenance_eligible,
                last_maintenance_reminder: service
                    .time_since_maintenance_reminder(&complaint.id, now)?,
            },
            complaint: complaint.clone(),
        })
    }
}
