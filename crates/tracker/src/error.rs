use thiserror::Error;

use campusfix_core::{ComplaintId, Status};
use campusfix_store::StoreError;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// Attempted status change violates the forward-only sequence.
    /// The complaint is left unchanged.
    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition { from: Status, to: Status },

    #[error("complaint not found: {0}")]
    NotFound(ComplaintId),

    /// Ledger or complaint store I/O failure; the operation did not take
    /// effect and may be retried.
    #[error(transparent)]
    Store(#[from] StoreError),
}
