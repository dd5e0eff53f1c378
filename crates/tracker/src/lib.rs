//! Complaint lifecycle and rate-limited reminders.
//!
//! This crate provides:
//! - `ReminderPolicy`: pure eligibility predicates and elapsed-time text
//! - `ComplaintLifecycle`: the forward-only status state machine and its
//!   ledger side effects
//! - `ReminderService`: the facade the rest of the application calls to
//!   record reminders and render "last reminder" labels
//!
//! All temporal behavior is a pure function of `(now, stored instants)`;
//! there are no background timers. Callers pass `now` from an injected
//! [`campusfix_core::Clock`].

pub mod error;
pub mod lifecycle;
pub mod policy;
pub mod service;

pub use error::TrackerError;
pub use lifecycle::ComplaintLifecycle;
pub use policy::{humanize_elapsed, ReminderPolicy, REMINDER_INTERVAL_MS};
pub use service::{ReminderReceipt, ReminderService};
