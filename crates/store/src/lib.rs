//! Durable state for the complaint tracker.
//!
//! This crate provides:
//! - `KvStore` trait: the injected key-value store abstraction
//! - `MemoryStore` and `FileStore` implementations
//! - `ComplaintStore`: the durable complaint collection
//! - `ReminderLedger`: per-complaint, per-track reminder timestamps

pub mod complaints;
pub mod error;
pub mod kv;
pub mod ledger;

pub use complaints::ComplaintStore;
pub use error::StoreError;
pub use kv::{FileStore, KvStore, MemoryStore};
pub use ledger::{MaintenanceRecord, ReminderLedger};
