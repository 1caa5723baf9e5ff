//! Append-only audit trail for workflow transitions
//!
//! Every transition event is recorded as an [`AuditEntry`]: which
//! instance moved, from and to which state, who acted, and the
//! optional comment and simulated deploy hash. Entries are never
//! mutated once appended. [`AuditLog`] is the ordered collection with
//! the per-instance, recent-n, and search/action queries the views
//! consume.

#![deny(unsafe_code)]

mod entry;
mod log;

pub use entry::*;
pub use log::*;
