//! Session and visibility for the CEWCE demo core
//!
//! A [`Session`] is an explicit value handed to view code, not a
//! process-wide store: the active role, the identity bound to it, and
//! the cosmetic wallet flag travel together. All authorization rules
//! live in one place, the [`Capability`] table, so the per-view
//! predicates cannot drift apart.
//!
//! Visibility is a pure filter over slices the caller owns:
//!
//! - Admin and Manager see every workflow instance and every template.
//! - Approver and User see only instances they initiated or are
//!   assigned to, and only published templates.
//!
//! The available-actions lookup is gated by the coarse
//! `ApproveWorkflows` capability only; it deliberately performs no
//! assignment check, matching the system it models.

#![deny(unsafe_code)]

mod capability;
mod session;
mod stats;

pub use capability::*;
pub use session::*;
pub use stats::*;
