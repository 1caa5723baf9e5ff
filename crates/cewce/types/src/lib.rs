//! Domain types for the CEWCE demo core
//!
//! CEWCE workflows are table-driven state machines:
//!
//! - **WorkflowTemplate**: a reusable definition of states and the
//!   named transitions permitted between them, plus SLA/escalation
//!   timing and a lifecycle status.
//! - **WorkflowInstance**: one running (or finished) execution of a
//!   template, tracked by its current state id.
//! - **User** / **Role**: synthetic identities and the closed role set
//!   that drives visibility and capability checks upstream.
//!
//! Everything here is plain data: no I/O, no persistence, no chain
//! interaction. Templates validate their own structure (exactly one
//! initial state, transition endpoints must be declared states) and
//! answer the one lookup the rest of the system is built on:
//! [`WorkflowTemplate::transitions_from`].

#![deny(unsafe_code)]

mod errors;
mod instance;
mod role;
mod template;
mod user;

pub use errors::*;
pub use instance::*;
pub use role::*;
pub use template::*;
pub use user::*;
