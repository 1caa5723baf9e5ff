//! Simulated transition execution
//!
//! The demo has no backend and no chain: "executing" an action means
//! looking the transition up in the template's table, moving the
//! instance, and appending an audit entry with a made-up deploy hash.
//! This crate makes that simulation a real, testable operation instead
//! of UI glue.
//!
//! The engine checks *structural* legality only (the action must be a
//! declared transition out of the current state). Role gating is the
//! session layer's job, and assignment is deliberately not checked.

#![deny(unsafe_code)]

mod actions;
mod deploy;

pub use actions::*;
pub use deploy::*;
