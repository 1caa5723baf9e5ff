//! Error types for the CEWCE domain layer

use crate::{InstanceId, StateId, TemplateId, UserId};

/// Errors that can occur across the CEWCE demo core
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Unknown role label: {0}")]
    UnknownRole(String),

    #[error("Workflow template not found: {0}")]
    TemplateNotFound(TemplateId),

    #[error("Workflow instance not found: {0}")]
    InstanceNotFound(InstanceId),

    #[error("State {state} is not declared by template {template}")]
    UnknownState { template: TemplateId, state: StateId },

    #[error("Template {0} declares no initial state")]
    NoInitialState(TemplateId),

    #[error("Template {0} declares more than one initial state")]
    MultipleInitialStates(TemplateId),

    #[error("Template {0} declares no terminal state")]
    NoTerminalState(TemplateId),

    #[error("Duplicate state id {state} in template {template}")]
    DuplicateState { template: TemplateId, state: StateId },

    #[error("Duplicate transition {from} -> {to} ({action})")]
    DuplicateTransition {
        from: StateId,
        to: StateId,
        action: String,
    },

    #[error("No transition with action '{action}' out of state {state}")]
    InvalidTransition { state: StateId, action: String },

    #[error("State {state} is unreachable from the initial state of template {template}")]
    StateUnreachable { template: TemplateId, state: StateId },

    #[error("Template {0} is not published")]
    TemplateNotPublished(TemplateId),

    #[error("User {0} has an empty role set")]
    NoRoles(UserId),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Result type alias for CEWCE operations
pub type EngineResult<T> = Result<T, EngineError>;
