//! The fixed demo dataset
//!
//! Five users, three templates, five workflow instances, five audit
//! entries. Created once at load time and never mutated; a real
//! deployment would source all of this from the backend. The values
//! here are load-bearing for the demo walkthrough (which role sees
//! which workflow), so treat them as part of the contract.

#![deny(unsafe_code)]

mod audit;
mod templates;
mod users;
mod workflows;

pub use audit::audit_log;
pub use templates::templates;
pub use users::{identity_for, users};
pub use workflows::workflows;

use cewce_audit::AuditLog;
use cewce_types::{
    InstanceId, TemplateId, User, WorkflowInstance, WorkflowTemplate,
};
use chrono::{DateTime, Utc};

/// Parse a fixture timestamp literal.
///
/// Fixture literals are compile-time constants checked by tests;
/// a parse failure here is a broken build, not a runtime condition.
pub(crate) fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .expect("fixture timestamp is valid RFC 3339")
}

/// The whole demo dataset, loaded in one call
#[derive(Clone, Debug)]
pub struct DemoDataset {
    pub users: Vec<User>,
    pub templates: Vec<WorkflowTemplate>,
    pub workflows: Vec<WorkflowInstance>,
    pub audit: AuditLog,
}

impl DemoDataset {
    pub fn load() -> Self {
        Self {
            users: users(),
            templates: templates(),
            workflows: workflows(),
            audit: audit_log(),
        }
    }

    pub fn template(&self, id: &TemplateId) -> Option<&WorkflowTemplate> {
        self.templates.iter().find(|t| &t.id == id)
    }

    pub fn workflow(&self, id: &InstanceId) -> Option<&WorkflowInstance> {
        self.workflows.iter().find(|wf| &wf.id == id)
    }

    /// The template a workflow instance runs over
    pub fn template_for(&self, instance: &WorkflowInstance) -> Option<&WorkflowTemplate> {
        self.template(&instance.template_id)
    }
}
