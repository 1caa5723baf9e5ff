//! Workflow instances: single executions of a template
//!
//! An instance is tracked by the id of the template state it currently
//! sits in. Names of the template, initiator, and assignee are
//! denormalized onto the instance the way the backend would return
//! them, so views need no joins.

use crate::{StateId, TemplateId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a workflow instance
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub String);

impl InstanceId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a workflow instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceStatus {
    Draft,
    Pending,
    Completed,
    Cancelled,
    Escalated,
}

impl std::fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            InstanceStatus::Draft => "DRAFT",
            InstanceStatus::Pending => "PENDING",
            InstanceStatus::Completed => "COMPLETED",
            InstanceStatus::Cancelled => "CANCELLED",
            InstanceStatus::Escalated => "ESCALATED",
        };
        f.write_str(label)
    }
}

/// Priority of a workflow instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Urgent => "URGENT",
        };
        f.write_str(label)
    }
}

/// A single running (or finished) execution of a workflow template
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowInstance {
    /// Unique identifier
    pub id: InstanceId,
    /// The template this instance runs over
    pub template_id: TemplateId,
    /// Denormalized template name
    pub template_name: String,
    /// Title of this particular execution
    pub title: String,
    /// What this execution is about
    pub description: String,
    /// Id of the template state the instance currently sits in
    pub current_state: StateId,
    /// Lifecycle status
    pub status: InstanceStatus,
    /// Priority
    pub priority: Priority,
    /// Who started the workflow
    pub initiator_id: UserId,
    /// Denormalized initiator display name
    pub initiator_name: String,
    /// Who it is currently assigned to, if anyone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_name: Option<String>,
    /// Hash of the simulated on-chain deploy, once submitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_hash: Option<String>,
    /// When the instance was created
    pub created_at: DateTime<Utc>,
    /// When the instance was last updated
    pub updated_at: DateTime<Utc>,
    /// SLA due date, if one applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl WorkflowInstance {
    /// Create a new draft instance sitting in `initial_state`
    pub fn new(
        id: impl Into<String>,
        template_id: TemplateId,
        template_name: impl Into<String>,
        title: impl Into<String>,
        initial_state: StateId,
        initiator_id: UserId,
        initiator_name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: InstanceId::new(id),
            template_id,
            template_name: template_name.into(),
            title: title.into(),
            description: String::new(),
            current_state: initial_state,
            status: InstanceStatus::Draft,
            priority: Priority::Medium,
            initiator_id,
            initiator_name: initiator_name.into(),
            assignee_id: None,
            assignee_name: None,
            deploy_hash: None,
            created_at: now,
            updated_at: now,
            due_date: None,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn with_current_state(mut self, state: StateId) -> Self {
        self.current_state = state;
        self
    }

    pub fn with_status(mut self, status: InstanceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn assigned_to(mut self, id: UserId, name: impl Into<String>) -> Self {
        self.assignee_id = Some(id);
        self.assignee_name = Some(name.into());
        self
    }

    pub fn with_deploy_hash(mut self, hash: impl Into<String>) -> Self {
        self.deploy_hash = Some(hash.into());
        self
    }

    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_timestamps(mut self, created: DateTime<Utc>, updated: DateTime<Utc>) -> Self {
        self.created_at = created;
        self.updated_at = updated;
        self
    }

    /// Whether the given user initiated the workflow or is its assignee
    pub fn involves(&self, user: &UserId) -> bool {
        &self.initiator_id == user || self.assignee_id.as_ref() == Some(user)
    }

    /// Whether the instance can still move (not completed or cancelled)
    pub fn is_open(&self) -> bool {
        !matches!(
            self.status,
            InstanceStatus::Completed | InstanceStatus::Cancelled
        )
    }
}
