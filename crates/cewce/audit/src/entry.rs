//! Audit entries: immutable records of one transition event

use cewce_types::{InstanceId, StateId, User, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an audit entry
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuditEntryId(pub String);

impl AuditEntryId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for AuditEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of the actor at the moment of the event.
///
/// A snapshot, not a reference: if the user later renames or rotates
/// keys, the trail still shows who acted as they were then.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActorRef {
    pub id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ActorRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            public_key: None,
            display_name: None,
        }
    }

    pub fn with_public_key(mut self, key: impl Into<String>) -> Self {
        self.public_key = Some(key.into());
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

impl From<&User> for ActorRef {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            public_key: user.public_key.clone(),
            display_name: user.display_name(),
        }
    }
}

/// One immutable record of a workflow transition
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unique identifier
    pub id: AuditEntryId,
    /// The instance that moved
    pub instance_id: InstanceId,
    /// Denormalized instance title
    pub instance_title: String,
    /// Denormalized template name
    pub template_name: String,
    /// State the instance left
    pub from_state: StateId,
    /// State the instance entered
    pub to_state: StateId,
    /// The action that was invoked
    pub action: String,
    /// Who acted, as they were at the time
    pub actor: ActorRef,
    /// Optional free-text comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Hash of the simulated on-chain deploy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_hash: Option<String>,
    /// When the event happened
    pub created_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(
        id: impl Into<String>,
        instance_id: InstanceId,
        instance_title: impl Into<String>,
        template_name: impl Into<String>,
        from_state: StateId,
        to_state: StateId,
        action: impl Into<String>,
        actor: ActorRef,
    ) -> Self {
        Self {
            id: AuditEntryId::new(id),
            instance_id,
            instance_title: instance_title.into(),
            template_name: template_name.into(),
            from_state,
            to_state,
            action: action.into(),
            actor,
            comment: None,
            deploy_hash: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_deploy_hash(mut self, hash: impl Into<String>) -> Self {
        self.deploy_hash = Some(hash.into());
        self
    }

    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }
}
