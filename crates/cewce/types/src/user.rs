//! Synthetic user identities
//!
//! Users in the demo core are immutable fixtures: an id, an email, an
//! optional on-chain public key, optional name parts, and a role set.
//! The one invariant worth checking is that any identity that can
//! authenticate carries at least one role.

use crate::{EngineError, EngineResult, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a user
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user identity
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Login email
    pub email: String,
    /// On-chain account public key, if the user has linked a wallet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    /// Given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Roles held by this user
    pub roles: Vec<Role>,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with no roles; add them with [`User::with_role`]
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            email: email.into(),
            public_key: None,
            first_name: None,
            last_name: None,
            roles: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_public_key(mut self, key: impl Into<String>) -> Self {
        self.public_key = Some(key.into());
        self
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        if !self.roles.contains(&role) {
            self.roles.push(role);
        }
        self
    }

    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    /// Check whether the user holds a specific role
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// "First Last", or whichever part is present, or None
    pub fn display_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }

    /// An authenticatable identity must carry at least one role
    pub fn validate(&self) -> EngineResult<()> {
        if self.roles.is_empty() {
            return Err(EngineError::NoRoles(self.id.clone()));
        }
        Ok(())
    }
}
