//! The closed role set driving visibility and capability checks

use crate::EngineError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A role label.
///
/// The four demo roles (Admin, Manager, Approver, User) are the ones a
/// session can be switched to; Viewer exists only on the read-only
/// fixture identity and carries no capabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    Approver,
    User,
    Viewer,
}

impl Role {
    /// The wire/fixture label for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Approver => "APPROVER",
            Role::User => "USER",
            Role::Viewer => "VIEWER",
        }
    }

    /// The four roles a demo session can assume, in selection order
    pub fn selectable() -> [Role; 4] {
        [Role::Admin, Role::Manager, Role::Approver, Role::User]
    }
}

impl FromStr for Role {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "MANAGER" => Ok(Role::Manager),
            "APPROVER" => Ok(Role::Approver),
            "USER" => Ok(Role::User),
            "VIEWER" => Ok(Role::Viewer),
            other => Err(EngineError::UnknownRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
