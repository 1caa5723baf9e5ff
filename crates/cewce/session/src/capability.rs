//! The capability table: one allow-list per capability
//!
//! Authorization in the demo core is a membership test of the active
//! role against a fixed allow-list. Keeping the lists in one table
//! (instead of one ad-hoc predicate per view) is what stops the rules
//! from drifting apart as views are added.

use cewce_types::Role;
use serde::{Deserialize, Serialize};

/// A gate a view checks before rendering its content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// See and administer the user directory
    ManageUsers,
    /// Read the audit trail
    ViewAudit,
    /// Take transition actions on workflow instances
    ApproveWorkflows,
    /// Author and publish workflow templates
    AuthorTemplates,
}

impl Capability {
    /// The roles permitted to exercise this capability
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Capability::ManageUsers => &[Role::Admin],
            Capability::ViewAudit => &[Role::Admin, Role::Manager, Role::Approver],
            Capability::ApproveWorkflows => &[Role::Admin, Role::Manager, Role::Approver],
            Capability::AuthorTemplates => &[Role::Admin, Role::Manager],
        }
    }

    /// Membership test against the allow-list
    pub fn permits(&self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }

    /// Every capability, for exhaustive checks
    pub fn all() -> [Capability; 4] {
        [
            Capability::ManageUsers,
            Capability::ViewAudit,
            Capability::ApproveWorkflows,
            Capability::AuthorTemplates,
        ]
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Capability::ManageUsers => "manage-users",
            Capability::ViewAudit => "view-audit",
            Capability::ApproveWorkflows => "approve-workflows",
            Capability::AuthorTemplates => "author-templates",
        };
        f.write_str(label)
    }
}
