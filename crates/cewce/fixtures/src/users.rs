//! The five synthetic identities

use crate::ts;
use cewce_types::{Role, User};

/// All demo users, in directory order
pub fn users() -> Vec<User> {
    vec![
        User::new("user-1", "admin@cewce.io")
            .with_public_key("01abc...def1")
            .with_name("Alex", "Administrator")
            .with_role(Role::Admin)
            .with_role(Role::Manager)
            .with_role(Role::Approver)
            .with_role(Role::User)
            .with_created_at(ts("2024-01-15T10:00:00Z")),
        User::new("user-2", "manager@cewce.io")
            .with_public_key("01bcd...ef23")
            .with_name("Morgan", "Manager")
            .with_role(Role::Manager)
            .with_role(Role::Approver)
            .with_role(Role::User)
            .with_created_at(ts("2024-02-20T14:30:00Z")),
        User::new("user-3", "approver@cewce.io")
            .with_public_key("01cde...f345")
            .with_name("Ashley", "Approver")
            .with_role(Role::Approver)
            .with_role(Role::User)
            .with_created_at(ts("2024-03-10T09:15:00Z")),
        User::new("user-4", "user@cewce.io")
            .with_public_key("01def...4567")
            .with_name("Jordan", "User")
            .with_role(Role::User)
            .with_created_at(ts("2024-04-05T16:45:00Z")),
        // The read-only viewer has never linked a wallet
        User::new("user-5", "viewer@cewce.io")
            .with_name("Casey", "Viewer")
            .with_role(Role::Viewer)
            .with_created_at(ts("2024-05-12T11:20:00Z")),
    ]
}

/// The identity a demo session binds when assuming a role.
///
/// Fixed four-entry mapping; Viewer is not selectable and falls back
/// to the plain user like the original demo.
pub fn identity_for(role: Role) -> User {
    let all = users();
    let index = match role {
        Role::Admin => 0,
        Role::Manager => 1,
        Role::Approver => 2,
        Role::User | Role::Viewer => 3,
    };
    all[index].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cewce_types::UserId;

    #[test]
    fn test_identity_mapping() {
        assert_eq!(identity_for(Role::Admin).id, UserId::new("user-1"));
        assert_eq!(identity_for(Role::Manager).id, UserId::new("user-2"));
        assert_eq!(identity_for(Role::Approver).id, UserId::new("user-3"));
        assert_eq!(identity_for(Role::User).id, UserId::new("user-4"));
    }

    #[test]
    fn test_bound_identity_holds_its_role() {
        for role in Role::selectable() {
            assert!(identity_for(role).has_role(role));
        }
    }

    #[test]
    fn test_viewer_fixture() {
        let viewer = &users()[4];
        assert!(viewer.public_key.is_none());
        assert_eq!(viewer.roles, vec![Role::Viewer]);
    }
}
