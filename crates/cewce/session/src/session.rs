//! The session object: active role, bound identity, wallet flag

use crate::Capability;
use cewce_types::{
    Role, User, WorkflowInstance, WorkflowTemplate, WorkflowTransition,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Cosmetic wallet connection state. Independent of role logic; the
/// balance is a display string, not an amount anything computes with.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WalletState {
    pub connected: bool,
    pub balance: String,
}

impl WalletState {
    /// The demo starts connected with the canned balance
    pub fn connected() -> Self {
        Self {
            connected: true,
            balance: "1,250.00".to_string(),
        }
    }

    pub fn toggle(&mut self) {
        self.connected = !self.connected;
    }
}

impl Default for WalletState {
    fn default() -> Self {
        Self::connected()
    }
}

/// One viewer's session: the active role and the identity bound to it.
///
/// Sessions are plain values. Construct as many as you need (one per
/// simulated viewer); nothing here is process-global.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    role: Role,
    identity: User,
    wallet: WalletState,
}

impl Session {
    /// Open a session for a role and its bound identity
    pub fn new(role: Role, identity: User) -> Self {
        info!(role = %role, user = %identity.id, "session opened");
        Self {
            role,
            identity,
            wallet: WalletState::connected(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn identity(&self) -> &User {
        &self.identity
    }

    pub fn wallet(&self) -> &WalletState {
        &self.wallet
    }

    /// Switch the active role, swapping in the identity bound to it.
    /// Calling with the current role and identity is a no-op in effect.
    pub fn set_role(&mut self, role: Role, identity: User) {
        info!(from = %self.role, to = %role, user = %identity.id, "role switched");
        self.role = role;
        self.identity = identity;
    }

    /// Flip the wallet connection flag
    pub fn toggle_wallet(&mut self) {
        self.wallet.toggle();
        info!(connected = self.wallet.connected, "wallet toggled");
    }

    /// Whether the active role may exercise a capability
    pub fn can(&self, capability: Capability) -> bool {
        capability.permits(self.role)
    }

    pub fn can_access_users(&self) -> bool {
        self.can(Capability::ManageUsers)
    }

    pub fn can_access_audit(&self) -> bool {
        self.can(Capability::ViewAudit)
    }

    pub fn can_approve_workflows(&self) -> bool {
        self.can(Capability::ApproveWorkflows)
    }

    pub fn can_create_templates(&self) -> bool {
        self.can(Capability::AuthorTemplates)
    }

    /// Role-scoped view over workflow instances.
    ///
    /// Admin and Manager see everything; everyone else sees only
    /// instances they initiated or are assigned to. Source order is
    /// preserved; there is no pagination.
    pub fn visible_workflows<'a>(
        &self,
        all: &'a [WorkflowInstance],
    ) -> Vec<&'a WorkflowInstance> {
        match self.role {
            Role::Admin | Role::Manager => all.iter().collect(),
            _ => all
                .iter()
                .filter(|wf| wf.involves(&self.identity.id))
                .collect(),
        }
    }

    /// Role-scoped view over templates: all for Admin/Manager,
    /// published-only for everyone else
    pub fn visible_templates<'a>(
        &self,
        all: &'a [WorkflowTemplate],
    ) -> Vec<&'a WorkflowTemplate> {
        match self.role {
            Role::Admin | Role::Manager => all.iter().collect(),
            _ => all.iter().filter(|t| t.is_published()).collect(),
        }
    }

    /// The actions this session may take on an instance: the
    /// transitions declared out of its current state, or nothing if
    /// the role lacks `ApproveWorkflows`.
    ///
    /// Gating is coarse on purpose: any approver-class role sees every
    /// declared transition, whether or not the workflow is assigned to
    /// them.
    pub fn available_actions<'a>(
        &self,
        template: &'a WorkflowTemplate,
        instance: &WorkflowInstance,
    ) -> Vec<&'a WorkflowTransition> {
        if !self.can(Capability::ApproveWorkflows) {
            return Vec::new();
        }
        template.transitions_from(instance.current_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cewce_types::{
        InstanceId, StateId, TemplateId, TemplateStatus, UserId, WorkflowState,
    };

    fn approver() -> User {
        User::new("user-3", "approver@cewce.io")
            .with_name("Ashley", "Approver")
            .with_role(Role::Approver)
            .with_role(Role::User)
    }

    fn admin() -> User {
        User::new("user-1", "admin@cewce.io")
            .with_name("Alex", "Administrator")
            .with_role(Role::Admin)
    }

    fn instance(id: &str, initiator: &str, assignee: Option<&str>) -> WorkflowInstance {
        let mut wf = WorkflowInstance::new(
            id,
            TemplateId::new("tpl-1"),
            "Review",
            format!("Instance {id}"),
            StateId(1),
            UserId::new(initiator),
            initiator,
        );
        if let Some(a) = assignee {
            wf = wf.assigned_to(UserId::new(a), a);
        }
        wf
    }

    fn template(id: &str, status: TemplateStatus) -> WorkflowTemplate {
        WorkflowTemplate::new(id, id)
            .with_status(status)
            .with_state(WorkflowState::new(0, "Draft").initial())
            .with_state(WorkflowState::new(10, "Done").terminal())
    }

    #[test]
    fn test_admin_sees_all_workflows() {
        let session = Session::new(Role::Admin, admin());
        let all = vec![
            instance("wf-1", "user-4", None),
            instance("wf-2", "user-2", Some("user-3")),
        ];
        assert_eq!(session.visible_workflows(&all).len(), 2);
    }

    #[test]
    fn test_approver_sees_only_involved_workflows() {
        let session = Session::new(Role::Approver, approver());
        let all = vec![
            instance("wf-1", "user-4", Some("user-3")),
            instance("wf-2", "user-2", None),
            instance("wf-3", "user-3", None),
        ];
        let visible: Vec<&str> = session
            .visible_workflows(&all)
            .iter()
            .map(|wf| wf.id.0.as_str())
            .collect();
        assert_eq!(visible, vec!["wf-1", "wf-3"]);
    }

    #[test]
    fn test_visible_workflows_preserves_source_order() {
        let session = Session::new(Role::Admin, admin());
        let all = vec![
            instance("wf-b", "x", None),
            instance("wf-a", "y", None),
            instance("wf-c", "z", None),
        ];
        let ids: Vec<&InstanceId> =
            session.visible_workflows(&all).iter().map(|wf| &wf.id).collect();
        assert_eq!(
            ids,
            vec![
                &InstanceId::new("wf-b"),
                &InstanceId::new("wf-a"),
                &InstanceId::new("wf-c")
            ]
        );
    }

    #[test]
    fn test_template_visibility_by_status() {
        let all = vec![
            template("t1", TemplateStatus::Published),
            template("t2", TemplateStatus::Draft),
            template("t3", TemplateStatus::Deprecated),
        ];

        let manager = Session::new(Role::Manager, admin());
        assert_eq!(manager.visible_templates(&all).len(), 3);

        let user = Session::new(Role::User, approver());
        let visible = user.visible_templates(&all);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, TemplateId::new("t1"));
    }

    #[test]
    fn test_set_role_swaps_identity() {
        let mut session = Session::new(Role::Admin, admin());
        assert!(session.can_access_users());

        session.set_role(Role::Approver, approver());
        assert_eq!(session.role(), Role::Approver);
        assert_eq!(session.identity().id, UserId::new("user-3"));
        assert!(!session.can_access_users());
        assert!(session.can_approve_workflows());
    }

    #[test]
    fn test_toggle_wallet_is_cosmetic() {
        let mut session = Session::new(Role::User, approver());
        assert!(session.wallet().connected);
        session.toggle_wallet();
        assert!(!session.wallet().connected);
        session.toggle_wallet();
        assert!(session.wallet().connected);
        assert_eq!(session.wallet().balance, "1,250.00");
    }

    #[test]
    fn test_available_actions_gated_by_capability() {
        let tpl = template("t1", TemplateStatus::Published)
            .with_state(WorkflowState::new(1, "Review"))
            .with_transition(cewce_types::WorkflowTransition::new(1, 10, "approve"));
        let wf = instance("wf-1", "user-4", None);

        let user_session = Session::new(
            Role::User,
            User::new("user-4", "user@cewce.io").with_role(Role::User),
        );
        assert!(user_session.available_actions(&tpl, &wf).is_empty());

        // Approver not assigned to the workflow still sees the actions
        let approver_session = Session::new(Role::Approver, approver());
        let actions = approver_session.available_actions(&tpl, &wf);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].action, "approve");
    }

    #[test]
    fn test_terminal_state_has_no_actions() {
        let tpl = template("t1", TemplateStatus::Published);
        let wf = instance("wf-1", "user-4", None).with_current_state(StateId(10));
        let session = Session::new(Role::Admin, admin());
        assert!(session.available_actions(&tpl, &wf).is_empty());
    }
}
