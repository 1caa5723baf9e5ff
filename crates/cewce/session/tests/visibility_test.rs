//! Role-scoped visibility and capability checks over the demo dataset

use cewce_fixtures::{identity_for, DemoDataset};
use cewce_session::{Capability, DashboardStats, Session};
use cewce_types::{InstanceId, Role, StateId};

fn session_for(role: Role) -> Session {
    Session::new(role, identity_for(role))
}

fn visible_ids(session: &Session, data: &DemoDataset) -> Vec<String> {
    session
        .visible_workflows(&data.workflows)
        .iter()
        .map(|wf| wf.id.0.clone())
        .collect()
}

#[test]
fn admin_and_manager_see_the_whole_fixture_set() {
    let data = DemoDataset::load();
    for role in [Role::Admin, Role::Manager] {
        let session = session_for(role);
        assert_eq!(session.visible_workflows(&data.workflows).len(), 5);
        assert_eq!(session.visible_templates(&data.templates).len(), 3);
    }
}

#[test]
fn user_role_sees_only_involved_instances() {
    let data = DemoDataset::load();
    let session = session_for(Role::User);
    assert_eq!(
        visible_ids(&session, &data),
        vec!["wf-001", "wf-002", "wf-005"]
    );
}

#[test]
fn approver_role_sees_only_assigned_instances() {
    let data = DemoDataset::load();
    let session = session_for(Role::Approver);
    assert_eq!(visible_ids(&session, &data), vec!["wf-001"]);
}

#[test]
fn user_role_sees_published_templates_only() {
    let data = DemoDataset::load();
    let session = session_for(Role::User);
    let names: Vec<&str> = session
        .visible_templates(&data.templates)
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, vec!["Document Approval", "Purchase Request"]);
}

#[test]
fn user_management_is_admin_only() {
    assert!(session_for(Role::Admin).can_access_users());
    for role in [Role::Manager, Role::Approver, Role::User] {
        assert!(!session_for(role).can_access_users());
    }
}

#[test]
fn audit_and_approval_exclude_plain_users() {
    for role in [Role::Admin, Role::Manager, Role::Approver] {
        let session = session_for(role);
        assert!(session.can_access_audit());
        assert!(session.can_approve_workflows());
    }
    let user = session_for(Role::User);
    assert!(!user.can_access_audit());
    assert!(!user.can_approve_workflows());
}

#[test]
fn template_authoring_is_admin_and_manager() {
    assert!(session_for(Role::Admin).can_create_templates());
    assert!(session_for(Role::Manager).can_create_templates());
    assert!(!session_for(Role::Approver).can_create_templates());
    assert!(!session_for(Role::User).can_create_templates());
}

#[test]
fn set_role_is_idempotent_over_visible_sets() {
    let data = DemoDataset::load();
    let mut session = session_for(Role::Approver);
    let before = visible_ids(&session, &data);

    session.set_role(Role::Approver, identity_for(Role::Approver));
    assert_eq!(visible_ids(&session, &data), before);
    assert_eq!(
        session.visible_templates(&data.templates).len(),
        session_for(Role::Approver).visible_templates(&data.templates).len()
    );
}

#[test]
fn wf_001_actions_under_approver_match_the_transition_table() {
    let data = DemoDataset::load();
    let session = session_for(Role::Approver);

    let wf = data.workflow(&InstanceId::new("wf-001")).unwrap();
    let template = data.template_for(wf).unwrap();

    let actions: Vec<(&str, StateId)> = session
        .available_actions(template, wf)
        .iter()
        .map(|t| (t.action.as_str(), t.to))
        .collect();
    assert_eq!(
        actions,
        vec![
            ("approve", StateId(10)),
            ("reject", StateId(11)),
            ("escalate", StateId(20)),
        ]
    );
}

#[test]
fn wf_001_actions_hidden_from_plain_user() {
    let data = DemoDataset::load();
    let session = session_for(Role::User);

    let wf = data.workflow(&InstanceId::new("wf-001")).unwrap();
    let template = data.template_for(wf).unwrap();
    assert!(session.available_actions(template, wf).is_empty());
}

#[test]
fn dashboard_stats_follow_the_visible_set() {
    let data = DemoDataset::load();

    let admin = session_for(Role::Admin);
    let stats = DashboardStats::for_workflows(admin.visible_workflows(&data.workflows));
    assert_eq!(
        stats,
        DashboardStats {
            total: 5,
            pending: 2,
            completed: 1,
            escalated: 1,
        }
    );

    let approver = session_for(Role::Approver);
    let stats = DashboardStats::for_workflows(approver.visible_workflows(&data.workflows));
    assert_eq!(stats.total, 1);
    assert_eq!(stats.pending, 1);
}

#[test]
fn every_capability_has_a_nonempty_allow_list() {
    for cap in Capability::all() {
        assert!(!cap.allowed_roles().is_empty(), "{cap}");
    }
}
