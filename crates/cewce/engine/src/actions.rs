//! Starting instances and applying transition actions

use crate::simulated_deploy_hash;
use cewce_audit::{ActorRef, AuditEntry, AuditEntryId};
use cewce_types::{
    EngineError, EngineResult, InstanceId, InstanceStatus, Priority, User,
    WorkflowInstance, WorkflowTemplate,
};
use chrono::Utc;
use tracing::info;

/// The result of applying an action: the moved instance and the audit
/// entry that records the step
#[derive(Clone, Debug)]
pub struct ActionOutcome {
    pub instance: WorkflowInstance,
    pub entry: AuditEntry,
}

/// Create a new instance of a published template, sitting in its
/// initial state with `Draft` status.
pub fn start_instance(
    template: &WorkflowTemplate,
    title: impl Into<String>,
    description: impl Into<String>,
    priority: Priority,
    initiator: &User,
) -> EngineResult<WorkflowInstance> {
    if !template.is_published() {
        return Err(EngineError::TemplateNotPublished(template.id.clone()));
    }
    template.validate()?;
    let initial = template
        .initial_state()
        .ok_or_else(|| EngineError::NoInitialState(template.id.clone()))?;

    let instance = WorkflowInstance::new(
        InstanceId::generate().0,
        template.id.clone(),
        template.name.clone(),
        title,
        initial.id,
        initiator.id.clone(),
        initiator.display_name().unwrap_or_else(|| initiator.email.clone()),
    )
    .with_description(description)
    .with_priority(priority);

    info!(
        instance = %instance.id,
        template = %template.id,
        initiator = %initiator.id,
        "workflow instance started"
    );

    Ok(instance)
}

/// Apply a named action to an instance.
///
/// The action must be a transition declared out of the instance's
/// current state; nothing else is checked here. The returned instance
/// carries the new state, a derived status, a fresh simulated deploy
/// hash, and a bumped `updated_at`; the entry snapshots the actor.
pub fn apply_action(
    template: &WorkflowTemplate,
    instance: &WorkflowInstance,
    actor: &User,
    action: &str,
    comment: Option<&str>,
) -> EngineResult<ActionOutcome> {
    if template.id != instance.template_id {
        return Err(EngineError::TemplateNotFound(instance.template_id.clone()));
    }

    let transition = template
        .transition(instance.current_state, action)
        .ok_or_else(|| EngineError::InvalidTransition {
            state: instance.current_state,
            action: action.to_string(),
        })?;

    let target = template
        .state(transition.to)
        .ok_or_else(|| EngineError::UnknownState {
            template: template.id.clone(),
            state: transition.to,
        })?;

    let status = derive_status(target.is_terminal, action);
    let deploy_hash = simulated_deploy_hash();
    let now = Utc::now();

    let mut moved = instance.clone();
    moved.current_state = transition.to;
    moved.status = status;
    moved.deploy_hash = Some(deploy_hash.clone());
    moved.updated_at = now;

    let mut entry = AuditEntry::new(
        AuditEntryId::generate().0,
        instance.id.clone(),
        instance.title.clone(),
        template.name.clone(),
        instance.current_state,
        transition.to,
        action,
        ActorRef::from(actor),
    )
    .with_deploy_hash(deploy_hash)
    .with_created_at(now);
    if let Some(comment) = comment {
        entry = entry.with_comment(comment);
    }

    info!(
        instance = %instance.id,
        from = %instance.current_state,
        to = %transition.to,
        action,
        actor = %actor.id,
        "transition applied"
    );

    Ok(ActionOutcome {
        instance: moved,
        entry,
    })
}

/// Status after a transition.
///
/// Terminal states complete the workflow (or cancel it, if that is
/// what the action said); an escalation keeps it open but flagged;
/// everything else is a pending hand-off.
fn derive_status(target_is_terminal: bool, action: &str) -> InstanceStatus {
    if target_is_terminal {
        if action == "cancel" {
            InstanceStatus::Cancelled
        } else {
            InstanceStatus::Completed
        }
    } else if action == "escalate" {
        InstanceStatus::Escalated
    } else {
        InstanceStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cewce_types::{Role, StateId, TemplateStatus, WorkflowState, WorkflowTransition};

    fn approver() -> User {
        User::new("user-3", "approver@cewce.io")
            .with_name("Ashley", "Approver")
            .with_public_key("01cde...f345")
            .with_role(Role::Approver)
    }

    fn template() -> WorkflowTemplate {
        WorkflowTemplate::new("tpl-doc", "Document Approval")
            .with_status(TemplateStatus::Published)
            .with_state(WorkflowState::new(0, "Draft").initial())
            .with_state(WorkflowState::new(1, "Pending Review"))
            .with_state(WorkflowState::new(10, "Approved").terminal())
            .with_state(WorkflowState::new(11, "Rejected").terminal())
            .with_state(WorkflowState::new(20, "Escalated"))
            .with_state(WorkflowState::new(30, "Cancelled").terminal())
            .with_transition(WorkflowTransition::new(0, 1, "submit"))
            .with_transition(WorkflowTransition::new(1, 10, "approve"))
            .with_transition(WorkflowTransition::new(1, 11, "reject"))
            .with_transition(WorkflowTransition::new(1, 20, "escalate"))
            .with_transition(WorkflowTransition::new(0, 30, "cancel"))
    }

    fn pending_instance(template: &WorkflowTemplate) -> WorkflowInstance {
        start_instance(
            template,
            "Q4 Report",
            "Annual report",
            Priority::High,
            &approver(),
        )
        .unwrap()
        .with_current_state(StateId(1))
        .with_status(InstanceStatus::Pending)
    }

    #[test]
    fn test_start_instance_at_initial_state() {
        let tpl = template();
        let wf = start_instance(&tpl, "T", "D", Priority::Low, &approver()).unwrap();
        assert_eq!(wf.current_state, StateId(0));
        assert_eq!(wf.status, InstanceStatus::Draft);
        assert_eq!(wf.template_name, "Document Approval");
        assert_eq!(wf.initiator_name, "Ashley Approver");
        assert!(wf.deploy_hash.is_none());
    }

    #[test]
    fn test_start_instance_rejects_unpublished_template() {
        let tpl = template().with_status(TemplateStatus::Draft);
        let result = start_instance(&tpl, "T", "D", Priority::Low, &approver());
        assert!(matches!(
            result,
            Err(EngineError::TemplateNotPublished(_))
        ));
    }

    #[test]
    fn test_approve_completes() {
        let tpl = template();
        let wf = pending_instance(&tpl);
        let outcome = apply_action(&tpl, &wf, &approver(), "approve", Some("lgtm")).unwrap();

        assert_eq!(outcome.instance.current_state, StateId(10));
        assert_eq!(outcome.instance.status, InstanceStatus::Completed);
        assert!(outcome.instance.deploy_hash.is_some());

        assert_eq!(outcome.entry.from_state, StateId(1));
        assert_eq!(outcome.entry.to_state, StateId(10));
        assert_eq!(outcome.entry.action, "approve");
        assert_eq!(outcome.entry.comment.as_deref(), Some("lgtm"));
        assert_eq!(outcome.entry.actor.display_name.as_deref(), Some("Ashley Approver"));
        assert_eq!(outcome.entry.deploy_hash, outcome.instance.deploy_hash);
    }

    #[test]
    fn test_escalate_keeps_instance_open() {
        let tpl = template();
        let wf = pending_instance(&tpl);
        let outcome = apply_action(&tpl, &wf, &approver(), "escalate", None).unwrap();
        assert_eq!(outcome.instance.current_state, StateId(20));
        assert_eq!(outcome.instance.status, InstanceStatus::Escalated);
        assert!(outcome.instance.is_open());
        assert!(outcome.entry.comment.is_none());
    }

    #[test]
    fn test_cancel_from_draft() {
        let tpl = template();
        let wf = start_instance(&tpl, "T", "D", Priority::Low, &approver()).unwrap();
        let outcome = apply_action(&tpl, &wf, &approver(), "cancel", None).unwrap();
        assert_eq!(outcome.instance.status, InstanceStatus::Cancelled);
        assert!(!outcome.instance.is_open());
    }

    #[test]
    fn test_submit_moves_to_pending() {
        let tpl = template();
        let wf = start_instance(&tpl, "T", "D", Priority::Low, &approver()).unwrap();
        let outcome = apply_action(&tpl, &wf, &approver(), "submit", None).unwrap();
        assert_eq!(outcome.instance.current_state, StateId(1));
        assert_eq!(outcome.instance.status, InstanceStatus::Pending);
    }

    #[test]
    fn test_undeclared_action_rejected() {
        let tpl = template();
        let wf = pending_instance(&tpl);
        let result = apply_action(&tpl, &wf, &approver(), "sign", None);
        assert!(matches!(
            result,
            Err(EngineError::InvalidTransition { state: StateId(1), .. })
        ));
    }

    #[test]
    fn test_terminal_state_allows_nothing() {
        let tpl = template();
        let wf = pending_instance(&tpl).with_current_state(StateId(10));
        let result = apply_action(&tpl, &wf, &approver(), "approve", None);
        assert!(matches!(result, Err(EngineError::InvalidTransition { .. })));
    }

    #[test]
    fn test_template_mismatch_rejected() {
        let tpl = template();
        let other = template();
        let mut wf = pending_instance(&tpl);
        wf.template_id = cewce_types::TemplateId::new("tpl-other");
        let result = apply_action(&other, &wf, &approver(), "approve", None);
        assert!(matches!(result, Err(EngineError::TemplateNotFound(_))));
    }
}
