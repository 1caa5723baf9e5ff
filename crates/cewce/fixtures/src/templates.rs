//! The three workflow templates

use crate::ts;
use cewce_types::{
    TemplateStatus, WorkflowState, WorkflowTemplate, WorkflowTransition,
};

/// All demo templates, in catalog order
pub fn templates() -> Vec<WorkflowTemplate> {
    vec![
        document_approval(),
        purchase_request(),
        contract_signing(),
    ]
}

fn document_approval() -> WorkflowTemplate {
    WorkflowTemplate::new("template-1", "Document Approval")
        .with_description("Standard document approval workflow with multi-level review")
        .with_version(1)
        .with_sla(7, 3)
        .with_status(TemplateStatus::Published)
        .with_state(WorkflowState::new(0, "Draft").initial())
        .with_state(WorkflowState::new(1, "Pending Review"))
        .with_state(WorkflowState::new(10, "Approved").terminal())
        .with_state(WorkflowState::new(11, "Rejected").terminal())
        .with_state(WorkflowState::new(20, "Escalated"))
        .with_state(WorkflowState::new(30, "Cancelled").terminal())
        .with_transition(WorkflowTransition::new(0, 1, "submit").with_label("Submit for Review"))
        .with_transition(WorkflowTransition::new(1, 10, "approve").with_label("Approve"))
        .with_transition(WorkflowTransition::new(1, 11, "reject").with_label("Reject"))
        .with_transition(WorkflowTransition::new(1, 20, "escalate").with_label("Escalate"))
        .with_transition(WorkflowTransition::new(20, 10, "approve").with_label("Approve"))
        .with_transition(WorkflowTransition::new(20, 11, "reject").with_label("Reject"))
        .with_transition(WorkflowTransition::new(0, 30, "cancel").with_label("Cancel"))
        .with_timestamps(ts("2024-01-10T08:00:00Z"), ts("2024-01-10T08:00:00Z"))
}

fn purchase_request() -> WorkflowTemplate {
    WorkflowTemplate::new("template-2", "Purchase Request")
        .with_description("Procurement workflow for purchase requests with budget approval")
        .with_version(2)
        .with_sla(5, 2)
        .with_status(TemplateStatus::Published)
        .with_state(WorkflowState::new(0, "Draft").initial())
        .with_state(WorkflowState::new(1, "Manager Review"))
        .with_state(WorkflowState::new(2, "Finance Review"))
        .with_state(WorkflowState::new(10, "Approved").terminal())
        .with_state(WorkflowState::new(11, "Rejected").terminal())
        .with_transition(WorkflowTransition::new(0, 1, "submit").with_label("Submit"))
        .with_transition(WorkflowTransition::new(1, 2, "approve").with_label("Forward to Finance"))
        .with_transition(WorkflowTransition::new(1, 11, "reject").with_label("Reject"))
        .with_transition(WorkflowTransition::new(2, 10, "approve").with_label("Approve"))
        .with_transition(WorkflowTransition::new(2, 11, "reject").with_label("Reject"))
        .with_timestamps(ts("2024-02-15T10:00:00Z"), ts("2024-02-20T14:00:00Z"))
}

fn contract_signing() -> WorkflowTemplate {
    WorkflowTemplate::new("template-3", "Contract Signing")
        .with_description("Legal contract review and digital signature workflow")
        .with_version(1)
        .with_sla(14, 5)
        .with_status(TemplateStatus::Draft)
        .with_state(WorkflowState::new(0, "Draft").initial())
        .with_state(WorkflowState::new(1, "Legal Review"))
        .with_state(WorkflowState::new(2, "Pending Signature"))
        .with_state(WorkflowState::new(10, "Executed").terminal())
        .with_state(WorkflowState::new(11, "Rejected").terminal())
        .with_transition(
            WorkflowTransition::new(0, 1, "submit").with_label("Submit for Legal Review"),
        )
        .with_transition(WorkflowTransition::new(1, 2, "approve").with_label("Send for Signature"))
        .with_transition(WorkflowTransition::new(1, 11, "reject").with_label("Reject"))
        .with_transition(WorkflowTransition::new(2, 10, "sign").with_label("Sign & Execute"))
        .with_timestamps(ts("2024-03-01T09:00:00Z"), ts("2024-03-01T09:00:00Z"))
}
