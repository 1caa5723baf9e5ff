//! The five workflow instances

use crate::ts;
use cewce_types::{
    InstanceStatus, Priority, StateId, TemplateId, UserId, WorkflowInstance,
};

/// All demo instances, in creation order (newest last)
pub fn workflows() -> Vec<WorkflowInstance> {
    vec![
        WorkflowInstance::new(
            "wf-001",
            TemplateId::new("template-1"),
            "Document Approval",
            "Q4 Financial Report Approval",
            StateId(1),
            UserId::new("user-4"),
            "Jordan User",
        )
        .with_description("Annual financial report requiring executive approval before public release")
        .with_status(InstanceStatus::Pending)
        .with_priority(Priority::High)
        .assigned_to(UserId::new("user-3"), "Ashley Approver")
        .with_deploy_hash("0x8f3d...ab12")
        .with_due_date(ts("2024-12-28T17:00:00Z"))
        .with_timestamps(ts("2024-12-20T09:00:00Z"), ts("2024-12-21T14:30:00Z")),
        WorkflowInstance::new(
            "wf-002",
            TemplateId::new("template-2"),
            "Purchase Request",
            "Server Infrastructure Upgrade",
            StateId(2),
            UserId::new("user-4"),
            "Jordan User",
        )
        .with_description("Request to purchase new server hardware for data center expansion")
        .with_status(InstanceStatus::Pending)
        .with_priority(Priority::Urgent)
        .assigned_to(UserId::new("user-2"), "Morgan Manager")
        .with_deploy_hash("0x7e2c...cd34")
        .with_due_date(ts("2024-12-25T17:00:00Z"))
        .with_timestamps(ts("2024-12-18T11:00:00Z"), ts("2024-12-22T10:15:00Z")),
        WorkflowInstance::new(
            "wf-003",
            TemplateId::new("template-1"),
            "Document Approval",
            "Marketing Campaign Brief",
            StateId(10),
            UserId::new("user-2"),
            "Morgan Manager",
        )
        .with_description("New product launch marketing campaign requiring approval")
        .with_status(InstanceStatus::Completed)
        .with_priority(Priority::Medium)
        .with_deploy_hash("0x6d1b...ef56")
        .with_timestamps(ts("2024-12-10T08:00:00Z"), ts("2024-12-15T16:45:00Z")),
        WorkflowInstance::new(
            "wf-004",
            TemplateId::new("template-1"),
            "Document Approval",
            "Employee Handbook Update",
            StateId(20),
            UserId::new("user-2"),
            "Morgan Manager",
        )
        .with_description("Updated employee handbook with new remote work policies")
        .with_status(InstanceStatus::Escalated)
        .with_priority(Priority::High)
        .assigned_to(UserId::new("user-1"), "Alex Administrator")
        .with_deploy_hash("0x5c0a...gh78")
        .with_due_date(ts("2024-12-26T17:00:00Z"))
        .with_timestamps(ts("2024-12-05T14:00:00Z"), ts("2024-12-20T09:30:00Z")),
        WorkflowInstance::new(
            "wf-005",
            TemplateId::new("template-2"),
            "Purchase Request",
            "Office Supplies Q1 2025",
            StateId(0),
            UserId::new("user-4"),
            "Jordan User",
        )
        .with_description("Quarterly office supplies purchase request")
        .with_status(InstanceStatus::Draft)
        .with_priority(Priority::Low)
        .with_timestamps(ts("2024-12-22T10:00:00Z"), ts("2024-12-22T10:00:00Z")),
    ]
}
