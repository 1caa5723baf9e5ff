//! The five seed audit entries

use crate::ts;
use cewce_audit::{ActorRef, AuditEntry, AuditLog};
use cewce_types::{InstanceId, StateId};

/// The seed audit trail, oldest entry first
pub fn audit_log() -> AuditLog {
    AuditLog::from_entries(vec![
        AuditEntry::new(
            "audit-3",
            InstanceId::new("wf-003"),
            "Marketing Campaign Brief",
            "Document Approval",
            StateId(1),
            StateId(10),
            "approve",
            ActorRef::new("user-3")
                .with_public_key("01cde...f345")
                .with_display_name("Ashley Approver"),
        )
        .with_comment("Campaign approved - great work!")
        .with_deploy_hash("0x6d1b...ef56")
        .with_created_at(ts("2024-12-15T16:45:00Z")),
        AuditEntry::new(
            "audit-5",
            InstanceId::new("wf-002"),
            "Server Infrastructure Upgrade",
            "Purchase Request",
            StateId(0),
            StateId(1),
            "submit",
            ActorRef::new("user-4")
                .with_public_key("01def...4567")
                .with_display_name("Jordan User"),
        )
        .with_comment("Urgent request - current servers at capacity")
        .with_deploy_hash("0x4b9f...ij90")
        .with_created_at(ts("2024-12-18T11:30:00Z")),
        AuditEntry::new(
            "audit-4",
            InstanceId::new("wf-004"),
            "Employee Handbook Update",
            "Document Approval",
            StateId(1),
            StateId(20),
            "escalate",
            ActorRef::new("user-3")
                .with_public_key("01cde...f345")
                .with_display_name("Ashley Approver"),
        )
        .with_comment("Escalating to admin for policy review")
        .with_deploy_hash("0x5c0a...gh78")
        .with_created_at(ts("2024-12-20T09:30:00Z")),
        AuditEntry::new(
            "audit-1",
            InstanceId::new("wf-001"),
            "Q4 Financial Report Approval",
            "Document Approval",
            StateId(0),
            StateId(1),
            "submit",
            ActorRef::new("user-4")
                .with_public_key("01def...4567")
                .with_display_name("Jordan User"),
        )
        .with_comment("Submitting for manager review")
        .with_deploy_hash("0x8f3d...ab12")
        .with_created_at(ts("2024-12-21T14:30:00Z")),
        AuditEntry::new(
            "audit-2",
            InstanceId::new("wf-002"),
            "Server Infrastructure Upgrade",
            "Purchase Request",
            StateId(1),
            StateId(2),
            "approve",
            ActorRef::new("user-2")
                .with_public_key("01bcd...ef23")
                .with_display_name("Morgan Manager"),
        )
        .with_comment("Approved, forwarding to finance for budget review")
        .with_deploy_hash("0x7e2c...cd34")
        .with_created_at(ts("2024-12-22T10:15:00Z")),
    ])
}
