//! Dashboard counters computed over a session's visible workflows

use cewce_types::{InstanceStatus, WorkflowInstance};
use serde::{Deserialize, Serialize};

/// The four headline numbers on the dashboard.
///
/// Always computed over the *visible* set, so every role's dashboard
/// is consistent with the list views it links to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub escalated: usize,
}

impl DashboardStats {
    /// Tally a set of workflow instances
    pub fn for_workflows<'a, I>(workflows: I) -> Self
    where
        I: IntoIterator<Item = &'a WorkflowInstance>,
    {
        let mut stats = Self::default();
        for wf in workflows {
            stats.total += 1;
            match wf.status {
                InstanceStatus::Pending => stats.pending += 1,
                InstanceStatus::Completed => stats.completed += 1,
                InstanceStatus::Escalated => stats.escalated += 1,
                InstanceStatus::Draft | InstanceStatus::Cancelled => {}
            }
        }
        stats
    }
}
