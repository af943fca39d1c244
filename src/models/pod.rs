use crate::models::dashboard::DashboardData;
use serde::Serialize;

/// Proof-of-delivery counters shown in the POD submenu.
/// Read-only view over the dashboard data, never computed by the rating core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PodSummary {
    pub total: u64,
    pub awaited: u64,
    pub received: u64,
}

impl From<&DashboardData> for PodSummary {
    fn from(data: &DashboardData) -> Self {
        Self {
            total: data.approved_trips,
            awaited: data.pending_trips,
            received: data.finished_trips,
        }
    }
}
