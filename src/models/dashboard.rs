use crate::models::counters::TripPerformanceCounters;
use crate::models::pod::PodSummary;
use serde::{Deserialize, Serialize};

/// Per-period trip counts revealed when a trip widget is expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripBreakdown {
    pub today: u64,
    pub week: u64,
    pub month: u64,
}

impl TripBreakdown {
    pub const fn new(today: u64, week: u64, month: u64) -> Self {
        Self { today, week, month }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripBreakdowns {
    pub approved: TripBreakdown,
    pub finished: TripBreakdown,
    pub pending: TripBreakdown,
}

impl Default for TripBreakdowns {
    fn default() -> Self {
        Self {
            approved: TripBreakdown::new(5, 20, 60),
            finished: TripBreakdown::new(3, 15, 59),
            pending: TripBreakdown::new(1, 2, 4),
        }
    }
}

/// Everything the home screen displays besides the attendance log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardData {
    pub approved_trips: u64,
    pub finished_trips: u64,
    pub pending_trips: u64,
    pub complaints: u64,
    pub on_time_trips: u64,
    pub late_trips: u64,
    pub user_name: String,
    pub app_version: String,
    pub breakdown: TripBreakdowns,
}

impl Default for DashboardData {
    fn default() -> Self {
        Self {
            approved_trips: 60,
            finished_trips: 59,
            pending_trips: 1,
            complaints: 1,
            on_time_trips: 55,
            late_trips: 4,
            user_name: "Febri Riyadi Wibowo".to_string(),
            app_version: "2.2.5".to_string(),
            breakdown: TripBreakdowns::default(),
        }
    }
}

impl DashboardData {
    pub fn counters(&self) -> TripPerformanceCounters {
        TripPerformanceCounters::new(self.on_time_trips, self.late_trips)
    }

    pub fn pod(&self) -> PodSummary {
        PodSummary::from(self)
    }
}
