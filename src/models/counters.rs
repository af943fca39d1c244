use crate::core::rating::rate;
use crate::models::rating::RatingResult;
use serde::{Deserialize, Serialize};

/// On-time / late trip counters fed into the rating engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripPerformanceCounters {
    pub on_time_count: u64,
    pub late_count: u64,
}

impl TripPerformanceCounters {
    pub fn new(on_time_count: u64, late_count: u64) -> Self {
        Self {
            on_time_count,
            late_count,
        }
    }

    /// Total trips; saturates instead of overflowing.
    pub fn total(&self) -> u64 {
        self.on_time_count.saturating_add(self.late_count)
    }

    pub fn rating(&self) -> RatingResult {
        rate(
            u128::from(self.on_time_count),
            u128::from(self.late_count),
        )
    }
}
