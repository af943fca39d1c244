use crate::models::counters::TripPerformanceCounters;
use crate::models::dashboard::DashboardData;
use crate::models::pod::PodSummary;
use crate::models::rating::RatingResult;

/// Derived numbers for one dashboard frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    pub counters: TripPerformanceCounters,
    pub rating: RatingResult,
    pub pod: PodSummary,
}

/// Rating memoized on the counters it was computed from, so re-rendering
/// with unchanged counters skips the computation.
#[derive(Debug, Default)]
pub struct Core {
    cached: Option<(TripPerformanceCounters, RatingResult)>,
}

impl Core {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rating_for(&mut self, counters: TripPerformanceCounters) -> RatingResult {
        match self.cached {
            Some((key, rating)) if key == counters => rating,
            _ => {
                let rating = counters.rating();
                self.cached = Some((counters, rating));
                rating
            }
        }
    }

    pub fn build_summary(&mut self, data: &DashboardData) -> DashboardSummary {
        let counters = data.counters();
        DashboardSummary {
            counters,
            rating: self.rating_for(counters),
            pod: data.pod(),
        }
    }
}
