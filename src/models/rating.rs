use serde::Serialize;

/// Discrete summary of on-time performance.
///
/// `on_time_percent + late_percent == 100` whenever at least one trip was
/// recorded; with no trips every field is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RatingResult {
    pub star_rating: u8,     // 0..=5
    pub on_time_percent: u8, // 0..=100
    pub late_percent: u8,    // 0..=100
}

impl RatingResult {
    pub const MAX_STARS: u8 = 5;

    /// Result used when no trips were recorded.
    pub const fn empty() -> Self {
        Self {
            star_rating: 0,
            on_time_percent: 0,
            late_percent: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }
}
