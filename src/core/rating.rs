//! On-time performance rating.
//!
//! Rounding is round-half-up, evaluated on exact integer arithmetic so the
//! result never depends on float representation: `(1, 1)` gives 50% and
//! 3 stars, `(1, 7)` gives 13% on time. Negative inputs are treated as 0
//! before the ratio is taken.

use crate::models::rating::RatingResult;

const PERCENT: u128 = 100;
const STARS: u128 = RatingResult::MAX_STARS as u128;

/// 2^64: integral floats below this convert to `u128` exactly and keep
/// `rate` far from overflow.
const EXACT_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Slack for float ratios that land just under a .5 boundary.
const HALF_TOLERANCE: f64 = 1e-9;

/// Convert (on-time, late) trip counts into stars and a percentage split.
pub fn compute_rating(on_time: i64, late: i64) -> RatingResult {
    rate(clamp_count(on_time), clamp_count(late))
}

/// Float variant for counters coming from loosely typed sources.
/// Negative, NaN and infinite values count as 0. Whole numbers take the
/// exact integer path; fractional counts round half-up with a small
/// tolerance for representation error.
pub fn compute_rating_f64(on_time: f64, late: f64) -> RatingResult {
    let mut on_time = sanitize(on_time);
    let mut late = sanitize(late);

    if is_exact_count(on_time) && is_exact_count(late) {
        return rate(on_time as u128, late as u128);
    }

    // two huge finite values can still sum to infinity
    if !(on_time + late).is_finite() {
        on_time /= 2.0;
        late /= 2.0;
    }

    let ratio = on_time / (on_time + late);
    let on_time_percent = round_half_up_f64(ratio * 100.0).clamp(0.0, 100.0) as u8;
    let star_rating = round_half_up_f64(ratio * f64::from(RatingResult::MAX_STARS))
        .clamp(0.0, f64::from(RatingResult::MAX_STARS)) as u8;

    RatingResult {
        star_rating,
        on_time_percent,
        late_percent: 100 - on_time_percent,
    }
}

/// Exact rating over non-negative counts.
pub(crate) fn rate(on_time: u128, late: u128) -> RatingResult {
    let total = on_time + late;

    if total == 0 {
        return RatingResult::empty();
    }

    let on_time_percent = round_half_up(on_time * PERCENT, total).min(PERCENT) as u8;
    let star_rating = round_half_up(on_time * STARS, total).min(STARS) as u8;

    RatingResult {
        star_rating,
        on_time_percent,
        late_percent: 100 - on_time_percent,
    }
}

fn clamp_count(v: i64) -> u128 {
    v.max(0) as u128
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

fn is_exact_count(v: f64) -> bool {
    v.fract() == 0.0 && v < EXACT_LIMIT
}

fn round_half_up(num: u128, den: u128) -> u128 {
    (2 * num + den) / (2 * den)
}

fn round_half_up_f64(x: f64) -> f64 {
    (x + 0.5 + HALF_TOLERANCE).floor()
}
