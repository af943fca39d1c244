//! Time utilities: clock parsing and strftime pattern validation.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use chrono::format::{Item, StrftimeItems};

/// Parse `HH:MM:SS` or `HH:MM`.
pub fn parse_clock_time(t: &str) -> AppResult<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .map_err(|_| AppError::InvalidTime(t.to_string()))
}

/// Reject patterns chrono cannot render, so formatting never fails later.
pub fn validate_time_format(fmt: &str) -> AppResult<()> {
    if fmt.is_empty() || StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return Err(AppError::InvalidTime(format!(
            "'{fmt}' is not a valid time format"
        )));
    }
    Ok(())
}
