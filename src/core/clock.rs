//! Wall-clock sources used by the front end when stamping attendance events.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveTime, TimeZone};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant (scripted sessions, tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

impl FixedClock {
    /// Today's local date at `time`.
    pub fn today_at(time: NaiveTime) -> AppResult<Self> {
        let naive = Local::now().date_naive().and_time(time);
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(FixedClock)
            .ok_or_else(|| AppError::InvalidTime(format!("{time} does not exist in the local timezone today")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_stable() {
        let t = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let clock = FixedClock::today_at(t).unwrap();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().time(), t);
    }

    #[test]
    fn system_clock_moves_forward() {
        let a = SystemClock.now();
        let b = SystemClock.now();
        assert!(b >= a);
    }
}
