//! Session-scoped attendance log.
//!
//! Append-only: entries are never reordered, edited or removed, and no
//! pairing between clock-in and clock-out is enforced. The log never reads
//! the clock itself; callers hand in `now`.

use crate::errors::AppResult;
use crate::models::attendance::{AttendanceEvent, AttendanceKind};
use crate::utils::time::validate_time_format;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceLog {
    events: Vec<AttendanceEvent>,
    time_format: String,
}

impl Default for AttendanceLog {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceLog {
    /// Empty log using `HH:MM:SS` timestamps.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }

    /// Empty log with a custom strftime pattern for timestamps.
    pub fn with_time_format(time_format: &str) -> AppResult<Self> {
        validate_time_format(time_format)?;
        Ok(Self {
            events: Vec::new(),
            time_format: time_format.to_string(),
        })
    }

    pub fn record_clock_in<Tz>(&mut self, now: &DateTime<Tz>) -> AttendanceEvent
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.record(AttendanceKind::ClockIn, now)
    }

    pub fn record_clock_out<Tz>(&mut self, now: &DateTime<Tz>) -> AttendanceEvent
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.record(AttendanceKind::ClockOut, now)
    }

    /// Append an event of the given kind stamped with `now`.
    pub fn record<Tz>(&mut self, kind: AttendanceKind, now: &DateTime<Tz>) -> AttendanceEvent
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let event = AttendanceEvent {
            kind,
            timestamp: now.format(&self.time_format).to_string(),
        };
        self.events.push(event.clone());
        event
    }

    /// Every recorded event, oldest first.
    pub fn list_events(&self) -> &[AttendanceEvent] {
        &self.events
    }

    /// Owned copy of the log, detached from later mutations.
    pub fn snapshot(&self) -> Vec<AttendanceEvent> {
        self.events.clone()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
