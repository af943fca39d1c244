use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttendanceKind {
    ClockIn,
    ClockOut,
}

impl AttendanceKind {
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceKind::ClockIn => "Clock In",
            AttendanceKind::ClockOut => "Clock Out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, AttendanceKind::ClockIn)
    }
}

impl fmt::Display for AttendanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for AttendanceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A single clock-in or clock-out, immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceEvent {
    pub kind: AttendanceKind,
    pub timestamp: String, // already formatted with the log's time format
}

impl fmt::Display for AttendanceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} • {}", self.kind, self.timestamp)
    }
}
