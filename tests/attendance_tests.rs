use chrono::{FixedOffset, TimeZone, Utc};
use tmsdash::{AttendanceKind, AttendanceLog};

#[test]
fn test_log_starts_empty() {
    let log = AttendanceLog::new();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
    assert!(log.list_events().is_empty());
}

#[test]
fn test_events_kept_in_recording_order() {
    let mut log = AttendanceLog::new();
    let morning = Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 5).unwrap();
    let evening = Utc.with_ymd_and_hms(2026, 10, 16, 17, 30, 0).unwrap();

    let first = log.record_clock_in(&morning);
    log.record_clock_out(&evening);

    assert_eq!(first.kind, AttendanceKind::ClockIn);
    assert_eq!(first.timestamp, "08:00:05");

    let events = log.list_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], first);
    assert_eq!(events[1].kind, AttendanceKind::ClockOut);
    assert_eq!(events[1].timestamp, "17:30:00");
    assert_eq!(events[1].to_string(), "Clock Out • 17:30:00");
}

#[test]
fn test_repeated_clock_ins_are_all_kept() {
    let mut log = AttendanceLog::new();
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap();

    for _ in 0..5 {
        log.record_clock_in(&now);
    }

    assert_eq!(log.len(), 5);
    assert!(log.list_events().iter().all(|e| e.kind.is_in()));
}

#[test]
fn test_clock_out_without_clock_in_is_allowed() {
    let mut log = AttendanceLog::new();
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 7, 15, 0).unwrap();

    log.record_clock_out(&now);
    log.record_clock_in(&now);

    let kinds: Vec<_> = log.list_events().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![AttendanceKind::ClockOut, AttendanceKind::ClockIn]);
}

#[test]
fn test_reading_does_not_change_the_log() {
    let mut log = AttendanceLog::new();
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 10, 0, 0).unwrap();
    log.record_clock_in(&now);

    let first = log.list_events().to_vec();
    let second = log.list_events().to_vec();
    assert_eq!(first, second);

    let snapshot = log.snapshot();
    log.record_clock_out(&now);
    assert_eq!(snapshot.len(), 1);
    assert_eq!(log.len(), 2);
}

#[test]
fn test_custom_time_format_uses_event_offset() {
    let mut log = AttendanceLog::with_time_format("%H.%M").unwrap();
    let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();
    let now = jakarta.with_ymd_and_hms(2026, 10, 16, 6, 45, 30).unwrap();

    let ev = log.record_clock_in(&now);
    assert_eq!(ev.timestamp, "06.45");
}

#[test]
fn test_invalid_time_format_rejected() {
    assert!(AttendanceLog::with_time_format("%Q").is_err());
}
