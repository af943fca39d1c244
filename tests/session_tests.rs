mod common;
use common::{fixed_clock, run_session};
use tmsdash::AttendanceKind;
use tmsdash::core::screen::{Page, TripWidget};
use tmsdash::core::session::SessionCommand;
use tmsdash::export::ExportFormat;

#[test]
fn test_parse_session_commands() {
    assert_eq!("IN".parse::<SessionCommand>().unwrap(), SessionCommand::ClockIn);
    assert_eq!(
        "expand pending".parse::<SessionCommand>().unwrap(),
        SessionCommand::Expand(TripWidget::Pending)
    );
    assert_eq!(
        "absensi".parse::<SessionCommand>().unwrap(),
        SessionCommand::Navigate(Page::Attendance)
    );
    assert_eq!(
        "export json".parse::<SessionCommand>().unwrap(),
        SessionCommand::Export(ExportFormat::Json)
    );
    assert!("expand".parse::<SessionCommand>().is_err());
    assert!("export xml".parse::<SessionCommand>().is_err());
    assert!("dance".parse::<SessionCommand>().is_err());
}

#[test]
fn test_session_records_clock_in_and_out() {
    let (session, out) = run_session(fixed_clock(8, 30, 0), "in\nout\n");

    let events = session.log().list_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, AttendanceKind::ClockIn);
    assert_eq!(events[1].kind, AttendanceKind::ClockOut);
    assert_eq!(events[0].timestamp, "08:30:00");
    assert!(out.contains("Clock In • 08:30:00"));
    assert!(out.contains("Clock Out • 08:30:00"));
}

#[test]
fn test_unknown_command_does_not_end_session() {
    let (session, out) = run_session(fixed_clock(8, 30, 0), "dance\nin\n");

    assert!(out.contains("Unknown command: dance"));
    assert_eq!(session.log().len(), 1);
}

#[test]
fn test_quit_stops_reading() {
    let (session, _) = run_session(fixed_clock(8, 30, 0), "in\nquit\nin\nin\n");
    assert_eq!(session.log().len(), 1);
}

#[test]
fn test_navigation_drives_the_frame() {
    let (session, out) = run_session(
        fixed_clock(8, 30, 0),
        "pod\nexpand approved\nabsensi\n",
    );

    let screen = session.screen();
    assert_eq!(screen.page, Page::Attendance);
    assert!(!screen.pod_menu_open);
    assert_eq!(screen.expanded, Some(TripWidget::Approved));
    assert!(out.contains("POD DITUNGGU  1"));
    assert!(out.contains("- Hari Ini: 5"));
    assert!(out.contains("Belum ada absensi."));
}

#[test]
fn test_export_prints_log_as_csv() {
    let (_, out) = run_session(fixed_clock(8, 30, 0), "in\nexport csv\n");
    assert!(out.contains("kind,timestamp\nClock In,08:30:00\n"));
}

#[test]
fn test_comments_and_blank_lines_are_skipped() {
    let (session, out) = run_session(fixed_clock(8, 30, 0), "# morning\n\n   \nin\n");

    assert_eq!(session.log().len(), 1);
    assert!(!out.contains("Unknown command"));
}
