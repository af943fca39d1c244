//! Text rendering of the dashboard screen.
//!
//! Every function returns a `String`; printing is left to the caller so the
//! session and the tests can capture frames.

use crate::core::logic::DashboardSummary;
use crate::core::screen::{Page, ScreenState, TripWidget};
use crate::models::attendance::AttendanceEvent;
use crate::models::dashboard::{DashboardData, TripBreakdown};
use crate::models::pod::PodSummary;
use crate::models::rating::RatingResult;
use crate::utils::date::format_long_id;
use crate::utils::formatting::{display_width, pad_left, pad_right, progress_bar, stars};
use ansi_term::Colour;
use chrono::NaiveDate;

const CARD_INNER: usize = 44;
const BAR_WIDTH: usize = 20;

/// Everything needed to draw one frame.
pub struct Frame<'a> {
    pub data: &'a DashboardData,
    pub summary: &'a DashboardSummary,
    pub screen: &'a ScreenState,
    pub events: &'a [AttendanceEvent],
    pub company_name: &'a str,
    pub map_url: &'a str,
    pub today: NaiveDate,
    pub color: bool,
}

fn paint(color: bool, colour: Colour, s: &str) -> String {
    if color {
        colour.paint(s).to_string()
    } else {
        s.to_string()
    }
}

/// Boxed card; lines are padded before styling so borders stay aligned.
fn card(title: &str, lines: &[(String, Option<Colour>)], color: bool) -> String {
    let mut out = String::new();
    let title = format!(" {} ", title);
    let rule = CARD_INNER.saturating_sub(display_width(&title)) + 2;
    out.push_str(&format!("┌{}{}┐\n", title, "─".repeat(rule)));

    for (text, colour) in lines {
        let padded = pad_right(text, CARD_INNER);
        let styled = match colour {
            Some(c) => paint(color, *c, &padded),
            None => padded,
        };
        out.push_str(&format!("│ {} │\n", styled));
    }

    out.push_str(&format!("└{}┘\n", "─".repeat(CARD_INNER + 2)));
    out
}

fn plain(s: impl Into<String>) -> (String, Option<Colour>) {
    (s.into(), None)
}

pub fn render_header(data: &DashboardData, company_name: &str, today: NaiveDate, color: bool) -> String {
    card(
        "TMS",
        &[
            (format!("Halo, {}", data.user_name), Some(Colour::Cyan)),
            plain(format!("{} • v{}", company_name, data.app_version)),
            plain(format_long_id(today)),
        ],
        color,
    )
}

pub fn render_rating(data: &DashboardData, rating: &RatingResult, color: bool) -> String {
    let star_row = stars(rating.star_rating, RatingResult::MAX_STARS);
    let counts = format!("Ontime / Late: {} / {}", data.on_time_trips, data.late_trips);
    let gap = CARD_INNER.saturating_sub(display_width(&star_row) + display_width(&counts));
    let on_time = format!("{}% ontime", rating.on_time_percent);
    let late = format!("{}% late", rating.late_percent);

    card(
        "Rating Ketepatan Waktu",
        &[
            (format!("{}{}{}", star_row, " ".repeat(gap), counts), Some(Colour::Yellow)),
            (progress_bar(rating.on_time_percent, BAR_WIDTH), Some(Colour::Green)),
            plain(format!(
                "{}{}",
                on_time,
                pad_left(&late, CARD_INNER.saturating_sub(display_width(&on_time)))
            )),
        ],
        color,
    )
}

pub fn render_map(map_url: &str, color: bool) -> String {
    let lines: Vec<_> = textwrap::wrap(map_url, CARD_INNER)
        .into_iter()
        .map(|l| plain(l.into_owned()))
        .collect();
    card("Lokasi Kendaraan Saat Ini", &lines, color)
}

fn widget_count(data: &DashboardData, widget: TripWidget) -> (u64, TripBreakdown) {
    match widget {
        TripWidget::Approved => (data.approved_trips, data.breakdown.approved),
        TripWidget::Finished => (data.finished_trips, data.breakdown.finished),
        TripWidget::Pending => (data.pending_trips, data.breakdown.pending),
    }
}

pub fn render_trip_widgets(data: &DashboardData, screen: &ScreenState, color: bool) -> String {
    let mut lines = Vec::new();

    for widget in TripWidget::ALL {
        let (count, breakdown) = widget_count(data, widget);
        let expanded = screen.is_expanded(widget);
        let marker = if expanded { "▾" } else { "▸" };
        lines.push((
            format!("{} {}: {}", marker, widget.label(), count),
            Some(Colour::Blue),
        ));

        if expanded {
            lines.push(plain(format!("    - Hari Ini: {}", breakdown.today)));
            lines.push(plain(format!("    - Minggu Ini: {}", breakdown.week)));
            lines.push(plain(format!("    - Bulan Ini: {}", breakdown.month)));
        }
    }

    card("Trips", &lines, color)
}

pub fn render_attendance(events: &[AttendanceEvent], color: bool) -> String {
    let mut lines = vec![plain("[Clock In]   [Clock Out]")];

    if events.is_empty() {
        lines.push(plain("Belum ada absensi."));
    } else {
        lines.extend(events.iter().map(|ev| {
            let colour = if ev.kind.is_in() { Colour::Green } else { Colour::Red };
            (format!("🕒 {}", ev), Some(colour))
        }));
    }

    card("Absensi", &lines, color)
}

pub fn render_pod(pod: &PodSummary, color: bool) -> String {
    card(
        "POD",
        &[
            plain(format!("POD TOTAL     {}", pod.total)),
            plain(format!("POD DITUNGGU  {}", pod.awaited)),
            plain(format!("POD DITERIMA  {}", pod.received)),
        ],
        color,
    )
}

/// Complain, History and Pendapatan are inert tabs. The current page stays
/// highlighted while the POD submenu is open.
pub fn render_bottom_nav(data: &DashboardData, screen: &ScreenState) -> String {
    let mark = |active: bool, label: String| {
        if active { format!("[{}]", label) } else { format!(" {} ", label) }
    };

    let on_page = |page: Page| screen.page == page;

    format!(
        "{}  {}  {}  {}  {}  {}\n",
        mark(false, format!("Complain ({})", data.complaints)),
        mark(screen.pod_menu_open, "POD".to_string()),
        mark(on_page(Page::Home), Page::Home.label().to_string()),
        mark(false, "History".to_string()),
        mark(on_page(Page::Attendance), Page::Attendance.label().to_string()),
        mark(false, "Pendapatan".to_string()),
    )
}

/// Full screen for the current state.
pub fn render_frame(frame: &Frame<'_>) -> String {
    let mut out = render_header(frame.data, frame.company_name, frame.today, frame.color);

    match frame.screen.page {
        Page::Home => {
            out.push_str(&render_rating(frame.data, &frame.summary.rating, frame.color));
            out.push_str(&render_map(frame.map_url, frame.color));
            out.push_str(&render_trip_widgets(frame.data, frame.screen, frame.color));
        }
        Page::Attendance => {
            out.push_str(&render_attendance(frame.events, frame.color));
        }
    }

    if frame.screen.pod_menu_open {
        out.push_str(&render_pod(&frame.summary.pod, frame.color));
    }

    out.push_str(&render_bottom_nav(frame.data, frame.screen));
    out
}
