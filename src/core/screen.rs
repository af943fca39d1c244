//! Navigation and expand/collapse state of the dashboard screen.
//! A plain value owned by whoever renders the screen.

use crate::errors::AppError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Attendance,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Attendance => "Absensi",
        }
    }
}

impl FromStr for Page {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Page::Home),
            "absensi" | "attendance" => Ok(Page::Attendance),
            other => Err(AppError::InvalidPage(other.to_string())),
        }
    }
}

/// Expandable trip counters in the floating widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripWidget {
    Approved,
    Finished,
    Pending,
}

impl TripWidget {
    pub const ALL: [TripWidget; 3] = [TripWidget::Approved, TripWidget::Finished, TripWidget::Pending];

    pub fn label(&self) -> &'static str {
        match self {
            TripWidget::Approved => "Trip Disetujui",
            TripWidget::Finished => "Trip Selesai",
            TripWidget::Pending => "Trip Tertunda",
        }
    }
}

impl FromStr for TripWidget {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "approved" => Ok(TripWidget::Approved),
            "finished" => Ok(TripWidget::Finished),
            "pending" => Ok(TripWidget::Pending),
            other => Err(AppError::InvalidWidget(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenState {
    pub page: Page,
    pub pod_menu_open: bool,
    pub expanded: Option<TripWidget>,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tab; the POD submenu always closes.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
        self.pod_menu_open = false;
    }

    pub fn toggle_pod_menu(&mut self) {
        self.pod_menu_open = !self.pod_menu_open;
    }

    /// At most one widget is expanded; toggling the open one collapses it.
    pub fn toggle_widget(&mut self, widget: TripWidget) {
        self.expanded = if self.expanded == Some(widget) {
            None
        } else {
            Some(widget)
        };
    }

    pub fn is_expanded(&self, widget: TripWidget) -> bool {
        self.expanded == Some(widget)
    }
}
