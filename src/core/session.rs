//! Interactive dashboard session.
//!
//! One command per input line drives the screen state and the attendance
//! log. The log lives exactly as long as the `Session` value.

use crate::config::Config;
use crate::core::attendance::AttendanceLog;
use crate::core::clock::Clock;
use crate::core::logic::Core;
use crate::core::screen::{Page, ScreenState, TripWidget};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, write_events};
use crate::models::dashboard::DashboardData;
use crate::ui::messages::{error_line, info_line, success_line};
use crate::ui::render::{Frame, render_frame};
use crate::utils::table::{Column, Table};
use std::io::{BufRead, Write};
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  in                     clock in
  out                    clock out
  list                   list attendance events
  home | absensi         switch page
  pod                    open/close the POD menu
  expand <widget>        approved, finished or pending
  show                   redraw the screen
  export <csv|json>      print the attendance log
  help                   this text
  quit                   end the session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    ClockIn,
    ClockOut,
    List,
    Navigate(Page),
    TogglePod,
    Expand(TripWidget),
    Show,
    Export(ExportFormat),
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let head = parts.next().unwrap_or("").to_lowercase();
        let arg = parts.next();

        let cmd = match head.as_str() {
            "in" | "clock-in" => SessionCommand::ClockIn,
            "out" | "clock-out" => SessionCommand::ClockOut,
            "list" | "ls" => SessionCommand::List,
            "home" | "absensi" | "attendance" => SessionCommand::Navigate(head.parse()?),
            "pod" => SessionCommand::TogglePod,
            "expand" => {
                let widget = arg.ok_or_else(|| {
                    AppError::InvalidCommand("expand needs approved, finished or pending".into())
                })?;
                SessionCommand::Expand(widget.parse()?)
            }
            "show" => SessionCommand::Show,
            "export" => {
                let format = arg.ok_or_else(|| {
                    AppError::InvalidCommand("export needs csv or json".into())
                })?;
                SessionCommand::Export(format.parse()?)
            }
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            _ => return Err(AppError::InvalidCommand(s.trim().to_string())),
        };

        Ok(cmd)
    }
}

pub struct Session<C: Clock> {
    core: Core,
    data: DashboardData,
    screen: ScreenState,
    log: AttendanceLog,
    clock: C,
    company_name: String,
    map_url: String,
    color: bool,
}

impl<C: Clock> Session<C> {
    pub fn new(cfg: &Config, data: DashboardData, clock: C) -> AppResult<Self> {
        Ok(Self {
            core: Core::new(),
            data,
            screen: ScreenState::new(),
            log: AttendanceLog::with_time_format(&cfg.time_format)?,
            clock,
            company_name: cfg.company_name.clone(),
            map_url: cfg.map_url.clone(),
            color: false,
        })
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn log(&self) -> &AttendanceLog {
        &self.log
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    /// Current screen as text.
    pub fn frame(&mut self) -> String {
        let summary = self.core.build_summary(&self.data);
        let today = self.clock.now().date_naive();
        render_frame(&Frame {
            data: &self.data,
            summary: &summary,
            screen: &self.screen,
            events: self.log.list_events(),
            company_name: &self.company_name,
            map_url: &self.map_url,
            today,
            color: self.color,
        })
    }

    fn list_table(&self) -> String {
        let mut table = Table::new(vec![
            Column::new("#", 4),
            Column::new("Kind", 10),
            Column::new("Time", 12),
        ]);
        for (i, ev) in self.log.list_events().iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                ev.kind.label().to_string(),
                ev.timestamp.clone(),
            ]);
        }
        table.render()
    }

    /// Execute one command. Returns `false` when the session should end.
    pub fn apply<W: Write>(&mut self, cmd: SessionCommand, out: &mut W) -> AppResult<bool> {
        match cmd {
            SessionCommand::ClockIn => {
                let ev = self.log.record_clock_in(&self.clock.now());
                writeln!(out, "{}", success_line(ev))?;
            }
            SessionCommand::ClockOut => {
                let ev = self.log.record_clock_out(&self.clock.now());
                writeln!(out, "{}", success_line(ev))?;
            }
            SessionCommand::List => {
                if self.log.is_empty() {
                    writeln!(out, "{}", info_line("No attendance recorded yet."))?;
                } else {
                    write!(out, "{}", self.list_table())?;
                }
            }
            SessionCommand::Navigate(page) => {
                self.screen.navigate(page);
                write!(out, "{}", self.frame())?;
            }
            SessionCommand::TogglePod => {
                self.screen.toggle_pod_menu();
                write!(out, "{}", self.frame())?;
            }
            SessionCommand::Expand(widget) => {
                self.screen.toggle_widget(widget);
                write!(out, "{}", self.frame())?;
            }
            SessionCommand::Show => {
                write!(out, "{}", self.frame())?;
            }
            SessionCommand::Export(format) => {
                write_events(format, self.log.list_events(), &mut *out)?;
            }
            SessionCommand::Help => {
                writeln!(out, "{}", HELP)?;
            }
            SessionCommand::Quit => return Ok(false),
        }

        Ok(true)
    }

    /// Read commands until `quit` or end of input.
    /// Bad commands are reported and the session carries on.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> AppResult<()> {
        write!(out, "{}", self.frame())?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let keep_going = match trimmed.parse::<SessionCommand>() {
                Ok(cmd) => self.apply(cmd, out)?,
                Err(e) => {
                    writeln!(out, "{}", error_line(e))?;
                    true
                }
            };

            if !keep_going {
                break;
            }
        }

        out.flush()?;
        Ok(())
    }
}
