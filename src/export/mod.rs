//! Dump the session attendance log as CSV or JSON.

use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceEvent;
use std::io::Write;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(AppError::InvalidExportFormat(other.to_string())),
        }
    }
}

pub fn write_events<W: Write>(
    format: ExportFormat,
    events: &[AttendanceEvent],
    out: W,
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => write_csv(events, out),
        ExportFormat::Json => write_json(events, out),
    }
}

/// CSV with a `kind,timestamp` header, written even when the log is empty.
fn write_csv<W: Write>(events: &[AttendanceEvent], out: W) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);

    wtr.write_record(["kind", "timestamp"])?;
    for ev in events {
        wtr.serialize(ev)?;
    }

    wtr.flush()?;
    Ok(())
}

fn write_json<W: Write>(events: &[AttendanceEvent], mut out: W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, events)?;
    writeln!(out)?;
    Ok(())
}
