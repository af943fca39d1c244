//! Unified application error type.
//! The rating engine and the attendance log never fail; everything that can
//! (config files, data files, exports, the interactive session) returns
//! AppError so the CLI can report it in one place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Unknown command: {0}")]
    InvalidCommand(String),

    #[error("Unknown page: {0}")]
    InvalidPage(String),

    #[error("Unknown trip widget: {0}")]
    InvalidWidget(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),
}

pub type AppResult<T> = Result<T, AppError>;
