//! tmsdash library root.
//! Rating engine, attendance log and the terminal dashboard built on them.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::attendance::AttendanceLog;
pub use crate::core::rating::{compute_rating, compute_rating_f64};
pub use crate::models::attendance::{AttendanceEvent, AttendanceKind};
pub use crate::models::counters::TripPerformanceCounters;
pub use crate::models::rating::RatingResult;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Rating { .. } => cli::commands::rating::handle(&cli.command),
        Commands::Dashboard { .. } => cli::commands::dashboard::handle(&cli.command, cfg),
        Commands::Session { .. } => cli::commands::session::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` must work even when the existing file is broken
    let mut cfg = match (&cli.command, &cli.config) {
        (Commands::Init { .. }, _) => Config::default(),
        (_, Some(path)) => Config::load_from(&utils::path::expand_tilde(path))?,
        (_, None) => Config::load()?,
    };

    if let Some(data) = &cli.data {
        cfg.data_file = Some(data.clone());
    }

    dispatch(&cli, &cfg)
}

