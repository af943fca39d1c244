use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::dashboard::DashboardData;
use crate::ui::messages::colors_enabled;
use crate::utils::time::parse_clock_time;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { clock } = cmd {
        let data = cfg.provider().load()?;

        match clock {
            Some(t) => run(cfg, data, FixedClock::today_at(parse_clock_time(t)?)?),
            None => run(cfg, data, SystemClock),
        }?;
    }

    Ok(())
}

fn run<C: Clock>(cfg: &Config, data: DashboardData, clock: C) -> AppResult<()> {
    let mut session = Session::new(cfg, data, clock)?.with_color(colors_enabled());
    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout.lock())
}
