#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveTime;
use tmsdash::config::Config;
use tmsdash::core::clock::FixedClock;
use tmsdash::core::session::Session;
use tmsdash::models::dashboard::DashboardData;

/// Binary under test, with colors off so output can be matched literally.
pub fn tms() -> Command {
    let mut cmd = cargo_bin_cmd!("tmsdash");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tmsdash.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Path to a config file that does not exist, so defaults apply
pub fn fresh_config(name: &str) -> String {
    temp_path(name, "conf")
}

/// Write a data file and return its path
pub fn data_file(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write data file");
    p
}

/// Clock pinned to today at the given local time
pub fn fixed_clock(h: u32, m: u32, s: u32) -> FixedClock {
    let time = NaiveTime::from_hms_opt(h, m, s).expect("valid time");
    FixedClock::today_at(time).expect("time exists today")
}

/// Run a scripted session with default config and sample data
pub fn run_session(clock: FixedClock, script: &str) -> (Session<FixedClock>, String) {
    let mut session = Session::new(&Config::default(), DashboardData::default(), clock)
        .expect("default session");
    let mut out = Vec::new();
    session
        .run(script.as_bytes(), &mut out)
        .expect("session run");
    (session, String::from_utf8(out).expect("utf8 output"))
}
