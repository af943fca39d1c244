//! User-facing status lines with an icon prefix.
//! `NO_COLOR` in the environment turns the ANSI styling off.

use ansi_term::Colour;
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn line<T: fmt::Display>(colour: Colour, icon: &str, msg: T) -> String {
    if colors_enabled() {
        format!("{} {}", colour.bold().paint(icon), msg)
    } else {
        format!("{} {}", icon, msg)
    }
}

pub fn info_line<T: fmt::Display>(msg: T) -> String {
    line(Colour::Blue, ICON_INFO, msg)
}

pub fn success_line<T: fmt::Display>(msg: T) -> String {
    line(Colour::Green, ICON_OK, msg)
}

pub fn warning_line<T: fmt::Display>(msg: T) -> String {
    line(Colour::Yellow, ICON_WARN, msg)
}

pub fn error_line<T: fmt::Display>(msg: T) -> String {
    line(Colour::Red, ICON_ERR, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", info_line(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", success_line(msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", warning_line(msg));
}
