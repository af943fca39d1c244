//! Formatting utilities used by the terminal dashboard.

use unicode_width::UnicodeWidthStr;

pub const STAR_FILLED: char = '★';
pub const STAR_EMPTY: char = '☆';

/// Display width, not byte length (stars, bullets and emoji are multi-byte).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(pad), s)
}

/// Five glyphs, the first `filled` solid.
pub fn stars(filled: u8, max: u8) -> String {
    (0..max)
        .map(|i| if i < filled { STAR_FILLED } else { STAR_EMPTY })
        .collect()
}

/// Horizontal bar `width` cells wide, filled proportionally to `percent`.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
