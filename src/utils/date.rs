//! Date helpers for the dashboard header.

use chrono::{Datelike, NaiveDate, Weekday};

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn weekday_id(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

pub fn month_id(month: u32) -> &'static str {
    MONTHS_ID[(month as usize).saturating_sub(1) % 12]
}

/// Long Indonesian date, e.g. "Jumat, 16 Oktober 2026".
pub fn format_long_id(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        weekday_id(date.weekday()),
        date.day(),
        month_id(date.month()),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_in_indonesian() {
        let d = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(format_long_id(d), "Jumat, 16 Oktober 2026");
        let d = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        assert_eq!(format_long_id(d), "Minggu, 2 Maret 2025");
    }

    #[test]
    fn month_names_bounds() {
        assert_eq!(month_id(1), "Januari");
        assert_eq!(month_id(12), "Desember");
    }
}
