/// Utility helpers for porchlight
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Render a timestamp as the site-wide clock string, e.g.
/// `2026.08.07 · Thu · 09:05`.
pub fn format_clock(now: &NaiveDateTime) -> String {
    let weekday = match now.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    };

    format!(
        "{:04}.{:02}.{:02} · {} · {:02}:{:02}",
        now.year(),
        now.month(),
        now.day(),
        weekday,
        now.hour(),
        now.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn clock_text_is_zero_padded() {
        let now = NaiveDate::from_ymd_opt(2026, 8, 7)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(format_clock(&now), "2026.08.07 · Fri · 09:05");
    }

    #[test]
    fn clock_text_handles_late_hours() {
        let now = NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(format_clock(&now), "2025.12.31 · Wed · 23:59");
    }
}
