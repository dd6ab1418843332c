//! Calendar date helpers for the publish gate and sitemap `lastmod`.

use chrono::{Local, NaiveDate};

/// Date format of `publish_date` cells and sitemap `lastmod` values
const YMD: &str = "%Y-%m-%d";

/// The local calendar date at the time of the call.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` string, rejecting trailing input and impossible dates.
pub fn parse_ymd(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, YMD).ok()
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_ymd(date: NaiveDate) -> String {
    date.format(YMD).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ymd_valid() {
        assert_eq!(parse_ymd("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_parse_ymd_invalid_day() {
        assert_eq!(parse_ymd("2023-02-29"), None);
        assert_eq!(parse_ymd("2024-13-01"), None);
    }

    #[test]
    fn test_parse_ymd_free_text() {
        assert_eq!(parse_ymd("next week"), None);
        assert_eq!(parse_ymd(""), None);
    }

    #[test]
    fn test_parse_ymd_trailing_input() {
        assert_eq!(parse_ymd("2024-01-01T00:00:00Z"), None);
    }

    #[test]
    fn test_format_ymd_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_ymd(date), "2025-03-07");
    }
}
