use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};

/// How the day component of a post date is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    /// Weekday index plus one (Sunday = 1). This is what the reader has
    /// always printed, so it stays the default.
    #[default]
    Weekday,
    /// Actual day of the month.
    DayOfMonth,
}

/// Convert a Unix timestamp to `month/day/year` in UTC.
///
/// Out-of-range timestamps render as an empty string.
pub fn format_post_date(timestamp: i64, style: DateStyle) -> String {
    let Some(dt) = DateTime::from_timestamp(timestamp, 0) else {
        return String::new();
    };

    let day = match style {
        DateStyle::Weekday => dt.weekday().num_days_from_sunday() + 1,
        DateStyle::DayOfMonth => dt.day(),
    };

    format!("{}/{}/{}", dt.month(), day, dt.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_uses_weekday_index() {
        // 1970-01-01 was a Thursday
        assert_eq!(format_post_date(0, DateStyle::Weekday), "1/5/1970");
    }

    #[test]
    fn test_epoch_day_of_month() {
        assert_eq!(format_post_date(0, DateStyle::DayOfMonth), "1/1/1970");
    }

    #[test]
    fn test_sunday_is_one() {
        // 2023-01-15 12:00:00 UTC, a Sunday
        assert_eq!(format_post_date(1_673_784_000, DateStyle::Weekday), "1/1/2023");
        assert_eq!(
            format_post_date(1_673_784_000, DateStyle::DayOfMonth),
            "1/15/2023"
        );
    }

    #[test]
    fn test_saturday_is_seven() {
        // 2011-12-31 00:00:00 UTC, a Saturday
        assert_eq!(format_post_date(1_325_289_600, DateStyle::Weekday), "12/7/2011");
    }

    #[test]
    fn test_out_of_range_timestamp() {
        assert_eq!(format_post_date(i64::MAX, DateStyle::Weekday), "");
    }
}
