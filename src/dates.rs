//! Human-facing date renderings. Stored timestamps stay UTC; everything a
//! person reads is shown in the local zone.

use chrono::{DateTime, Local, Utc};

/// Spreadsheet-style short date, e.g. `1/5/26`.
pub fn short_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%-m/%-d/%y").to_string()
}

/// Report heading date, e.g. `January 5, 2026`.
pub fn long_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%B %-d, %Y").to_string()
}

/// Date with time of day, e.g. `January 5, 2026 at 9:30 AM`.
pub fn date_time(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local)
        .format("%B %-d, %Y at %-I:%M %p")
        .to_string()
}

/// File-name stamp, e.g. `2026-01-05`.
pub fn file_stamp(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // Midday UTC stays on the same calendar day in every zone from -11 to +11.
    fn midday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap()
    }

    #[test]
    fn short_date_has_no_padding() {
        assert_eq!(short_date(midday()), "1/5/26");
    }

    #[test]
    fn long_date_spells_month() {
        assert_eq!(long_date(midday()), "January 5, 2026");
    }

    #[test]
    fn date_time_includes_clock() {
        let text = date_time(midday());
        assert!(text.starts_with("January 5, 2026 at "));
        assert!(text.ends_with("AM") || text.ends_with("PM"));
    }

    #[test]
    fn file_stamp_is_sortable() {
        assert_eq!(file_stamp(midday()), "2026-01-05");
    }
}
