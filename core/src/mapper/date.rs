//! Timestamp reformatting for notice dates.

use chrono::NaiveDateTime;

/// Pattern of `createdAt` values sent by the backend.
pub const SERVER_PATTERN: &str = "%Y-%m-%dT%H:%M:%S";

/// Pattern shown to users.
pub const DISPLAY_PATTERN: &str = "%Y년 %m월 %d일";

/// Reformat a server timestamp as a calendar date.
///
/// The timestamp is taken as wall-clock time with no zone conversion.
/// Anything that does not match `SERVER_PATTERN` exactly yields `""`.
pub fn format_notice_date(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, SERVER_PATTERN) {
        Ok(timestamp) => timestamp.format(DISPLAY_PATTERN).to_string(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    #[case("2024-01-01T00:00:00", "2024년 01월 01일")]
    #[case("2023-12-31T23:59:59", "2023년 12월 31일")]
    #[case("2024-02-29T12:30:00", "2024년 02월 29일")]
    fn formats_valid_timestamps(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_notice_date(raw), expected);
    }

    #[rstest]
    #[case("")]
    #[case("2024-01-01")]
    #[case("2024-13-01T00:00:00")]
    #[case("2024-01-01 00:00:00")]
    #[case("2024-01-01T00:00:00.123")]
    #[case("2024-01-01T00:00:00Z")]
    fn malformed_timestamps_yield_empty(#[case] raw: &str) {
        assert_eq!(format_notice_date(raw), "");
    }

    #[test]
    fn display_string_is_stable_under_reparse() {
        let shown = format_notice_date("2025-03-09T08:15:00");
        let reparsed = NaiveDate::parse_from_str(&shown, DISPLAY_PATTERN).unwrap();
        assert_eq!(reparsed.format(DISPLAY_PATTERN).to_string(), shown);
        assert_eq!(format_notice_date("2025-03-09T08:15:00"), shown);
    }
}
