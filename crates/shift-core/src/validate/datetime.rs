//! The accepted textual date format.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Human-readable form of the accepted format, used in error messages.
pub const DATETIME_FORMAT_HINT: &str = "yyyy-mm-dd hh:mm AM/PM";

const CHRONO_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// Parse `yyyy-mm-dd hh:mm AM/PM` (meridiem case-insensitive) as a UTC instant.
///
/// Returns `None` if the text does not have that exact shape, or if it has
/// the shape but names no calendar instant (month 13, hour 00).
#[must_use]
pub fn parse_datetime_text(text: &str) -> Option<DateTime<Utc>> {
    if !has_expected_shape(text.as_bytes()) {
        return None;
    }
    let normalized = text.to_ascii_uppercase();
    NaiveDateTime::parse_from_str(&normalized, CHRONO_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn has_expected_shape(bytes: &[u8]) -> bool {
    const DIGITS: [usize; 12] = [0, 1, 2, 3, 5, 6, 8, 9, 11, 12, 14, 15];
    const SEPARATORS: [(usize, u8); 5] = [(4, b'-'), (7, b'-'), (10, b' '), (13, b':'), (16, b' ')];

    if bytes.len() != 19 {
        return false;
    }
    if !DIGITS.iter().all(|&i| bytes[i].is_ascii_digit()) {
        return false;
    }
    if !SEPARATORS.iter().all(|&(i, sep)| bytes[i] == sep) {
        return false;
    }
    matches!(bytes[17].to_ascii_uppercase(), b'A' | b'P') && bytes[18].eq_ignore_ascii_case(&b'M')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[test]
    fn parses_morning_and_evening() {
        assert_eq!(
            parse_datetime_text("2099-05-01 11:00 AM"),
            Some(Utc.with_ymd_and_hms(2099, 5, 1, 11, 0, 0).unwrap())
        );
        assert_eq!(
            parse_datetime_text("2099-05-01 11:00 PM"),
            Some(Utc.with_ymd_and_hms(2099, 5, 1, 23, 0, 0).unwrap())
        );
    }

    #[test]
    fn twelve_am_is_midnight() {
        assert_eq!(
            parse_datetime_text("2099-05-01 12:30 am"),
            Some(Utc.with_ymd_and_hms(2099, 5, 1, 0, 30, 0).unwrap())
        );
    }

    #[rstest]
    #[case::iso("2099-05-01T11:00:00Z")]
    #[case::twenty_four_hour("2099-05-01 23:00")]
    #[case::single_digit_hour("2099-05-01 9:00 AM")]
    #[case::no_space_before_meridiem("2099-05-01 09:00AM")]
    #[case::month_thirteen("2099-13-01 09:00 AM")]
    #[case::hour_zero("2099-05-01 00:15 AM")]
    #[case::hour_thirteen("2099-05-01 13:00 PM")]
    #[case::february_thirtieth("2099-02-30 09:00 AM")]
    #[case::bad_meridiem("2099-05-01 09:00 XM")]
    #[case::trailing_space("2099-05-01 09:00 AM ")]
    #[case::empty("")]
    fn rejects(#[case] text: &str) {
        assert_eq!(parse_datetime_text(text), None);
    }
}
