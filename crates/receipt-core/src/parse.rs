//! # Field Parsers
//!
//! Strict text-to-value conversions for the three typed receipt fields.
//!
//! ```text
//! "2022-01-01" ──► parse_date   ──► NaiveDate
//! "13:01"      ──► parse_time   ──► NaiveTime
//! "35.35"      ──► parse_amount ──► Money
//! ```
//!
//! chrono alone is lenient about padding (`2022-1-1` parses under `%m`),
//! so each format is pinned with a shape check before chrono validates the
//! calendar/clock value itself.

use chrono::{NaiveDate, NaiveTime};

use crate::error::ParseError;
use crate::money::Money;

const DATE_SHAPE: &str = "9999-99-99";
const TIME_SHAPE: &str = "99:99";

/// True when `s` has the layout of `shape`, where each `9` stands for one
/// ASCII digit and every other byte must match literally.
fn has_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape.bytes()).all(|(c, p)| match p {
            b'9' => c.is_ascii_digit(),
            _ => c == p,
        })
}

/// Parses exactly `YYYY-MM-DD`.
///
/// ## Example
/// ```rust
/// use receipt_core::parse::parse_date;
///
/// assert!(parse_date("2022-01-01").is_ok());
/// assert!(parse_date("2022-02-30").is_err());
/// assert!(parse_date("01/01/2022").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    if !has_shape(s, DATE_SHAPE) {
        return Err(ParseError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ParseError::InvalidDate(s.to_string()))
}

/// Parses exactly 24-hour `HH:MM`.
///
/// ## Example
/// ```rust
/// use receipt_core::parse::parse_time;
///
/// assert!(parse_time("14:33").is_ok());
/// assert!(parse_time("2:33 PM").is_err());
/// assert!(parse_time("14:33:00").is_err());
/// ```
pub fn parse_time(s: &str) -> Result<NaiveTime, ParseError> {
    if !has_shape(s, TIME_SHAPE) {
        return Err(ParseError::InvalidTime(s.to_string()));
    }
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| ParseError::InvalidTime(s.to_string()))
}

/// Parses a monetary amount, see [`Money::parse`].
pub fn parse_amount(s: &str) -> Result<Money, ParseError> {
    Money::parse(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use test_case::test_case;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2022-03-20").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2022, 3, 20));

        // Leap day only in leap years
        assert!(parse_date("2024-02-29").is_ok());
        assert!(parse_date("2023-02-29").is_err());
    }

    #[test_case("2022-1-01"; "single digit month")]
    #[test_case("2022-01-1"; "single digit day")]
    #[test_case("22-01-01"; "two digit year")]
    #[test_case("+2022-01-01"; "signed year")]
    #[test_case("2022/01/01"; "slashes")]
    #[test_case("2022-O1-01"; "letter in month")]
    #[test_case("２０２２-01-01"; "fullwidth digits")]
    #[test_case("2022-13-01"; "month out of range")]
    #[test_case("2022-04-31"; "day out of range")]
    #[test_case("2022-01-01T00:00"; "datetime")]
    #[test_case(""; "empty")]
    fn test_parse_date_rejects(s: &str) {
        assert_eq!(parse_date(s), Err(ParseError::InvalidDate(s.to_string())));
    }

    #[test]
    fn test_parse_time() {
        let time = parse_time("14:33").unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (14, 33, 0));
        assert!(parse_time("00:00").is_ok());
        assert!(parse_time("23:59").is_ok());
    }

    #[test_case("24:00"; "hour out of range")]
    #[test_case("12:60"; "minute out of range")]
    #[test_case("9:30"; "single digit hour")]
    #[test_case("13:01:00"; "seconds")]
    #[test_case("01:01 PM"; "am pm suffix")]
    #[test_case("1301"; "no colon")]
    #[test_case("1a:30"; "letter in hour")]
    #[test_case(""; "empty")]
    fn test_parse_time_rejects(s: &str) {
        assert_eq!(parse_time(s), Err(ParseError::InvalidTime(s.to_string())));
    }

    #[test]
    fn test_has_shape() {
        assert!(has_shape("2022-01-01", DATE_SHAPE));
        assert!(has_shape("00:00", TIME_SHAPE));
        assert!(!has_shape("2022-01-01", TIME_SHAPE));
        assert!(!has_shape("20:22", DATE_SHAPE));
        assert!(!has_shape("ab:cd", TIME_SHAPE));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("2.25").unwrap().cents(), 225);
        assert_eq!(
            parse_amount("6.4"),
            Err(ParseError::InvalidAmount("6.4".to_string()))
        );
    }
}
