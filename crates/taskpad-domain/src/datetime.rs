//! Date and time codec for task fields
//!
//! One input/storage format pair and one display format pair are used
//! process-wide. The input formats double as the storage formats, so
//! `format_date(parse_date(x)) == x` for any valid `x`.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{DomainError, DomainResult};

/// Input and storage date format, e.g. `02/12/2019`
pub const DATE_INPUT_FORMAT: &str = "%d/%m/%Y";

/// Input and storage time format, e.g. `1800`
pub const TIME_INPUT_FORMAT: &str = "%H%M";

/// Display date format, e.g. `2 Dec 2019`
pub const DATE_DISPLAY_FORMAT: &str = "%-d %b %Y";

/// Display time format, e.g. `6:00 PM`
pub const TIME_DISPLAY_FORMAT: &str = "%-I:%M %p";

/// Parse a date token in the input format.
///
/// Malformed tokens and calendar-impossible dates (e.g. 30 February) are
/// both rejected.
pub fn parse_date(text: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_INPUT_FORMAT)
        .map_err(|_| DomainError::invalid_date_time(text, DATE_INPUT_FORMAT))
}

/// Parse a time token in the input format.
pub fn parse_time(text: &str) -> DomainResult<NaiveTime> {
    NaiveTime::parse_from_str(text, TIME_INPUT_FORMAT)
        .map_err(|_| DomainError::invalid_date_time(text, TIME_INPUT_FORMAT))
}

/// Format a date in the storage format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

/// Format a time in the storage format.
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_INPUT_FORMAT).to_string()
}

/// Format a date for human display.
pub fn display_date(date: NaiveDate) -> String {
    date.format(DATE_DISPLAY_FORMAT).to_string()
}

/// Format a time for human display.
pub fn display_time(time: NaiveTime) -> String {
    time.format(TIME_DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("02/12/2019").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2019, 12, 2).unwrap());
    }

    #[test]
    fn test_parse_date_malformed() {
        assert!(parse_date("2019-12-02").is_err());
        assert!(parse_date("yesterday").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_date_impossible_calendar_day() {
        assert!(parse_date("30/02/2019").is_err());
        assert!(parse_date("32/01/2019").is_err());
    }

    #[test]
    fn test_parse_time_valid() {
        let time = parse_time("1800").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_time_malformed() {
        assert!(parse_time("18:00").is_err());
        assert!(parse_time("6pm").is_err());
        assert!(parse_time("2500").is_err());
    }

    #[test]
    fn test_storage_format_round_trips() {
        let date = parse_date("02/12/2019").unwrap();
        assert_eq!(format_date(date), "02/12/2019");

        let time = parse_time("0905").unwrap();
        assert_eq!(format_time(time), "0905");
    }

    #[test]
    fn test_display_formats() {
        let date = parse_date("02/12/2019").unwrap();
        assert_eq!(display_date(date), "2 Dec 2019");

        let evening = parse_time("1800").unwrap();
        assert_eq!(display_time(evening), "6:00 PM");

        let past_midnight = parse_time("0030").unwrap();
        assert_eq!(display_time(past_midnight), "12:30 AM");
    }

    #[test]
    fn test_parse_error_carries_text_and_format() {
        let err = parse_date("junk").unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_date_time("junk", DATE_INPUT_FORMAT)
        );
    }
}
