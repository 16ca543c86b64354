//! Shared utility functions for the bike sharing crates.

/// Date utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Date format used for `dateday` values and date-range inputs: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Timestamp format some exports use for `dateday`: "YYYY-MM-DD HH:MM:SS"
    pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Month bucket label format: "Jan-24"
    pub const MONTH_LABEL_FORMAT: &str = "%b-%y";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format.
    ///
    /// A trailing time component ("YYYY-MM-DD HH:MM:SS") is accepted and dropped.
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        match NaiveDate::parse_from_str(s, DATE_FORMAT) {
            Ok(date) => Ok(date),
            Err(_) => Ok(NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)?.date()),
        }
    }

    /// Label for the calendar month containing `date`, e.g. 2024-01-17 -> "Jan-24"
    pub fn month_label(date: &NaiveDate) -> String {
        date.format(MONTH_LABEL_FORMAT).to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2012, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2012-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_date_with_time() {
            let parsed = parse_date("2011-01-01 00:00:00").unwrap();
            assert_eq!(parsed, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        }

        #[test]
        fn test_parse_date_rejects_garbage() {
            assert!(parse_date("01/02/2011").is_err());
            assert!(parse_date("").is_err());
        }

        #[test]
        fn test_month_label() {
            let jan = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
            assert_eq!(month_label(&jan), "Jan-24");

            let dec = NaiveDate::from_ymd_opt(2011, 12, 31).unwrap();
            assert_eq!(month_label(&dec), "Dec-11");
        }
    }
}
