use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive window of calendar days, start date through end date.
///
/// A window whose start is after its end is valid and simply contains no days.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Serialize, Deserialize)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.0
    }

    pub fn end(&self) -> NaiveDate {
        self.1
    }

    /// True if `date` falls within `[start, end]`.
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.0 <= *date && *date <= self.1
    }

    /// True when start is after end.
    pub fn is_empty(&self) -> bool {
        self.0 > self.1
    }

    /// Number of days covered, 0 for an empty window.
    pub fn num_days(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            (self.1 - self.0).num_days() + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DateRange;
    use chrono::NaiveDate;

    #[test]
    fn test_date_range_contains_bounds() {
        let start = NaiveDate::from_ymd_opt(2012, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2012, 1, 5).unwrap();
        let range = DateRange(start, end);
        assert!(range.contains(&start));
        assert!(range.contains(&end));
        assert!(range.contains(&NaiveDate::from_ymd_opt(2012, 1, 3).unwrap()));
        assert!(!range.contains(&NaiveDate::from_ymd_opt(2011, 12, 31).unwrap()));
        assert!(!range.contains(&NaiveDate::from_ymd_opt(2012, 1, 6).unwrap()));
        assert_eq!(range.num_days(), 5);
    }

    #[test]
    fn test_date_range_single_day() {
        let day = NaiveDate::from_ymd_opt(2012, 3, 15).unwrap();
        let range = DateRange(day, day);
        assert!(range.contains(&day));
        assert!(!range.contains(&day.succ_opt().unwrap()));
        assert_eq!(range.num_days(), 1);
    }

    #[test]
    fn test_date_range_empty() {
        let start = NaiveDate::from_ymd_opt(2012, 3, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2012, 3, 14).unwrap();
        let range = DateRange(start, end);
        assert!(range.is_empty());
        assert!(!range.contains(&start));
        assert!(!range.contains(&end));
        assert_eq!(range.num_days(), 0);
    }
}
