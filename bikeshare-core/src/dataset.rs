//! Immutable, explicitly constructed handle over the loaded rental records.
//!
//! The dataset is built once by the caller (from a CSV string, reader or
//! file) and then passed by reference into every aggregation. Nothing in the
//! workspace mutates it after construction.
//!
//! # CSV Format
//!
//! Header row required. Columns are matched by name, so order does not
//! matter and extra columns are ignored:
//!
//! ```text
//! dateday,hour,weekday,season,weather,year,casual,registered,count
//! 2011-01-01,0,Saturday,Winter,Clear/Partly Cloudy,2011,3,13,16
//! ```

use crate::date_range::DateRange;
use crate::error::{DatasetError, Result};
use crate::record::{ColumnIndex, RawRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The full set of hourly rental records.
///
/// # Example
///
/// ```rust
/// use bikeshare_core::Dataset;
///
/// let dataset = Dataset::from_csv_str(
///     "dateday,hour,weekday,season,weather,year,casual,registered,count\n\
///      2011-01-01,0,Saturday,Winter,Clear/Partly Cloudy,2011,3,13,16\n",
/// )
/// .unwrap();
/// assert_eq!(dataset.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<RawRecord>,
}

impl Dataset {
    /// Parse a CSV string with a header row.
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Open and parse a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("[Bikeshare] loader: reading {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse CSV data from any reader.
    ///
    /// The header row is validated before any row is read. The first row that
    /// does not match the schema aborts the load; no defaults are substituted.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnIndex::from_headers(rdr.headers()?)?;

        let mut records = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let row = result?;
            let line = row
                .position()
                .map(|p| p.line())
                .unwrap_or(i as u64 + 2);
            records.push(columns.parse_row(&row, line)?);
        }
        log::info!("[Bikeshare] loader: Loaded {} hourly records", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fail with [`DatasetError::EmptyInput`] when there are no records.
    ///
    /// Aggregations accept empty input; renderers call this to report a
    /// missing dataset instead of drawing empty charts.
    pub fn ensure_not_empty(&self) -> Result<&Self> {
        if self.records.is_empty() {
            Err(DatasetError::EmptyInput)
        } else {
            Ok(self)
        }
    }

    /// Earliest through latest `dateday`, or `None` for an empty dataset.
    ///
    /// This is the default window for the summary metrics.
    pub fn span(&self) -> Option<DateRange> {
        let min = self.records.iter().map(|r| r.dateday).min()?;
        let max = self.records.iter().map(|r| r.dateday).max()?;
        Some(DateRange(min, max))
    }

    /// Records whose `dateday` falls within `range` (inclusive).
    ///
    /// An inverted range (start after end) yields no records.
    pub fn filter(&self, range: &DateRange) -> Vec<&RawRecord> {
        self.records
            .iter()
            .filter(|r| range.contains(&r.dateday))
            .collect()
    }

    /// Records within `range`, or every record when no range is given.
    pub fn window(&self, range: Option<&DateRange>) -> Vec<&RawRecord> {
        match range {
            Some(range) => self.filter(range),
            None => self.records.iter().collect(),
        }
    }
}

impl From<Vec<RawRecord>> for Dataset {
    fn from(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a RawRecord;
    type IntoIter = std::slice::Iter<'a, RawRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;
    use chrono::NaiveDate;
    use std::io::Write;

    const CSV: &str = "\
dateday,hour,weekday,season,weather,year,casual,registered,count
2024-01-01,8,Monday,Winter,Clear/Partly Cloudy,2024,5,10,15
2024-01-02,9,Tuesday,Winter,Misty/Cloudy,2024,2,3,5
2024-01-03,17,Wednesday,Winter,Light Snow/Rain,2024,1,1,2
";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn load_dataset_from_csv() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[1].dateday, date(2024, 1, 2));
        assert_eq!(dataset.records()[2].hour, 17);
    }

    #[test]
    fn load_dataset_with_reordered_columns() {
        let csv = "\
count,registered,casual,year,weather,season,weekday,hour,dateday,temp
16,13,3,2011,Clear/Party Cloudy,Winter,Saturday,0,2011-01-01,0.24
";
        let dataset = Dataset::from_csv_str(csv).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].count, 16);
    }

    #[test]
    fn load_header_only_csv_is_empty() {
        let dataset =
            Dataset::from_csv_str("dateday,hour,weekday,season,weather,year,casual,registered,count\n")
                .unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.span().is_none());
        assert!(matches!(
            dataset.ensure_not_empty(),
            Err(DatasetError::EmptyInput)
        ));
    }

    #[test]
    fn load_fails_on_missing_column() {
        let csv = "dateday,hour,weekday,season,year,casual,registered,count\n";
        let err = Dataset::from_csv_str(csv).unwrap_err();
        match err {
            DatasetError::Schema(SchemaError::MissingColumns(cols)) => {
                assert_eq!(cols, vec!["weather".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_fails_on_malformed_date_with_line_number() {
        let csv = "\
dateday,hour,weekday,season,weather,year,casual,registered,count
2024-01-01,8,Monday,Winter,Clear/Partly Cloudy,2024,5,10,15
not-a-date,9,Tuesday,Winter,Misty/Cloudy,2024,2,3,5
";
        let err = Dataset::from_csv_str(csv).unwrap_err();
        match err {
            DatasetError::Schema(SchemaError::MalformedField { line, field, value }) => {
                assert_eq!(line, 3);
                assert_eq!(field, "dateday");
                assert_eq!(value, "not-a-date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_dataset_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        let dataset = Dataset::from_path(file.path()).unwrap();
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::from_path(dir.path().join("hour_df.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }

    #[test]
    fn span_covers_min_and_max_dates() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        assert_eq!(
            dataset.span(),
            Some(DateRange(date(2024, 1, 1), date(2024, 1, 3)))
        );
    }

    #[test]
    fn filter_is_inclusive() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let kept = dataset.filter(&DateRange(date(2024, 1, 1), date(2024, 1, 2)));
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn filter_single_day_keeps_that_day_only() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let day = date(2024, 1, 2);
        let kept = dataset.filter(&DateRange(day, day));
        assert_eq!(kept.len(), 1);
        assert!(kept.iter().all(|r| r.dateday == day));
    }

    #[test]
    fn filter_inverted_range_keeps_nothing() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let kept = dataset.filter(&DateRange(date(2024, 1, 3), date(2024, 1, 1)));
        assert!(kept.is_empty());
    }

    #[test]
    fn window_without_range_keeps_everything() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        assert_eq!(dataset.window(None).len(), 3);
        assert_eq!((&dataset).into_iter().count(), 3);
    }
}
