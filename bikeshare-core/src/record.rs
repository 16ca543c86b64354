use crate::category::{Season, Weather, Weekday};
use crate::error::SchemaError;
use bikeshare_utils::dates::parse_date;
use chrono::NaiveDate;
use csv::StringRecord;
use serde::Serialize;
use std::str::FromStr;

pub const COL_DATEDAY: &str = "dateday";
pub const COL_HOUR: &str = "hour";
pub const COL_WEEKDAY: &str = "weekday";
pub const COL_SEASON: &str = "season";
pub const COL_WEATHER: &str = "weather";
pub const COL_YEAR: &str = "year";
pub const COL_CASUAL: &str = "casual";
pub const COL_REGISTERED: &str = "registered";
pub const COL_COUNT: &str = "count";

/// Columns every dataset must carry. Any other column is ignored.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    COL_DATEDAY,
    COL_HOUR,
    COL_WEEKDAY,
    COL_SEASON,
    COL_WEATHER,
    COL_YEAR,
    COL_CASUAL,
    COL_REGISTERED,
    COL_COUNT,
];

/// One hourly observation of bike rentals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawRecord {
    pub dateday: NaiveDate,
    pub hour: u8,
    pub weekday: Weekday,
    pub season: Season,
    pub weather: Weather,
    pub year: i32,
    pub casual: u64,
    pub registered: u64,
    pub count: u64,
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    dateday: usize,
    hour: usize,
    weekday: usize,
    season: usize,
    weather: usize,
    year: usize,
    casual: usize,
    registered: usize,
    count: usize,
}

impl ColumnIndex {
    /// Locate every required column by name (case-insensitive).
    ///
    /// Fails with [`SchemaError::MissingColumns`] listing all absent columns at once.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, SchemaError> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(SchemaError::MissingColumns(missing));
        }

        let at = |name: &str| position(name).unwrap_or_default();
        Ok(ColumnIndex {
            dateday: at(COL_DATEDAY),
            hour: at(COL_HOUR),
            weekday: at(COL_WEEKDAY),
            season: at(COL_SEASON),
            weather: at(COL_WEATHER),
            year: at(COL_YEAR),
            casual: at(COL_CASUAL),
            registered: at(COL_REGISTERED),
            count: at(COL_COUNT),
        })
    }

    /// Convert one CSV row into a [`RawRecord`].
    ///
    /// `line` is the 1-based line number reported in errors.
    pub fn parse_row(&self, row: &StringRecord, line: u64) -> Result<RawRecord, SchemaError> {
        let raw = |idx: usize| row.get(idx).unwrap_or("").trim();
        let malformed = |field: &'static str, idx: usize| SchemaError::MalformedField {
            line,
            field,
            value: raw(idx).to_string(),
        };

        let dateday =
            parse_date(raw(self.dateday)).map_err(|_| malformed(COL_DATEDAY, self.dateday))?;
        let hour: u8 = parse_number(raw(self.hour)).ok_or_else(|| malformed(COL_HOUR, self.hour))?;
        if hour > 23 {
            return Err(malformed(COL_HOUR, self.hour));
        }
        let weekday =
            Weekday::from_label(raw(self.weekday)).ok_or_else(|| malformed(COL_WEEKDAY, self.weekday))?;
        let season =
            Season::from_label(raw(self.season)).ok_or_else(|| malformed(COL_SEASON, self.season))?;
        let weather =
            Weather::from_label(raw(self.weather)).ok_or_else(|| malformed(COL_WEATHER, self.weather))?;
        let year: i32 = parse_number(raw(self.year)).ok_or_else(|| malformed(COL_YEAR, self.year))?;
        let casual: u64 =
            parse_number(raw(self.casual)).ok_or_else(|| malformed(COL_CASUAL, self.casual))?;
        let registered: u64 = parse_number(raw(self.registered))
            .ok_or_else(|| malformed(COL_REGISTERED, self.registered))?;
        let count: u64 = parse_number(raw(self.count)).ok_or_else(|| malformed(COL_COUNT, self.count))?;

        if casual.checked_add(registered) != Some(count) {
            return Err(SchemaError::CountMismatch {
                line,
                casual,
                registered,
                count,
            });
        }

        Ok(RawRecord {
            dateday,
            hour,
            weekday,
            season,
            weather,
            year,
            casual,
            registered,
            count,
        })
    }
}

/// Parse an integer field. Whole-valued floats ("12.0") from spreadsheet
/// exports are accepted.
fn parse_number<T: FromStr + TryFrom<i64>>(s: &str) -> Option<T> {
    if let Ok(value) = s.parse::<T>() {
        return Some(value);
    }
    let float = s.parse::<f64>().ok()?;
    if float.fract() != 0.0 || !float.is_finite() {
        return None;
    }
    T::try_from(float as i64).ok()
}
