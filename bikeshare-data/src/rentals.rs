//! The six derived rental views.
//!
//! Each function accepts anything that yields `&RawRecord` (a `&Dataset`,
//! a record slice, or a filtered `Vec<&RawRecord>`) and returns freshly
//! built rows. Ordering and zero-fill rules differ per view:
//!
//! | view | order | missing keys |
//! |---|---|---|
//! | yearly | ascending year | omitted |
//! | monthly | chronological | omitted |
//! | weekday | Monday..Sunday | filled with 0 |
//! | hourly | ascending hour | omitted |
//! | weather | `Weather::ORDER` | omitted |
//! | season | `Season::ORDER` | omitted |

use crate::views::{
    HourlyRentals, MonthlyRentals, RiderTypeRentals, SeasonRentals, WeatherRentals,
    WeekdayRentals, YearlyRentals,
};
use bikeshare_core::category::{RiderType, Season, Weather, Weekday};
use bikeshare_core::RawRecord;
use bikeshare_utils::dates::month_label;
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Total `count` per year, ascending by year.
pub fn yearly_rentals<'a, I>(records: I) -> Vec<YearlyRentals>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut totals: BTreeMap<i32, u64> = BTreeMap::new();
    for r in records {
        *totals.entry(r.year).or_default() += r.count;
    }
    let rows: Vec<YearlyRentals> = totals
        .into_iter()
        .map(|(year, count)| YearlyRentals { year, count })
        .collect();
    log::debug!("[Bikeshare] rentals: yearly_rentals returned {} rows", rows.len());
    rows
}

#[derive(Default)]
struct MonthBucket {
    day: Option<NaiveDate>,
    casual: u64,
    registered: u64,
    count: u64,
}

/// Casual, registered and total rentals per calendar month of `dateday`.
///
/// Buckets are chronological and labelled "Mon-YY". Months without any
/// record do not appear.
pub fn monthly_rentals<'a, I>(records: I) -> Vec<MonthlyRentals>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut buckets: BTreeMap<(i32, u32), MonthBucket> = BTreeMap::new();
    for r in records {
        let bucket = buckets
            .entry((r.dateday.year(), r.dateday.month()))
            .or_default();
        bucket.day.get_or_insert(r.dateday);
        bucket.casual += r.casual;
        bucket.registered += r.registered;
        bucket.count += r.count;
    }

    let rows: Vec<MonthlyRentals> = buckets
        .into_iter()
        .map(|((year, month), bucket)| MonthlyRentals {
            year,
            month,
            yearmonth: bucket.day.map(|d| month_label(&d)).unwrap_or_default(),
            casual: bucket.casual,
            registered: bucket.registered,
            count: bucket.count,
        })
        .collect();
    log::debug!("[Bikeshare] rentals: monthly_rentals returned {} rows", rows.len());
    rows
}

/// Total `count` per weekday.
///
/// Always seven rows, Monday through Sunday. A weekday with no records
/// reports 0.
pub fn weekday_rentals<'a, I>(records: I) -> Vec<WeekdayRentals>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut totals = [0u64; 7];
    for r in records {
        totals[r.weekday.index()] += r.count;
    }
    Weekday::ORDER
        .into_iter()
        .map(|weekday| WeekdayRentals {
            weekday,
            count: totals[weekday.index()],
        })
        .collect()
}

/// Total `count` per hour of day, ascending. Hours with no records are omitted.
pub fn hourly_rentals<'a, I>(records: I) -> Vec<HourlyRentals>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut totals: BTreeMap<u8, u64> = BTreeMap::new();
    for r in records {
        *totals.entry(r.hour).or_default() += r.count;
    }
    let rows: Vec<HourlyRentals> = totals
        .into_iter()
        .map(|(hour, count)| HourlyRentals { hour, count })
        .collect();
    log::debug!("[Bikeshare] rentals: hourly_rentals returned {} rows", rows.len());
    rows
}

/// Sum casual and registered riders per category and emit one long-form row
/// per (category, rider type) pair.
///
/// Rows follow `order`; categories listed in `order` but absent from the
/// records are dropped, not zero-filled. Within a category the casual row
/// precedes the registered row.
pub fn rentals_by_rider_type<'a, K, I, F>(
    records: I,
    order: &[K],
    key: F,
) -> Vec<RiderTypeRentals<K>>
where
    K: Copy + Eq + Hash,
    I: IntoIterator<Item = &'a RawRecord>,
    F: Fn(&RawRecord) -> K,
{
    let mut sums: HashMap<K, (u64, u64)> = HashMap::new();
    for r in records {
        let entry = sums.entry(key(r)).or_default();
        entry.0 += r.casual;
        entry.1 += r.registered;
    }

    let mut rows = Vec::with_capacity(sums.len() * RiderType::ORDER.len());
    for category in order {
        let Some(&(casual, registered)) = sums.get(category) else {
            continue;
        };
        for rider_type in RiderType::ORDER {
            let count_riders = match rider_type {
                RiderType::Casual => casual,
                RiderType::Registered => registered,
            };
            rows.push(RiderTypeRentals {
                category: *category,
                rider_type,
                count_riders,
            });
        }
    }
    rows
}

/// Casual and registered riders per weather bucket, mildest weather first.
pub fn weather_rentals<'a, I>(records: I) -> Vec<WeatherRentals>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let rows = rentals_by_rider_type(records, &Weather::ORDER, |r| r.weather);
    log::debug!("[Bikeshare] rentals: weather_rentals returned {} rows", rows.len());
    rows
}

/// Casual and registered riders per season, Spring through Winter.
pub fn season_rentals<'a, I>(records: I) -> Vec<SeasonRentals>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let rows = rentals_by_rider_type(records, &Season::ORDER, |r| r.season);
    log::debug!("[Bikeshare] rentals: season_rentals returned {} rows", rows.len());
    rows
}
