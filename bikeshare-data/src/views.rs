//! Row types for the derived views.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the dashboard, or printed by the CLI.

use bikeshare_core::category::{RiderType, Season, Weather, Weekday};
use serde::Serialize;

/// Total rentals for one calendar year.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct YearlyRentals {
    pub year: i32,
    pub count: u64,
}

/// Rentals for one calendar month, split by rider type.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MonthlyRentals {
    /// Calendar year of the bucket.
    pub year: i32,
    /// Calendar month of the bucket (1-12).
    pub month: u32,
    /// Display label, e.g. "Jan-24".
    pub yearmonth: String,
    pub casual: u64,
    pub registered: u64,
    /// Always `casual + registered`.
    pub count: u64,
}

/// Total rentals for one day of the week.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WeekdayRentals {
    pub weekday: Weekday,
    pub count: u64,
}

/// Total rentals for one hour of the day.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HourlyRentals {
    pub hour: u8,
    pub count: u64,
}

/// One long-form row: a category paired with a single rider type.
///
/// The weather and season views emit two of these per category present in
/// the data, casual first.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RiderTypeRentals<K> {
    pub category: K,
    pub rider_type: RiderType,
    pub count_riders: u64,
}

pub type WeatherRentals = RiderTypeRentals<Weather>;
pub type SeasonRentals = RiderTypeRentals<Season>;

/// Headline totals shown on the summary cards.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct RentalTotals {
    /// "Total All Rental Bikes"
    pub count: u64,
    /// "Total Rented Bike by Casual Rider"
    pub casual: u64,
    /// "Total Rented Bike by Registered Rider"
    pub registered: u64,
}

/// Total rentals for one rider type, for the casual vs registered donut.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RiderShare {
    pub rider_type: RiderType,
    pub count: u64,
}
