//! Everything the dashboard draws, computed in one pass over the dataset.

use crate::rentals::{
    hourly_rentals, monthly_rentals, season_rentals, weather_rentals, weekday_rentals,
    yearly_rentals,
};
use crate::summary::{rental_totals, rider_share};
use crate::views::{
    HourlyRentals, MonthlyRentals, RentalTotals, RiderShare, SeasonRentals, WeatherRentals,
    WeekdayRentals, YearlyRentals,
};
use bikeshare_core::{Dataset, DateRange};
use serde::Serialize;

/// Metrics and views for one dashboard render.
///
/// Only `totals` honours the date window. The rider share and the six views
/// always cover the full dataset, so the charts stay put while the summary
/// cards follow the date picker.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardViews {
    /// Window applied to `totals`; `None` when the dataset is empty.
    pub window: Option<DateRange>,
    pub totals: RentalTotals,
    pub rider_share: Vec<RiderShare>,
    pub yearly: Vec<YearlyRentals>,
    pub monthly: Vec<MonthlyRentals>,
    pub weekday: Vec<WeekdayRentals>,
    pub hourly: Vec<HourlyRentals>,
    pub weather: Vec<WeatherRentals>,
    pub season: Vec<SeasonRentals>,
}

impl DashboardViews {
    /// Build every view from `dataset`.
    ///
    /// `window` defaults to the dataset's full span when `None`.
    pub fn build(dataset: &Dataset, window: Option<DateRange>) -> Self {
        let window = window.or_else(|| dataset.span());
        let totals = rental_totals(dataset.window(window.as_ref()));
        log::info!(
            "[Bikeshare] dashboard: building views for {} records, window {:?}",
            dataset.len(),
            window
        );

        Self {
            window,
            totals,
            rider_share: rider_share(dataset),
            yearly: yearly_rentals(dataset),
            monthly: monthly_rentals(dataset),
            weekday: weekday_rentals(dataset),
            hourly: hourly_rentals(dataset),
            weather: weather_rentals(dataset),
            season: season_rentals(dataset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const CSV: &str = "\
dateday,hour,weekday,season,weather,year,casual,registered,count
2011-01-01,0,Saturday,Winter,Clear/Party Cloudy,2011,3,13,16
2011-01-01,1,Saturday,Winter,Clear/Party Cloudy,2011,8,32,40
2011-06-15,8,Wednesday,Summer,Misty/Cloudy,2011,20,180,200
2012-03-20,17,Tuesday,Spring,light Snow/Rain,2012,4,96,100
";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_window_is_full_span() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let views = DashboardViews::build(&dataset, None);
        assert_eq!(views.window, Some(DateRange(date(2011, 1, 1), date(2012, 3, 20))));
        assert_eq!(views.totals.count, 356);
        assert_eq!(views.totals.casual + views.totals.registered, 356);
    }

    #[test]
    fn window_only_changes_totals() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let full = DashboardViews::build(&dataset, None);
        let narrow = DashboardViews::build(
            &dataset,
            Some(DateRange(date(2011, 1, 1), date(2011, 1, 1))),
        );

        assert_eq!(narrow.totals.count, 56);
        assert_eq!(narrow.yearly, full.yearly);
        assert_eq!(narrow.monthly, full.monthly);
        assert_eq!(narrow.weekday, full.weekday);
        assert_eq!(narrow.hourly, full.hourly);
        assert_eq!(narrow.weather, full.weather);
        assert_eq!(narrow.season, full.season);
        assert_eq!(narrow.rider_share, full.rider_share);
    }

    #[test]
    fn inverted_window_gives_zero_totals() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let views = DashboardViews::build(
            &dataset,
            Some(DateRange(date(2012, 1, 1), date(2011, 1, 1))),
        );
        assert_eq!(views.totals, RentalTotals::default());
        assert_eq!(views.yearly.len(), 2);
    }

    #[test]
    fn empty_dataset_builds_well_formed_views() {
        let views = DashboardViews::build(&Dataset::default(), None);
        assert_eq!(views.window, None);
        assert_eq!(views.totals, RentalTotals::default());
        assert_eq!(views.weekday.len(), 7);
        assert_eq!(views.rider_share.len(), 2);
        assert!(views.monthly.is_empty());
    }

    #[test]
    fn serializes_with_display_labels() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let views = DashboardViews::build(&dataset, None);
        let json = serde_json::to_value(&views).unwrap();

        assert_eq!(json["window"][0], "2011-01-01");
        assert_eq!(json["monthly"][0]["yearmonth"], "Jan-11");
        assert_eq!(json["weekday"][0]["weekday"], "Monday");
        assert_eq!(json["weather"][0]["category"], "Clear/Partly Cloudy");
        assert_eq!(json["weather"][0]["rider_type"], "casual");
        assert_eq!(json["season"][0]["category"], "Spring");
    }
}
