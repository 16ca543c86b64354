//! Chart payloads for the dashboard views.
//!
//! Each function serializes one view to JSON, pairs it with a D3 config and
//! hands both to `js_bridge`. Container ids are shared with `main.rs`.

use crate::js_bridge;
use bikeshare_data::DashboardViews;
use serde::Serialize;
use serde_json::json;

pub const YEARLY_CHART_ID: &str = "yearly-rentals-chart";
pub const RIDER_SHARE_CHART_ID: &str = "rider-share-chart";
pub const MONTHLY_CHART_ID: &str = "monthly-rentals-chart";
pub const WEEKDAY_CHART_ID: &str = "weekday-rentals-chart";
pub const HOURLY_CHART_ID: &str = "hourly-rentals-chart";
pub const WEATHER_CHART_ID: &str = "weather-rentals-chart";
pub const SEASON_CHART_ID: &str = "season-rentals-chart";

const CASUAL_COLOR: &str = "navy";
const REGISTERED_COLOR: &str = "skyblue";

fn to_json<T: Serialize + ?Sized>(rows: &T) -> String {
    match serde_json::to_string(rows) {
        Ok(json) => json,
        Err(e) => {
            log::error!("[Bikeshare] charts: failed to serialize view: {}", e);
            "[]".to_string()
        }
    }
}

/// Render all seven charts from one set of views.
pub fn render_all(views: &DashboardViews) {
    log::info!("[Bikeshare] charts: rendering dashboard charts");
    render_yearly(views);
    render_rider_share(views);
    render_monthly(views);
    render_weekday(views);
    render_hourly(views);
    render_weather(views);
    render_season(views);
}

fn render_yearly(views: &DashboardViews) {
    let config = json!({
        "title": "Total Rentals per Year",
        "labelKey": "year",
        "valueKey": "count",
    });
    js_bridge::render_donut_chart(YEARLY_CHART_ID, &to_json(&views.yearly), &config.to_string());
}

fn render_rider_share(views: &DashboardViews) {
    let config = json!({
        "title": "Comparison of Casual and Registered Riders",
        "labelKey": "rider_type",
        "valueKey": "count",
        "labels": { "casual": "Casual Users", "registered": "Registered Users" },
        "colors": [CASUAL_COLOR, REGISTERED_COLOR],
    });
    js_bridge::render_donut_chart(
        RIDER_SHARE_CHART_ID,
        &to_json(&views.rider_share),
        &config.to_string(),
    );
}

fn render_monthly(views: &DashboardViews) {
    let config = json!({
        "title": "Monthly Count of Rental Bikes",
        "xKey": "yearmonth",
        "series": [
            { "key": "casual", "label": "Casual", "color": "skyblue" },
            { "key": "registered", "label": "Registered", "color": "navy" },
            { "key": "count", "label": "Total", "color": "orange" },
        ],
        "xAxisLabel": "Month",
        "yAxisLabel": "Rentals",
        "rotateTicks": true,
    });
    js_bridge::render_line_chart(MONTHLY_CHART_ID, &to_json(&views.monthly), &config.to_string());
}

fn render_weekday(views: &DashboardViews) {
    let config = json!({
        "title": "Total Rental Bikes per Day",
        "xKey": "weekday",
        "series": [{ "key": "count", "label": "Rentals", "color": "navy" }],
        "xAxisLabel": "Day",
        "yAxisLabel": "Rentals",
        "rotateTicks": false,
    });
    js_bridge::render_line_chart(WEEKDAY_CHART_ID, &to_json(&views.weekday), &config.to_string());
}

fn render_hourly(views: &DashboardViews) {
    let config = json!({
        "title": "Total Rental Bikes per Hour",
        "xKey": "hour",
        "valueKey": "count",
        "xAxisLabel": "Hour",
        "yAxisLabel": "Rentals",
        "color": "skyblue",
    });
    js_bridge::render_bar_chart(HOURLY_CHART_ID, &to_json(&views.hourly), &config.to_string());
}

fn rider_type_config(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "groupKey": "category",
        "seriesKey": "rider_type",
        "valueKey": "count_riders",
        "colors": { "casual": CASUAL_COLOR, "registered": REGISTERED_COLOR },
        "yAxisLabel": "Count",
    })
}

fn render_weather(views: &DashboardViews) {
    let config = rider_type_config("Count of Rental Bikes by Weather and Rider Type");
    js_bridge::render_grouped_bar_chart(
        WEATHER_CHART_ID,
        &to_json(&views.weather),
        &config.to_string(),
    );
}

fn render_season(views: &DashboardViews) {
    let config = rider_type_config("Count of Rental Bikes by Season and Rider Type");
    js_bridge::render_grouped_bar_chart(
        SEASON_CHART_ID,
        &to_json(&views.season),
        &config.to_string(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::Dataset;

    const CSV: &str = "\
dateday,hour,weekday,season,weather,year,casual,registered,count
2011-01-01,0,Saturday,Winter,Clear/Partly Cloudy,2011,3,13,16
2012-07-02,17,Monday,Summer,Misty/Cloudy,2012,90,400,490
";

    #[test]
    fn rider_type_rows_use_config_keys() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let views = DashboardViews::build(&dataset, None);
        let rows: serde_json::Value = serde_json::from_str(&to_json(&views.weather)).unwrap();
        let config = rider_type_config("t");

        let first = &rows[0];
        for key in ["groupKey", "seriesKey", "valueKey"] {
            let field = config[key].as_str().unwrap();
            assert!(!first[field].is_null(), "row lacks {field}");
        }
        assert_eq!(first["category"], "Clear/Partly Cloudy");
        assert_eq!(first["rider_type"], "casual");
    }

    #[test]
    fn monthly_rows_carry_every_series() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();
        let views = DashboardViews::build(&dataset, None);
        let rows: serde_json::Value = serde_json::from_str(&to_json(&views.monthly)).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 2);
        for key in ["yearmonth", "casual", "registered", "count"] {
            assert!(!rows[0][key].is_null(), "row lacks {key}");
        }
        assert_eq!(rows[1]["yearmonth"], "Jul-12");
    }
}
