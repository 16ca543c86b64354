//! Bike Sharing Dashboard
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/hour_df.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds it into the WASM binary.
//! 3. On mount: parse the CSV, seed the date picker with the dataset span
//!    and draw the seven charts once. The charts cover the whole dataset.
//! 4. On date range change: recompute the three metric cards only.

mod charts;
mod components;
mod js_bridge;
mod state;

use bikeshare_core::{Dataset, DateRange};
use bikeshare_data::summary::rental_totals;
use bikeshare_data::DashboardViews;
use bikeshare_utils::dates::{format_date, parse_date};
use components::{ChartContainer, DateRangePicker, ErrorDisplay, LoadingSpinner, MetricCard};
use dioxus::prelude::*;
use state::AppState;

const HOUR_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/hour_df.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("bikeshare-root"))
        .launch(App);
}

fn load_dataset(csv: &str) -> Result<Dataset, String> {
    let dataset =
        Dataset::from_csv_str(csv).map_err(|e| format!("Failed to load rental data: {}", e))?;
    dataset
        .ensure_not_empty()
        .map_err(|e| format!("Failed to load rental data: {}", e))?;
    Ok(dataset)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: parse CSV once on mount and draw the charts ───
    use_effect(move || {
        let dataset = match load_dataset(HOUR_CSV) {
            Ok(dataset) => dataset,
            Err(msg) => {
                log::error!("[Bikeshare] {}", msg);
                state.error_msg.set(Some(msg));
                state.loading.set(false);
                return;
            }
        };

        let views = DashboardViews::build(&dataset, None);
        if let Some(span) = views.window {
            let min = format_date(&span.start());
            let max = format_date(&span.end());
            state.min_date.set(min.clone());
            state.max_date.set(max.clone());
            state.start_date.set(min);
            state.end_date.set(max);
        }
        state.totals.set(views.totals);
        state.dataset.set(Some(dataset));
        state.loading.set(false);

        js_bridge::init_charts();
        charts::render_all(&views);
    });

    // ─── Effect 2: recompute the metric cards when the window changes ───
    use_effect(move || {
        let start = (state.start_date)();
        let end = (state.end_date)();
        if start.is_empty() || end.is_empty() {
            return;
        }

        let window = match (parse_date(&start), parse_date(&end)) {
            (Ok(start), Ok(end)) => DateRange(start, end),
            _ => {
                log::warn!("[Bikeshare] ignoring unparsable window {} .. {}", start, end);
                return;
            }
        };

        let totals = match state.dataset.read().as_ref() {
            Some(dataset) => rental_totals(dataset.filter(&window)),
            None => return,
        };
        state.totals.set(totals);
    });

    let totals = (state.totals)();

    rsx! {
        div {
            style: "display: flex; min-height: 100vh; font-family: system-ui, -apple-system, sans-serif; background: #f5f6fa;",

            aside {
                style: "width: 220px; padding: 16px; background: #fff; border-right: 1px solid #e0e0e0;",
                h3 { style: "margin-top: 0;", "Filter:" }
                DateRangePicker {}
            }

            main {
                style: "flex: 1; max-width: 1100px; margin: 0 auto; padding: 16px;",

                h1 { style: "color: #1a237e; margin-top: 0;", "Bike Sharing Dashboard" }

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay {
                        message: err.clone(),
                        hint: "Check that fixtures/hour_df.csv holds the cleaned hourly data.".to_string(),
                    }
                }

                if *state.loading.read() {
                    LoadingSpinner {}
                } else if state.dataset.read().is_some() {
                    div {
                        style: "display: flex; gap: 12px; margin-bottom: 16px;",
                        MetricCard { label: "Total All Rental Bikes".to_string(), value: totals.count }
                        MetricCard { label: "Total Rented Bike by Casual Rider".to_string(), value: totals.casual }
                        MetricCard { label: "Total Rented Bike by Registered Rider".to_string(), value: totals.registered }
                    }

                    div {
                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-bottom: 12px;",
                        ChartContainer { id: charts::YEARLY_CHART_ID.to_string() }
                        ChartContainer { id: charts::RIDER_SHARE_CHART_ID.to_string() }
                    }

                    div {
                        style: "display: flex; flex-direction: column; gap: 12px;",
                        ChartContainer { id: charts::MONTHLY_CHART_ID.to_string(), min_height: 450 }
                        ChartContainer { id: charts::WEEKDAY_CHART_ID.to_string() }
                        ChartContainer { id: charts::HOURLY_CHART_ID.to_string() }
                        ChartContainer { id: charts::WEATHER_CHART_ID.to_string() }
                        ChartContainer { id: charts::SEASON_CHART_ID.to_string() }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::load_dataset;

    #[test]
    fn header_only_csv_is_reported() {
        let err = load_dataset("dateday,hour,weekday,season,weather,year,casual,registered,count\n")
            .unwrap_err();
        assert!(err.contains("no records"));
    }

    #[test]
    fn embedded_fixture_parses() {
        let dataset = load_dataset(super::HOUR_CSV).unwrap();
        assert!(dataset.span().is_some());
    }
}
