//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod date_range_picker;
mod error_display;
mod loading_spinner;
mod metric_card;

pub use chart_container::ChartContainer;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use metric_card::MetricCard;
