//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use bikeshare_core::Dataset;
use bikeshare_data::views::RentalTotals;
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Parsed dataset (None until loaded)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Start of the summary window (YYYY-MM-DD)
    pub start_date: Signal<String>,
    /// End of the summary window (YYYY-MM-DD)
    pub end_date: Signal<String>,
    /// Earliest selectable day
    pub min_date: Signal<String>,
    /// Latest selectable day
    pub max_date: Signal<String>,
    /// Totals for the metric cards, recomputed on window change
    pub totals: Signal<RentalTotals>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            min_date: Signal::new(String::new()),
            max_date: Signal::new(String::new()),
            totals: Signal::new(RentalTotals::default()),
        }
    }
}
