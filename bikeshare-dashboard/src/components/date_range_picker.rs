//! Sidebar date filter bounded by the dataset span.

use crate::state::AppState;
use dioxus::prelude::*;

/// Start/end date inputs for the summary window.
///
/// Picking a start after the end is allowed; the metric cards then show
/// zero rentals rather than an error.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();
    let min = (state.min_date)();
    let max = (state.max_date)();

    let on_start_change = move |evt: Event<FormData>| {
        state.start_date.set(evt.value());
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            label {
                style: "font-weight: bold; display: flex; flex-direction: column;",
                "Start date"
                input {
                    r#type: "date",
                    value: "{start}",
                    min: "{min}",
                    max: "{max}",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold; display: flex; flex-direction: column;",
                "End date"
                input {
                    r#type: "date",
                    value: "{end}",
                    min: "{min}",
                    max: "{max}",
                    onchange: on_end_change,
                }
            }
        }
    }
}
