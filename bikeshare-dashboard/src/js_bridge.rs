//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`. They are evaluated as
//! globals (no ES modules) once D3 has loaded and exposed via `window.*`.

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static DONUT_CHART_JS: &str = include_str!("../assets/js/donut-chart.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static GROUPED_BAR_CHART_JS: &str = include_str!("../assets/js/grouped-bar-chart.js");

/// Global chart functions promoted to `window` after evaluation.
const CHART_FUNCTIONS: [&str; 7] = [
    "initTooltip",
    "showTooltip",
    "hideTooltip",
    "renderDonutChart",
    "renderLineChart",
    "renderBarChart",
    "renderGroupedBarChart",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Bikeshare JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// Scripts are stashed on `window` and evaluated at global scope via an
/// indirect eval once `d3` exists, then each function is promoted to
/// `window.*` explicitly.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        DONUT_CHART_JS,
        LINE_CHART_JS,
        BAR_CHART_JS,
        GROUPED_BAR_CHART_JS,
    ]
    .join("\n");

    let store_js = format!(
        "window.__bikeshareChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promote: String = CHART_FUNCTIONS
        .iter()
        .map(|name| format!("if (typeof {name} !== 'undefined') window.{name} = {name};"))
        .collect::<Vec<_>>()
        .join("\n");

    let init_js = format!(
        r#"
        (function() {{
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__bikeshareChartScripts);
                    delete window.__bikeshareChartScripts;
                    {promote}
                    window.__bikeshareChartsReady = true;
                    console.log('Bikeshare charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Escape a JSON payload for embedding in a single-quoted JS string.
fn escape_js_string(json: &str) -> String {
    json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Poll until the charts are initialised and the container exists, then call
/// `window.<function>(containerId, dataJson, configJson)`.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_js_string(data_json);
    let escaped_config = escape_js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__bikeshareChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[Bikeshare] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a donut chart (rentals per year, casual vs registered).
pub fn render_donut_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderDonutChart", container_id, data_json, config_json);
}

/// Render a line chart over a categorical x axis (monthly, weekday).
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Render a single-series bar chart (hourly).
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render a grouped bar chart from long-form rider type rows (weather, season).
pub fn render_grouped_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderGroupedBarChart", container_id, data_json, config_json);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_js_string_quotes_and_newlines() {
        assert_eq!(escape_js_string("{\"a\":\"it's\"}\n"), "{\"a\":\"it\\'s\"}");
        assert_eq!(escape_js_string("a\\b"), "a\\\\b");
    }
}
