//! JSON export of the full dashboard bundle.

use crate::{load_dataset, resolve_window};
use bikeshare_data::DashboardViews;
use log::info;
use std::io::{self, Write};
use std::path::Path;

/// Build the dashboard views and write them as JSON to `output` or stdout.
pub fn run_export(
    data: &Path,
    start: Option<&str>,
    end: Option<&str>,
    output: Option<&Path>,
    pretty: bool,
) -> anyhow::Result<()> {
    let dataset = load_dataset(data)?;
    let window = resolve_window(&dataset, start, end)?;
    let views = DashboardViews::build(&dataset, window);
    let json = to_json(&views, pretty)?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)?;
            info!("Export complete. Output: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(json.as_bytes())?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn to_json(views: &DashboardViews, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(views)
    } else {
        serde_json::to_string(views)
    }
}
