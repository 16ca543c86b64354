//! Plain-text rendering of the dashboard metrics and views.

use crate::{load_dataset, resolve_window};
use bikeshare_core::DateRange;
use bikeshare_data::views::RiderTypeRentals;
use bikeshare_data::DashboardViews;
use bikeshare_utils::dates::format_date;
use log::info;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

/// Print the three summary totals for the requested window.
pub fn run_summary(data: &Path, start: Option<&str>, end: Option<&str>) -> anyhow::Result<()> {
    let dataset = load_dataset(data)?;
    let window = resolve_window(&dataset, start, end)?;
    let views = DashboardViews::build(&dataset, window);
    info!("Summary computed over {} records", dataset.len());

    let stdout = io::stdout();
    write_summary(&mut stdout.lock(), &views)?;
    Ok(())
}

/// Print the summary followed by every chart view.
pub fn run_views(data: &Path) -> anyhow::Result<()> {
    let dataset = load_dataset(data)?;
    let views = DashboardViews::build(&dataset, None);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, &views)?;
    write_views(&mut out, &views)?;
    Ok(())
}

fn window_label(window: Option<&DateRange>) -> String {
    match window {
        Some(range) => format!("{} to {}", format_date(&range.start()), format_date(&range.end())),
        None => "(no data)".to_string(),
    }
}

pub fn write_summary<W: Write>(out: &mut W, views: &DashboardViews) -> io::Result<()> {
    writeln!(out, "Bike Sharing Dashboard")?;
    writeln!(out, "Window: {}", window_label(views.window.as_ref()))?;
    writeln!(out, "{:<40}{:>12}", "Total All Rental Bikes", views.totals.count)?;
    writeln!(out, "{:<40}{:>12}", "Total Rented Bike by Casual Rider", views.totals.casual)?;
    writeln!(
        out,
        "{:<40}{:>12}",
        "Total Rented Bike by Registered Rider", views.totals.registered
    )?;
    Ok(())
}

pub fn write_views<W: Write>(out: &mut W, views: &DashboardViews) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Comparison of Casual and Registered Riders")?;
    for share in &views.rider_share {
        writeln!(out, "  {:<24}{:>12}", share.rider_type, share.count)?;
    }

    writeln!(out)?;
    writeln!(out, "Total Rentals per Year")?;
    for row in &views.yearly {
        writeln!(out, "  {:<24}{:>12}", row.year, row.count)?;
    }

    writeln!(out)?;
    writeln!(out, "Monthly Count of Rental Bikes")?;
    writeln!(out, "  {:<10}{:>12}{:>12}{:>12}", "month", "casual", "registered", "total")?;
    for row in &views.monthly {
        writeln!(
            out,
            "  {:<10}{:>12}{:>12}{:>12}",
            row.yearmonth, row.casual, row.registered, row.count
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Total Rental Bikes per Day")?;
    for row in &views.weekday {
        writeln!(out, "  {:<24}{:>12}", row.weekday, row.count)?;
    }

    writeln!(out)?;
    writeln!(out, "Total Rental Bikes per Hour")?;
    for row in &views.hourly {
        writeln!(out, "  {:<24}{:>12}", format!("{:02}:00", row.hour), row.count)?;
    }

    writeln!(out)?;
    writeln!(out, "Count of Rental Bikes by Weather and Rider Type")?;
    write_rider_type_rows(out, &views.weather)?;

    writeln!(out)?;
    writeln!(out, "Count of Rental Bikes by Season and Rider Type")?;
    write_rider_type_rows(out, &views.season)?;
    Ok(())
}

fn write_rider_type_rows<W: Write, K: Display>(
    out: &mut W,
    rows: &[RiderTypeRentals<K>],
) -> io::Result<()> {
    for row in rows {
        writeln!(
            out,
            "  {:<24}{:<12}{:>12}",
            row.category.to_string(),
            row.rider_type.to_string(),
            row.count_riders
        )?;
    }
    Ok(())
}
