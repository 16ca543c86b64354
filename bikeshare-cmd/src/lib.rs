//! Command implementations for the bike sharing CLI.
//!
//! Each subcommand loads the hourly CSV, builds the dashboard views and
//! renders them as text or JSON.

use bikeshare_core::{Dataset, DateRange};
use bikeshare_utils::dates::parse_date;
use clap::Subcommand;
use std::path::{Path, PathBuf};

pub mod export;
pub mod report;

/// Default location of the cleaned hourly dataset.
pub const DEFAULT_DATA_PATH: &str = "fixtures/hour_df.csv";

#[derive(Subcommand)]
pub enum Command {
    /// Print the three headline rental totals for a date window
    Summary {
        /// Path to the hourly rentals CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// First day of the window (YYYY-MM-DD), defaults to the earliest day in the data
        #[arg(short = 's', long)]
        start: Option<String>,

        /// Last day of the window (YYYY-MM-DD), defaults to the latest day in the data
        #[arg(short = 'e', long)]
        end: Option<String>,
    },

    /// Print every derived view as a text table
    Views {
        /// Path to the hourly rentals CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,
    },

    /// Write the metrics and all views as JSON
    Export {
        /// Path to the hourly rentals CSV
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// First day of the summary window (YYYY-MM-DD)
        #[arg(short = 's', long)]
        start: Option<String>,

        /// Last day of the summary window (YYYY-MM-DD)
        #[arg(short = 'e', long)]
        end: Option<String>,

        /// Output file; JSON goes to stdout when omitted
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { data, start, end } => {
            report::run_summary(&data, start.as_deref(), end.as_deref())
        }
        Command::Views { data } => report::run_views(&data),
        Command::Export {
            data,
            start,
            end,
            output,
            pretty,
        } => export::run_export(
            &data,
            start.as_deref(),
            end.as_deref(),
            output.as_deref(),
            pretty,
        ),
    }
}

/// Load the dataset, refusing an empty file.
pub fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let dataset = Dataset::from_path(path)
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?;
    dataset.ensure_not_empty()?;
    Ok(dataset)
}

/// Build the summary window from optional CLI bounds.
///
/// A missing bound falls back to the matching end of the dataset's span.
/// Returns `None` only when neither bound is given and the dataset is empty.
pub fn resolve_window(
    dataset: &Dataset,
    start: Option<&str>,
    end: Option<&str>,
) -> anyhow::Result<Option<DateRange>> {
    let span = dataset.span();
    let start = match start {
        Some(s) => Some(parse_date(s)?),
        None => span.map(|r| r.start()),
    };
    let end = match end {
        Some(s) => Some(parse_date(s)?),
        None => span.map(|r| r.end()),
    };

    match (start, end) {
        (Some(start), Some(end)) => {
            if start > end {
                log::warn!(
                    "[Bikeshare] cmd: start {} is after end {}, window is empty",
                    start,
                    end
                );
            }
            Ok(Some(DateRange(start, end)))
        }
        _ => Ok(None),
    }
}
