//! Bikeshare CLI - command line renderer for the bike sharing dashboard views.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bikeshare-cli",
    version,
    about = "Bike sharing rental dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: bikeshare_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("[Bikeshare] cli: starting");
    bikeshare_cmd::run(cli.command)
}
