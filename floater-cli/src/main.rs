//! Floater CLI - Command line tool for browsing floater depth profiles.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "floater-cli",
    version,
    about = "Floater depth profile toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: floater_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("floater-cli {}", env!("CARGO_PKG_VERSION"));
    floater_cmd::run(cli.command).await
}
