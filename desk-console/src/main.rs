//! Desk admin console.
//!
//! Usage:
//!   desk login admin@example.com
//!   desk messages list

use anyhow::Result;
use clap::Parser;
use desk_console::{Cli, ConsoleConfig};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose when set.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = ConsoleConfig::resolve(&cli)?;
    debug!("Using API {}", config.remote.api_base_url);

    let mut stdout = std::io::stdout();
    desk_console::run(&cli, &config, &mut stdout).await
}
