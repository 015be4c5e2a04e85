use std::io;

use anyhow::Context;
use clap::Parser;
use decimal_clock::{shutdown_signal, DisplayLoop};
use decimal_clock_core::{DisplayConfig, LocalTimeSource};
use tracing::debug;

#[derive(Parser)]
#[command(name = "decimal-clock")]
#[command(version, about = "Shows the current time in standard and decimal units", long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    if let Err(err) = decimal_clock_core::logging::init_tracing(None) {
        eprintln!("⚠️ failed to initialise tracing: {err}");
    }

    let mut display = DisplayLoop::new(LocalTimeSource, io::stdout(), DisplayConfig::default())
        .context("invalid display configuration")?;

    let report = display
        .run_until(shutdown_signal())
        .await
        .context("display loop terminated with error")?;

    debug!(?report, "exiting");
    Ok(())
}
