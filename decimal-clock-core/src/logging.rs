use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::errors::{ClockError, Result};

/// Level used when neither `RUST_LOG` nor the caller picks one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Initializes the tracing subscriber used by the clock binary.
///
/// Diagnostics are written to stderr so stdout carries nothing but the
/// clock line.
pub fn init_tracing(level: Option<&str>) -> Result<()> {
    let default_level = level.unwrap_or(DEFAULT_LEVEL);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init()
        .map_err(|err| ClockError::Logging(err.to_string()))?;

    Ok(())
}
