use std::time::Duration;

use crate::errors::ConfigError;

/// Pause between two refresh cycles of the display loop.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(10);

/// Delay between the loop stopping and the process exiting.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_millis(200);

/// Timing parameters of the display loop.
///
/// The binary always runs with [`DisplayConfig::default`]; other values are
/// only used by tests and embedders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub refresh_interval: Duration,
    pub grace_period: Duration,
}

impl DisplayConfig {
    pub fn with_refresh_interval(mut self, refresh_interval: Duration) -> Self {
        self.refresh_interval = refresh_interval;
        self
    }

    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    /// Checks that the loop can be paced with these values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval.is_zero() {
            return Err(ConfigError::ZeroRefreshInterval);
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            grace_period: DEFAULT_GRACE_PERIOD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = DisplayConfig::default();
        assert_eq!(cfg.refresh_interval, Duration::from_millis(10));
        assert_eq!(cfg.grace_period, Duration::from_millis(200));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_zero_refresh_interval() {
        let cfg = DisplayConfig::default().with_refresh_interval(Duration::ZERO);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroRefreshInterval));
    }

    #[test]
    fn zero_grace_period_is_allowed() {
        let cfg = DisplayConfig::default().with_grace_period(Duration::ZERO);
        assert!(cfg.validate().is_ok());
    }
}
