use std::io;

use thiserror::Error;

/// Result type used across the decimal clock core crate.
pub type Result<T> = std::result::Result<T, ClockError>;

/// Canonical error representation shared by the clock crates.
#[derive(Debug, Error)]
pub enum ClockError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{field} out of range: {value} (max {max})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),
}

/// Dedicated error used by the configuration module.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("refresh interval must be greater than zero")]
    ZeroRefreshInterval,
}

impl From<ConfigError> for ClockError {
    fn from(value: ConfigError) -> Self {
        ClockError::Config(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_into_clock_error() {
        let err: ClockError = ConfigError::ZeroRefreshInterval.into();
        assert!(matches!(err, ClockError::Config(_)));
        assert!(err.to_string().contains("refresh interval"));
    }

    #[test]
    fn out_of_range_names_the_field() {
        let err = ClockError::OutOfRange {
            field: "minute",
            value: 60,
            max: 59,
        };
        assert_eq!(err.to_string(), "minute out of range: 60 (max 59)");
    }
}
