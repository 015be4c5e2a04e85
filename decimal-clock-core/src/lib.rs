//! Core shared library for the decimal clock.
//!
//! This crate exposes the primitives the display binary depends on:
//! standard and decimal time representations, time sources, the
//! standard-to-decimal converter, common errors, configuration and
//! logging setup.

pub mod config;
pub mod errors;
pub mod logging;
pub mod time;

pub use config::DisplayConfig;
pub use errors::{ClockError, Result as CoreResult};
pub use time::{
    DecimalTime, FixedTimeSource, LocalTimeSource, SequenceTimeSource, StandardTime, TimeSource,
};
