//! Conversion factors between time units.
//!
//! Each constant reads as "one <period> in <unit>", e.g.
//! `STANDARD_HOUR_SECONDS` is the number of standard seconds in a standard
//! hour.

/// One standard day.
pub const STANDARD_DAY_SECONDS: f64 = 86_400.0;
pub const STANDARD_DAY_MINUTES: f64 = 1_440.0;
pub const STANDARD_DAY_HOURS: f64 = 24.0;

/// One standard hour.
pub const STANDARD_HOUR_SECONDS: f64 = 3_600.0;
pub const STANDARD_HOUR_MINUTES: f64 = 60.0;
pub const STANDARD_HOUR_HOURS: f64 = 1.0;

/// One standard minute.
pub const STANDARD_MINUTE_SECONDS: f64 = 60.0;
pub const STANDARD_MINUTE_MINUTES: f64 = 1.0;
pub const STANDARD_MINUTE_HOURS: f64 = 1.0 / 60.0;

/// One decimal day.
pub const DECIMAL_DAY_SECONDS: f64 = 100_000.0;
// 10 decimal hours of 100 decimal minutes. 10_000 is the number of decimal
// seconds in a decimal hour, not the minutes in a day.
pub const DECIMAL_DAY_MINUTES: f64 = 1_000.0;
pub const DECIMAL_DAY_HOURS: f64 = 10.0;

/// One decimal hour.
pub const DECIMAL_HOUR_SECONDS: f64 = 10_000.0;
pub const DECIMAL_HOUR_MINUTES: f64 = 100.0;
pub const DECIMAL_HOUR_HOURS: f64 = 1.0;

/// One decimal minute.
pub const DECIMAL_MINUTE_SECONDS: f64 = 100.0;
pub const DECIMAL_MINUTE_MINUTES: f64 = 1.0;
pub const DECIMAL_MINUTE_HOURS: f64 = 0.1;

/// Microseconds in one standard second.
pub const MICROS_PER_SECOND: f64 = 1_000_000.0;
