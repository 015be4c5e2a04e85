//! Time representations and the standard-to-decimal conversion.
//!
//! - `units`: conversion factors between standard and decimal units
//! - `standard`: validated wall-clock samples
//! - `decimal`: decimal time and the converter
//! - `format`: zero-padded renderings of both representations
//! - `source`: where samples come from (local clock, fixed, scripted)

pub mod decimal;
pub mod format;
pub mod source;
pub mod standard;
pub mod units;

pub use decimal::{to_decimal_seconds, to_decimal_time, DecimalTime};
pub use format::{format_decimal, format_standard, DECIMAL_WIDTH, STANDARD_WIDTH};
pub use source::{FixedTimeSource, LocalTimeSource, SequenceTimeSource, TimeSource};
pub use standard::StandardTime;
