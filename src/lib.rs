//! Decimal clock: standard and decimal time on one terminal line.
//!
//! The conversion and time types live in `decimal-clock-core`; this crate
//! adds the pieces that drive the terminal:
//!
//! * `display`: ticking clocks, line rendering and the refresh loop
//! * `shutdown`: interrupt handling for the binary

pub mod display;
pub mod shutdown;

pub use display::{DisplayLoop, LoopReport, LoopState};
pub use shutdown::shutdown_signal;
