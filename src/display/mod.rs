//! Terminal display of standard and decimal time.
//!
//! - `clock_face`: ticking clocks that retain their last reading
//! - `render`: the single rewritten output line
//! - `display_loop`: the refresh loop driving both clocks

pub mod clock_face;
pub mod display_loop;
pub mod render;

pub use clock_face::{ClockFace, DecimalFace, StandardFace, TickingClock};
pub use display_loop::{DisplayLoop, LoopReport, LoopState};
pub use render::render_line;
