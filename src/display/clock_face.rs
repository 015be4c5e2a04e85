use std::fmt;

use decimal_clock_core::time::{to_decimal_time, DecimalTime, StandardTime};
use tracing::trace;

/// Turns a standard sample into the reading one clock displays.
pub trait ClockFace {
    type Reading: Copy + PartialEq + fmt::Display + fmt::Debug;

    /// Short name used in diagnostics.
    const NAME: &'static str;

    fn read(&self, sample: &StandardTime) -> Self::Reading;
}

/// Shows the sample as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFace;

impl ClockFace for StandardFace {
    type Reading = StandardTime;
    const NAME: &'static str = "standard";

    fn read(&self, sample: &StandardTime) -> StandardTime {
        *sample
    }
}

/// Shows the sample converted to decimal time.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalFace;

impl ClockFace for DecimalFace {
    type Reading = DecimalTime;
    const NAME: &'static str = "decimal";

    fn read(&self, sample: &StandardTime) -> DecimalTime {
        to_decimal_time(sample)
    }
}

/// A clock that keeps the last reading of its face.
///
/// Renders as an empty string until the first tick.
#[derive(Debug, Clone, Default)]
pub struct TickingClock<F: ClockFace> {
    face: F,
    current: Option<F::Reading>,
}

impl<F: ClockFace> TickingClock<F> {
    pub fn new(face: F) -> Self {
        Self {
            face,
            current: None,
        }
    }

    pub fn current(&self) -> Option<F::Reading> {
        self.current
    }

    /// Reads the sample through the face and keeps the result.
    ///
    /// Returns `true` when the retained reading changed.
    pub async fn tick(&mut self, sample: StandardTime) -> bool {
        let reading = self.face.read(&sample);
        self.update(reading)
    }

    fn update(&mut self, reading: F::Reading) -> bool {
        if self.current == Some(reading) {
            return false;
        }
        trace!(clock = F::NAME, %reading, "reading changed");
        self.current = Some(reading);
        true
    }
}

impl<F: ClockFace> fmt::Display for TickingClock<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.current {
            Some(reading) => reading.fmt(f),
            None => Ok(()),
        }
    }
}
