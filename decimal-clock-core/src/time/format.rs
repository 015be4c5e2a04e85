use std::fmt;

use crate::time::decimal::DecimalTime;
use crate::time::standard::StandardTime;

/// Length of a rendered standard time, `HH:MM:SS`.
pub const STANDARD_WIDTH: usize = 8;

/// Length of a rendered decimal time, `HH:MM:SSS`.
pub const DECIMAL_WIDTH: usize = 9;

impl fmt::Display for StandardTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

// The seconds field is padded to three digits even though it never
// exceeds 99.
impl fmt::Display for DecimalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:03}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

/// Renders `HH:MM:SS`; microseconds are not shown.
pub fn format_standard(t: &StandardTime) -> String {
    t.to_string()
}

/// Renders `HH:MM:SSS`.
pub fn format_decimal(d: &DecimalTime) -> String {
    d.to_string()
}
