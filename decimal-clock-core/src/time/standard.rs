use chrono::{NaiveTime, Timelike};

use crate::errors::{ClockError, Result};

pub const MAX_HOUR: u32 = 23;
pub const MAX_MINUTE: u32 = 59;
pub const MAX_SECOND: u32 = 59;
pub const MAX_MICROSECOND: u32 = 999_999;

/// A wall-clock sample in conventional 24-hour time.
///
/// Ordering is lexicographic on (hour, minute, second, microsecond), which
/// matches chronological order within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StandardTime {
    hour: u32,
    minute: u32,
    second: u32,
    microsecond: u32,
}

impl StandardTime {
    pub const MIDNIGHT: StandardTime = StandardTime {
        hour: 0,
        minute: 0,
        second: 0,
        microsecond: 0,
    };

    /// Builds a sample, rejecting any component outside its calendar range.
    pub fn new(hour: u32, minute: u32, second: u32, microsecond: u32) -> Result<Self> {
        check("hour", hour, MAX_HOUR)?;
        check("minute", minute, MAX_MINUTE)?;
        check("second", second, MAX_SECOND)?;
        check("microsecond", microsecond, MAX_MICROSECOND)?;

        Ok(Self {
            hour,
            minute,
            second,
            microsecond,
        })
    }

    /// Reads hour, minute, second and microsecond from any chrono time value.
    ///
    /// chrono reports a leap second as a nanosecond value past one billion;
    /// it is pinned to the last microsecond of the second.
    pub fn from_timelike<T: Timelike>(value: &T) -> Self {
        Self {
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
            microsecond: (value.nanosecond() / 1_000).min(MAX_MICROSECOND),
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn microsecond(&self) -> u32 {
        self.microsecond
    }

    /// The sample as a `(hour, minute, second, microsecond)` tuple.
    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.hour, self.minute, self.second, self.microsecond)
    }
}

impl From<NaiveTime> for StandardTime {
    fn from(value: NaiveTime) -> Self {
        Self::from_timelike(&value)
    }
}

impl Default for StandardTime {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

fn check(field: &'static str, value: u32, max: u32) -> Result<()> {
    if value > max {
        return Err(ClockError::OutOfRange { field, value, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_last_instant_of_the_day() {
        let t = StandardTime::new(23, 59, 59, 999_999).expect("valid time");
        assert_eq!(t.as_tuple(), (23, 59, 59, 999_999));
    }

    #[test]
    fn rejects_out_of_range_components() {
        let cases = [
            (24, 0, 0, 0, "hour"),
            (0, 60, 0, 0, "minute"),
            (0, 0, 60, 0, "second"),
            (0, 0, 0, 1_000_000, "microsecond"),
        ];

        for (h, m, s, us, expected) in cases {
            match StandardTime::new(h, m, s, us) {
                Err(ClockError::OutOfRange { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected out of range for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn converts_from_naive_time() {
        let naive = NaiveTime::from_hms_micro_opt(14, 3, 27, 512_000).unwrap();
        let t = StandardTime::from(naive);
        assert_eq!(t.as_tuple(), (14, 3, 27, 512_000));
    }

    #[test]
    fn pins_leap_second_to_last_microsecond() {
        let leap = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
        let t = StandardTime::from(leap);
        assert_eq!(t.as_tuple(), (23, 59, 59, 999_999));
    }

    #[test]
    fn orders_chronologically() {
        let earlier = StandardTime::new(9, 59, 59, 999_999).unwrap();
        let later = StandardTime::new(10, 0, 0, 0).unwrap();
        assert!(earlier < later);
        assert!(StandardTime::MIDNIGHT < earlier);
    }
}
