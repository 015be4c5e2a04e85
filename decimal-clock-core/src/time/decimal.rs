use crate::errors::{ClockError, Result};
use crate::time::standard::StandardTime;
use crate::time::units::{
    DECIMAL_DAY_HOURS, DECIMAL_DAY_SECONDS, DECIMAL_HOUR_MINUTES, DECIMAL_HOUR_SECONDS,
    DECIMAL_MINUTE_SECONDS, MICROS_PER_SECOND, STANDARD_DAY_SECONDS, STANDARD_HOUR_SECONDS,
    STANDARD_MINUTE_SECONDS,
};

pub const MAX_DECIMAL_HOUR: u32 = DECIMAL_DAY_HOURS as u32 - 1;
pub const MAX_DECIMAL_MINUTE: u32 = DECIMAL_HOUR_MINUTES as u32 - 1;
pub const MAX_DECIMAL_SECOND: u32 = DECIMAL_MINUTE_SECONDS as u32 - 1;

/// A time of day in decimal units: 10 hours of 100 minutes of 100 seconds.
///
/// Always derived from a [`StandardTime`]; ordering is lexicographic on
/// (hour, minute, second).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DecimalTime {
    hour: u32,
    minute: u32,
    second: u32,
}

impl DecimalTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self> {
        for (field, value, max) in [
            ("decimal hour", hour, MAX_DECIMAL_HOUR),
            ("decimal minute", minute, MAX_DECIMAL_MINUTE),
            ("decimal second", second, MAX_DECIMAL_SECOND),
        ] {
            if value > max {
                return Err(ClockError::OutOfRange { field, value, max });
            }
        }

        Ok(Self {
            hour,
            minute,
            second,
        })
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

    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.hour, self.minute, self.second)
    }
}

impl From<StandardTime> for DecimalTime {
    fn from(value: StandardTime) -> Self {
        to_decimal_time(&value)
    }
}

/// Standard seconds elapsed since midnight, including the fractional part.
pub fn to_decimal_seconds(t: &StandardTime) -> f64 {
    let hours = f64::from(t.hour()) * STANDARD_HOUR_SECONDS;
    let minutes = f64::from(t.minute()) * STANDARD_MINUTE_SECONDS;
    let seconds = f64::from(t.second()) + f64::from(t.microsecond()) / MICROS_PER_SECOND;
    hours + minutes + seconds
}

/// Converts a standard sample into decimal time.
///
/// Every component is floored, so a decimal unit only rolls over once it
/// has fully elapsed.
pub fn to_decimal_time(t: &StandardTime) -> DecimalTime {
    let total = to_decimal_seconds(t) * (DECIMAL_DAY_SECONDS / STANDARD_DAY_SECONDS);

    let hour = (total / DECIMAL_HOUR_SECONDS).floor();
    let remainder = total - hour * DECIMAL_HOUR_SECONDS;
    let minute = (remainder / DECIMAL_MINUTE_SECONDS).floor();
    let second = (remainder - minute * DECIMAL_MINUTE_SECONDS).floor();

    DecimalTime {
        hour: clamp_unit(hour, MAX_DECIMAL_HOUR),
        minute: clamp_unit(minute, MAX_DECIMAL_MINUTE),
        second: clamp_unit(second, MAX_DECIMAL_SECOND),
    }
}

fn clamp_unit(value: f64, max: u32) -> u32 {
    (value.max(0.0) as u32).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(h: u32, m: u32, s: u32, us: u32) -> StandardTime {
        StandardTime::new(h, m, s, us).expect("valid standard time")
    }

    #[test]
    fn midnight_is_decimal_zero() {
        assert_eq!(to_decimal_time(&StandardTime::MIDNIGHT).as_tuple(), (0, 0, 0));
    }

    #[test]
    fn midday_is_five_decimal_hours() {
        assert_eq!(to_decimal_time(&standard(12, 0, 0, 0)).as_tuple(), (5, 0, 0));
    }

    #[test]
    fn last_microsecond_stays_below_ten_hours() {
        let t = standard(23, 59, 59, 999_999);
        let total = to_decimal_seconds(&t) * (DECIMAL_DAY_SECONDS / STANDARD_DAY_SECONDS);
        assert!(total > 99_999.99 && total < 100_000.0);
        assert_eq!(to_decimal_time(&t).as_tuple(), (9, 99, 99));
    }

    #[test]
    fn quarter_days_land_on_round_values() {
        assert_eq!(to_decimal_time(&standard(6, 0, 0, 0)).as_tuple(), (2, 50, 0));
        assert_eq!(to_decimal_time(&standard(18, 0, 0, 0)).as_tuple(), (7, 50, 0));
    }

    #[test]
    fn one_decimal_second_is_864_milliseconds() {
        assert_eq!(to_decimal_time(&standard(0, 0, 0, 863_999)).as_tuple(), (0, 0, 0));
        assert_eq!(to_decimal_time(&standard(0, 0, 0, 864_000)).as_tuple(), (0, 0, 1));
    }

    #[test]
    fn exact_decimal_second_boundary_rolls_over() {
        // 18.144 standard seconds is exactly 21 decimal seconds.
        assert_eq!(to_decimal_time(&standard(0, 0, 18, 144_000)).as_tuple(), (0, 0, 21));
        assert_eq!(to_decimal_time(&standard(0, 0, 18, 143_999)).as_tuple(), (0, 0, 20));
    }

    #[test]
    fn decimal_seconds_include_microseconds() {
        let t = standard(1, 2, 3, 500_000);
        assert_eq!(to_decimal_seconds(&t), 3_723.5);
    }

    #[test]
    fn decimal_time_rejects_out_of_range_components() {
        assert!(DecimalTime::new(9, 99, 99).is_ok());
        assert!(DecimalTime::new(10, 0, 0).is_err());
        assert!(DecimalTime::new(0, 100, 0).is_err());
        assert!(DecimalTime::new(0, 0, 100).is_err());
    }
}
