//! Time units.
//!
//! The base unit for this dimension is [`TimeUnit::Second`].
//!
//! ## Conventions
//!
//! - Civil units use `1 d = 86 400 s` (mean solar day; leap seconds ignored).
//! - The year is the **Julian year** of `365.25 d`, the convention behind the light year.
//!
//! ```rust
//! use measurand_core::time::{TimeExt, TimeUnit};
//!
//! let half_hour = 0.5_f64.hours();
//! assert_eq!(half_hour.in_seconds(), 1800.0);
//! assert_eq!(half_hour.convert_to(TimeUnit::Minute).value(), 30.0);
//! ```

use crate::length::Length;
use crate::velocity::Velocity;
use crate::{Dimension, Error, Quantity, Result};
use measurand_derive::Unit;

/// Dimension tag for time.
#[derive(Debug)]
pub enum TimeDim {}
impl Dimension for TimeDim {
    const NAME: &'static str = "time";
}

/// Seconds per mean solar day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Units of time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = TimeDim, base = Second)]
pub enum TimeUnit {
    /// Nanosecond, `1e-9 s`.
    #[unit(symbol = "ns", ratio = 1e-9)]
    Nanosecond,
    /// Microsecond, `1e-6 s`.
    #[unit(symbol = "µs", ratio = 1e-6)]
    Microsecond,
    /// Millisecond, `1e-3 s`.
    #[unit(symbol = "ms", ratio = 1e-3)]
    Millisecond,
    /// Second (SI base unit).
    #[unit(symbol = "s", ratio = 1.0)]
    Second,
    /// Minute, `60 s`.
    #[unit(symbol = "min", ratio = 60.0)]
    Minute,
    /// Hour, `3600 s`.
    #[unit(symbol = "h", ratio = 3_600.0)]
    Hour,
    /// Day, `86 400 s`.
    #[unit(symbol = "d", ratio = SECONDS_PER_DAY)]
    Day,
    /// Week, `7 d`.
    #[unit(symbol = "wk", ratio = 7.0 * SECONDS_PER_DAY)]
    Week,
    /// Julian year, `365.25 d`.
    #[unit(symbol = "yr", ratio = 365.25 * SECONDS_PER_DAY)]
    Year,
}

/// A duration.
pub type Time = Quantity<TimeUnit>;

quantity_shorthands!(TimeUnit, TimeExt {
    Nanosecond => nanoseconds, in_nanoseconds;
    Microsecond => microseconds, in_microseconds;
    Millisecond => milliseconds, in_milliseconds;
    Second => seconds, in_seconds;
    Minute => minutes, in_minutes;
    Hour => hours, in_hours;
    Day => days, in_days;
    Week => weeks, in_weeks;
    Year => years, in_years;
});

impl Quantity<TimeUnit> {
    /// Time needed to cover `distance` at constant `velocity`: `t = d / v`.
    ///
    /// Fails with [`Error::InvalidArgument`] when the velocity is zero.
    ///
    /// ```rust
    /// use measurand_core::length::LengthExt;
    /// use measurand_core::time::Time;
    /// use measurand_core::velocity::VelocityExt;
    ///
    /// let t = Time::from_length_and_velocity(100.0_f64.meters(), 4.0_f64.meters_per_second()).unwrap();
    /// assert_eq!(t.in_seconds(), 25.0);
    /// ```
    pub fn from_length_and_velocity(distance: Length, velocity: Velocity) -> Result<Time> {
        let velocity = velocity.base_value();
        if velocity == 0.0 {
            return Err(Error::InvalidArgument("velocity must not be zero"));
        }
        Ok(Time::base(distance.base_value() / velocity))
    }
}
