//! Velocity units.
//!
//! The base unit for this dimension is [`VelocityUnit::MeterPerSecond`].
//!
//! ```rust
//! use measurand_core::length::LengthExt;
//! use measurand_core::time::TimeExt;
//! use measurand_core::velocity::{Velocity, VelocityUnit};
//!
//! let v = Velocity::from_length_and_time(100.0_f64.kilometers(), 2.0_f64.hours()).unwrap();
//! let kmh = v.convert_to(VelocityUnit::KilometerPerHour);
//! assert!((kmh.value() - 50.0).abs() < 1e-9);
//! ```

use crate::acceleration::Acceleration;
use crate::length::Length;
use crate::time::Time;
use crate::{Dimension, Error, Quantity, Result};
use measurand_derive::Unit;

/// Dimension tag for velocity (length / time).
#[derive(Debug)]
pub enum VelocityDim {}
impl Dimension for VelocityDim {
    const NAME: &'static str = "velocity";
}

/// Units of velocity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = VelocityDim, base = MeterPerSecond)]
pub enum VelocityUnit {
    /// Metre per second (SI coherent unit).
    #[unit(symbol = "m/s", ratio = 1.0)]
    MeterPerSecond,
    /// Kilometre per hour, `1/3.6 m/s`.
    #[unit(symbol = "km/h", ratio = 1_000.0 / 3_600.0)]
    KilometerPerHour,
    /// Kilometre per second, `1000 m/s`.
    #[unit(symbol = "km/s", ratio = 1e3)]
    KilometerPerSecond,
    /// Statute mile per hour.
    #[unit(symbol = "mph", ratio = 1_609.344 / 3_600.0)]
    MilePerHour,
    /// Knot: one nautical mile per hour.
    #[unit(symbol = "kn", ratio = 1_852.0 / 3_600.0)]
    Knot,
    /// Foot per second.
    #[unit(symbol = "ft/s", ratio = 0.3048)]
    FootPerSecond,
    /// Speed of light in vacuum, `299 792 458 m/s` (exact).
    #[unit(symbol = "c", ratio = 299_792_458.0)]
    SpeedOfLight,
}

/// A velocity.
pub type Velocity = Quantity<VelocityUnit>;

quantity_shorthands!(VelocityUnit, VelocityExt {
    MeterPerSecond => meters_per_second, in_meters_per_second;
    KilometerPerHour => kilometers_per_hour, in_kilometers_per_hour;
    KilometerPerSecond => kilometers_per_second, in_kilometers_per_second;
    MilePerHour => miles_per_hour, in_miles_per_hour;
    Knot => knots, in_knots;
    FootPerSecond => feet_per_second, in_feet_per_second;
    SpeedOfLight => lightspeeds, in_lightspeeds;
});

/// Speed of light in vacuum.
pub const SPEED_OF_LIGHT: Velocity = Velocity::new(299_792_458.0, VelocityUnit::MeterPerSecond);

impl Quantity<VelocityUnit> {
    /// Average velocity over `distance` covered in `time`: `v = d / t`.
    ///
    /// Fails with [`Error::InvalidArgument`] when the time is zero.
    pub fn from_length_and_time(distance: Length, time: Time) -> Result<Velocity> {
        let time = time.base_value();
        if time == 0.0 {
            return Err(Error::InvalidArgument("time must not be zero"));
        }
        Ok(Velocity::base(distance.base_value() / time))
    }

    /// Velocity gained from rest under constant `acceleration` during `time`: `v = a · t`.
    pub fn from_acceleration_and_time(acceleration: Acceleration, time: Time) -> Velocity {
        Velocity::base(acceleration.base_value() * time.base_value())
    }

    /// Distance covered at this velocity during `time`: `d = v · t`, in metres.
    pub fn distance_in(&self, time: Time) -> Length {
        Length::base(self.base_value() * time.base_value())
    }
}
