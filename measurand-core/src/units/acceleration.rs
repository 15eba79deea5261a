//! Acceleration units.
//!
//! The base unit for this dimension is [`AccelerationUnit::MeterPerSecondSquared`].

use crate::force::Force;
use crate::mass::Mass;
use crate::time::Time;
use crate::velocity::Velocity;
use crate::{Dimension, Error, Quantity, Result};
use measurand_derive::Unit;

/// Dimension tag for acceleration (length / time²).
#[derive(Debug)]
pub enum AccelerationDim {}
impl Dimension for AccelerationDim {
    const NAME: &'static str = "acceleration";
}

/// Standard acceleration of gravity in m/s² (CGPM 1901, exact).
const G0: f64 = 9.806_65;

/// Units of acceleration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = AccelerationDim, base = MeterPerSecondSquared)]
pub enum AccelerationUnit {
    /// Metre per second squared (SI coherent unit).
    #[unit(symbol = "m/s²", ratio = 1.0)]
    MeterPerSecondSquared,
    /// Kilometre per second squared, `1000 m/s²`.
    #[unit(symbol = "km/s²", ratio = 1e3)]
    KilometerPerSecondSquared,
    /// Foot per second squared.
    #[unit(symbol = "ft/s²", ratio = 0.3048)]
    FootPerSecondSquared,
    /// Gal (CGS), `1 cm/s²`.
    #[unit(symbol = "Gal", ratio = 1e-2)]
    Gal,
    /// Standard gravity `g₀`, `9.80665 m/s²`.
    #[unit(symbol = "g₀", ratio = G0)]
    StandardGravity,
}

/// An acceleration.
pub type Acceleration = Quantity<AccelerationUnit>;

quantity_shorthands!(AccelerationUnit, AccelerationExt {
    MeterPerSecondSquared => meters_per_second_squared, in_meters_per_second_squared;
    KilometerPerSecondSquared => kilometers_per_second_squared, in_kilometers_per_second_squared;
    FootPerSecondSquared => feet_per_second_squared, in_feet_per_second_squared;
    Gal => gals, in_gals;
    StandardGravity => standard_gravities, in_standard_gravities;
});

/// Standard acceleration of gravity, `9.80665 m/s²`.
pub const STANDARD_GRAVITY: Acceleration = Acceleration::new(G0, AccelerationUnit::MeterPerSecondSquared);

impl Quantity<AccelerationUnit> {
    /// Acceleration of `mass` under `force` (Newton's second law): `a = F / m`.
    ///
    /// Fails with [`Error::InvalidArgument`] when the mass is zero.
    ///
    /// ```rust
    /// use measurand_core::acceleration::Acceleration;
    /// use measurand_core::force::ForceExt;
    /// use measurand_core::mass::MassExt;
    ///
    /// let a = Acceleration::from_force_and_mass(20.0_f64.newtons(), 10.0_f64.kilograms()).unwrap();
    /// assert_eq!(a.in_meters_per_second_squared(), 2.0);
    /// ```
    pub fn from_force_and_mass(force: Force, mass: Mass) -> Result<Acceleration> {
        let mass = mass.base_value();
        if mass == 0.0 {
            return Err(Error::InvalidArgument("mass must not be zero"));
        }
        Ok(Acceleration::base(force.base_value() / mass))
    }

    /// Mean acceleration reaching `velocity` from rest in `time`: `a = v / t`.
    ///
    /// Fails with [`Error::InvalidArgument`] when the time is zero.
    pub fn from_velocity_and_time(velocity: Velocity, time: Time) -> Result<Acceleration> {
        let time = time.base_value();
        if time == 0.0 {
            return Err(Error::InvalidArgument("time must not be zero"));
        }
        Ok(Acceleration::base(velocity.base_value() / time))
    }
}
