//! Force units.
//!
//! The base unit for this dimension is [`ForceUnit::Newton`].
//!
//! ```rust
//! use measurand_core::acceleration::AccelerationExt;
//! use measurand_core::force::Force;
//! use measurand_core::mass::MassExt;
//!
//! let f = Force::from_mass_and_acceleration(10.0_f64.kilograms(), 2.0_f64.meters_per_second_squared());
//! assert_eq!(f.in_newtons(), 20.0);
//!
//! let a = f.acceleration_of(10.0_f64.kilograms()).unwrap();
//! assert_eq!(a.in_meters_per_second_squared(), f.in_newtons() / 10.0);
//! ```

use crate::acceleration::{Acceleration, STANDARD_GRAVITY};
use crate::area::Area;
use crate::mass::Mass;
use crate::pressure::Pressure;
use crate::{Dimension, Error, Quantity, Result};
use measurand_derive::Unit;

/// Dimension tag for force (mass · length / time²).
#[derive(Debug)]
pub enum ForceDim {}
impl Dimension for ForceDim {
    const NAME: &'static str = "force";
}

const G0: f64 = 9.806_65;
const POUND: f64 = 0.453_592_37;

/// Units of force.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = ForceDim, base = Newton)]
pub enum ForceUnit {
    /// Dyne (CGS), `1e-5 N`.
    #[unit(symbol = "dyn", ratio = 1e-5)]
    Dyne,
    /// Millinewton, `1e-3 N`.
    #[unit(symbol = "mN", ratio = 1e-3)]
    Millinewton,
    /// Newton (SI coherent unit).
    #[unit(symbol = "N", ratio = 1.0)]
    Newton,
    /// Kilonewton, `1000 N`.
    #[unit(symbol = "kN", ratio = 1e3)]
    Kilonewton,
    /// Meganewton, `1e6 N`.
    #[unit(symbol = "MN", ratio = 1e6)]
    Meganewton,
    /// Kilogram-force: weight of one kilogram under standard gravity.
    #[unit(symbol = "kgf", ratio = G0)]
    KilogramForce,
    /// Pound-force: weight of one avoirdupois pound under standard gravity.
    #[unit(symbol = "lbf", ratio = POUND * G0)]
    PoundForce,
    /// Kip, `1000 lbf`.
    #[unit(symbol = "kip", ratio = 1e3 * POUND * G0)]
    Kip,
}

/// A force.
pub type Force = Quantity<ForceUnit>;

quantity_shorthands!(ForceUnit, ForceExt {
    Dyne => dynes, in_dynes;
    Millinewton => millinewtons, in_millinewtons;
    Newton => newtons, in_newtons;
    Kilonewton => kilonewtons, in_kilonewtons;
    Meganewton => meganewtons, in_meganewtons;
    KilogramForce => kilograms_force, in_kilograms_force;
    PoundForce => pounds_force, in_pounds_force;
    Kip => kips, in_kips;
});

impl Quantity<ForceUnit> {
    /// Newton's second law: `F = m · a`.
    pub fn from_mass_and_acceleration(mass: Mass, acceleration: Acceleration) -> Force {
        Force::base(mass.base_value() * acceleration.base_value())
    }

    /// Force exerted by `pressure` on `area`: `F = p · A`.
    pub fn from_pressure_and_area(pressure: Pressure, area: Area) -> Force {
        Force::base(pressure.base_value() * area.base_value())
    }

    /// Weight of `mass` under standard gravity: `W = m · g₀`.
    pub fn weight_of(mass: Mass) -> Force {
        Force::from_mass_and_acceleration(mass, STANDARD_GRAVITY)
    }

    /// Acceleration this force gives to `mass`: `a = F / m`.
    ///
    /// Fails with [`Error::InvalidArgument`] when the mass is zero.
    pub fn acceleration_of(&self, mass: Mass) -> Result<Acceleration> {
        Acceleration::from_force_and_mass(*self, mass)
    }

    /// Mass that this force accelerates at `acceleration`: `m = F / a`.
    ///
    /// Fails with [`Error::InvalidArgument`] when the acceleration is zero.
    pub fn mass_from(&self, acceleration: Acceleration) -> Result<Mass> {
        let acceleration = acceleration.base_value();
        if acceleration == 0.0 {
            return Err(Error::InvalidArgument("acceleration must not be zero"));
        }
        Ok(Mass::base(self.base_value() / acceleration))
    }
}
