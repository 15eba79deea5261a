//! Energy units.
//!
//! The base unit for this dimension is [`EnergyUnit::Joule`].
//!
//! - The calorie is the **thermochemical** calorie (`4.184 J`).
//! - The BTU is the **International Table** BTU (`1055.05585262 J`).
//!
//! ```rust
//! use measurand_core::energy::{Energy, EnergyExt};
//! use measurand_core::mass::MassExt;
//! use measurand_core::velocity::VelocityExt;
//!
//! let e = Energy::kinetic(2.0_f64.kilograms(), 3.0_f64.meters_per_second());
//! assert_eq!(e.in_joules(), 9.0);
//! assert_eq!(1.0_f64.kilowatt_hours().in_megajoules(), 3.6);
//! ```

use crate::force::Force;
use crate::length::Length;
use crate::mass::Mass;
use crate::power::Power;
use crate::time::Time;
use crate::velocity::Velocity;
use crate::{Dimension, Quantity, Result};
use measurand_derive::Unit;

/// Dimension tag for energy (force · length).
#[derive(Debug)]
pub enum EnergyDim {}
impl Dimension for EnergyDim {
    const NAME: &'static str = "energy";
}

/// Units of energy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = EnergyDim, base = Joule)]
pub enum EnergyUnit {
    /// Electronvolt, `1.602176634e-19 J` (exact since 2019).
    #[unit(symbol = "eV", ratio = 1.602_176_634e-19)]
    Electronvolt,
    /// Erg (CGS), `1e-7 J`.
    #[unit(symbol = "erg", ratio = 1e-7)]
    Erg,
    /// Joule (SI coherent unit).
    #[unit(symbol = "J", ratio = 1.0)]
    Joule,
    /// Kilojoule, `1000 J`.
    #[unit(symbol = "kJ", ratio = 1e3)]
    Kilojoule,
    /// Megajoule, `1e6 J`.
    #[unit(symbol = "MJ", ratio = 1e6)]
    Megajoule,
    /// Thermochemical calorie, `4.184 J`.
    #[unit(symbol = "cal", ratio = 4.184)]
    Calorie,
    /// Thermochemical kilocalorie, `4184 J`.
    #[unit(symbol = "kcal", ratio = 4_184.0)]
    Kilocalorie,
    /// Watt-hour, `3600 J`.
    #[unit(symbol = "Wh", ratio = 3_600.0)]
    WattHour,
    /// Kilowatt-hour, `3.6 MJ`.
    #[unit(symbol = "kWh", ratio = 3.6e6)]
    KilowattHour,
    /// British thermal unit (International Table).
    #[unit(symbol = "BTU", ratio = 1_055.055_852_62)]
    BritishThermalUnit,
}

/// An amount of energy.
pub type Energy = Quantity<EnergyUnit>;

quantity_shorthands!(EnergyUnit, EnergyExt {
    Electronvolt => electronvolts, in_electronvolts;
    Erg => ergs, in_ergs;
    Joule => joules, in_joules;
    Kilojoule => kilojoules, in_kilojoules;
    Megajoule => megajoules, in_megajoules;
    Calorie => calories, in_calories;
    Kilocalorie => kilocalories, in_kilocalories;
    WattHour => watt_hours, in_watt_hours;
    KilowattHour => kilowatt_hours, in_kilowatt_hours;
    BritishThermalUnit => btus, in_btus;
});

impl Quantity<EnergyUnit> {
    /// Work done by `force` along `distance`: `W = F · d`.
    pub fn from_force_and_length(force: Force, distance: Length) -> Energy {
        Energy::base(force.base_value() * distance.base_value())
    }

    /// Kinetic energy of `mass` moving at `velocity`: `E = ½ m v²`.
    pub fn kinetic(mass: Mass, velocity: Velocity) -> Energy {
        let v = velocity.base_value();
        Energy::base(0.5 * mass.base_value() * v * v)
    }

    /// Energy delivered by constant `power` during `time`: `E = P · t`.
    pub fn from_power_and_time(power: Power, time: Time) -> Energy {
        Energy::base(power.base_value() * time.base_value())
    }

    /// Potential energy gained lifting `mass` by `height` under standard gravity: `E = m · g₀ · h`.
    ///
    /// Uses [`STANDARD_GRAVITY`](crate::acceleration::STANDARD_GRAVITY) through [`Force::weight_of`].
    pub fn gravitational_potential(mass: Mass, height: Length) -> Energy {
        Energy::from_force_and_length(Force::weight_of(mass), height)
    }

    /// Mean power when this energy is spent over `time`; see [`Power::from_energy_and_time`].
    pub fn power_over(&self, time: Time) -> Result<Power> {
        Power::from_energy_and_time(*self, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::force::ForceExt;
    use crate::length::LengthExt;
    use crate::mass::MassExt;
    use crate::power::PowerExt;
    use crate::time::TimeExt;
    use crate::velocity::VelocityExt;
    use crate::Error;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn electrical_units() {
        assert_eq!(1.0_f64.watt_hours().in_joules(), 3600.0);
        assert_relative_eq!(1.0_f64.kilowatt_hours().in_watt_hours(), 1e3, max_relative = 1e-12);
        assert_relative_eq!(1.0_f64.kilowatt_hours().in_megajoules(), 3.6, max_relative = 1e-12);
    }

    #[test]
    fn thermal_units() {
        assert_relative_eq!(1.0_f64.kilocalories().in_calories(), 1e3, max_relative = 1e-12);
        assert_relative_eq!(1.0_f64.btus().in_kilojoules(), 1.055_055_852_62, max_relative = 1e-12);
        assert_relative_eq!(1.0_f64.btus().in_calories(), 252.164, max_relative = 1e-5);
    }

    #[test]
    fn microscopic_units() {
        assert_relative_eq!(1.0_f64.joules().in_ergs(), 1e7, max_relative = 1e-12);
        assert_relative_eq!(1.0_f64.joules().in_electronvolts(), 6.241_509_074e18, max_relative = 1e-9);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Formulas
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn work_from_force_and_distance() {
        let e = Energy::from_force_and_length(2.0_f64.kilonewtons(), 3.0_f64.meters());
        assert_eq!(e.unit(), EnergyUnit::Joule);
        assert_relative_eq!(e.in_kilojoules(), 6.0, max_relative = 1e-12);
    }

    #[test]
    fn kinetic_energy() {
        let e = Energy::kinetic(1_000.0_f64.kilograms(), 72.0_f64.kilometers_per_hour());
        assert_relative_eq!(e.in_kilojoules(), 200.0, max_relative = 1e-12);
    }

    #[test]
    fn energy_from_power_and_time() {
        let e = Energy::from_power_and_time(2.0_f64.kilowatts(), 3.0_f64.hours());
        assert_relative_eq!(e.in_kilowatt_hours(), 6.0, max_relative = 1e-12);
    }

    #[test]
    fn gravitational_potential() {
        let e = Energy::gravitational_potential(10.0_f64.kilograms(), 2.0_f64.meters());
        assert_relative_eq!(e.in_joules(), 196.133, max_relative = 1e-12);
    }

    #[test]
    fn power_over_time() {
        let p = 3.6_f64.megajoules().power_over(1.0_f64.hours()).unwrap();
        assert_relative_eq!(p.in_kilowatts(), 1.0, max_relative = 1e-12);
        assert!(matches!(
            1.0_f64.joules().power_over(0.0_f64.seconds()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn parse_energy() {
        assert_eq!("5 kWh".parse::<Energy>(), Ok(5.0_f64.kilowatt_hours()));
        assert_eq!("5 Wh".parse::<Energy>(), Ok(5.0_f64.watt_hours()));
        assert_eq!("200 kcal".parse::<Energy>(), Ok(200.0_f64.kilocalories()));
        assert_eq!("13.6 eV".parse::<Energy>(), Ok(13.6_f64.electronvolts()));
    }

    #[test]
    fn scalar_division_by_zero() {
        assert_eq!(1.0_f64.joules() / 0.0, Err(Error::DivisionByZero));
    }

    proptest! {
        #[test]
        fn prop_kinetic_energy_scales_quadratically(m in 1e-3..1e3f64, v in 1e-3..1e3f64) {
            let e1 = Energy::kinetic(m.kilograms(), v.meters_per_second());
            let e2 = Energy::kinetic(m.kilograms(), (2.0 * v).meters_per_second());
            prop_assert!((e2.in_joules() - 4.0 * e1.in_joules()).abs() <= 1e-9 * e2.in_joules());
        }
    }
}
