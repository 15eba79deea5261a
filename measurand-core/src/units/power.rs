//! Power units.
//!
//! The base unit for this dimension is [`PowerUnit::Watt`].
//!
//! - SI multiples of the watt from milliwatt to gigawatt.
//! - Mechanical (`550 ft·lbf/s`) and metric (`75 kgf·m/s`) horsepower.
//! - Nominal solar luminosity (IAU 2015 Resolution B3).
//!
//! ```rust
//! use measurand_core::power::{PowerExt, PowerUnit};
//!
//! let sol = 1.0_f64.solar_luminosities();
//! let w = sol.convert_to(PowerUnit::Watt);
//! assert_eq!(w.value(), 3.828e26);
//! ```

use crate::energy::Energy;
use crate::force::Force;
use crate::time::Time;
use crate::velocity::Velocity;
use crate::{Dimension, Error, Quantity, Result};
use measurand_derive::Unit;

/// Dimension tag for power (energy / time).
#[derive(Debug)]
pub enum PowerDim {}
impl Dimension for PowerDim {
    const NAME: &'static str = "power";
}

const G0: f64 = 9.806_65;
const FOOT_POUND_FORCE: f64 = 0.3048 * 0.453_592_37 * G0;
const BTU: f64 = 1_055.055_852_62;

/// Units of power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = PowerDim, base = Watt)]
pub enum PowerUnit {
    /// Milliwatt, `1e-3 W`.
    #[unit(symbol = "mW", ratio = 1e-3)]
    Milliwatt,
    /// Watt (SI coherent unit).
    #[unit(symbol = "W", ratio = 1.0)]
    Watt,
    /// Kilowatt, `1000 W`.
    #[unit(symbol = "kW", ratio = 1e3)]
    Kilowatt,
    /// Megawatt, `1e6 W`.
    #[unit(symbol = "MW", ratio = 1e6)]
    Megawatt,
    /// Gigawatt, `1e9 W`.
    #[unit(symbol = "GW", ratio = 1e9)]
    Gigawatt,
    /// Mechanical horsepower, `550 ft·lbf/s ≈ 745.7 W`.
    #[unit(symbol = "hp", ratio = 550.0 * FOOT_POUND_FORCE)]
    Horsepower,
    /// Metric horsepower (Pferdestärke), `75 kgf·m/s = 735.49875 W`.
    #[unit(symbol = "PS", ratio = 75.0 * G0)]
    MetricHorsepower,
    /// BTU (International Table) per hour.
    #[unit(symbol = "BTU/h", ratio = BTU / 3_600.0)]
    BtuPerHour,
    /// Nominal solar luminosity, `3.828e26 W`.
    #[unit(symbol = "L☉", ratio = 3.828e26)]
    SolarLuminosity,
}

/// A power.
pub type Power = Quantity<PowerUnit>;

quantity_shorthands!(PowerUnit, PowerExt {
    Milliwatt => milliwatts, in_milliwatts;
    Watt => watts, in_watts;
    Kilowatt => kilowatts, in_kilowatts;
    Megawatt => megawatts, in_megawatts;
    Gigawatt => gigawatts, in_gigawatts;
    Horsepower => horsepower, in_horsepower;
    MetricHorsepower => metric_horsepower, in_metric_horsepower;
    BtuPerHour => btus_per_hour, in_btus_per_hour;
    SolarLuminosity => solar_luminosities, in_solar_luminosities;
});

impl Quantity<PowerUnit> {
    /// Mean power of `energy` transferred during `time`: `P = E / t`.
    ///
    /// Fails with [`Error::InvalidArgument`] when the time is zero.
    pub fn from_energy_and_time(energy: Energy, time: Time) -> Result<Power> {
        let time = time.base_value();
        if time == 0.0 {
            return Err(Error::InvalidArgument("time must not be zero"));
        }
        Ok(Power::base(energy.base_value() / time))
    }

    /// Power of `force` acting on a body moving at `velocity`: `P = F · v`.
    pub fn from_force_and_velocity(force: Force, velocity: Velocity) -> Power {
        Power::base(force.base_value() * velocity.base_value())
    }
}
