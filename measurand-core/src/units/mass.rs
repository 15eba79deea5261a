//! Mass units.
//!
//! The base unit for this dimension is [`MassUnit::Kilogram`].
//!
//! - **SI**: microgram through tonne.
//! - **Defined non-SI**: avoirdupois pound, ounce, stone, and the grain.
//! - **Science/astro**: atomic mass unit (u/Da), nominal solar mass.
//!
//! ```rust
//! use measurand_core::mass::{MassExt, MassUnit};
//!
//! let m = 1.0_f64.kilograms();
//! let sm = m.convert_to(MassUnit::SolarMass);
//! assert!(sm.value() < 1.0);
//! ```

use crate::density::Density;
use crate::volume::Volume;
use crate::{Dimension, Quantity};
use measurand_derive::Unit;

/// Dimension tag for mass.
#[derive(Debug)]
pub enum MassDim {}
impl Dimension for MassDim {
    const NAME: &'static str = "mass";
}

/// Avoirdupois pound in kilograms: `1 lb = 0.45359237 kg` (exact).
const POUND: f64 = 0.453_592_37;

/// Units of mass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = MassDim, base = Kilogram)]
pub enum MassUnit {
    /// Microgram, `1e-9 kg`.
    #[unit(symbol = "µg", ratio = 1e-9)]
    Microgram,
    /// Milligram, `1e-6 kg`.
    #[unit(symbol = "mg", ratio = 1e-6)]
    Milligram,
    /// Gram, `1e-3 kg`.
    #[unit(symbol = "g", ratio = 1e-3)]
    Gram,
    /// Kilogram (SI base unit).
    #[unit(symbol = "kg", ratio = 1.0)]
    Kilogram,
    /// Tonne (metric ton), `1000 kg`.
    #[unit(symbol = "t", ratio = 1e3)]
    Tonne,
    /// Grain: `1 gr = 64.79891 mg` (exact).
    #[unit(symbol = "gr", ratio = 64.798_91e-6)]
    Grain,
    /// Avoirdupois ounce: `1/16 lb` (exact).
    #[unit(symbol = "oz", ratio = POUND / 16.0)]
    Ounce,
    /// Avoirdupois pound: `0.45359237 kg` (exact).
    #[unit(symbol = "lb", ratio = POUND)]
    Pound,
    /// Avoirdupois stone: `14 lb` (exact).
    #[unit(symbol = "st", ratio = POUND * 14.0)]
    Stone,
    /// Unified atomic mass unit (dalton), CODATA 2022 value.
    #[unit(symbol = "u", ratio = 1.660_539_068_92e-27)]
    AtomicMassUnit,
    /// Nominal solar mass (IAU 2015 Resolution B3).
    ///
    /// This is a conversion constant, not a best estimate of the Sun's true mass.
    #[unit(symbol = "M☉", ratio = 1.988_416e30)]
    SolarMass,
}

/// A mass.
pub type Mass = Quantity<MassUnit>;

quantity_shorthands!(MassUnit, MassExt {
    Microgram => micrograms, in_micrograms;
    Milligram => milligrams, in_milligrams;
    Gram => grams, in_grams;
    Kilogram => kilograms, in_kilograms;
    Tonne => tonnes, in_tonnes;
    Grain => grains, in_grains;
    Ounce => ounces, in_ounces;
    Pound => pounds, in_pounds;
    Stone => stones, in_stones;
    AtomicMassUnit => atomic_mass_units, in_atomic_mass_units;
    SolarMass => solar_masses, in_solar_masses;
});

/// Mass of the Earth (IAU 2015 nominal `GM` over CODATA `G`, rounded).
pub const EARTH_MASS: Mass = Mass::new(5.9722e24, MassUnit::Kilogram);

/// One nominal solar mass.
pub const SOLAR_MASS: Mass = Mass::new(1.0, MassUnit::SolarMass);

impl Quantity<MassUnit> {
    /// Mass of `volume` of a material of the given `density`: `m = ρ · V`.
    ///
    /// ```rust
    /// use measurand_core::density::WATER_DENSITY;
    /// use measurand_core::mass::Mass;
    /// use measurand_core::volume::VolumeExt;
    ///
    /// let m = Mass::from_density_and_volume(WATER_DENSITY, 2.0_f64.liters());
    /// assert!((m.in_kilograms() - 2.0).abs() < 1e-12);
    /// ```
    pub fn from_density_and_volume(density: Density, volume: Volume) -> Mass {
        Mass::base(density.base_value() * volume.base_value())
    }
}
