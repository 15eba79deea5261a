//! Mass density units.
//!
//! The base unit for this dimension is [`DensityUnit::KilogramPerCubicMeter`].
//!
//! Density is one of the derived dimensions with bespoke formulas: `ρ = m / V`, plus the inverse forms
//! [`Density::mass_of`](Quantity::mass_of) and [`Density::volume_of`](Quantity::volume_of).
//!
//! ```rust
//! use measurand_core::density::{Density, DensityUnit};
//! use measurand_core::mass::MassExt;
//! use measurand_core::volume::VolumeExt;
//!
//! let rho = Density::from_mass_and_volume(1000.0_f64.kilograms(), 1.0_f64.cubic_meters()).unwrap();
//! assert_eq!(rho.in_kilograms_per_cubic_meter(), 1000.0);
//!
//! assert!(Density::from_mass_and_volume(1.0_f64.kilograms(), 0.0_f64.liters()).is_err());
//! ```

use crate::mass::Mass;
use crate::volume::Volume;
use crate::{Dimension, Error, Quantity, Result};
use measurand_derive::Unit;

/// Dimension tag for mass density (mass / volume).
#[derive(Debug)]
pub enum DensityDim {}
impl Dimension for DensityDim {
    const NAME: &'static str = "density";
}

const POUND: f64 = 0.453_592_37;
const CUBIC_FOOT: f64 = 0.3048 * 0.3048 * 0.3048;
const CUBIC_INCH: f64 = 0.0254 * 0.0254 * 0.0254;
const US_GALLON: f64 = 3.785_411_784e-3;

/// Units of mass density.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = DensityDim, base = KilogramPerCubicMeter)]
pub enum DensityUnit {
    /// Kilogram per cubic metre (SI base unit).
    #[unit(symbol = "kg/m³", ratio = 1.0)]
    KilogramPerCubicMeter,
    /// Gram per cubic metre, `1e-3 kg/m³`.
    #[unit(symbol = "g/m³", ratio = 1e-3)]
    GramPerCubicMeter,
    /// Gram per cubic centimetre, `1000 kg/m³`.
    #[unit(symbol = "g/cm³", ratio = 1e3)]
    GramPerCubicCentimeter,
    /// Gram per millilitre, `1000 kg/m³`.
    #[unit(symbol = "g/mL", ratio = 1e3)]
    GramPerMilliliter,
    /// Kilogram per litre, `1000 kg/m³`.
    #[unit(symbol = "kg/L", ratio = 1e3)]
    KilogramPerLiter,
    /// Kilogram per cubic decimetre, `1000 kg/m³`.
    #[unit(symbol = "kg/dm³", ratio = 1e3)]
    KilogramPerCubicDecimeter,
    /// Pound per cubic foot.
    #[unit(symbol = "lb/ft³", ratio = POUND / CUBIC_FOOT)]
    PoundPerCubicFoot,
    /// Pound per cubic inch.
    #[unit(symbol = "lb/in³", ratio = POUND / CUBIC_INCH)]
    PoundPerCubicInch,
    /// Pound per US liquid gallon.
    #[unit(symbol = "lb/gal", ratio = POUND / US_GALLON)]
    PoundPerGallon,
}

/// A mass density.
pub type Density = Quantity<DensityUnit>;

quantity_shorthands!(DensityUnit, DensityExt {
    KilogramPerCubicMeter => kilograms_per_cubic_meter, in_kilograms_per_cubic_meter;
    GramPerCubicMeter => grams_per_cubic_meter, in_grams_per_cubic_meter;
    GramPerCubicCentimeter => grams_per_cubic_centimeter, in_grams_per_cubic_centimeter;
    GramPerMilliliter => grams_per_milliliter, in_grams_per_milliliter;
    KilogramPerLiter => kilograms_per_liter, in_kilograms_per_liter;
    KilogramPerCubicDecimeter => kilograms_per_cubic_decimeter, in_kilograms_per_cubic_decimeter;
    PoundPerCubicFoot => pounds_per_cubic_foot, in_pounds_per_cubic_foot;
    PoundPerCubicInch => pounds_per_cubic_inch, in_pounds_per_cubic_inch;
    PoundPerGallon => pounds_per_gallon, in_pounds_per_gallon;
});

/// Nominal density of liquid water, `1000 kg/m³`.
pub const WATER_DENSITY: Density = Density::new(1000.0, DensityUnit::KilogramPerCubicMeter);

impl Quantity<DensityUnit> {
    /// Density of `mass` spread over `volume`: `ρ = m / V`.
    ///
    /// Fails with [`Error::InvalidArgument`] when the volume is zero.
    pub fn from_mass_and_volume(mass: Mass, volume: Volume) -> Result<Density> {
        let volume = volume.base_value();
        if volume == 0.0 {
            return Err(Error::InvalidArgument("volume must not be zero"));
        }
        Ok(Density::base(mass.base_value() / volume))
    }

    /// Mass of `volume` of this material: `m = ρ · V`.
    pub fn mass_of(&self, volume: Volume) -> Mass {
        Mass::from_density_and_volume(*self, volume)
    }

    /// Volume occupied by `mass` of this material: `V = m / ρ`.
    ///
    /// Fails with [`Error::InvalidArgument`] when this density is zero.
    pub fn volume_of(&self, mass: Mass) -> Result<Volume> {
        let density = self.base_value();
        if density == 0.0 {
            return Err(Error::InvalidArgument("density must not be zero"));
        }
        Ok(Volume::base(mass.base_value() / density))
    }
}
