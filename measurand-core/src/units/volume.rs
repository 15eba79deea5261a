//! Volume units.
//!
//! The base unit for this dimension is [`VolumeUnit::CubicMeter`]. US customary liquid measures are based on the
//! US gallon of `231 in³`.
//!
//! ```rust
//! use measurand_core::volume::{VolumeExt, VolumeUnit};
//!
//! let v = 1.0_f64.liters();
//! assert!((v.in_milliliters() - 1000.0).abs() < 1e-9);
//! assert_eq!(v.convert_to(VolumeUnit::CubicMeter).value(), 1e-3);
//! ```

use crate::area::Area;
use crate::length::{Length, LengthUnit};
use crate::math;
use crate::{Dimension, Quantity};
use measurand_derive::Unit;

/// Dimension tag for volume (length cubed).
#[derive(Debug)]
pub enum VolumeDim {}
impl Dimension for VolumeDim {
    const NAME: &'static str = "volume";
}

const CUBIC_INCH: f64 = 0.0254 * 0.0254 * 0.0254;
const CUBIC_FOOT: f64 = 0.3048 * 0.3048 * 0.3048;
const US_GALLON: f64 = 3.785_411_784e-3;

/// Units of volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = VolumeDim, base = CubicMeter)]
pub enum VolumeUnit {
    /// Cubic millimetre, `1e-9 m³`.
    #[unit(symbol = "mm³", ratio = 1e-9)]
    CubicMillimeter,
    /// Cubic centimetre, `1e-6 m³`.
    #[unit(symbol = "cm³", ratio = 1e-6)]
    CubicCentimeter,
    /// Millilitre, `1e-6 m³`.
    #[unit(symbol = "mL", ratio = 1e-6)]
    Milliliter,
    /// Litre, `1e-3 m³`.
    #[unit(symbol = "L", ratio = 1e-3)]
    Liter,
    /// Cubic decimetre, `1e-3 m³`.
    #[unit(symbol = "dm³", ratio = 1e-3)]
    CubicDecimeter,
    /// Cubic metre (SI coherent unit).
    #[unit(symbol = "m³", ratio = 1.0)]
    CubicMeter,
    /// Cubic inch.
    #[unit(symbol = "in³", ratio = CUBIC_INCH)]
    CubicInch,
    /// Cubic foot.
    #[unit(symbol = "ft³", ratio = CUBIC_FOOT)]
    CubicFoot,
    /// US fluid ounce, `1/128 gal`.
    #[unit(symbol = "fl oz", ratio = US_GALLON / 128.0)]
    FluidOunce,
    /// US liquid pint, `1/8 gal`.
    #[unit(symbol = "pt", ratio = US_GALLON / 8.0)]
    Pint,
    /// US liquid quart, `1/4 gal`.
    #[unit(symbol = "qt", ratio = US_GALLON / 4.0)]
    Quart,
    /// US liquid gallon, `231 in³ = 3.785411784 L` (exact).
    #[unit(symbol = "gal", ratio = US_GALLON)]
    Gallon,
    /// Oil barrel, `42 gal`.
    #[unit(symbol = "bbl", ratio = US_GALLON * 42.0)]
    Barrel,
}

/// A volume.
pub type Volume = Quantity<VolumeUnit>;

quantity_shorthands!(VolumeUnit, VolumeExt {
    CubicMillimeter => cubic_millimeters, in_cubic_millimeters;
    CubicCentimeter => cubic_centimeters, in_cubic_centimeters;
    Milliliter => milliliters, in_milliliters;
    Liter => liters, in_liters;
    CubicDecimeter => cubic_decimeters, in_cubic_decimeters;
    CubicMeter => cubic_meters, in_cubic_meters;
    CubicInch => cubic_inches, in_cubic_inches;
    CubicFoot => cubic_feet, in_cubic_feet;
    FluidOunce => fluid_ounces, in_fluid_ounces;
    Pint => pints, in_pints;
    Quart => quarts, in_quarts;
    Gallon => gallons, in_gallons;
    Barrel => barrels, in_barrels;
});

impl Quantity<VolumeUnit> {
    /// Volume of a prism with base `area` and height `height`: `V = A · h`.
    pub fn from_area_and_length(area: Area, height: Length) -> Volume {
        Volume::base(area.base_value() * height.base_value())
    }

    /// Volume of a cube with the given edge: `V = e³`.
    ///
    /// ```rust
    /// use measurand_core::length::LengthExt;
    /// use measurand_core::volume::Volume;
    ///
    /// let v = Volume::cube(10.0_f64.centimeters());
    /// assert!((v.in_liters() - 1.0).abs() < 1e-12);
    /// ```
    pub fn cube(edge: Length) -> Volume {
        let e = edge.base_value();
        Volume::base(e * e * e)
    }

    /// Edge of the cube with this volume: `e = ∛V`, in metres.
    pub fn edge_of_cube(&self) -> Length {
        Length::new(math::cbrt(self.base_value()), LengthUnit::Meter)
    }
}
