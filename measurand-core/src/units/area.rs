//! Area units.
//!
//! The base unit for this dimension is [`AreaUnit::SquareMeter`].
//!
//! ```rust
//! use measurand_core::area::Area;
//! use measurand_core::length::LengthExt;
//!
//! let field = Area::from_lengths(100.0_f64.meters(), 50.0_f64.meters());
//! assert_eq!(field.in_hectares(), 0.5);
//! ```

use crate::length::{Length, LengthUnit};
use crate::math;
use crate::{Dimension, Quantity};
use measurand_derive::Unit;

/// Dimension tag for area (length squared).
#[derive(Debug)]
pub enum AreaDim {}
impl Dimension for AreaDim {
    const NAME: &'static str = "area";
}

const INCH: f64 = 0.0254;
const FOOT: f64 = 0.3048;
const YARD: f64 = 0.9144;
const MILE: f64 = 1_609.344;

/// Units of area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = AreaDim, base = SquareMeter)]
pub enum AreaUnit {
    /// Square millimetre, `1e-6 m²`.
    #[unit(symbol = "mm²", ratio = 1e-6)]
    SquareMillimeter,
    /// Square centimetre, `1e-4 m²`.
    #[unit(symbol = "cm²", ratio = 1e-4)]
    SquareCentimeter,
    /// Square metre (SI coherent unit).
    #[unit(symbol = "m²", ratio = 1.0)]
    SquareMeter,
    /// Are, `100 m²`.
    #[unit(symbol = "a", ratio = 1e2)]
    Are,
    /// Hectare, `10 000 m²`.
    #[unit(symbol = "ha", ratio = 1e4)]
    Hectare,
    /// Square kilometre, `1e6 m²`.
    #[unit(symbol = "km²", ratio = 1e6)]
    SquareKilometer,
    /// Square inch.
    #[unit(symbol = "in²", ratio = INCH * INCH)]
    SquareInch,
    /// Square foot.
    #[unit(symbol = "ft²", ratio = FOOT * FOOT)]
    SquareFoot,
    /// Square yard.
    #[unit(symbol = "yd²", ratio = YARD * YARD)]
    SquareYard,
    /// International acre, `4840 yd²`.
    #[unit(symbol = "ac", ratio = 4_840.0 * YARD * YARD)]
    Acre,
    /// Square statute mile.
    #[unit(symbol = "mi²", ratio = MILE * MILE)]
    SquareMile,
}

/// An area.
pub type Area = Quantity<AreaUnit>;

quantity_shorthands!(AreaUnit, AreaExt {
    SquareMillimeter => square_millimeters, in_square_millimeters;
    SquareCentimeter => square_centimeters, in_square_centimeters;
    SquareMeter => square_meters, in_square_meters;
    Are => ares, in_ares;
    Hectare => hectares, in_hectares;
    SquareKilometer => square_kilometers, in_square_kilometers;
    SquareInch => square_inches, in_square_inches;
    SquareFoot => square_feet, in_square_feet;
    SquareYard => square_yards, in_square_yards;
    Acre => acres, in_acres;
    SquareMile => square_miles, in_square_miles;
});

impl Quantity<AreaUnit> {
    /// Area of a rectangle with sides `a` and `b`: `A = a · b`.
    pub fn from_lengths(a: Length, b: Length) -> Area {
        Area::base(a.base_value() * b.base_value())
    }

    /// Side of the square with this area: `s = √A`, in metres.
    ///
    /// A negative area yields `NaN`.
    pub fn side_of_square(&self) -> Length {
        Length::new(math::sqrt(self.base_value()), LengthUnit::Meter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::LengthExt;
    use crate::Error;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn metric_ladder() {
        assert_relative_eq!(1.0_f64.square_meters().in_square_centimeters(), 1e4, max_relative = 1e-12);
        assert_relative_eq!(1.0_f64.hectares().in_ares(), 100.0, max_relative = 1e-12);
        assert_relative_eq!(1.0_f64.square_kilometers().in_hectares(), 100.0, max_relative = 1e-12);
        assert_relative_eq!(1.0_f64.square_centimeters().in_square_millimeters(), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn imperial_ladder() {
        assert_relative_eq!(1.0_f64.square_feet().in_square_inches(), 144.0, max_relative = 1e-12);
        assert_relative_eq!(1.0_f64.square_yards().in_square_feet(), 9.0, max_relative = 1e-12);
        assert_relative_eq!(1.0_f64.square_miles().in_acres(), 640.0, max_relative = 1e-12);
        assert_relative_eq!(1.0_f64.acres().in_square_meters(), 4_046.856_422_4, max_relative = 1e-12);
    }

    #[test]
    fn rectangle_from_mixed_units() {
        let a = Area::from_lengths(2.0_f64.meters(), 50.0_f64.centimeters());
        assert_eq!(a.unit(), AreaUnit::SquareMeter);
        assert_abs_diff_eq!(a.value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn side_of_square() {
        let side = 1.0_f64.hectares().side_of_square();
        assert_eq!(side.unit(), LengthUnit::Meter);
        assert_abs_diff_eq!(side.value(), 100.0, epsilon = 1e-9);
        assert!((-1.0_f64).square_meters().side_of_square().value().is_nan());
    }

    #[test]
    fn parse_area() {
        assert_eq!("2 ha".parse::<Area>(), Ok(2.0_f64.hectares()));
        assert_eq!("3 a".parse::<Area>(), Ok(3.0_f64.ares()));
        assert_eq!("4 km²".parse::<Area>(), Ok(4.0_f64.square_kilometers()));
        assert_eq!("1.5 m²".parse::<Area>(), Ok(1.5_f64.square_meters()));
    }

    #[test]
    fn scalar_division_by_zero() {
        assert_eq!(1.0_f64.acres() / 0.0, Err(Error::DivisionByZero));
    }

    proptest! {
        #[test]
        fn prop_square_side_roundtrip(s in 1e-3..1e6f64) {
            let area = Area::from_lengths(s.meters(), s.meters());
            let side = area.side_of_square();
            prop_assert!((side.in_meters() - s).abs() <= 1e-9 * s);
        }
    }
}
