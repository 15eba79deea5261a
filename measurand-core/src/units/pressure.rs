//! Pressure units.
//!
//! The base unit for this dimension is [`PressureUnit::Pascal`].
//!
//! ```rust
//! use measurand_core::pressure::{PressureExt, STANDARD_ATMOSPHERE};
//!
//! assert_eq!(STANDARD_ATMOSPHERE.in_pascals(), 101_325.0);
//! assert!((1.0_f64.bars().in_atmospheres() - 0.986_923).abs() < 1e-6);
//! ```

use crate::area::Area;
use crate::force::Force;
use crate::{Dimension, Error, Quantity, Result};
use measurand_derive::Unit;

/// Dimension tag for pressure (force / area).
#[derive(Debug)]
pub enum PressureDim {}
impl Dimension for PressureDim {
    const NAME: &'static str = "pressure";
}

const ATMOSPHERE: f64 = 101_325.0;
const POUND_FORCE: f64 = 0.453_592_37 * 9.806_65;
const SQUARE_INCH: f64 = 0.0254 * 0.0254;

/// Units of pressure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = PressureDim, base = Pascal)]
pub enum PressureUnit {
    /// Pascal (SI coherent unit).
    #[unit(symbol = "Pa", ratio = 1.0)]
    Pascal,
    /// Hectopascal, `100 Pa`.
    #[unit(symbol = "hPa", ratio = 1e2)]
    Hectopascal,
    /// Kilopascal, `1000 Pa`.
    #[unit(symbol = "kPa", ratio = 1e3)]
    Kilopascal,
    /// Megapascal, `1e6 Pa`.
    #[unit(symbol = "MPa", ratio = 1e6)]
    Megapascal,
    /// Millibar, `100 Pa`.
    #[unit(symbol = "mbar", ratio = 1e2)]
    Millibar,
    /// Bar, `1e5 Pa`.
    #[unit(symbol = "bar", ratio = 1e5)]
    Bar,
    /// Standard atmosphere, `101 325 Pa` (exact).
    #[unit(symbol = "atm", ratio = ATMOSPHERE)]
    Atmosphere,
    /// Conventional millimetre of mercury, `133.322387415 Pa`.
    #[unit(symbol = "mmHg", ratio = 133.322_387_415)]
    MillimeterOfMercury,
    /// Pound-force per square inch.
    #[unit(symbol = "psi", ratio = POUND_FORCE / SQUARE_INCH)]
    PoundPerSquareInch,
}

/// A pressure.
pub type Pressure = Quantity<PressureUnit>;

quantity_shorthands!(PressureUnit, PressureExt {
    Pascal => pascals, in_pascals;
    Hectopascal => hectopascals, in_hectopascals;
    Kilopascal => kilopascals, in_kilopascals;
    Megapascal => megapascals, in_megapascals;
    Millibar => millibars, in_millibars;
    Bar => bars, in_bars;
    Atmosphere => atmospheres, in_atmospheres;
    MillimeterOfMercury => millimeters_of_mercury, in_millimeters_of_mercury;
    PoundPerSquareInch => psi, in_psi;
});

/// Standard atmosphere, `101 325 Pa`.
pub const STANDARD_ATMOSPHERE: Pressure = Pressure::new(ATMOSPHERE, PressureUnit::Pascal);

impl Quantity<PressureUnit> {
    /// Pressure of `force` spread evenly over `area`: `p = F / A`.
    ///
    /// Fails with [`Error::InvalidArgument`] when the area is zero.
    pub fn from_force_and_area(force: Force, area: Area) -> Result<Pressure> {
        let area = area.base_value();
        if area == 0.0 {
            return Err(Error::InvalidArgument("area must not be zero"));
        }
        Ok(Pressure::base(force.base_value() / area))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::{AreaExt, AreaUnit};
    use crate::force::ForceExt;
    use approx::assert_relative_eq;
    use core::cmp::Ordering;
    use proptest::prelude::*;

    #[test]
    fn metric_ladder() {
        assert_eq!(1.0_f64.hectopascals().in_millibars(), 1.0);
        assert_relative_eq!(1.0_f64.bars().in_kilopascals(), 100.0, max_relative = 1e-12);
        assert_relative_eq!(1.0_f64.megapascals().in_bars(), 10.0, max_relative = 1e-12);
    }

    #[test]
    fn atmosphere_equivalents() {
        let atm = 1.0_f64.atmospheres();
        assert_relative_eq!(atm.in_millimeters_of_mercury(), 760.0, max_relative = 1e-6);
        assert_relative_eq!(atm.in_psi(), 14.695_95, max_relative = 1e-6);
        assert_relative_eq!(atm.in_hectopascals(), 1013.25, max_relative = 1e-12);
        assert!(STANDARD_ATMOSPHERE.magnitude_eq(&atm));
        assert!(STANDARD_ATMOSPHERE != atm);
    }

    #[test]
    fn bar_is_below_atmosphere() {
        assert_eq!(1.0_f64.bars().compare_to(&1.0_f64.atmospheres()), Ordering::Less);
        assert_eq!(1.0_f64.bars().max(1.0_f64.atmospheres()), 1.0_f64.atmospheres());
    }

    #[test]
    fn from_force_and_area() {
        let p = Pressure::from_force_and_area(10.0_f64.newtons(), 2.0_f64.square_meters()).unwrap();
        assert_eq!(p.unit(), PressureUnit::Pascal);
        assert_eq!(p.value(), 5.0);
    }

    #[test]
    fn from_force_and_zero_area_fails() {
        for &unit in <AreaUnit as crate::Unit>::VARIANTS {
            assert_eq!(
                Pressure::from_force_and_area(1.0_f64.newtons(), Area::new(0.0, unit)),
                Err(Error::InvalidArgument("area must not be zero"))
            );
        }
    }

    #[test]
    fn parse_pressure() {
        assert_eq!("1013 hPa".parse::<Pressure>(), Ok(1013.0_f64.hectopascals()));
        assert_eq!("2 mbar".parse::<Pressure>(), Ok(2.0_f64.millibars()));
        assert_eq!("2 bar".parse::<Pressure>(), Ok(2.0_f64.bars()));
        assert_eq!("30 psi".parse::<Pressure>(), Ok(30.0_f64.psi()));
    }

    #[test]
    fn scalar_division_by_zero() {
        assert_eq!(STANDARD_ATMOSPHERE / 0.0, Err(Error::DivisionByZero));
    }

    proptest! {
        #[test]
        fn prop_roundtrip_psi_kpa(v in -1e6..1e6f64) {
            let back = v.psi().convert_to(PressureUnit::Kilopascal).convert_to(PressureUnit::PoundPerSquareInch);
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }
}
