//! Length units.
//!
//! The base unit for this dimension is [`LengthUnit::Meter`].
//!
//! - **SI**: nanometre through kilometre.
//! - **Imperial / survey**: inch, foot, yard, statute mile, international nautical mile (all exact).
//! - **Astronomical**: astronomical unit (IAU 2012, exact), Julian light year, parsec.
//!
//! ```rust
//! use measurand_core::length::{LengthExt, LengthUnit};
//!
//! let d = 1.0_f64.miles();
//! assert_eq!(d.in_meters(), 1609.344);
//! assert_eq!(d.convert_to(LengthUnit::Foot).unit(), LengthUnit::Foot);
//! ```

use crate::{Dimension, Quantity};
use core::f64::consts::PI;
use measurand_derive::Unit;

/// Dimension tag for length.
#[derive(Debug)]
pub enum LengthDim {}
impl Dimension for LengthDim {
    const NAME: &'static str = "length";
}

const SPEED_OF_LIGHT_M_PER_S: f64 = 299_792_458.0;
const SECONDS_PER_JULIAN_YEAR: f64 = 86_400.0 * 365.25;
const METERS_PER_AU: f64 = 149_597_870_700.0;

/// Units of length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = LengthDim, base = Meter)]
pub enum LengthUnit {
    /// Nanometre, `1e-9 m`.
    #[unit(symbol = "nm", ratio = 1e-9)]
    Nanometer,
    /// Micrometre, `1e-6 m`.
    #[unit(symbol = "µm", ratio = 1e-6)]
    Micrometer,
    /// Millimetre, `1e-3 m`.
    #[unit(symbol = "mm", ratio = 1e-3)]
    Millimeter,
    /// Centimetre, `1e-2 m`.
    #[unit(symbol = "cm", ratio = 1e-2)]
    Centimeter,
    /// Decimetre, `1e-1 m`.
    #[unit(symbol = "dm", ratio = 1e-1)]
    Decimeter,
    /// Metre (SI base unit).
    #[unit(symbol = "m", ratio = 1.0)]
    Meter,
    /// Kilometre, `1000 m`.
    #[unit(symbol = "km", ratio = 1e3)]
    Kilometer,
    /// International inch, `0.0254 m` (exact).
    #[unit(symbol = "in", ratio = 0.0254)]
    Inch,
    /// International foot, `0.3048 m` (exact).
    #[unit(symbol = "ft", ratio = 0.3048)]
    Foot,
    /// International yard, `0.9144 m` (exact).
    #[unit(symbol = "yd", ratio = 0.9144)]
    Yard,
    /// Statute mile, `1609.344 m` (exact).
    #[unit(symbol = "mi", ratio = 1_609.344)]
    Mile,
    /// International nautical mile, `1852 m` (exact).
    #[unit(symbol = "nmi", ratio = 1_852.0)]
    NauticalMile,
    /// Astronomical unit (IAU 2012 Resolution B2), `149 597 870 700 m` (exact).
    #[unit(symbol = "au", ratio = METERS_PER_AU)]
    AstronomicalUnit,
    /// Light year: distance light travels in one Julian year (`365.25 d`).
    #[unit(symbol = "ly", ratio = SPEED_OF_LIGHT_M_PER_S * SECONDS_PER_JULIAN_YEAR)]
    LightYear,
    /// Parsec: `1 au / tan(1″)`, using the IAU small-angle definition `648000/π au`.
    #[unit(symbol = "pc", ratio = METERS_PER_AU * 648_000.0 / PI)]
    Parsec,
}

/// A length.
pub type Length = Quantity<LengthUnit>;

quantity_shorthands!(LengthUnit, LengthExt {
    Nanometer => nanometers, in_nanometers;
    Micrometer => micrometers, in_micrometers;
    Millimeter => millimeters, in_millimeters;
    Centimeter => centimeters, in_centimeters;
    Decimeter => decimeters, in_decimeters;
    Meter => meters, in_meters;
    Kilometer => kilometers, in_kilometers;
    Inch => inches, in_inches;
    Foot => feet, in_feet;
    Yard => yards, in_yards;
    Mile => miles, in_miles;
    NauticalMile => nautical_miles, in_nautical_miles;
    AstronomicalUnit => astronomical_units, in_astronomical_units;
    LightYear => light_years, in_light_years;
    Parsec => parsecs, in_parsecs;
});

/// Mean radius of the Earth (IUGG), `6371.0088 km`.
pub const EARTH_RADIUS: Length = Length::new(6_371.008_8, LengthUnit::Kilometer);

/// One astronomical unit.
pub const ASTRONOMICAL_UNIT: Length = Length::new(1.0, LengthUnit::AstronomicalUnit);

#[cfg(test)]
mod tests {
    use super::*;
    use core::cmp::Ordering;
    use crate::Error;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Basic conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn kilometer_to_meter() {
        let m = 1.0_f64.kilometers().convert_to(LengthUnit::Meter);
        assert_abs_diff_eq!(m.value(), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn meter_to_kilometer() {
        assert_abs_diff_eq!(1000.0_f64.meters().in_kilometers(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn imperial_ladder() {
        assert_relative_eq!(1.0_f64.feet().in_inches(), 12.0, max_relative = 1e-12);
        assert_relative_eq!(1.0_f64.yards().in_feet(), 3.0, max_relative = 1e-12);
        assert_relative_eq!(1.0_f64.miles().in_yards(), 1760.0, max_relative = 1e-12);
        assert_relative_eq!(1.0_f64.nautical_miles().in_meters(), 1852.0, max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Astronomical lengths
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn au_to_meters() {
        // 1 AU = 149,597,870,700 meters (exact, IAU 2012).
        assert_eq!(ASTRONOMICAL_UNIT.in_meters(), 149_597_870_700.0);
    }

    #[test]
    fn light_year_to_kilometers() {
        // 1 LY ≈ 9.461e12 km
        assert_relative_eq!(1.0_f64.light_years().in_kilometers(), 9_460_730_472_580.800, max_relative = 1e-9);
    }

    #[test]
    fn light_year_to_au() {
        // 1 LY ≈ 63,241 AU
        assert_relative_eq!(1.0_f64.light_years().in_astronomical_units(), 63_241.0, max_relative = 1e-3);
    }

    #[test]
    fn parsec_in_light_years() {
        // 1 pc ≈ 3.26156 LY
        assert_relative_eq!(1.0_f64.parsecs().in_light_years(), 3.261_56, max_relative = 1e-5);
        assert_relative_eq!(1.0_f64.parsecs().in_astronomical_units(), 206_264.806_247_096_4, max_relative = 1e-12);
    }

    #[test]
    fn compare_to_is_antisymmetric_on_exact_conversions() {
        for i in 1..20_000 {
            let x = (0.1 * i as f64).feet();
            let y = Length::new(x.value_in(LengthUnit::Meter), LengthUnit::Meter);
            assert_eq!(x.compare_to(&y), y.compare_to(&x).reverse(), "{} vs {}", x, y);
            assert_eq!(x.compare_to(&y), Ordering::Equal, "{} vs {}", x, y);

            let z = Length::new(x.value_in(LengthUnit::Inch), LengthUnit::Inch);
            assert_eq!(z.compare_to(&x), x.compare_to(&z).reverse(), "{} vs {}", z, x);
            assert_eq!(z.compare_to(&y), y.compare_to(&z).reverse(), "{} vs {}", z, y);
        }
    }

    #[test]
    fn half_foot_against_its_metric_value() {
        let x = 0.5_f64.feet();
        let y = Length::new(x.value_in(LengthUnit::Meter), LengthUnit::Meter);
        assert_eq!(x.compare_to(&y), Ordering::Equal);
        assert_eq!(y.compare_to(&x), Ordering::Equal);
        assert!(x.magnitude_eq(&y) && y.magnitude_eq(&x));
    }

    #[test]
    fn earth_radius_order_of_magnitude() {
        assert_relative_eq!(EARTH_RADIUS.in_meters(), 6.371e6, max_relative = 1e-3);
        assert!(EARTH_RADIUS.compare_to(&ASTRONOMICAL_UNIT).is_lt());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Text
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn parse_prefers_longest_symbol() {
        assert_eq!("5 nmi".parse::<Length>(), Ok(5.0_f64.nautical_miles()));
        assert_eq!("5 mi".parse::<Length>(), Ok(5.0_f64.miles()));
        assert_eq!("5 mm".parse::<Length>(), Ok(5.0_f64.millimeters()));
        assert_eq!("5 m".parse::<Length>(), Ok(5.0_f64.meters()));
        assert_eq!("12in".parse::<Length>(), Ok(12.0_f64.inches()));
    }

    #[test]
    fn parse_unknown_symbol() {
        assert_eq!(
            "3 furlong".parse::<Length>(),
            Err(Error::UnknownUnit {
                dimension: "length",
                symbol: "furlong".into(),
            })
        );
    }

    #[test]
    fn ratio_between_lengths() {
        assert_eq!(1.0_f64.kilometers().ratio_to(&250.0_f64.meters()), Ok(4.0));
        assert_eq!(1.0_f64.meters() / 0.0, Err(Error::DivisionByZero));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_m_km(m in -1e12..1e12f64) {
            let back = m.meters().convert_to(LengthUnit::Kilometer).convert_to(LengthUnit::Meter);
            prop_assert!((back.value() - m).abs() <= 1e-9 * m.abs().max(1.0));
        }

        #[test]
        fn prop_roundtrip_ft_m(v in -1e9..1e9f64) {
            let back = v.feet().convert_to(LengthUnit::Meter).convert_to(LengthUnit::Foot);
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn prop_addition_commutes_in_magnitude(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let left = a.meters() + b.kilometers();
            let right = b.kilometers() + a.meters();
            prop_assert!((left.in_meters() - right.in_meters()).abs() <= 1e-6 * (a.abs() + 1e3 * b.abs()).max(1.0));
        }
    }
}
