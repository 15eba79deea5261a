//! Plane angle units and angular utilities.
//!
//! The base unit for this dimension is [`AngleUnit::Radian`]. Besides conversions, angles carry the
//! trigonometric functions (evaluated in radians whatever the stored unit) and range-wrapping helpers that keep
//! the quantity's own unit.
//!
//! ## Edge cases
//!
//! Wrapping and trig operations follow IEEE-754 semantics: a `NaN` or `±∞` value generally yields `NaN`.
//!
//! ```rust
//! use measurand_core::angle::{AngleExt, AngleUnit};
//!
//! let a = 90.0_f64.degrees();
//! assert!((a.in_radians() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! assert!((a.sin() - 1.0).abs() < 1e-12);
//!
//! let wrapped = (-90.0_f64).degrees().normalized();
//! assert_eq!(wrapped.unit(), AngleUnit::Degree);
//! assert!((wrapped.value() - 270.0).abs() < 1e-12);
//! ```

use crate::math;
use crate::{Dimension, Quantity};
use core::f64::consts::{PI, TAU};
use measurand_derive::Unit;

/// Dimension tag for plane angle.
#[derive(Debug)]
pub enum AngleDim {}
impl Dimension for AngleDim {
    const NAME: &'static str = "angle";
}

/// Units of plane angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = AngleDim, base = Radian)]
pub enum AngleUnit {
    /// Radian (SI coherent unit).
    #[unit(symbol = "rad", ratio = 1.0)]
    Radian,
    /// Degree, `π/180 rad`.
    #[unit(symbol = "°", ratio = PI / 180.0)]
    Degree,
    /// Arcminute, `1/60 °`.
    #[unit(symbol = "′", ratio = PI / 10_800.0)]
    Arcminute,
    /// Arcsecond, `1/3600 °`.
    #[unit(symbol = "″", ratio = PI / 648_000.0)]
    Arcsecond,
    /// Milliradian, `1e-3 rad`.
    #[unit(symbol = "mrad", ratio = 1e-3)]
    Milliradian,
    /// Gradian (gon), `1/400` of a turn.
    #[unit(symbol = "gon", ratio = PI / 200.0)]
    Gradian,
    /// Full revolution, `2π rad`.
    #[unit(symbol = "tr", ratio = TAU)]
    Turn,
}

impl AngleUnit {
    /// One full revolution expressed in this unit.
    ///
    /// Exact for every unit (`360.0` for degrees).
    pub fn full_turn(self) -> f64 {
        match self {
            AngleUnit::Radian => TAU,
            AngleUnit::Degree => 360.0,
            AngleUnit::Arcminute => 21_600.0,
            AngleUnit::Arcsecond => 1_296_000.0,
            AngleUnit::Milliradian => TAU * 1e3,
            AngleUnit::Gradian => 400.0,
            AngleUnit::Turn => 1.0,
        }
    }
}

/// A plane angle.
pub type Angle = Quantity<AngleUnit>;

quantity_shorthands!(AngleUnit, AngleExt {
    Radian => radians, in_radians;
    Degree => degrees, in_degrees;
    Arcminute => arcminutes, in_arcminutes;
    Arcsecond => arcseconds, in_arcseconds;
    Milliradian => milliradians, in_milliradians;
    Gradian => gradians, in_gradians;
    Turn => turns, in_turns;
});

impl Quantity<AngleUnit> {
    /// Sine of the angle.
    #[inline]
    pub fn sin(&self) -> f64 {
        math::sin(self.in_radians())
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(&self) -> f64 {
        math::cos(self.in_radians())
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(&self) -> f64 {
        math::tan(self.in_radians())
    }

    /// Wraps into `[0, full turn)` of the angle's own unit, using the Euclidean remainder.
    #[inline]
    pub fn normalized(self) -> Self {
        let full = self.unit().full_turn();
        Self::new(math::rem_euclid(self.value(), full), self.unit())
    }

    /// Wraps into the signed range `(-half turn, half turn]` of the angle's own unit.
    ///
    /// ```rust
    /// use measurand_core::angle::AngleExt;
    ///
    /// assert_eq!(370.0_f64.degrees().wrap_signed().value(), 10.0);
    /// assert_eq!((-180.0_f64).degrees().wrap_signed().value(), 180.0);
    /// ```
    #[inline]
    pub fn wrap_signed(self) -> Self {
        let full = self.unit().full_turn();
        let half = 0.5 * full;
        let y = math::rem_euclid(self.value() + half, full) - half;
        let wrapped = if y <= -half { y + full } else { y };
        Self::new(wrapped, self.unit())
    }

    /// Smallest signed separation `self - other`, wrapped into `(-half turn, half turn]` of `self`'s unit.
    #[inline]
    pub fn signed_separation(self, other: Self) -> Self {
        (self - other).wrap_signed()
    }
}
