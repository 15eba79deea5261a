//! Solid angle units.
//!
//! The base unit for this dimension is [`SolidAngleUnit::Steradian`]. The whole sphere is one
//! [spat](SolidAngleUnit::Spat), `4π sr` or about 41 253 square degrees.
//!
//! ```rust
//! use measurand_core::angle::AngleExt;
//! use measurand_core::solid_angle::SolidAngle;
//!
//! let hemisphere = SolidAngle::of_cone(90.0_f64.degrees());
//! assert!((hemisphere.in_spats() - 0.5).abs() < 1e-12);
//! ```

use crate::angle::Angle;
use crate::area::Area;
use crate::length::Length;
use crate::math;
use crate::{Dimension, Error, Quantity, Result};
use core::f64::consts::{PI, TAU};
use measurand_derive::Unit;

/// Dimension tag for solid angle.
#[derive(Debug)]
pub enum SolidAngleDim {}
impl Dimension for SolidAngleDim {
    const NAME: &'static str = "solid angle";
}

const DEGREE: f64 = PI / 180.0;
const ARCMINUTE: f64 = PI / 10_800.0;
const ARCSECOND: f64 = PI / 648_000.0;

/// Units of solid angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(dimension = SolidAngleDim, base = Steradian)]
pub enum SolidAngleUnit {
    /// Steradian (SI coherent unit).
    #[unit(symbol = "sr", ratio = 1.0)]
    Steradian,
    /// Square degree, `(π/180)² sr`.
    #[unit(symbol = "deg²", ratio = DEGREE * DEGREE)]
    SquareDegree,
    /// Square arcminute.
    #[unit(symbol = "arcmin²", ratio = ARCMINUTE * ARCMINUTE)]
    SquareArcminute,
    /// Square arcsecond.
    #[unit(symbol = "arcsec²", ratio = ARCSECOND * ARCSECOND)]
    SquareArcsecond,
    /// Spat: the whole sphere, `4π sr`.
    #[unit(symbol = "sp", ratio = 2.0 * TAU)]
    Spat,
}

/// A solid angle.
pub type SolidAngle = Quantity<SolidAngleUnit>;

quantity_shorthands!(SolidAngleUnit, SolidAngleExt {
    Steradian => steradians, in_steradians;
    SquareDegree => square_degrees, in_square_degrees;
    SquareArcminute => square_arcminutes, in_square_arcminutes;
    SquareArcsecond => square_arcseconds, in_square_arcseconds;
    Spat => spats, in_spats;
});

impl Quantity<SolidAngleUnit> {
    /// Solid angle subtended by `area` on a sphere of `radius`: `Ω = A / r²`.
    ///
    /// Fails with [`Error::InvalidArgument`] when the radius is zero, or so small that `r²` underflows to zero.
    pub fn from_area_and_radius(area: Area, radius: Length) -> Result<SolidAngle> {
        let r = radius.base_value();
        let r_squared = r * r;
        if r_squared == 0.0 {
            return Err(Error::InvalidArgument("radius must not be zero"));
        }
        Ok(SolidAngle::base(area.base_value() / r_squared))
    }

    /// Solid angle of a right circular cone with the given half-aperture: `Ω = 2π (1 − cos θ)`.
    pub fn of_cone(half_angle: Angle) -> SolidAngle {
        SolidAngle::base(TAU * (1.0 - math::cos(half_angle.in_radians())))
    }
}
