//! Strongly typed physical quantities, unit conversions and cross-dimension formulas.
//!
//! `measurand` is the user-facing crate in this workspace. It re-exports the full API from `measurand-core` plus
//! every predefined dimension (angle, length, mass, force, pressure, …).
//!
//! A value is always a `Quantity<U>`: an `f64` tagged with a variant of `U`, the closed unit enumeration of one
//! dimension. The unit travels with the value at runtime, while the dimension is fixed at compile time.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Converts between units of a dimension through factor tables computed at compile time.
//! - Derives quantities of one dimension from others (`ρ = m / V`, `F = m · a`, …), reporting zero divisors as
//!   errors instead of producing infinities.
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary symbolic unit algebra (e.g. `m^2 * s^-1`) or automatic simplification of expressions.
//! - Exact arithmetic: quantities are backed by `f64`.
//! - Runtime registration of units: every dimension's unit set is closed.
//! - Affine units such as temperature scales.
//!
//! # Quick start
//!
//! Convert between units of one dimension:
//!
//! ```rust
//! use measurand::{AngleExt, AngleUnit};
//!
//! let a = 180.0_f64.degrees();
//! let r = a.convert_to(AngleUnit::Radian);
//! assert!((r.value() - core::f64::consts::PI).abs() < 1e-12);
//! ```
//!
//! Derive a quantity from others:
//!
//! ```rust
//! use measurand::{Density, DensityUnit, MassExt, VolumeExt};
//!
//! let rho = Density::from_mass_and_volume(1_000.0_f64.kilograms(), 1.0_f64.cubic_meters())?;
//! assert_eq!(rho.unit(), DensityUnit::KilogramPerCubicMeter);
//! assert_eq!(rho.value(), 1000.0);
//! # Ok::<(), measurand::Error>(())
//! ```
//!
//! Equality is strict (same value *and* same unit); physical comparison is explicit:
//!
//! ```rust
//! use core::cmp::Ordering;
//! use measurand::{Density, DensityUnit};
//!
//! let a = Density::new(1.0, DensityUnit::KilogramPerCubicMeter);
//! let b = Density::new(1000.0, DensityUnit::GramPerCubicMeter);
//! assert_ne!(a, b);
//! assert_eq!(a.compare_to(&b), Ordering::Equal);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use measurand::{LengthExt, TimeExt};
//!
//! let d = 1.0_f64.kilometers();
//! let t = 1.0_f64.seconds();
//! let _ = d + t; // cannot add different dimensions
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `measurand::angle`, `measurand::solid_angle`
//! - `measurand::length`, `measurand::area`, `measurand::volume`
//! - `measurand::mass`, `measurand::density`
//! - `measurand::time`, `measurand::velocity`, `measurand::acceleration`
//! - `measurand::force`, `measurand::pressure`, `measurand::energy`, `measurand::power`
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `measurand-core`.
//! - `serde`: quantities serialize as `{"value": f64, "unit": "<symbol>"}`, units as their symbol.
//!
//! Disable default features for `no_std` (an allocator is still required):
//!
//! ```toml
//! [dependencies]
//! measurand = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! No operation panics. Failures are returned as [`Error`]:
//!
//! - [`Error::DivisionByZero`] from `quantity / 0.0` and [`Quantity::ratio_to`] with a zero divisor,
//! - [`Error::InvalidArgument`] from a cross-dimension formula whose divisor is zero,
//! - [`Error::UnknownUnit`] and [`Error::InvalidQuantity`] from parsing text.
//!
//! Everything else follows IEEE-754 behavior (NaN and infinities propagate).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use measurand_core::*;

/// Derive macro used by `measurand-core` to define unit enumerations.
///
/// This macro expands in terms of `crate::Unit`, `crate::parse_unit` and `crate::Error`, so it is intended for use
/// inside `measurand-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use measurand_derive::Unit;

pub use measurand_core::units::acceleration;
pub use measurand_core::units::angle;
pub use measurand_core::units::area;
pub use measurand_core::units::density;
pub use measurand_core::units::energy;
pub use measurand_core::units::force;
pub use measurand_core::units::length;
pub use measurand_core::units::mass;
pub use measurand_core::units::power;
pub use measurand_core::units::pressure;
pub use measurand_core::units::solid_angle;
pub use measurand_core::units::time;
pub use measurand_core::units::velocity;
pub use measurand_core::units::volume;

pub use measurand_core::units::acceleration::*;
pub use measurand_core::units::angle::*;
pub use measurand_core::units::area::*;
pub use measurand_core::units::density::*;
pub use measurand_core::units::energy::*;
pub use measurand_core::units::force::*;
pub use measurand_core::units::length::*;
pub use measurand_core::units::mass::*;
pub use measurand_core::units::power::*;
pub use measurand_core::units::pressure::*;
pub use measurand_core::units::solid_angle::*;
pub use measurand_core::units::time::*;
pub use measurand_core::units::velocity::*;
pub use measurand_core::units::volume::*;
