//! Core type system for strongly typed physical quantities.
//!
//! `measurand-core` provides a small, closed units model:
//!
//! - Each dimension owns one fieldless *unit enumeration* implementing [`Unit`] (e.g. `MassUnit`).
//! - A value tagged with a unit variant is a [`Quantity<U>`], backed by an `f64`.
//! - Every unit enum carries a variant × variant factor table computed at compile time by `#[derive(Unit)]`, so a
//!   conversion is one table load and one multiply.
//! - Crossing dimensions only happens through hand-written formulas such as
//!   [`Density::from_mass_and_volume`](density::Density) or
//!   [`Force::acceleration_of`](force::Force).
//!
//! Most users should depend on `measurand` (the facade crate).
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions (mass vs length vs force, …).
//! - Runtime choice of unit inside a dimension, with exact identity conversions.
//! - Checked failure for the two undefined operations: scalar division by zero and zero divisors in formulas.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`).
//! - Dimensional algebra: multiplying two arbitrary quantities is not an operator; each physical relation is a
//!   dedicated function.
//! - Locale-aware formatting.
//!
//! # Quick start
//!
//! ```rust
//! use measurand_core::density::{Density, DensityUnit};
//! use measurand_core::mass::MassExt;
//! use measurand_core::volume::VolumeExt;
//!
//! let rho = Density::from_mass_and_volume(1000.0_f64.kilograms(), 1.0_f64.cubic_meters()).unwrap();
//! assert_eq!(rho.in_kilograms_per_cubic_meter(), 1000.0);
//! assert_eq!(rho.convert_to(DensityUnit::GramPerCubicCentimeter).value(), 1.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build without `std`; the crate then needs only `alloc`, and trigonometry and roots
//! come from `libm`.
//!
//! ```toml
//! [dependencies]
//! measurand-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: `Quantity<U>` serializes as `{"value": .., "unit": ".."}`, unit enums as their symbol;
//!   [`serde_base_value`] stores a bare base-unit `f64`.
//!
//! # Errors
//!
//! Fallible operations return [`Result`] with [`Error`]. Conversions, addition and scaling are infallible `f64`
//! computations and follow IEEE-754 (NaN and infinities propagate).

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

#[macro_use]
mod macros;

mod dimension;
mod error;
mod math;
mod quantity;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::Dimension;
pub use error::{Error, Result};
pub use quantity::Quantity;
pub use unit::{parse_unit, Unit};

#[cfg(feature = "serde")]
pub use quantity::serde_base_value;

#[cfg(feature = "serde")]
#[doc(hidden)]
pub use unit::symbol_serde as unit_symbol_serde;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined dimensions, one module each.
///
/// These live in `measurand-core` so that their formulas can be inherent methods on `Quantity<XUnit>`.
pub mod units;

pub use units::acceleration;
pub use units::angle;
pub use units::area;
pub use units::density;
pub use units::energy;
pub use units::force;
pub use units::length;
pub use units::mass;
pub use units::power;
pub use units::pressure;
pub use units::solid_angle;
pub use units::time;
pub use units::velocity;
pub use units::volume;
