//! Predefined dimensions, one module per physical quantity kind.
//!
//! Every module follows the same layout:
//!
//! - a dimension tag (`MassDim`),
//! - a closed unit enumeration deriving [`Unit`](crate::Unit) (`MassUnit`), whose variant ratios are relative to
//!   the SI base unit,
//! - the quantity alias (`Mass = Quantity<MassUnit>`),
//! - numeric shorthands (`MassExt`) and per-unit accessors (`in_kilograms`),
//! - the cross-dimension formulas that produce this dimension, and a few reference constants.
//!
//! ## Modules
//!
//! - [`angle`]: plane angle (radian base) plus trigonometry and wrapping.
//! - [`solid_angle`]: solid angle (steradian base).
//! - [`length`]: length (metre base).
//! - [`area`]: area (square metre base).
//! - [`volume`]: volume (cubic metre base).
//! - [`mass`]: mass (kilogram base).
//! - [`time`]: time (second base).
//! - [`velocity`]: velocity (metre per second base).
//! - [`acceleration`]: acceleration (metre per second squared base).
//! - [`force`]: force (newton base).
//! - [`density`]: mass density (kilogram per cubic metre base).
//! - [`pressure`]: pressure (pascal base).
//! - [`energy`]: energy (joule base).
//! - [`power`]: power (watt base).

pub mod acceleration;
pub mod angle;
pub mod area;
pub mod density;
pub mod energy;
pub mod force;
pub mod length;
pub mod mass;
pub mod power;
pub mod pressure;
pub mod solid_angle;
pub mod time;
pub mod velocity;
pub mod volume;
