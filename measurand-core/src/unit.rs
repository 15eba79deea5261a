//! Unit trait and symbol lookup.

use crate::dimension::Dimension;
use crate::error::{Error, Result};
use core::fmt::{Debug, Display};
use core::hash::Hash;
use log::debug;

/// Trait implemented by every **unit enumeration**.
///
/// Each dimension owns one closed, fieldless enum whose variants are its units. Implementations are generated by
/// `#[derive(Unit)]`, which takes one ratio per variant and emits:
///
/// * `ratio(u)`: the factor from `u` to the dimension's SI base unit ([`Unit::BASE`]).
///   Example: with metres as base, `Kilometer.ratio() == 1000.0` because `1 km = 1000 m`.
/// * `factor_to(u, v)`: the direct factor from `u` to `v`, read from a table computed at compile time as
///   `ratio(u) / ratio(v)`. Converting is a single multiply: `value_in_v = value_in_u * u.factor_to(v)`.
/// * `symbol(u)`: the printable string (e.g. `"kg/m³"`).
///
/// # Invariants
///
/// - `u.factor_to(u) == 1.0` exactly.
/// - `u.factor_to(v) * v.factor_to(u)` equals `1.0` within floating-point tolerance.
/// - Ratios are positive and finite, and [`Unit::BASE`] has ratio `1.0`; symbols are unique within the enum.
///   The derive rejects violations at compile time.
/// - The set of variants is closed: units cannot be registered at runtime.
pub trait Unit: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static {
    /// Dimension to which every variant belongs.
    type Dim: Dimension;

    /// The dimension's SI base unit; cross-dimension formulas compute in it.
    const BASE: Self;

    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// Printable symbol, shown by [`core::fmt::Display`].
    fn symbol(self) -> &'static str;

    /// Conversion factor from this unit to [`Unit::BASE`].
    fn ratio(self) -> f64;

    /// Conversion factor from this unit to `target`.
    fn factor_to(self, target: Self) -> f64;

    /// Looks up the variant whose symbol is exactly `symbol`.
    ///
    /// ```rust
    /// use measurand_core::mass::MassUnit;
    /// use measurand_core::Unit;
    ///
    /// assert_eq!(MassUnit::from_symbol("kg"), Some(MassUnit::Kilogram));
    /// assert_eq!(MassUnit::from_symbol("furlong"), None);
    /// ```
    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|unit| unit.symbol() == symbol)
    }

    /// Whether this variant is the dimension's base unit.
    #[inline]
    fn is_base(self) -> bool {
        self == Self::BASE
    }
}

/// Parses a unit symbol (surrounding whitespace ignored) into a variant of `U`.
///
/// This is what the derived `FromStr` impl of every unit enum calls.
///
/// ```rust
/// use measurand_core::force::ForceUnit;
///
/// let unit: ForceUnit = " kN ".parse().unwrap();
/// assert_eq!(unit, ForceUnit::Kilonewton);
/// assert!("kN/m".parse::<ForceUnit>().is_err());
/// ```
pub fn parse_unit<U: Unit>(symbol: &str) -> Result<U> {
    let symbol = symbol.trim();
    U::from_symbol(symbol).ok_or_else(|| {
        let dimension = <U::Dim as Dimension>::NAME;
        debug!("unknown {} unit symbol '{}'", dimension, symbol);
        Error::UnknownUnit {
            dimension,
            symbol: symbol.into(),
        }
    })
}

/// Serde glue used by the derived `Serialize`/`Deserialize` impls of unit enums: a unit is its symbol string.
#[cfg(feature = "serde")]
#[doc(hidden)]
pub mod symbol_serde {
    use super::Unit;
    use crate::dimension::Dimension;
    use alloc::format;
    use alloc::string::String;
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::Serializer;

    /// Writes the unit's symbol.
    pub fn serialize<U, S>(unit: &U, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        serializer.serialize_str(unit.symbol())
    }

    /// Reads a symbol and looks it up among `U::VARIANTS`.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<U, D::Error>
    where
        U: Unit,
        D: Deserializer<'de>,
    {
        let symbol = String::deserialize(deserializer)?;
        U::from_symbol(&symbol).ok_or_else(|| {
            de::Error::custom(format!(
                "unknown {} unit '{}'",
                <U::Dim as Dimension>::NAME,
                symbol
            ))
        })
    }
}
