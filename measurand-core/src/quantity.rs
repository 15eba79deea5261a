//! Quantity type and its implementations.

use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::math;
use crate::unit::Unit;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};
use core::ops::*;
use core::str::FromStr;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A magnitude tagged with a unit of one dimension.
///
/// `Quantity<U>` stores an `f64` value together with a variant of the unit enumeration `U`. Mixing dimensions is a
/// type error (a `Quantity<MassUnit>` cannot be added to a `Quantity<LengthUnit>`), while mixing units of the same
/// dimension is resolved at runtime through `U`'s precomputed factor table.
///
/// # Equality versus ordering
///
/// `==` compares the stored value **and** the unit tag; it does not normalize. `1 kg == 1000 g` is `false`.
/// Physical comparison is explicit through [`Quantity::compare_to`] and [`Quantity::magnitude_eq`], which always
/// convert into a common unit first. `Quantity` does not implement `PartialOrd`, so `<` can never disagree with `==`.
///
/// ```rust
/// use core::cmp::Ordering;
/// use measurand_core::mass::{Mass, MassUnit};
///
/// let a = Mass::new(1.0, MassUnit::Kilogram);
/// let b = Mass::new(1000.0, MassUnit::Gram);
/// assert_ne!(a, b);
/// assert_eq!(a.compare_to(&b), Ordering::Equal);
/// assert!(a.magnitude_eq(&b));
/// ```
///
/// # Arithmetic
///
/// Addition and subtraction convert the right operand into the left operand's unit; the result keeps the left unit.
/// Scaling by an `f64` keeps the unit. Division by an `f64` is checked and yields a [`Result`].
///
/// ```rust
/// use measurand_core::length::{Length, LengthUnit};
///
/// let sum = Length::new(1.0, LengthUnit::Kilometer) + Length::new(500.0, LengthUnit::Meter);
/// assert_eq!(sum.unit(), LengthUnit::Kilometer);
/// assert_eq!(sum.value(), 1.5);
///
/// let half = (sum / 2.0).unwrap();
/// assert_eq!(half.value(), 0.75);
/// assert!((sum / 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantity<U: Unit> {
    value: f64,
    unit: U,
}

impl<U: Unit> Quantity<U> {
    /// Creates a quantity of `value` expressed in `unit`.
    ///
    /// ```rust
    /// use measurand_core::density::{Density, DensityUnit};
    ///
    /// let rho = Density::new(2.7, DensityUnit::GramPerCubicCentimeter);
    /// assert_eq!(rho.value(), 2.7);
    /// ```
    #[inline]
    pub const fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// Creates a quantity of `value` expressed in the dimension's base unit.
    ///
    /// ```rust
    /// use measurand_core::force::{Force, ForceUnit};
    ///
    /// assert_eq!(Force::base(3.0).unit(), ForceUnit::Newton);
    /// ```
    #[inline]
    pub const fn base(value: f64) -> Self {
        Self::new(value, U::BASE)
    }

    /// Returns the stored value, in [`Quantity::unit`].
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit the value is expressed in.
    #[inline]
    pub const fn unit(&self) -> U {
        self.unit
    }

    /// Returns this quantity's value expressed in `target`.
    ///
    /// The stored value is returned untouched when `target` is already the quantity's unit.
    ///
    /// ```rust
    /// use measurand_core::time::{Time, TimeUnit};
    ///
    /// let t = Time::new(2.0, TimeUnit::Hour);
    /// assert_eq!(t.value_in(TimeUnit::Minute), 120.0);
    /// assert_eq!(t.value_in(TimeUnit::Hour), 2.0);
    /// ```
    #[inline]
    pub fn value_in(&self, target: U) -> f64 {
        if target == self.unit {
            self.value
        } else {
            self.value * self.unit.factor_to(target)
        }
    }

    /// Returns this quantity's value in the dimension's base unit.
    #[inline]
    pub fn base_value(&self) -> f64 {
        self.value_in(U::BASE)
    }

    /// Converts this quantity to another unit of the same dimension.
    ///
    /// Converting to the quantity's own unit returns it unchanged, bit for bit.
    ///
    /// ```rust
    /// use measurand_core::length::{Length, LengthUnit};
    ///
    /// let km = Length::new(1.25, LengthUnit::Kilometer);
    /// let m = km.convert_to(LengthUnit::Meter);
    /// assert_eq!(m.value(), 1250.0);
    /// assert_eq!(m.unit(), LengthUnit::Meter);
    /// ```
    #[inline]
    pub fn convert_to(self, target: U) -> Self {
        if target == self.unit {
            self
        } else {
            Self::new(self.value_in(target), target)
        }
    }

    /// Converts this quantity to the dimension's base unit.
    #[inline]
    pub fn to_base(self) -> Self {
        self.convert_to(U::BASE)
    }

    /// Orders two quantities by physical magnitude, regardless of the units they are expressed in.
    ///
    /// Quantities sharing a unit compare their stored values. Otherwise both sides are expressed in the base unit,
    /// so every pair is ranked by the same key whichever side is the receiver. Values are compared with
    /// [`f64::total_cmp`], which makes the order total (NaN sorts above +∞).
    ///
    /// ```rust
    /// use core::cmp::Ordering;
    /// use measurand_core::pressure::{Pressure, PressureUnit};
    ///
    /// let a = Pressure::new(1.0, PressureUnit::Bar);
    /// let b = Pressure::new(1.0, PressureUnit::Atmosphere);
    /// assert_eq!(a.compare_to(&b), Ordering::Less);
    /// assert_eq!(b.compare_to(&a), Ordering::Greater);
    /// ```
    #[inline]
    pub fn compare_to(&self, other: &Self) -> Ordering {
        if self.unit == other.unit {
            self.value.total_cmp(&other.value)
        } else {
            self.base_value().total_cmp(&other.base_value())
        }
    }

    /// Whether both quantities denote the same physical amount (`compare_to` is `Equal`).
    ///
    /// Unlike `==`, this ignores which unit each side is expressed in.
    #[inline]
    pub fn magnitude_eq(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Equal
    }

    /// Returns the physically smaller operand, unchanged. Ties return `self`.
    ///
    /// ```rust
    /// use measurand_core::mass::{Mass, MassUnit};
    ///
    /// let a = Mass::new(3.0, MassUnit::Pound);
    /// let b = Mass::new(1.0, MassUnit::Kilogram);
    /// assert_eq!(a.min(b), b);
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        match self.compare_to(&other) {
            Ordering::Greater => other,
            _ => self,
        }
    }

    /// Returns the physically larger operand, unchanged. Ties return `self`.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        match self.compare_to(&other) {
            Ordering::Less => other,
            _ => self,
        }
    }

    /// Returns the absolute value, keeping the unit.
    ///
    /// ```rust
    /// use measurand_core::angle::{Angle, AngleUnit};
    ///
    /// let a = Angle::new(-10.0, AngleUnit::Degree);
    /// assert_eq!(a.abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(math::abs(self.value), self.unit)
    }

    /// Dimensionless ratio `self / other`, after expressing `other` in `self`'s unit.
    ///
    /// Fails with [`Error::DivisionByZero`] when `other` is zero.
    ///
    /// ```rust
    /// use measurand_core::length::{Length, LengthUnit};
    ///
    /// let a = Length::new(1.0, LengthUnit::Kilometer);
    /// let b = Length::new(250.0, LengthUnit::Meter);
    /// assert_eq!(a.ratio_to(&b).unwrap(), 4.0);
    /// ```
    #[inline]
    pub fn ratio_to(&self, other: &Self) -> Result<f64> {
        let divisor = other.value_in(self.unit);
        if divisor == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self.value / divisor)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value_in(self.unit), self.unit)
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value_in(self.unit), self.unit)
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.unit)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;
    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs * self
    }
}

/// Checked scalar division: dividing by exactly `0.0` yields [`Error::DivisionByZero`].
impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Result<Self>;
    #[inline]
    fn div(self, rhs: f64) -> Result<Self> {
        if rhs == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::new(self.value / rhs, self.unit))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text
// ─────────────────────────────────────────────────────────────────────────────

/// Formats as `<value> <symbol>`. A precision (`{:.2}`) applies to the value.
impl<U: Unit> Display for Quantity<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.value, self.unit),
            None => write!(f, "{} {}", self.value, self.unit),
        }
    }
}

/// Parses `<number><symbol>`, with optional whitespace in between (`"9.81 m/s²"`, `"5kg"`).
///
/// When several symbols of the dimension end the text, the longest one that leaves a valid number wins, so
/// `"5 mg"` is five milligrams rather than a malformed gram value.
impl<U: Unit> FromStr for Quantity<U> {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let mut best: Option<(U, f64)> = None;

        for &unit in U::VARIANTS {
            let Some(number) = trimmed.strip_suffix(unit.symbol()) else {
                continue;
            };
            let Ok(value) = number.trim_end().parse::<f64>() else {
                continue;
            };
            let longer = best.map_or(true, |(current, _)| {
                unit.symbol().len() > current.symbol().len()
            });
            if longer {
                best = Some((unit, value));
            }
        }

        if let Some((unit, value)) = best {
            return Ok(Self::new(value, unit));
        }

        let dimension = <U::Dim as Dimension>::NAME;
        match trimmed.split_once(char::is_whitespace) {
            Some((number, symbol)) if number.parse::<f64>().is_ok() => {
                let symbol = symbol.trim();
                debug!("unknown {} unit symbol '{}' in '{}'", dimension, symbol, trimmed);
                Err(Error::UnknownUnit {
                    dimension,
                    symbol: symbol.into(),
                })
            }
            _ => {
                debug!("cannot read '{}' as a {} quantity", trimmed, dimension);
                Err(Error::InvalidQuantity(trimmed.into()))
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

/// Serializes as `{"value": <f64>, "unit": "<symbol>"}`.
#[cfg(feature = "serde")]
impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("unit", self.unit.symbol())?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use alloc::format;
        use alloc::string::String;
        use serde::de::{self, MapAccess, Visitor};

        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U>(core::marker::PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for QuantityVisitor<U> {
            type Value = Quantity<U>;

            fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> core::result::Result<Quantity<U>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut symbol: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if symbol.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            symbol = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let symbol = symbol.ok_or_else(|| de::Error::missing_field("unit"))?;
                let unit = U::from_symbol(&symbol).ok_or_else(|| {
                    de::Error::custom(format!(
                        "unknown {} unit '{}'",
                        <U::Dim as Dimension>::NAME,
                        symbol
                    ))
                })?;

                Ok(Quantity::new(value, unit))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(core::marker::PhantomData),
        )
    }
}

/// Serde helper module storing a quantity as a bare `f64` in its dimension's base unit.
///
/// Use with `#[serde(with = "...")]` where a compact, unit-implied representation is wanted. Deserialized values
/// are tagged with the base unit.
///
/// ```rust
/// use measurand_core::length::{Length, LengthUnit};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Track {
///     #[serde(with = "measurand_core::serde_base_value")]
///     length: Length, // Serializes as 1500.0 (metres)
///
///     lap: Length, // Serializes as {"value": 400.0, "unit": "m"}
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_base_value {
    use super::*;

    /// Serializes `quantity.base_value()`.
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        quantity.base_value().serialize(serializer)
    }

    /// Reads an `f64` and tags it with the base unit.
    pub fn deserialize<'de, U, D>(deserializer: D) -> core::result::Result<Quantity<U>, D::Error>
    where
        U: Unit,
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Quantity::base(value))
    }
}
