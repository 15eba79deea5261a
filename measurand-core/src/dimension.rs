//! Dimension types and traits.

/// Marker trait for **dimensions** (Length, Mass, Force …).
///
/// A *dimension* is the category that distinguishes a metre from a kilogram. Each dimension is modelled as an empty
/// enum and owns exactly one closed unit enumeration:
///
/// ```rust
/// use measurand_core::Dimension;
///
/// #[derive(Debug)]
/// pub enum LengthDim {}
/// impl Dimension for LengthDim {
///     const NAME: &'static str = "length";
/// }
/// ```
pub trait Dimension {
    /// Lower-case human name, used in error messages.
    const NAME: &'static str;
}
