//! Macros for per-dimension shorthand constructors and accessors.

/// Generates the numeric shorthands of one dimension.
///
/// For every listed `Variant => constructor, accessor` triple this emits:
/// - a method `constructor` on the extension trait `$ext`, implemented for `f64`
///   (`2.0_f64.kilograms()` is `Mass::new(2.0, MassUnit::Kilogram)`),
/// - an inherent `accessor` on `Quantity<$unit>` returning the value in that unit
///   (`mass.in_kilograms()` is `mass.value_in(MassUnit::Kilogram)`).
macro_rules! quantity_shorthands {
    ($unit:ident, $ext:ident { $($variant:ident => $ctor:ident, $accessor:ident;)+ }) => {
        #[doc = concat!("Shorthand constructors for quantities measured in [`", stringify!($unit), "`].")]
        ///
        /// Implemented for `f64`.
        pub trait $ext {
            $(
                #[doc = concat!("A quantity of `self` [`", stringify!($unit), "::", stringify!($variant), "`].")]
                fn $ctor(self) -> $crate::Quantity<$unit>;
            )+
        }

        impl $ext for f64 {
            $(
                #[inline]
                fn $ctor(self) -> $crate::Quantity<$unit> {
                    $crate::Quantity::new(self, $unit::$variant)
                }
            )+
        }

        impl $crate::Quantity<$unit> {
            $(
                #[doc = concat!("Value expressed in [`", stringify!($unit), "::", stringify!($variant), "`].")]
                #[inline]
                pub fn $accessor(&self) -> f64 {
                    self.value_in($unit::$variant)
                }
            )+
        }
    };
}
