//! Floating-point helpers that are not available in `core`.
//!
//! With `std` these forward to the inherent `f64` methods, without it to `libm`.

#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.abs()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::fabs(x)
    }
}

#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.sqrt()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sqrt(x)
    }
}

#[inline]
pub(crate) fn cbrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.cbrt()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::cbrt(x)
    }
}

#[inline]
pub(crate) fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.sin()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sin(x)
    }
}

#[inline]
pub(crate) fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.cos()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::cos(x)
    }
}

#[inline]
pub(crate) fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.tan()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::tan(x)
    }
}

/// Euclidean remainder, always in `[0, modulus)` for a positive modulus.
///
/// A tiny negative `x` makes `r + modulus` round up to `modulus` itself; that case folds to `0.0`.
#[inline]
pub(crate) fn rem_euclid(x: f64, modulus: f64) -> f64 {
    #[cfg(feature = "std")]
    let r = x.rem_euclid(modulus);
    #[cfg(not(feature = "std"))]
    let r = {
        let r = libm::fmod(x, modulus);
        if r < 0.0 {
            r + abs(modulus)
        } else {
            r
        }
    };
    if r >= abs(modulus) {
        0.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rem_euclid_wraps_negative_values() {
        assert_eq!(rem_euclid(-90.0, 360.0), 270.0);
        assert_eq!(rem_euclid(725.0, 360.0), 5.0);
    }

    #[test]
    fn rem_euclid_never_returns_the_modulus() {
        assert_eq!(rem_euclid(-1e-20, 360.0), 0.0);
        assert_eq!(rem_euclid(-f64::MIN_POSITIVE, 1.0), 0.0);
        let r = rem_euclid(-1e-14, 360.0);
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn roots() {
        assert_eq!(sqrt(16.0), 4.0);
        assert!((cbrt(27.0) - 3.0).abs() < 1e-15);
        assert_eq!(abs(-2.5), 2.5);
    }
}
