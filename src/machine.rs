//! Machine constants and the `SpecialFloat` trait.
//!
//! The log-domain limits are what the 0F1 dispatcher compares against before
//! exponentiating; the rest feed the convergence tests of the primitives.

use num_traits::Float;

/// Floating-point trait for 0F1 and its Bessel/gamma primitives.
///
/// Implemented for `f64` and `f32`.
pub trait SpecialFloat: Float + core::fmt::Debug + 'static {
    /// Machine epsilon.
    const MACH_EPSILON: Self;
    /// Smallest positive normal number (`DBL_MIN`).
    const MACH_TINY: Self;
    /// Largest representable number (`DBL_MAX`).
    const MACH_HUGE: Self;
    /// `ln(MACH_HUGE)`: exponents above this overflow.
    const LOG_HUGE: Self;
    /// `ln(MACH_TINY)`: exponents below this underflow.
    const LOG_TINY: Self;
    /// Number of binary digits in the mantissa.
    const MACH_DIGITS: i32;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it rounds via `as f32`.
    /// Every algorithm constant in this crate is written as an f64 literal.
    fn from_f64(x: f64) -> Self;

    /// Fused multiply-add: `self * a + b`.
    ///
    /// With `std` enabled this is the hardware FMA. Without `std` it is
    /// plain `self * a + b`, skipping the slow software FMA in libm.
    fn fma(self, a: Self, b: Self) -> Self;
}

impl SpecialFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const MACH_TINY: f64 = 2.2250738585072014e-308;
    const MACH_HUGE: f64 = 1.7976931348623157e+308;
    const LOG_HUGE: f64 = 709.782712893384;
    const LOG_TINY: f64 = -708.3964185322641;
    const MACH_DIGITS: i32 = 53;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }

    #[cfg(feature = "std")]
    #[inline]
    fn fma(self, a: f64, b: f64) -> f64 {
        Float::mul_add(self, a, b)
    }

    #[cfg(not(feature = "std"))]
    #[inline]
    fn fma(self, a: f64, b: f64) -> f64 {
        self * a + b
    }
}

#[allow(clippy::excessive_precision)]
impl SpecialFloat for f32 {
    const MACH_EPSILON: f32 = 1.1920929e-7;
    const MACH_TINY: f32 = 1.1754944e-38;
    const MACH_HUGE: f32 = 3.4028235e+38;
    const LOG_HUGE: f32 = 88.72283905206835;
    const LOG_TINY: f32 = -87.33654475055310;
    const MACH_DIGITS: i32 = 24;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }

    #[cfg(feature = "std")]
    #[inline]
    fn fma(self, a: f32, b: f32) -> f32 {
        Float::mul_add(self, a, b)
    }

    #[cfg(not(feature = "std"))]
    #[inline]
    fn fma(self, a: f32, b: f32) -> f32 {
        self * a + b
    }
}
