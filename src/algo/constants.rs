//! Shared numeric constants used by several algorithm modules.
//!
//! Module-specific constants remain in their respective files.

#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

/// π
pub(crate) const PI: f64 = 3.14159265358979324e+00;

/// 2/π
pub(crate) const TWO_OVER_PI: f64 = 6.36619772367581343e-01;

/// ln(2π)
pub(crate) const LN_2PI: f64 = 1.83787706640934548e+00;

/// √(π/2)
pub(crate) const RTHPI: f64 = 1.25331413731550025e+00;

/// ln(π)
pub(crate) const LN_PI: f64 = 1.14472988584940017e+00;

/// Iteration cap for the continued fractions and power series.
///
/// CF1 for J needs about `x` terms, so this also bounds the largest
/// argument the Temme path accepts.
pub(crate) const MAX_ITER: usize = 1_000_000;

/// Stand-in for a zero denominator in the modified Lentz algorithm.
///
/// Its reciprocal times the reciprocal of the first partial denominator
/// must stay finite, which rules out the smallest normal number.
pub(crate) const LENTZ_FLOOR: f64 = 1.0e-30;

/// Orders with |ν| above this use the uniform (Debye) expansion for I.
pub(crate) const DEBYE_ORDER: f64 = 50.0;

/// I: arguments above this use the large-argument Hankel expansion.
pub(crate) const HANKEL_ARG_I: f64 = 700.0;

/// J, Y: arguments above this (and above ν²/4) use the Hankel expansion.
pub(crate) const HANKEL_ARG_J: f64 = 50.0;
