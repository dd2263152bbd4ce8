//! Core types for 0F1 evaluation.

use core::fmt;

use crate::machine::SpecialFloat;

/// Computational regime that produced a 0F1 value.
///
/// Reported by [`hyp0f1_raw`](crate::hyp0f1_raw). The regimes are tried in
/// the order listed; the first one whose guard matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Order is a non-positive integer; the value is 0 by convention.
    Pole,
    /// Argument is zero; the value is exactly 1.
    Origin,
    /// Small argument; second-order Taylor polynomial.
    Taylor,
    /// Positive argument, direct `Γ(c) z^((1-c)/2) I_{c-1}(2√z)`.
    Modified,
    /// Positive argument, uniform asymptotic expansion for large order.
    ModifiedAsymptotic,
    /// Negative argument, direct `Γ(c) (-z)^((1-c)/2) J_{c-1}(2√(-z))`.
    Oscillatory,
    /// Negative argument, Debye expansion for large order.
    OscillatoryAsymptotic,
}

impl Regime {
    /// Whether the value came from a large-order asymptotic expansion.
    pub fn is_asymptotic(self) -> bool {
        matches!(
            self,
            Regime::ModifiedAsymptotic | Regime::OscillatoryAsymptotic
        )
    }
}

/// Result of a 0F1 evaluation, returned by [`hyp0f1_raw`](crate::hyp0f1_raw).
///
/// [`hyp0f1`](crate::hyp0f1) does not expose this type; it returns only the
/// value and discards the regime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyp0f1Result<T: SpecialFloat> {
    /// Computed function value.
    pub value: T,
    /// Branch of the evaluator that produced `value`.
    pub regime: Regime,
}

impl<T: SpecialFloat> Hyp0f1Result<T> {
    #[inline]
    pub(crate) fn new(value: T, regime: Regime) -> Self {
        Hyp0f1Result { value, regime }
    }
}

/// Error type for the Bessel and gamma primitives.
///
/// Overflow and underflow are not errors: they saturate to ±∞ and 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Invalid input (negative argument, NaN, or a pole of Γ).
    InvalidInput,
    /// Algorithm did not meet termination criteria.
    ConvergenceFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput => {
                write!(f, "invalid input: check order and argument constraints")
            }
            Error::ConvergenceFailure => {
                write!(
                    f,
                    "convergence failure: algorithm did not meet termination criteria"
                )
            }
        }
    }
}

impl core::error::Error for Error {}
