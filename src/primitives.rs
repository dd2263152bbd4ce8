//! The special-function primitives 0F1 is assembled from.
//!
//! The dispatcher only ever talks to a [`Primitives`] implementation, so
//! the Bessel and gamma back end can be swapped (for a wrapper around
//! another library, or a test double that forces a particular branch).
//! [`Native`] is the built-in implementation.

use crate::algo::gamln;
use crate::besi::besseli;
use crate::besj::besselj;
use crate::machine::SpecialFloat;
use crate::utils;

/// Real-valued special functions consumed by the 0F1 evaluator.
///
/// Every method is total: failures are reported as NaN so they propagate
/// through the arithmetic unchanged. Only the Bessel functions and the
/// log-gamma pair are required; the rest have exact default
/// implementations.
pub trait Primitives<T: SpecialFloat> {
    /// I_ν(x), x ≥ 0. Must return 0 on underflow and +∞ on overflow.
    fn besseli(&self, order: T, x: T) -> T;

    /// J_ν(x), x ≥ 0.
    fn besselj(&self, order: T, x: T) -> T;

    /// ln|Γ(x)| for every real x that is not a pole.
    fn lgamma(&self, x: T) -> T;

    /// Sign of Γ(x): ±1, or 0 at the poles.
    fn gammasgn(&self, x: T) -> T;

    /// Γ(x).
    fn gamma(&self, x: T) -> T {
        self.gammasgn(x) * self.lgamma(x).exp()
    }

    /// `x · ln(y)`, exactly 0 when `x == 0`.
    fn xlogy(&self, x: T, y: T) -> T {
        utils::xlogy(x, y)
    }

    /// sin(πx), exact at integers and half-integers.
    fn sinpi(&self, x: T) -> T {
        utils::sinpi(x)
    }

    /// cos(πx), exact at integers and half-integers.
    fn cospi(&self, x: T) -> T {
        utils::cospi(x)
    }
}

/// Built-in primitives backed by this crate's own Bessel and gamma code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Native;

impl<T: SpecialFloat> Primitives<T> for Native {
    #[inline]
    fn besseli(&self, order: T, x: T) -> T {
        besseli(order, x).unwrap_or_else(|_| T::nan())
    }

    #[inline]
    fn besselj(&self, order: T, x: T) -> T {
        besselj(order, x).unwrap_or_else(|_| T::nan())
    }

    #[inline]
    fn lgamma(&self, x: T) -> T {
        gamln::lgamma(x).unwrap_or_else(|_| T::nan())
    }

    #[inline]
    fn gammasgn(&self, x: T) -> T {
        gamln::gammasgn(x)
    }

    #[inline]
    fn gamma(&self, x: T) -> T {
        gamln::gamma(x).unwrap_or_else(|_| T::nan())
    }
}
