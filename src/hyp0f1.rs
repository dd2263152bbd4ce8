//! The 0F1(c; z) dispatcher.
//!
//! ```text
//! 0F1(c; z) = Γ(c) z^((1-c)/2) I_{c-1}(2√z)          z > 0
//! 0F1(c; z) = Γ(c) (-z)^((1-c)/2) J_{c-1}(2√(-z))    z < 0
//! ```
//!
//! The guards below are tried in order and the first match wins. The
//! Bessel forms are assembled in the log domain and handed to the
//! large-order expansion ([`hyp0f1_asy_with`]) whenever the prefactor would
//! leave the floating-point range or the Bessel value itself has
//! saturated to 0 or ∞. Where the expansion has no value either (c == 1,
//! or the negative argument lies past its turning point) the saturated
//! closed form is returned.

use crate::asy::hyp0f1_asy_with;
use crate::machine::SpecialFloat;
use crate::primitives::{Native, Primitives};
use crate::types::{Hyp0f1Result, Regime};
use crate::utils::is_nonpositive_integer;

/// |z| below `TAYLOR_THRESHOLD · (1 + |c|)` uses the quadratic Taylor polynomial.
const TAYLOR_THRESHOLD: f64 = 1.0e-6;

/// Evaluate 0F1(c; z) with the given primitives and report the branch taken.
///
/// See [`hyp0f1`] for the conventions. Primitive NaNs propagate unchanged.
pub fn hyp0f1_with<T, P>(prims: &P, c: T, z: T) -> Hyp0f1Result<T>
where
    T: SpecialFloat,
    P: Primitives<T> + ?Sized,
{
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);

    if is_nonpositive_integer(c) {
        return Hyp0f1Result::new(zero, Regime::Pole);
    }
    if z == zero {
        return Hyp0f1Result::new(one, Regime::Origin);
    }
    if z.abs() < T::from_f64(TAYLOR_THRESHOLD) * (one + c.abs()) {
        let value = one + z / c + z * z / (two * c * (c + one));
        return Hyp0f1Result::new(value, Regime::Taylor);
    }

    let a = z.abs().sqrt();
    // ln|Γ(c) a^(1-c)|
    let arg_exp = prims.xlogy(one - c, a) + prims.lgamma(c);
    let gs = prims.gammasgn(c);

    if z > zero {
        let bess = prims.besseli(c - one, two * a);
        if arg_exp > T::LOG_HUGE || arg_exp < T::LOG_TINY || bess == zero || bess.is_infinite() {
            let value = asymptotic_or_saturated(prims, c, z, arg_exp, gs, bess);
            return Hyp0f1Result::new(value, Regime::ModifiedAsymptotic);
        }
        return Hyp0f1Result::new(arg_exp.exp() * gs * bess, Regime::Modified);
    }

    let bess = prims.besselj(c - one, two * a);
    if bess == zero || bess.is_infinite() {
        let value = asymptotic_or_saturated(prims, c, z, arg_exp, gs, bess);
        return Hyp0f1Result::new(value, Regime::OscillatoryAsymptotic);
    }
    Hyp0f1Result::new(log_domain(arg_exp, gs, bess), Regime::Oscillatory)
}

/// sgnΓ(c) · exp(arg_exp) · bess with |bess| folded into the exponent, so
/// Γ(c) and a^(1-c) never meet as inf · 0.
#[inline]
fn log_domain<T: SpecialFloat>(arg_exp: T, gs: T, bess: T) -> T {
    gs * bess.signum() * (arg_exp + bess.abs().ln()).exp()
}

/// The large-order expansion, or the saturated closed form where the
/// expansion does not exist (c == 1, or 2√(-z) ≥ |c - 1|).
fn asymptotic_or_saturated<T, P>(prims: &P, c: T, z: T, arg_exp: T, gs: T, bess: T) -> T
where
    T: SpecialFloat,
    P: Primitives<T> + ?Sized,
{
    let value = hyp0f1_asy_with(prims, c, z);
    if value.is_nan() && !bess.is_nan() {
        return log_domain(arg_exp, gs, bess);
    }
    value
}

/// Evaluate 0F1(c; z) and report which branch produced the value.
///
/// # Example
///
/// ```
/// use hyp0f1::{hyp0f1_raw, Regime};
///
/// let r = hyp0f1_raw(300.0_f64, 50.0);
/// assert_eq!(r.regime, Regime::ModifiedAsymptotic);
/// assert!((r.value - 1.1813059432824337).abs() < 1e-10);
/// ```
pub fn hyp0f1_raw<T: SpecialFloat>(c: T, z: T) -> Hyp0f1Result<T> {
    hyp0f1_with(&Native, c, z)
}

/// The confluent hypergeometric limit function 0F1(c; z) = Σ zᵏ / ((c)ₖ k!).
///
/// Total over the reals:
///
/// - `c` a non-positive integer: 0 (the series is undefined there).
/// - `z == 0`: 1.
/// - tiny `|z|`: `1 + z/c + z²/(2c(c+1))`.
/// - otherwise the Bessel form, falling back to the large-order expansion
///   when it would over- or underflow.
///
/// # Example
///
/// ```
/// use hyp0f1::hyp0f1;
///
/// // 0F1(3/2; x²/4) = sinh(x)/x
/// let v = hyp0f1(1.5_f64, 0.25);
/// assert!((v - 1.0_f64.sinh()).abs() < 1e-14);
/// assert_eq!(hyp0f1(-2.0_f64, 3.7), 0.0);
/// ```
pub fn hyp0f1<T: SpecialFloat>(c: T, z: T) -> T {
    hyp0f1_raw(c, z).value
}
