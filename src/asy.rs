//! Large-order expansion of 0F1 through the uniform Bessel asymptotics.
//!
//! With ν = |c - 1|, a = √|z| and x = 2a/ν, the positive-argument form is
//! DLMF 10.41.3/10.41.4 applied to
//!
//! ```text
//! 0F1(c; z) = Γ(c) a^(1-c) I_{c-1}(2a)
//! I_{-ν} = I_ν + (2/π) sin(νπ) K_ν
//! ```
//!
//! and the negative-argument form is the Debye expansion (DLMF 10.19.6,
//! x < 1) applied to
//!
//! ```text
//! 0F1(c; z) = Γ(c) a^(1-c) J_{c-1}(2a)
//! J_{-ν} = cos(νπ) J_ν - sin(νπ) Y_ν
//! ```
//!
//! Everything up to the final `exp` stays in the log domain, so Γ(c) and
//! a^(1-c) may individually be far outside the floating-point range.

#![allow(clippy::excessive_precision)]

use crate::algo::constants::LN_2PI;
use crate::machine::SpecialFloat;
use crate::primitives::{Native, Primitives};
use crate::utils::horner;

// u_k(p) = p^k · U_k(p²) / D_k, DLMF 10.41.10
const U1: [f64; 2] = [-5.0, 3.0];
const U1_DEN: f64 = 24.0;
const U2: [f64; 3] = [385.0, -462.0, 81.0];
const U2_DEN: f64 = 1152.0;
const U3: [f64; 4] = [-425425.0, 765765.0, -369603.0, 30375.0];
const U3_DEN: f64 = 414720.0;

/// The first three Debye polynomials u_1, u_2, u_3 at p.
#[inline]
fn debye_polys<T: SpecialFloat>(p: T) -> (T, T, T) {
    let p2 = p * p;
    let u1 = horner(&U1, p2) * p / T::from_f64(U1_DEN);
    let u2 = horner(&U2, p2) * p2 / T::from_f64(U2_DEN);
    let u3 = horner(&U3, p2) * p2 * p / T::from_f64(U3_DEN);
    (u1, u2, u3)
}

/// Asymptotic 0F1(c; z) for large |c - 1| using the given primitives.
///
/// `z` must be nonzero. For `z < 0` the expansion only exists while
/// `2√(-z) < |c - 1|`; beyond that the result is NaN.
pub fn hyp0f1_asy_with<T, P>(prims: &P, c: T, z: T) -> T
where
    T: SpecialFloat,
    P: Primitives<T> + ?Sized,
{
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let half = T::from_f64(0.5);

    let oscillatory = z < zero;
    let a = z.abs().sqrt();
    let v1 = (c - one).abs();
    let x = two * a / v1;

    let p1 = if oscillatory {
        if x >= one {
            return T::nan();
        }
        (one - x * x).sqrt()
    } else {
        (one + x * x).sqrt()
    };
    let eta = p1 + x.ln() - p1.ln_1p();

    let base = -half * p1.ln() - half * (T::from_f64(LN_2PI) + v1.ln()) + prims.lgamma(c);
    let gs = prims.gammasgn(c);

    let (u1, u2, u3) = debye_polys(one / p1);
    let v1_2 = v1 * v1;
    let v1_3 = v1_2 * v1;
    let corr_lead = one + u1 / v1 + u2 / v1_2 + u3 / v1_3;
    let corr_alt = one - u1 / v1 + u2 / v1_2 - u3 / v1_3;

    // a^(1-c) in both terms: -ν ln a for c > 1, +ν ln a for c < 1
    let scale = prims.xlogy(one - c, a);
    let mut result = (base + v1 * eta + scale).exp() * gs * corr_lead;

    if c - one < zero {
        if oscillatory {
            result = result * prims.cospi(v1);
        }
        // K_ν (positive z) and -Y_ν (negative z) share this form
        let second = (base - v1 * eta + scale).exp() * gs * two * prims.sinpi(v1) * corr_alt;
        result = result + second;
    }
    result
}

/// Asymptotic 0F1(c; z) for large |c - 1|, with the built-in primitives.
///
/// This is the fallback [`hyp0f1`](crate::hyp0f1) takes when the direct
/// Bessel form over- or underflows. It is exposed for callers that know
/// they are deep in the large-order regime.
///
/// # Example
///
/// ```
/// use hyp0f1::{hyp0f1, hyp0f1_asy};
///
/// let direct = hyp0f1(80.0_f64, 30.0);
/// let asy = hyp0f1_asy(80.0_f64, 30.0);
/// assert!(((direct - asy) / direct).abs() < 1e-8);
/// ```
pub fn hyp0f1_asy<T: SpecialFloat>(c: T, z: T) -> T {
    hyp0f1_asy_with(&Native, c, z)
}
