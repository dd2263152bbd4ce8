//! Large-argument (Hankel) expansions, DLMF 10.17 and 10.40.
//!
//! With μ = 4ν² the k-th term is
//! `a_k(ν)/x^k = Π_{j=1..k} (μ - (2j-1)²) / (8 x j)`.

use crate::algo::constants::{LN_2PI, PI};
use crate::machine::SpecialFloat;
use crate::types::Error;
use crate::utils::{cospi, sinpi};

/// Terms summed before the expansion is declared divergent.
const MAX_TERMS: usize = 500;

#[inline]
fn term_factor<T: SpecialFloat>(mu: T, x: T, k: usize) -> T {
    let odd = T::from_f64((2 * k - 1) as f64);
    let eight = T::from_f64(8.0);
    (mu - odd * odd) / (eight * x * T::from_f64(k as f64))
}

/// I_ν(x) ~ e^x / √(2πx) · Σ (-1)^k a_k(ν) / x^k.
///
/// Overflows to +∞ once x exceeds the exponent range.
pub(crate) fn i_large_arg<T: SpecialFloat>(nu: T, x: T) -> Result<T, Error> {
    let mu = T::from_f64(4.0) * nu * nu;
    let mut sum = T::one();
    let mut term = T::one();
    for k in 1..MAX_TERMS {
        term = -term * term_factor(mu, x, k);
        sum = sum + term;
        if term.abs() <= T::MACH_EPSILON * sum.abs() {
            let lead = x - T::from_f64(0.5) * (T::from_f64(LN_2PI) + x.ln());
            return Ok(lead.exp() * sum);
        }
    }
    Err(Error::ConvergenceFailure)
}

/// J_ν(x) and Y_ν(x) for x ≫ max(1, ν²).
///
/// ```text
/// J = √(2/πx) (P cos ω - Q sin ω)
/// Y = √(2/πx) (P sin ω + Q cos ω),     ω = x - (ν/2 + 1/4)π
/// ```
///
/// cos ω and sin ω are expanded by the angle-sum formulas so the phase
/// shift keeps full precision for large x.
pub(crate) fn jy_large_arg<T: SpecialFloat>(nu: T, x: T) -> Result<(T, T), Error> {
    let zero = T::zero();
    let one = T::one();
    let mu = T::from_f64(4.0) * nu * nu;

    let mut p = one;
    let mut q = zero;
    let mut term = one;
    let mut converged = false;
    for k in 1..MAX_TERMS {
        term = term * term_factor(mu, x, k);
        match k % 4 {
            1 => q = q + term,
            2 => p = p - term,
            3 => q = q - term,
            _ => p = p + term,
        }
        if term.abs() <= T::MACH_EPSILON * p.abs().max(q.abs()) {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(Error::ConvergenceFailure);
    }

    let phase = nu * T::from_f64(0.5) + T::from_f64(0.25);
    let (cp, sp) = (cospi(phase), sinpi(phase));
    let (sx, cx) = x.sin_cos();
    let cos_w = cx * cp + sx * sp;
    let sin_w = sx * cp - cx * sp;
    let amp = (T::from_f64(2.0 / PI) / x).sqrt();
    Ok((amp * (p * cos_w - q * sin_w), amp * (p * sin_w + q * cos_w)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn i_large_arg_values() {
        // I_{2.5}(701); e^x amplifies the rounding of x itself
        let v = i_large_arg(2.5_f64, 701.0).unwrap();
        assert!(rel(v, 4.1364038952060681e+302) < 1e-12, "{v}");
    }

    #[test]
    fn i_large_arg_overflows_to_infinity() {
        assert_eq!(i_large_arg(1.0_f64, 800.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn half_order_is_exact() {
        // J_{1/2}(x) = √(2/πx) sin x,  Y_{1/2}(x) = -√(2/πx) cos x
        let x = 123.456_f64;
        let (j, y) = jy_large_arg(0.5, x).unwrap();
        let amp = (2.0 / (core::f64::consts::PI * x)).sqrt();
        assert!((j - amp * x.sin()).abs() < 1e-15);
        assert!((y + amp * x.cos()).abs() < 1e-15);
    }

    #[test]
    fn jy_large_arg_values() {
        // J_0(100), Y_0(100), J_{10.2}(700)
        let (j, y) = jy_large_arg(0.0_f64, 100.0).unwrap();
        assert!((j - 0.019985850304223122).abs() < 1e-15, "{j}");
        assert!((y + 0.07724431336508315).abs() < 1e-15, "{y}");
        let (j, _) = jy_large_arg(10.2_f64, 700.0).unwrap();
        assert!((j + 0.0008981743011400122).abs() < 1e-15, "{j}");
    }
}
