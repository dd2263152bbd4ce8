//! First continued fractions (CF1) for Bessel function ratios.
//!
//! Both fractions follow from the three-term recurrences and are summed
//! with the modified Lentz algorithm (Thompson & Barnett, J. Comput. Phys.
//! 64, 1986). They converge for every x > 0 but need O(x) terms once x
//! exceeds the order.

use crate::algo::constants::{LENTZ_FLOOR, MAX_ITER};
use crate::machine::SpecialFloat;
use crate::types::Error;

/// I_{ν+1}(x) / I_ν(x) for ν ≥ 0, x > 0.
pub(crate) fn i_ratio<T: SpecialFloat>(nu: T, x: T) -> Result<T, Error> {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let tiny = T::from_f64(LENTZ_FLOOR);

    let mut c = tiny;
    let mut f = tiny;
    let mut d = zero;
    for k in 1..MAX_ITER {
        let b = two * (nu + T::from_f64(k as f64)) / x;
        c = b + one / c;
        d = b + d;
        if c == zero {
            c = tiny;
        }
        if d == zero {
            d = tiny;
        }
        d = one / d;
        let delta = c * d;
        f = f * delta;
        if (delta - one).abs() <= T::MACH_EPSILON {
            return Ok(f);
        }
    }
    Err(Error::ConvergenceFailure)
}

/// Logarithmic derivative J'_ν(x) / J_ν(x) for ν ≥ 0, x > 0.
///
/// The second component is ±1: the sign to seed the downward recurrence
/// with so that it reproduces J_ν and not -J_ν.
pub(crate) fn j_log_derivative<T: SpecialFloat>(nu: T, x: T) -> Result<(T, T), Error> {
    let zero = T::zero();
    let one = T::one();
    let tiny = T::from_f64(LENTZ_FLOOR);

    let xi = one / x;
    let xi2 = xi + xi;
    let mut sign = one;
    let mut h = (nu * xi).max(tiny);
    let mut b = xi2 * nu;
    let mut d = zero;
    let mut c = h;
    for _ in 1..MAX_ITER {
        b = b + xi2;
        d = b - d;
        if d.abs() < tiny {
            d = tiny;
        }
        c = b - one / c;
        if c.abs() < tiny {
            c = tiny;
        }
        d = one / d;
        let del = c * d;
        h = del * h;
        if d < zero {
            sign = -sign;
        }
        if (del - one).abs() <= T::MACH_EPSILON {
            return Ok((h, sign));
        }
    }
    Err(Error::ConvergenceFailure)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn i_ratio_values() {
        // I_1(1)/I_0(1)
        let r = i_ratio(0.0_f64, 1.0).unwrap();
        assert!(rel(r, 0.44638996589653451) < 1e-14, "{r}");
        // I_{1/2} / I_{-1/2} = tanh x, so I_{3/2}/I_{1/2} = coth x - 1/x
        let x = 3.0_f64;
        let r = i_ratio(0.5_f64, x).unwrap();
        assert!(rel(r, 1.0 / x.tanh() - 1.0 / x) < 1e-14, "{r}");
    }

    #[test]
    fn i_ratio_large_argument_stays_finite() {
        // first partial denominator 2(ν+1)/x well below 1
        let r = i_ratio(0.0_f64, 10.0).unwrap();
        assert!(rel(r, 0.94859982595484596) < 1e-14, "{r}");
        let r = i_ratio(0.0_f64, 400.0).unwrap();
        assert!(rel(r, 0.99874921678920567) < 1e-14, "{r}");
    }

    #[test]
    fn j_log_derivative_order_zero() {
        // J'_0/J_0 at x = 20, seeded from ν/x = 0
        let (h, _) = j_log_derivative(0.0_f64, 20.0).unwrap();
        assert!(rel(h, -0.40013925152736339) < 1e-13, "{h}");
    }

    #[test]
    fn j_log_derivative_half_order() {
        // J_{1/2}(x) ∝ sin x / √x, so J'/J = cot x - 1/(2x)
        let x = 2.0_f64;
        let (h, _) = j_log_derivative(0.5_f64, x).unwrap();
        assert!(rel(h, 1.0 / x.tan() - 0.5 / x) < 1e-13, "{h}");
    }

    #[test]
    fn j_log_derivative_small_argument() {
        // J_ν(x) ~ (x/2)^ν/Γ(ν+1): J'/J → ν/x
        let (h, sign) = j_log_derivative(3.0_f64, 1e-4).unwrap();
        assert!(rel(h, 3.0e4) < 1e-8, "{h}");
        assert_eq!(sign, 1.0);
    }
}
