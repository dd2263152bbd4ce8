//! Bessel function of the first kind, J_ν(x), for real ν and x ≥ 0.
//!
//! For x > max(50, ν²/4) the Hankel expansion is used. Otherwise J_ν and
//! Y_ν come from the Temme/Steed method:
//!
//! 1. CF1 gives J'_ν/J_ν; downward recurrence carries the unnormalised
//!    pair to order μ, with |μ| ≤ ½ when x < 2.
//! 2. Temme's series (x < 2) or the complex CF2 (x ≥ 2) yields Y_μ, Y_{μ+1}
//!    and, through the Wronskian, the normalisation of J_μ.
//! 3. Y is carried forward to order ν.
//!
//! Negative orders use J_{-ν} = cos(νπ) J_ν - sin(νπ) Y_ν, which is why Y
//! is always computed alongside J.

use crate::algo::constants::{HANKEL_ARG_J, PI};
use crate::algo::gamln::gammasgn;
use crate::algo::hankel::jy_large_arg;
use crate::algo::ratio::j_log_derivative;
use crate::algo::steed::jy_cf2;
use crate::algo::temme::y_series;
use crate::machine::SpecialFloat;
use crate::types::Error;
use crate::utils::{cospi, sinpi};

/// J_ν(x) and Y_ν(x) for ν ≥ 0, x > 0.
fn jy_temme<T: SpecialFloat>(nu: T, x: T) -> Result<(T, T), Error> {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let half = T::from_f64(0.5);

    let xi = one / x;
    let xi2 = two * xi;
    // Wronskian J_μ Y'_μ - J'_μ Y_μ = 2/(πx)
    let w = xi2 / T::from_f64(PI);

    let nl = if x < two {
        (nu + half).floor()
    } else {
        (nu - x + T::from_f64(1.5)).floor().max(zero)
    };
    let steps = nl.to_usize().ok_or(Error::InvalidInput)?;
    let mu = nu - nl;

    let (h, sign) = j_log_derivative(nu, x)?;

    // ── Downward recurrence from ν to μ, rescaled to stay finite ──
    let big = T::MACH_HUGE.sqrt();
    let rbig = one / big;
    let mut rjl = sign;
    let mut rjpl = h * rjl;
    let mut rjl1 = rjl;
    let mut fact = nu * xi;
    for _ in 0..steps {
        let rjtemp = fact * rjl + rjpl;
        fact = fact - xi;
        rjpl = fact * rjtemp - rjl;
        rjl = rjtemp;
        if rjl.abs() > big {
            rjl = rjl * rbig;
            rjpl = rjpl * rbig;
            rjl1 = rjl1 * rbig;
        }
    }
    if rjl == zero {
        rjl = T::MACH_EPSILON;
    }
    let f = rjpl / rjl;

    let (rjmu, mut rymu, mut ry1) = if x < two {
        let (rymu, ry1) = y_series(mu, x)?;
        let rymup = mu * xi * rymu - ry1;
        (w / (rymup - f * rymu), rymu, ry1)
    } else {
        let pq = jy_cf2(mu, x)?;
        let (p, q) = (pq.re, pq.im);
        let gam = (p - f) / q;
        let rjmu = (w / ((p - f) * gam + q)).sqrt().copysign(rjl);
        let rymu = rjmu * gam;
        let rymup = rymu * (p + q / gam);
        (rjmu, rymu, mu * xi * rymu - rymup)
    };
    let rj = rjl1 * (rjmu / rjl);

    // ── Forward recurrence for Y, stopping once it saturates ──
    for i in 1..=steps {
        let next = (mu + T::from_f64(i as f64)) * xi2 * ry1 - rymu;
        if !next.is_finite() {
            rymu = next;
            break;
        }
        rymu = ry1;
        ry1 = next;
    }
    Ok((rj, rymu))
}

fn jy_positive<T: SpecialFloat>(nu: T, x: T) -> Result<(T, T), Error> {
    if x > T::from_f64(HANKEL_ARG_J) && x > nu * nu * T::from_f64(0.25) {
        jy_large_arg(nu, x)
    } else {
        jy_temme(nu, x)
    }
}

/// Bessel function of the first kind, J_ν(x).
///
/// Defined for any real order and `x ≥ 0`. For negative non-integer
/// orders J_{-ν} grows without bound as x → 0 and may saturate to ±∞.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if `x < 0` or either input is NaN.
/// - [`Error::ConvergenceFailure`] if a continued fraction or the Hankel
///   expansion fails to converge.
///
/// # Example
///
/// ```
/// use hyp0f1::besselj;
///
/// let v = besselj(0.0_f64, 2.404825557695773).unwrap();
/// assert!(v.abs() < 1e-14);
/// ```
pub fn besselj<T: SpecialFloat>(nu: T, x: T) -> Result<T, Error> {
    let zero = T::zero();
    let one = T::one();

    if nu.is_nan() || x.is_nan() || x < zero || nu.is_infinite() {
        return Err(Error::InvalidInput);
    }

    // J_{-n} = (-1)^n J_n
    if nu < zero && nu == nu.floor() {
        let j = besselj(-nu, x)?;
        return Ok(cospi(nu) * j);
    }

    if x == zero {
        return Ok(if nu == zero {
            one
        } else if nu > zero {
            zero
        } else {
            T::infinity() * gammasgn(nu + one)
        });
    }
    if x.is_infinite() {
        return Ok(zero);
    }

    let anu = nu.abs();
    let (j, y) = jy_positive(anu, x)?;
    if nu < zero {
        return Ok(cospi(anu) * j - sinpi(anu) * y);
    }
    Ok(j)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn besselj_input_validation() {
        assert_eq!(besselj(1.0_f64, -1.0), Err(Error::InvalidInput));
        assert_eq!(besselj(f64::NAN, 1.0), Err(Error::InvalidInput));
        assert_eq!(besselj(0.5_f64, f64::NAN), Err(Error::InvalidInput));
    }

    #[test]
    fn besselj_at_zero_and_infinity() {
        assert_eq!(besselj(0.0_f64, 0.0), Ok(1.0));
        assert_eq!(besselj(1.5_f64, 0.0), Ok(0.0));
        assert_eq!(besselj(-2.0_f64, 0.0), Ok(0.0));
        assert_eq!(besselj(-0.5_f64, 0.0), Ok(f64::INFINITY));
        assert_eq!(besselj(3.0_f64, f64::INFINITY), Ok(0.0));
    }

    #[test]
    fn besselj_half_integer_closed_forms() {
        // J_{1/2}(x) = √(2/πx) sin x,  J_{-1/2}(x) = √(2/πx) cos x
        for &x in &[0.01_f64, 0.7, 1.99, 2.0, 5.0, 30.0, 80.0] {
            let amp = (2.0 / (core::f64::consts::PI * x)).sqrt();
            let jp = besselj(0.5, x).unwrap();
            let jm = besselj(-0.5, x).unwrap();
            assert!((jp - amp * x.sin()).abs() < 1e-13 * amp, "J_0.5({x}) = {jp}");
            assert!((jm - amp * x.cos()).abs() < 1e-13 * amp, "J_-0.5({x}) = {jm}");
        }
    }

    #[test]
    fn besselj_reference_values() {
        // (ν, x, J_ν(x))
        let cases: &[(f64, f64, f64)] = &[
            (0.0, 1.0, 0.76519768655796655),
            (1.0, 2.5, 0.49709410246427404),
            (0.3, 1.0e-5, 2.8620072142050116e-2),
            (2.5, 10.0, 0.19665848358181841),
            (-1.7, 0.5, -2.667953778288505),
            (10.2, 3.0, 8.7759833670198034e-6),
            (49.5, 60.0, -0.13300393998389362),
            (-120.3, 20.0, 7.0102304513567377e+76),
        ];
        for &(nu, x, expected) in cases {
            let v = besselj(nu, x).unwrap();
            assert!(rel(v, expected) < 1e-12, "J_{nu}({x}) = {v}, expected {expected}");
        }
    }

    #[test]
    fn besselj_negative_integer_order() {
        let a = besselj(-3.0_f64, 4.2).unwrap();
        let b = besselj(3.0_f64, 4.2).unwrap();
        assert_eq!(a, -b);
        let a = besselj(-2.0_f64, 4.2).unwrap();
        let b = besselj(2.0_f64, 4.2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn besselj_continuous_across_method_switch() {
        // x = 50 is the Hankel boundary for small orders
        let below = besselj(1.3_f64, 50.0 - 1e-9).unwrap();
        let above = besselj(1.3_f64, 50.0 + 1e-9).unwrap();
        assert!((below - above).abs() < 1e-9);
    }

    #[test]
    fn besselj_saturates_for_negative_order_near_zero() {
        let v = besselj(-300.5_f64, 5.0).unwrap();
        assert_eq!(v, f64::INFINITY);
        assert_eq!(besselj(300.0_f64, 1.0), Ok(0.0));
    }

    #[test]
    fn besselj_argument_well_above_order() {
        // J'/J starts from ν/x = 0 for ν = 0
        let cases: &[(f64, f64, f64)] = &[
            (0.0, 12.0, 0.047689310796833537),
            (0.0, 20.0, 0.16702466434058315),
            (1.0, 35.0, 0.04399094217962564),
            (0.3, 45.0, 0.11551007405320722),
        ];
        for &(nu, x, expected) in cases {
            let v = besselj(nu, x).unwrap();
            assert!((v - expected).abs() < 1e-13, "J_{nu}({x}) = {v}");
        }
    }
}
