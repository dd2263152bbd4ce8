//! Modified Bessel function of the first kind, I_ν(x), for real ν and x ≥ 0.
//!
//! Method selection:
//!
//! | region            | method                                        |
//! |-------------------|-----------------------------------------------|
//! | \|ν\| > 50        | uniform expansion ([`ik_uniform`])            |
//! | x > 700           | Hankel expansion ([`i_large_arg`])            |
//! | otherwise         | Temme: K by series or CF2, I by CF1 + Wronskian |
//!
//! Negative non-integer orders use I_{-ν} = I_ν + (2/π) sin(νπ) K_ν, so every
//! path also yields K_ν where it is needed.

use crate::algo::constants::{DEBYE_ORDER, HANKEL_ARG_I, TWO_OVER_PI};
use crate::algo::debye::ik_uniform;
use crate::algo::gamln::gammasgn;
use crate::algo::hankel::i_large_arg;
use crate::algo::ratio::i_ratio;
use crate::algo::steed::k_cf2;
use crate::algo::temme::k_series;
use crate::machine::SpecialFloat;
use crate::types::Error;
use crate::utils::sinpi;

/// I_ν(x) and K_ν(x) for ν ≥ 0, 0 < x ≤ 700, by Temme's method.
///
/// I comes from the Wronskian I_ν K_{ν+1} + I_{ν+1} K_ν = 1/x, so an
/// underflowed K turns into an infinite I and vice versa.
fn ik_temme<T: SpecialFloat>(nu: T, x: T) -> Result<(T, T), Error> {
    let one = T::one();
    let two = T::from_f64(2.0);

    let n = (nu + T::from_f64(0.5)).floor();
    let mu = nu - n;
    let (mut k0, mut k1) = if x <= two {
        k_series(mu, x)?
    } else {
        k_cf2(mu, x)?
    };

    // forward recurrence is stable for K
    let steps = n.to_usize().ok_or(Error::InvalidInput)?;
    for k in 1..=steps {
        let next = two * (mu + T::from_f64(k as f64)) * k1 / x + k0;
        k0 = k1;
        k1 = next;
    }

    let f = i_ratio(nu, x)?;
    let i = one / (x * (k0 * f + k1));
    Ok((i, k0))
}

/// Modified Bessel function of the first kind, I_ν(x).
///
/// Defined for any real order and `x ≥ 0`. Results that exceed the
/// floating-point range come back as `+∞` (or `-∞` for the rare negative
/// orders where I is negative), and results below it as 0, so callers can
/// detect both without inspecting an error.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if `x < 0` or either input is NaN.
/// - [`Error::ConvergenceFailure`] if a continued fraction exhausts its
///   iteration cap.
///
/// # Example
///
/// ```
/// use hyp0f1::besseli;
///
/// let v = besseli(0.0_f64, 1.0).unwrap();
/// assert!((v - 1.2660658777520082).abs() < 1e-15);
/// ```
pub fn besseli<T: SpecialFloat>(nu: T, x: T) -> Result<T, Error> {
    let zero = T::zero();
    let one = T::one();

    if nu.is_nan() || x.is_nan() || x < zero || nu.is_infinite() {
        return Err(Error::InvalidInput);
    }

    // I_{-n} = I_n
    let nu = if nu < zero && nu == nu.floor() { -nu } else { nu };

    if x == zero {
        return Ok(if nu == zero {
            one
        } else if nu > zero {
            zero
        } else {
            // (x/2)^ν / Γ(ν+1) with ν < 0
            T::infinity() * gammasgn(nu + one)
        });
    }
    if x.is_infinite() {
        return Ok(T::infinity());
    }

    let anu = nu.abs();
    let (i, k) = if anu > T::from_f64(DEBYE_ORDER) {
        ik_uniform(anu, x)
    } else if x > T::from_f64(HANKEL_ARG_I) {
        // K ≈ e^{-x} is negligible against I here
        (i_large_arg(anu, x)?, zero)
    } else {
        ik_temme(anu, x)?
    };

    if nu < zero {
        return Ok(i + T::from_f64(TWO_OVER_PI) * sinpi(anu) * k);
    }
    Ok(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn besseli_input_validation() {
        assert_eq!(besseli(1.0_f64, -1.0), Err(Error::InvalidInput));
        assert_eq!(besseli(f64::NAN, 1.0), Err(Error::InvalidInput));
        assert_eq!(besseli(1.0_f64, f64::NAN), Err(Error::InvalidInput));
    }

    #[test]
    fn besseli_at_zero() {
        assert_eq!(besseli(0.0_f64, 0.0), Ok(1.0));
        assert_eq!(besseli(2.5_f64, 0.0), Ok(0.0));
        assert_eq!(besseli(-3.0_f64, 0.0), Ok(0.0));
        // 1/Γ(0.5) > 0, 1/Γ(-0.5) < 0
        assert_eq!(besseli(-0.5_f64, 0.0), Ok(f64::INFINITY));
        assert_eq!(besseli(-1.5_f64, 0.0), Ok(f64::NEG_INFINITY));
    }

    #[test]
    fn besseli_half_integer_closed_forms() {
        // I_{1/2}(x) = √(2/πx) sinh x,  I_{-1/2}(x) = √(2/πx) cosh x
        for &x in &[0.01_f64, 0.7, 2.0, 5.0, 30.0] {
            let amp = (2.0 / (core::f64::consts::PI * x)).sqrt();
            let ip = besseli(0.5, x).unwrap();
            let im = besseli(-0.5, x).unwrap();
            assert!(rel(ip, amp * x.sinh()) < 1e-14, "I_0.5({x}) = {ip}");
            assert!(rel(im, amp * x.cosh()) < 1e-14, "I_-0.5({x}) = {im}");
        }
    }

    #[test]
    fn besseli_reference_values() {
        // (ν, x, I_ν(x))
        let cases: &[(f64, f64, f64)] = &[
            (0.0, 1.0, 1.2660658777520082),
            (1.0, 1.0, 0.56515910399248503),
            (0.3, 1.0e-5, 2.8620072143150888e-2),
            (2.5, 10.0, 2.0285127573919357e+3),
            (-1.7, 0.5, -2.2261419139882758),
            (10.2, 3.0, 1.3116509777024501e-5),
            (29.9, 40.0, 2.9241602643344395e+11),
            (49.5, 1.0, 2.9421237226919676e-79),
            (-2.5, 600.0, 6.1143500769085827e+258),
        ];
        for &(nu, x, expected) in cases {
            let v = besseli(nu, x).unwrap();
            assert!(rel(v, expected) < 1e-13, "I_{nu}({x}) = {v}, expected {expected}");
        }
    }

    #[test]
    fn besseli_negative_integer_order() {
        let a = besseli(-4.0_f64, 3.3).unwrap();
        let b = besseli(4.0_f64, 3.3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn besseli_large_order() {
        // I_100(50), I_{-120.3}(20)
        let v = besseli(100.0_f64, 50.0).unwrap();
        assert!(rel(v, 2.7278879470966916e-16) < 1e-13, "{v}");
        let v = besseli(-120.3_f64, 20.0).unwrap();
        assert!(rel(v, 1.3111020443965087e+76) < 1e-13, "{v}");
    }

    #[test]
    fn besseli_saturates() {
        assert_eq!(besseli(0.0_f64, 1000.0), Ok(f64::INFINITY));
        assert_eq!(besseli(299.0_f64, 1.0e-3), Ok(0.0));
        assert!(besseli(49.5_f64, 1.0e-5).unwrap() < 1e-300);
    }

    #[test]
    fn besseli_f32() {
        let v = besseli(1.0_f32, 1.0).unwrap();
        assert!((v - 0.5651591_f32).abs() < 1e-6);
    }

    #[test]
    fn besseli_argument_well_above_order() {
        // CF1 for I_{ν+1}/I_ν with x ≫ ν
        let cases: &[(f64, f64, f64)] = &[
            (0.0, 20.0, 43558282.559553534),
            (1.0, 50.0, 2.9030785901035568e+20),
            (0.3, 300.0, 4.4751749183812634e+128),
            (2.5, 40.0, 13761967080749733.0),
            (0.0, 700.0, 1.5295933476718737e+302),
        ];
        for &(nu, x, expected) in cases {
            let v = besseli(nu, x).unwrap();
            assert!(rel(v, expected) < 1e-13, "I_{nu}({x}) = {v}");
        }
    }
}
