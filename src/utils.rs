//! Small real-valued helpers shared by the dispatcher and the primitives.

use crate::machine::SpecialFloat;

/// Numerically stable `x * ln(y)`.
///
/// Returns exactly 0 when `x == 0`, whatever `y` is (including 0 and ∞),
/// so the `(1 - c) * ln(√z)` term of 0F1 never becomes `0 · (−∞)`.
/// NaN inputs propagate.
#[inline]
pub fn xlogy<T: SpecialFloat>(x: T, y: T) -> T {
    if x == T::zero() && !y.is_nan() {
        return T::zero();
    }
    x * y.ln()
}

/// Reduce `|x|` modulo 2 into `[0, 2)`.
#[inline]
fn reduce_mod2<T: SpecialFloat>(x: T) -> T {
    x.abs() % T::from_f64(2.0)
}

/// Compute sin(π·x) with exact values at integers and half-integers.
///
/// The argument is reduced modulo 2 before multiplying by π, so
/// `sinpi(n)` is exactly 0 for every integer `n` and `sinpi(n + 0.5)` is
/// exactly ±1. `(x * PI).sin()` gives `sin(1.5 * PI) = -1.837e-16` instead.
#[inline]
pub fn sinpi<T: SpecialFloat>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let half = T::from_f64(0.5);
    let pi = T::from_f64(core::f64::consts::PI);

    if !x.is_finite() {
        return T::nan();
    }

    let r = reduce_mod2(x);
    // sin(π(r+1)) = -sin(πr)
    let (r, flip) = if r >= one { (r - one, true) } else { (r, false) };

    let s = if r == zero {
        zero
    } else if r == half {
        one
    } else if r < half {
        (r * pi).sin()
    } else {
        ((one - r) * pi).sin()
    };

    let s = if flip { -s } else { s };
    if x < zero {
        -s
    } else {
        s
    }
}

/// Compute cos(π·x) with exact values at integers and half-integers.
///
/// `cospi(n + 0.5)` is exactly 0 and `cospi(n)` is exactly ±1.
#[inline]
pub fn cospi<T: SpecialFloat>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let half = T::from_f64(0.5);
    let pi = T::from_f64(core::f64::consts::PI);

    if !x.is_finite() {
        return T::nan();
    }

    // cos is even
    let r = reduce_mod2(x);
    let (r, flip) = if r >= one { (r - one, true) } else { (r, false) };

    let c = if r == zero {
        one
    } else if r == half {
        zero
    } else if r < half {
        (r * pi).cos()
    } else {
        -((one - r) * pi).cos()
    };

    if flip {
        -c
    } else {
        c
    }
}

/// Whether `x` is a non-positive integer, i.e. a pole of Γ.
#[inline]
pub(crate) fn is_nonpositive_integer<T: SpecialFloat>(x: T) -> bool {
    x <= T::zero() && x == x.floor()
}

/// Evaluate `Σ coeffs[j] · s^(n-1-j)` by Horner's rule, highest power first.
#[inline]
pub(crate) fn horner<T: SpecialFloat>(coeffs: &[f64], s: T) -> T {
    coeffs
        .iter()
        .fold(T::zero(), |acc, &c| acc.fma(s, T::from_f64(c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── xlogy tests ──

    #[test]
    fn xlogy_zero_times_log_zero_is_zero() {
        assert_eq!(xlogy(0.0_f64, 0.0), 0.0);
        assert_eq!(xlogy(0.0_f64, f64::INFINITY), 0.0);
        assert_eq!(xlogy(0.0_f64, 3.0), 0.0);
    }

    #[test]
    fn xlogy_general_values() {
        let v = xlogy(2.5_f64, 7.0);
        assert!((v - 2.5 * 7.0_f64.ln()).abs() < 1e-15);
        assert_eq!(xlogy(1.0_f64, 0.0), f64::NEG_INFINITY);
        assert_eq!(xlogy(-1.0_f64, 0.0), f64::INFINITY);
    }

    #[test]
    fn xlogy_nan_propagates() {
        assert!(xlogy(0.0_f64, f64::NAN).is_nan());
        assert!(xlogy(f64::NAN, 2.0).is_nan());
    }

    // ── sinpi tests ──

    #[test]
    fn sinpi_integers_are_zero() {
        for n in -5..=5 {
            let x = n as f64;
            assert_eq!(sinpi(x), 0.0, "sinpi({x}) should be exactly 0");
        }
    }

    #[test]
    fn sinpi_half_integers() {
        assert_eq!(sinpi(0.5_f64), 1.0);
        assert_eq!(sinpi(1.5_f64), -1.0);
        assert_eq!(sinpi(2.5_f64), 1.0);
        assert_eq!(sinpi(-0.5_f64), -1.0);
        assert_eq!(sinpi(-1.5_f64), 1.0);
    }

    #[test]
    fn sinpi_general_values() {
        assert!((sinpi(1.0_f64 / 6.0) - 0.5).abs() < 1e-15);
        assert!((sinpi(0.25_f64) - core::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
        assert!((sinpi(1.25_f64) + core::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
        assert!((sinpi(-0.25_f64) + core::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
    }

    #[test]
    fn sinpi_large_near_integer_argument() {
        // 299.000001: naive sin(π x) loses ~5 digits to the π·x rounding
        let v = sinpi(299.000001_f64);
        let expected = -(1.0e-6 * core::f64::consts::PI).sin();
        assert!((v - expected).abs() / expected.abs() < 1e-8);
        assert_eq!(sinpi(1e15_f64), 0.0);
    }

    #[test]
    fn sinpi_non_finite_is_nan() {
        assert!(sinpi(f64::INFINITY).is_nan());
        assert!(sinpi(f64::NAN).is_nan());
    }

    #[test]
    fn sinpi_f32() {
        assert_eq!(sinpi(0.0_f32), 0.0);
        assert_eq!(sinpi(0.5_f32), 1.0);
        assert_eq!(sinpi(1.0_f32), 0.0);
        assert_eq!(sinpi(1.5_f32), -1.0);
    }

    // ── cospi tests ──

    #[test]
    fn cospi_integers() {
        assert_eq!(cospi(0.0_f64), 1.0);
        assert_eq!(cospi(1.0_f64), -1.0);
        assert_eq!(cospi(2.0_f64), 1.0);
        assert_eq!(cospi(-1.0_f64), -1.0);
        assert_eq!(cospi(-3.0_f64), -1.0);
    }

    #[test]
    fn cospi_half_integers_are_zero() {
        for n in -5..=5 {
            let x = n as f64 + 0.5;
            assert_eq!(cospi(x), 0.0, "cospi({x}) should be exactly 0");
        }
    }

    #[test]
    fn cospi_general_values() {
        assert!((cospi(1.0_f64 / 3.0) - 0.5).abs() < 1e-15);
        assert!((cospi(2.0_f64 / 3.0) + 0.5).abs() < 1e-15);
        assert!((cospi(1.25_f64) + core::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
        assert!((cospi(1.75_f64) - core::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
    }

    // ── helpers ──

    #[test]
    fn nonpositive_integers() {
        assert!(is_nonpositive_integer(0.0_f64));
        assert!(is_nonpositive_integer(-3.0_f64));
        assert!(!is_nonpositive_integer(-3.5_f64));
        assert!(!is_nonpositive_integer(2.0_f64));
    }

    #[test]
    fn horner_highest_power_first() {
        // 2s² - 3s + 5 at s = 4
        let v: f64 = horner(&[2.0, -3.0, 5.0], 4.0);
        assert_eq!(v, 25.0);
    }
}
