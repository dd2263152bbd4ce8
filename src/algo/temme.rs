//! Temme's series for K_μ and Y_μ at small argument, |μ| ≤ ½.
//!
//! Both series share the auxiliary gamma quantities
//!
//! ```text
//! Γ₁(μ) = (1/Γ(1-μ) - 1/Γ(1+μ)) / (2μ)
//! Γ₂(μ) = (1/Γ(1-μ) + 1/Γ(1+μ)) / 2
//! ```
//!
//! with Γ₁ taken from a Chebyshev-derived power series when |μ| is small,
//! where the difference above cancels.
//! N. M. Temme, J. Comput. Phys. 19 (1975) and 21 (1976).

#![allow(clippy::excessive_precision)]

use crate::algo::constants::{MAX_ITER, PI};
use crate::algo::gamln::gamln;
use crate::machine::SpecialFloat;
use crate::types::Error;
use crate::utils::sinpi;

/// Power-series coefficients of -Γ₁(μ) in μ². CC[0] = γ (Euler-Mascheroni).
#[rustfmt::skip]
const CC: [f64; 8] = [
    5.77215664901532861e-01,
   -4.20026350340952355e-02,
   -4.21977345555443367e-02,
    7.21894324666309954e-03,
   -2.15241674114950973e-04,
   -2.01348547807882387e-05,
    1.13302723198169588e-06,
    6.11609510448141582e-09,
];

/// Below this |μ| the series for Γ₁ replaces the direct difference.
const SMALL_MU: f64 = 0.1;

#[derive(Debug, Clone, Copy)]
pub(crate) struct TemmeGammas<T> {
    pub(crate) gam1: T,
    pub(crate) gam2: T,
    /// 1/Γ(1+μ)
    pub(crate) gampl: T,
    /// 1/Γ(1-μ)
    pub(crate) gammi: T,
    /// πμ / sin(πμ)
    pub(crate) fc: T,
}

pub(crate) fn temme_gammas<T: SpecialFloat>(mu: T) -> Result<TemmeGammas<T>, Error> {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);

    let fc = if mu == zero {
        one
    } else {
        mu * T::from_f64(PI) / sinpi(mu)
    };
    let gampl = (-gamln(one + mu)?).exp();
    // Γ(1+μ)Γ(1-μ) = πμ / sin(πμ)
    let gammi = one / (gampl * fc);

    let gam1 = if mu.abs() > T::from_f64(SMALL_MU) {
        (gammi - gampl) / (two * mu)
    } else {
        let mu2 = mu * mu;
        let mut ak = one;
        let mut s = T::from_f64(CC[0]);
        for &c in &CC[1..] {
            ak = ak * mu2;
            let tm = T::from_f64(c) * ak;
            s = s + tm;
            if tm.abs() < T::MACH_EPSILON {
                break;
            }
        }
        -s
    };
    let gam2 = (gammi + gampl) / two;

    Ok(TemmeGammas {
        gam1,
        gam2,
        gampl,
        gammi,
        fc,
    })
}

/// sinh(e)/e, 1 at e = 0.
#[inline]
fn sinhc<T: SpecialFloat>(e: T) -> T {
    if e.abs() < T::MACH_EPSILON {
        T::one()
    } else {
        e.sinh() / e
    }
}

/// K_μ(x) and K_{μ+1}(x) for 0 < x ≤ 2, |μ| ≤ ½.
pub(crate) fn k_series<T: SpecialFloat>(mu: T, x: T) -> Result<(T, T), Error> {
    let one = T::one();
    let half = T::from_f64(0.5);
    let g = temme_gammas(mu)?;

    let x2 = half * x;
    let d = -x2.ln();
    let e = mu * d;
    let ee = e.exp();

    let mut ff = g.fc * (g.gam1 * e.cosh() + g.gam2 * sinhc(e) * d);
    let mut p = half * ee / g.gampl;
    let mut q = half / (ee * g.gammi);
    let mut c = one;
    let dd = x2 * x2;
    let mut sum = ff;
    let mut sum1 = p;

    for i in 1..MAX_ITER {
        let fi = T::from_f64(i as f64);
        ff = (fi * ff + p + q) / (fi * fi - mu * mu);
        c = c * dd / fi;
        p = p / (fi - mu);
        q = q / (fi + mu);
        let del = c * ff;
        sum = sum + del;
        sum1 = sum1 + c * (p - fi * ff);
        if del.abs() < sum.abs() * T::MACH_EPSILON {
            return Ok((sum, sum1 * T::from_f64(2.0) / x));
        }
    }
    Err(Error::ConvergenceFailure)
}

/// Y_μ(x) and Y_{μ+1}(x) for 0 < x < 2, |μ| ≤ ½.
pub(crate) fn y_series<T: SpecialFloat>(mu: T, x: T) -> Result<(T, T), Error> {
    let one = T::one();
    let half = T::from_f64(0.5);
    let pi = T::from_f64(PI);
    let g = temme_gammas(mu)?;

    let x2 = half * x;
    let d = -x2.ln();
    let e = mu * d;
    let ee = e.exp();

    let mut ff = T::from_f64(2.0) / pi * g.fc * (g.gam1 * e.cosh() + g.gam2 * sinhc(e) * d);
    let mut p = ee / (g.gampl * pi);
    let mut q = one / (ee * pi * g.gammi);
    let pimu2 = half * pi * mu;
    let fact3 = if pimu2.abs() < T::MACH_EPSILON {
        one
    } else {
        pimu2.sin() / pimu2
    };
    let r = pi * pimu2 * fact3 * fact3;
    let mut c = one;
    let dd = -x2 * x2;
    let mut sum = ff + r * q;
    let mut sum1 = p;

    for i in 1..MAX_ITER {
        let fi = T::from_f64(i as f64);
        ff = (fi * ff + p + q) / (fi * fi - mu * mu);
        c = c * dd / fi;
        p = p / (fi - mu);
        q = q / (fi + mu);
        let del = c * (ff + r * q);
        sum = sum + del;
        sum1 = sum1 + (c * p - fi * del);
        if del.abs() < (one + sum.abs()) * T::MACH_EPSILON {
            return Ok((-sum, -sum1 * T::from_f64(2.0) / x));
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
    fn gammas_small_mu_is_continuous() {
        // the series branch and the direct difference agree near the switch
        let below = temme_gammas(0.0999999_f64).unwrap();
        let above = temme_gammas(0.1000001_f64).unwrap();
        assert!((below.gam1 - above.gam1).abs() < 1e-7);
        assert!((below.gam2 - above.gam2).abs() < 1e-7);
    }

    #[test]
    fn gammas_at_zero() {
        let g = temme_gammas(0.0_f64).unwrap();
        // Γ₁(0) = -γ, Γ₂(0) = 1
        assert!(rel(g.gam1, -0.5772156649015329) < 1e-15);
        assert!(rel(g.gam2, 1.0) < 1e-15);
        assert_eq!(g.fc, 1.0);
    }

    #[test]
    fn k_series_values() {
        // K_0(1), K_1(1)
        let (k0, k1) = k_series(0.0_f64, 1.0).unwrap();
        assert!(rel(k0, 0.42102443824070834) < 1e-14, "{k0}");
        assert!(rel(k1, 0.6019072301972346) < 1e-14, "{k1}");
        // K_{0.3}(0.5)
        let (k, _) = k_series(0.3_f64, 0.5).unwrap();
        assert!(rel(k, 0.9764741243817879) < 1e-14, "{k}");
    }

    #[test]
    fn y_series_values() {
        // Y_0(1), Y_1(1)
        let (y0, y1) = y_series(0.0_f64, 1.0).unwrap();
        assert!(rel(y0, 0.08825696421567696) < 1e-13, "{y0}");
        assert!(rel(y1, -0.7812128213002887) < 1e-14, "{y1}");
        // Y_{-0.4}(1.5)
        let (y, _) = y_series(-0.4_f64, 1.5).unwrap();
        assert!(rel(y, 0.6260956319067490) < 1e-13, "{y}");
    }
}
