//! Steed's second continued fraction (CF2) for x ≥ 2.
//!
//! For K this is the Temme/Thompson–Barnett form that also sums the
//! normalisation series, so K_μ comes out without a Wronskian. For J/Y it
//! is the complex fraction for (J' + iY') / (J + iY), evaluated with
//! modified Lentz.

use num_complex::Complex;

use crate::algo::constants::{LENTZ_FLOOR, MAX_ITER, RTHPI};
use crate::machine::SpecialFloat;
use crate::types::Error;

/// K_μ(x) and K_{μ+1}(x) for x > 2.
pub(crate) fn k_cf2<T: SpecialFloat>(mu: T, x: T) -> Result<(T, T), Error> {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let half = T::from_f64(0.5);

    let mut b = two * (one + x);
    let mut d = one / b;
    let mut h = d;
    let mut delh = d;
    let mut q1 = zero;
    let mut q2 = one;
    let a1 = T::from_f64(0.25) - mu * mu;
    let mut q = a1;
    let mut c = a1;
    let mut a = -a1;
    let mut s = one + q * delh;

    for i in 1..MAX_ITER {
        let fi = T::from_f64(i as f64);
        a = a - two * fi;
        c = -a * c / (fi + one);
        let qnew = (q1 - b * q2) / a;
        q1 = q2;
        q2 = qnew;
        q = q + c * qnew;
        b = b + two;
        d = one / (b + a * d);
        delh = (b * d - one) * delh;
        h = h + delh;
        let dels = q * delh;
        s = s + dels;
        if (dels / s).abs() < T::MACH_EPSILON {
            let h = a1 * h;
            let kmu = T::from_f64(RTHPI) / x.sqrt() * (-x).exp() / s;
            let k1 = kmu * (mu + x + half - h) / x;
            return Ok((kmu, k1));
        }
    }
    Err(Error::ConvergenceFailure)
}

/// p + iq = (J'_μ + iY'_μ) / (J_μ + iY_μ) for x ≥ 2 and any real μ.
pub(crate) fn jy_cf2<T: SpecialFloat>(mu: T, x: T) -> Result<Complex<T>, Error> {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let tiny = T::from_f64(LENTZ_FLOOR);

    let xi = one / x;
    let mut a = T::from_f64(0.25) - mu * mu;
    let mut pq = Complex::new(-T::from_f64(0.5) * xi, one);
    let mut b = Complex::new(two * x, two);
    let mut c = b + Complex::i() * (a * xi) / pq;
    let mut d = b.inv();
    pq = pq * c * d;

    for i in 2..MAX_ITER {
        a = a + two * T::from_f64((i - 1) as f64);
        b.im = b.im + two;
        d = d * a + b;
        if d.re.abs() + d.im.abs() < tiny {
            d.re = tiny;
        }
        c = b + Complex::new(a, zero) / c;
        if c.re.abs() + c.im.abs() < tiny {
            c.re = tiny;
        }
        d = d.inv();
        let del = c * d;
        pq = pq * del;
        if (del.re - one).abs() + del.im.abs() < T::MACH_EPSILON {
            return Ok(pq);
        }
    }
    Err(Error::ConvergenceFailure)
}
