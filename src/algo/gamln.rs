//! Logarithm, sign and value of the Gamma function for real arguments.
//!
//! Positive arguments use table lookup for the integers 1..100 and
//! Stirling's series otherwise, shifted upward by recurrence when the
//! argument is too small for the series to converge. Negative non-integers
//! go through the reflection formula Γ(x)Γ(1-x) = π / sin(πx).

// Constants and tables are exact values — preserve verbatim.
#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

use crate::algo::constants::{LN_2PI, LN_PI};
use crate::machine::SpecialFloat;
use crate::types::Error;
use crate::utils::{is_nonpositive_integer, sinpi};

/// log₁₀(2), used to size the Stirling recurrence shift.
const LOG10_2: f64 = 0.30102999566398120;

/// ln(Γ(n)) for n = 1, 2, ..., 100.
///
/// Used for fast table lookup when the argument is a positive integer ≤ 100.
/// Γ(1) = Γ(2) = 1, so ln(Γ(1)) = ln(Γ(2)) = 0.
#[rustfmt::skip]
const GLN_TABLE: [f64; 100] = [
    0.00000000000000000e+00,  0.00000000000000000e+00,  // Γ(1)=1, Γ(2)=1
    6.93147180559945309e-01,  1.79175946922805500e+00,  // Γ(3)=2, Γ(4)=6
    3.17805383034794562e+00,  4.78749174278204599e+00,
    6.57925121201010100e+00,  8.52516136106541430e+00,
    1.06046029027452502e+01,  1.28018274800814696e+01,
    1.51044125730755153e+01,  1.75023078458738858e+01,
    1.99872144956618861e+01,  2.25521638531234229e+01,
    2.51912211827386815e+01,  2.78992713838408916e+01,
    3.06718601060806728e+01,  3.35050734501368889e+01,
    3.63954452080330536e+01,  3.93398841871994940e+01,
    4.23356164607534850e+01,  4.53801388984769080e+01,
    4.84711813518352239e+01,  5.16066755677643736e+01,
    5.47847293981123192e+01,  5.80036052229805199e+01,
    6.12617017610020020e+01,  6.45575386270063311e+01,
    6.78897431371815350e+01,  7.12570389671680090e+01,
    7.46582363488301644e+01,  7.80922235533153106e+01,
    8.15579594561150372e+01,  8.50544670175815174e+01,
    8.85808275421976788e+01,  9.21361756036870925e+01,
    9.57196945421432025e+01,  9.93306124547874269e+01,
    1.02968198614513813e+02,  1.06631760260643459e+02,
    1.10320639714757395e+02,  1.14034211781461703e+02,
    1.17771881399745072e+02,  1.21533081515438634e+02,
    1.25317271149356895e+02,  1.29123933639127215e+02,
    1.32952575035616310e+02,  1.36802722637326368e+02,
    1.40673923648234259e+02,  1.44565743946344886e+02,
    1.48477766951773032e+02,  1.52409592584497358e+02,
    1.56360836303078785e+02,  1.60331128216630907e+02,
    1.64320112263195181e+02,  1.68327445448427652e+02,
    1.72352797139162802e+02,  1.76395848406997352e+02,
    1.80456291417543771e+02,  1.84533828861449491e+02,
    1.88628173423671591e+02,  1.92739047287844902e+02,
    1.96866181672889994e+02,  2.01009316399281527e+02,
    2.05168199482641199e+02,  2.09342586752536836e+02,
    2.13532241494563261e+02,  2.17736934113954227e+02,
    2.21956441819130334e+02,  2.26190548323727593e+02,
    2.30439043565776952e+02,  2.34701723442818268e+02,
    2.38978389561834323e+02,  2.43268849002982714e+02,
    2.47572914096186884e+02,  2.51890402209723194e+02,
    2.56221135550009525e+02,  2.60564940971863209e+02,
    2.64921649798552801e+02,  2.69291097651019823e+02,
    2.73673124285693704e+02,  2.78067573440366143e+02,
    2.82474292687630396e+02,  2.86893133295426994e+02,
    2.91323950094270308e+02,  2.95766601350760624e+02,
    3.00220948647014132e+02,  3.04686856765668715e+02,
    3.09164193580146922e+02,  3.13652829949879062e+02,
    3.18152639620209327e+02,  3.22663499126726177e+02,
    3.27185287703775217e+02,  3.31717887196928473e+02,
    3.36261181979198477e+02,  3.40815058870799018e+02,
    3.45379407062266854e+02,  3.49954118040770237e+02,
    3.54539085519440809e+02,  3.59134205369575399e+02,
];

/// Coefficients of the asymptotic expansion for ln(Γ(z)).
///
/// These are related to the Bernoulli numbers B_{2k}:
///   CF(k) = B_{2k} / (2k * (2k-1))
/// for k = 1, 2, ..., 22.
#[rustfmt::skip]
const CF_TABLE: [f64; 22] = [
     8.33333333333333333e-02,   // B2/(1*2)    = 1/12
    -2.77777777777777778e-03,   // B4/(3*4)    = -1/360
     7.93650793650793651e-04,   // B6/(5*6)
    -5.95238095238095238e-04,   // B8/(7*8)
     8.41750841750841751e-04,   // B10/(9*10)
    -1.91752691752691753e-03,   // B12/(11*12)
     6.41025641025641026e-03,   // B14/(13*14)
    -2.95506535947712418e-02,   // B16/(15*16)
     1.79644372368830573e-01,   // B18/(17*18)
    -1.39243221690590112e+00,   // B20/(19*20)
     1.34028640441683920e+01,   // B22/(21*22)
    -1.56848284626002017e+02,
     2.19310333333333333e+03,
    -3.61087712537249894e+04,
     6.91472268851313067e+05,
    -1.52382215394074162e+07,
     3.82900751391414141e+08,
    -1.08822660357843911e+10,
     3.47320283765002252e+11,
    -1.23696021422692745e+13,
     4.88788064793079335e+14,
    -2.13203339609193739e+16,
];

/// Compute ln(Γ(z)) for z > 0.
///
/// 1. Positive integers 1..100: table lookup (exact).
/// 2. Otherwise Stirling's series
///    `ln Γ(z) = z(ln z - 1) + ½(ln 2π - ln z) + Σ CF(k) z^{-(2k-1)}`,
///    after shifting `z` up to `zmin` with `Γ(z+n) = z(z+1)…(z+n-1)Γ(z)`.
pub(crate) fn gamln<T: SpecialFloat>(z: T) -> Result<T, Error> {
    let zero = T::zero();
    let one = T::one();
    let half = T::from_f64(0.5);

    if z.is_nan() || z <= zero {
        return Err(Error::InvalidInput);
    }
    if z.is_infinite() {
        return Ok(z);
    }

    if z <= T::from_f64(101.0) && z == z.floor() {
        let n = z.to_usize().ok_or(Error::InvalidInput)?;
        if (1..=100).contains(&n) {
            return Ok(T::from_f64(GLN_TABLE[n - 1]));
        }
    }

    // Terms below wdtol relative to the first one are dropped.
    let wdtol = (T::from_f64(2.0) * T::MACH_EPSILON).max(T::from_f64(0.5e-18));

    // zmin = 1.8 + 0.3875·(min(digits·log₁₀2, 20) - 3), rounded up
    let rln = T::from_f64(LOG10_2 * f64::from(T::MACH_DIGITS));
    let fln = rln.min(T::from_f64(20.0)).max(T::from_f64(3.0)) - T::from_f64(3.0);
    let zm = T::from_f64(1.8) + T::from_f64(0.3875) * fln;
    let zmin = zm.floor() + one;

    let (zdmy, shift) = if z < zmin {
        let shift = zmin - z.floor();
        (z + shift, shift)
    } else {
        (z, zero)
    };

    let zp = one / zdmy;
    let t1 = T::from_f64(CF_TABLE[0]) * zp;
    let mut s = t1;
    if zp >= wdtol {
        let zsq = zp * zp;
        let tst = t1 * wdtol;
        let mut zpow = zp;
        for cf in &CF_TABLE[1..] {
            zpow = zpow * zsq;
            let trm = T::from_f64(*cf) * zpow;
            if trm.abs() < tst {
                break;
            }
            s = s + trm;
        }
    }

    let tlg = zdmy.ln();
    let stirling = zdmy * (tlg - one) + half * (T::from_f64(LN_2PI) - tlg) + s;
    if shift == zero {
        return Ok(stirling);
    }

    // Undo the shift: ln Γ(z) = ln Γ(z + n) - ln(z (z+1) … (z+n-1))
    let mut product = one;
    let mut k = zero;
    while k < shift {
        product = product * (z + k);
        k = k + one;
    }
    Ok(stirling - product.ln())
}

/// Natural logarithm of |Γ(x)| for real `x`.
///
/// Fails with [`Error::InvalidInput`] at the poles (non-positive integers)
/// and for NaN. `lgamma(+∞) = +∞`.
pub fn lgamma<T: SpecialFloat>(x: T) -> Result<T, Error> {
    if x.is_nan() || x == T::neg_infinity() || is_nonpositive_integer(x) {
        return Err(Error::InvalidInput);
    }
    if x > T::zero() {
        return gamln(x);
    }
    // ln|Γ(x)| = ln π - ln|sin πx| - ln Γ(1-x)
    let s = sinpi(x).abs();
    Ok(T::from_f64(LN_PI) - s.ln() - gamln(T::one() - x)?)
}

/// Sign of Γ(x): +1 or −1, and 0 at the poles.
///
/// Γ is positive on `(0, ∞)` and on the intervals `(-2k-2, -2k-1)`,
/// negative on `(-2k-1, -2k)`. NaN maps to NaN.
pub fn gammasgn<T: SpecialFloat>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    if x > T::zero() {
        return T::one();
    }
    if is_nonpositive_integer(x) {
        return T::zero();
    }
    let fl = x.floor();
    let two = T::from_f64(2.0);
    let even = (fl / two).floor() * two == fl;
    if even {
        T::one()
    } else {
        -T::one()
    }
}

/// Γ(x) for real `x`.
///
/// Fails with [`Error::InvalidInput`] at the poles. Overflows to ±∞ for
/// large positive `x`, and underflows to ±0 for large negative `x`.
pub fn gamma<T: SpecialFloat>(x: T) -> Result<T, Error> {
    let lg = lgamma(x)?;
    Ok(gammasgn(x) * lg.exp())
}
