//! Uniform (Debye) expansion of I_ν(x) and K_ν(x) for large order.
//!
//! With z = x/ν, t = 1/√(1+z²) and η = √(1+z²) + ln(z / (1 + √(1+z²))):
//!
//! ```text
//! I_ν(νz) ~ e^{νη} / √(2πν) / (1+z²)^{1/4} · Σ  u_k(t) / ν^k
//! K_ν(νz) ~ e^{-νη} √(π/2ν) / (1+z²)^{1/4} · Σ (-1)^k u_k(t) / ν^k
//! ```
//!
//! DLMF 10.41.3 and 10.41.4. `u_k(t) = t^k · P_k(t²)`.

#![allow(clippy::excessive_precision)]

use crate::algo::constants::{LN_2PI, LN_PI};
use crate::machine::SpecialFloat;
use crate::utils::horner;

/// Number of u_k polynomials in [`U_POLY`], u_0 included.
const N_TERMS: usize = 15;

/// Coefficients of P_k(s) for k = 0..14, highest power of s first.
/// P_k has degree k, so polynomial k occupies k+1 consecutive entries.
#[rustfmt::skip]
const U_POLY: [f64; 120] = [
    // u_0
     1.00000000000000000e+00,
    // u_1
    -2.08333333333333343e-01,  1.25000000000000000e-01,
    // u_2
     3.34201388888888895e-01, -4.01041666666666685e-01,  7.03125000000000000e-02,
    // u_3
    -1.02581259645061729e+00,  1.84646267361111116e+00, -8.91210937500000022e-01,
     7.32421875000000000e-02,
    // u_4
     4.66958442342624735e+00, -1.12070026162229937e+01,  8.78912353515625000e+00,
    -2.36408691406249982e+00,  1.12152099609375000e-01,
    // u_5
    -2.82120725582002443e+01,  8.46362176746007293e+01, -9.18182415432400205e+01,
     4.25349987453884566e+01, -7.36879435947963213e+00,  2.27108001708984375e-01,
    // u_6
     2.12570130039217133e+02, -7.65252468141181680e+02,  1.05999045252799988e+03,
    -6.99579627376132521e+02,  2.18190511744211591e+02, -2.64914304869515540e+01,
     5.72501420974731445e-01,
    // u_7
    -1.91945766231840707e+03,  8.06172218173730926e+03, -1.35865500064341377e+04,
     1.16553933368645339e+04, -5.30564697861340301e+03,  1.20090291321635254e+03,
    -1.08090919788394658e+02,  1.72772750258445740e+00,
    // u_8
     2.02042913309661490e+04, -9.69805983886375179e+04,  1.92547001232531533e+05,
    -2.03400177280415548e+05,  1.22200464983017460e+05, -4.11926549688975501e+04,
     7.10951430248936413e+03, -4.93915304773087996e+02,  6.07404200127348304e+00,
    // u_9
    -2.42919187900551333e+05,  1.31176361466297717e+06, -2.99801591853810661e+06,
     3.76327129765640385e+06, -2.81356322658653418e+06,  1.26836527332162485e+06,
    -3.31645172484563605e+05,  4.52187689813627294e+04, -2.49983048181120967e+03,
     2.43805296995560639e+01,
    // u_10
     3.28446985307203792e+06, -1.97068191184322275e+07,  5.09526024926646426e+07,
    -7.41051482115326524e+07,  6.63445122747290283e+07, -3.75671766607633531e+07,
     1.32887671664218176e+07, -2.78561812808645470e+06,  3.08186404612662387e+05,
    -1.38860897537170404e+04,  1.10017140269246738e+02,
    // u_11
    -4.93292536645099595e+07,  3.25573074185765743e+08, -9.39462359681578398e+08,
     1.55359689957058001e+09, -1.62108055210833716e+09,  1.10684281682301450e+09,
    -4.95889784275030315e+08,  1.42062907797533095e+08, -2.44740627257387303e+07,
     2.24376817792244954e+06, -8.40054336030240811e+04,  5.51335896122020586e+02,
    // u_12
     8.14789096118312120e+08, -5.86648149205184746e+09,  1.86882075092958260e+10,
    -3.46320433881587753e+10,  4.12801855797539749e+10, -3.30265997498007240e+10,
     1.79542137311556015e+10, -6.56329379261928463e+09,  1.55927986487925744e+09,
    -2.25105661889415264e+08,  1.73951075539781637e+07, -5.49842327572288690e+05,
     3.03809051092238406e+03,
    // u_13
    -1.46792612476956158e+10,  1.14498237732025803e+11, -3.99096175224466492e+11,
     8.19218669548577271e+11, -1.09837515608122327e+12,  1.00815810686538208e+12,
    -6.45364869245376465e+11,  2.87900649906150574e+11, -8.78670721780232697e+10,
     1.76347306068349686e+10, -2.16716498322379494e+09,  1.43157876718888968e+08,
    -3.87183344257261278e+06,  1.82577554742931752e+04,
    // u_14
     2.86464035717679016e+11, -2.40629790002850391e+12,  9.10934118523989844e+12,
    -2.05168994109344375e+13,  3.05651255199353203e+13, -3.16670885847851602e+13,
     2.33483640445818398e+13, -1.23204913055982871e+13,  4.61272578084913184e+12,
    -1.19655288019618164e+12,  2.05914503232410004e+11, -2.18229277575292244e+10,
     1.24700929351271033e+09, -2.91883881222208142e+07,  1.18838426256783248e+05,
];

/// I_ν(x) and K_ν(x) for ν > 0 by the uniform expansion.
///
/// Accurate to machine precision for ν > 50 and any x > 0. Overflow gives
/// +∞ and underflow 0 in either component.
pub(crate) fn ik_uniform<T: SpecialFloat>(nu: T, x: T) -> (T, T) {
    let one = T::one();
    let half = T::from_f64(0.5);
    let eps = T::MACH_EPSILON;

    let z = x / nu;
    let sr = (one + z * z).sqrt();
    let t = one / sr;
    let t2 = t * t;
    let eta = sr + z.ln() - sr.ln_1p();

    let mut sum_i = one;
    let mut sum_k = one;
    let mut tk = one;
    let mut rfn = one;
    let mut start = 1;
    for k in 1..N_TERMS {
        let poly = horner(&U_POLY[start..start + k + 1], t2);
        start += k + 1;
        tk = tk * t;
        rfn = rfn / nu;
        let term = poly * tk * rfn;
        sum_i = sum_i + term;
        sum_k = if k % 2 == 0 { sum_k + term } else { sum_k - term };
        if term.abs() < eps * sum_i.abs() {
            break;
        }
    }

    // -½ ln(1+z²)^{1/2} - ½ ln(2πν)
    let base = -half * sr.ln() - half * (T::from_f64(LN_2PI) + nu.ln());
    let i = (base + nu * eta).exp() * sum_i;
    // √(π/2ν) = π / √(2πν)
    let k = (base - nu * eta + T::from_f64(LN_PI)).exp() * sum_k;
    (i, k)
}
