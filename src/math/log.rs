//! Logarithms: log2, log, log10
//!
//! One base-2 kernel; natural and decimal logs are scaled from it. The core is
//! the classic ln(1+f) evaluation in s = f/(2+f), which is odd in s and needs
//! only even powers.

use crate::math::frexp::frexp;
use crate::poly::horner;
use crate::traits::{constant, SimdElement, SimdVector};

/// Base-2 logarithm.
///
/// # Algorithm
///
/// [`frexp`](crate::math::frexp) splits x into m·2^e with m ∈ [0.5, 1); m is
/// re-centered into [√½, √2) so f = m − 1 stays small on both sides of zero.
/// With s = f/(2+f) and z = s²,
///
/// ln(1+f) = f − (f²/2 − s·(f²/2 + z·R(z)))
///
/// where R is the per-precision coefficient table. The result is
/// e + ln(m)·log₂e.
///
/// # Special cases
///
/// ±0 → −Inf, negative (including −Inf) → NaN, +Inf → +Inf, NaN → NaN.
///
/// # Error bounds
///
/// Relative error below 1e-6 (f32) / 1e-14 (f64) over the positive normal
/// range; exact at powers of two.
#[inline(always)]
pub fn log2<V: SimdVector>(x: V) -> V {
    let zero = V::splat(<V::Scalar as SimdElement>::ZERO);
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    let half = constant::<V>(0.5);

    let (m, e) = frexp(x);

    // Re-center the mantissa around 1 so f spans [√½ − 1, √2 − 1]
    let low = m.lt(constant::<V>(core::f64::consts::FRAC_1_SQRT_2));
    let m = V::select(low, m.add(m), m);
    let e = V::select(low, e.sub(one), e);

    let f = m.sub(one);
    let s = f.div(f.add(constant::<V>(2.0)));
    let z = s.mul(s);
    let r = z.mul(horner(z, <V::Scalar as SimdElement>::LOG_COEFFS));
    let hfsq = half.mul(f).mul(f);
    let ln = f.sub(hfsq.sub(s.mul(hfsq.add(r))));

    let raw = ln.mul(constant::<V>(core::f64::consts::LOG2_E)).add(e);

    // frexp passes Inf through as the mantissa, which the core turns into NaN
    let pos_inf = constant::<V>(f64::INFINITY);
    let result = V::select(x.eq(pos_inf), pos_inf, raw);
    let result = V::select(x.eq(zero), constant::<V>(f64::NEG_INFINITY), result);
    V::select(x.lt(zero), constant::<V>(f64::NAN), result)
}

/// Natural logarithm, scaled from [`log2`] by ln 2.
#[inline(always)]
pub fn log<V: SimdVector>(x: V) -> V {
    log2(x).mul(constant::<V>(core::f64::consts::LN_2))
}

/// Decimal logarithm, scaled from [`log2`] by log₁₀2.
#[inline(always)]
pub fn log10<V: SimdVector>(x: V) -> V {
    log2(x).mul(constant::<V>(core::f64::consts::LN_2 / core::f64::consts::LN_10))
}
