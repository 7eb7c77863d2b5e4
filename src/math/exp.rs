//! Exponential functions: exp2, exp, exp10, expm1
//!
//! All three exponentials funnel through [`exp2`]; base conversion is a single
//! multiply by a log constant. The fractional core is a Taylor expansion of
//! e^y − 1 with a per-precision term count covering the full [0, ln 2] range.

use crate::math::frexp::exp2n;
use crate::poly::horner;
use crate::traits::{constant, SimdElement, SimdMask, SimdVector};

/// Well-conditioned e^y − 1 on |y| ≤ 0.7, without the cancellation of
/// computing e^y first: y · (1 + y/2! + y²/3! + ...).
#[inline(always)]
pub(crate) fn expm1_wc<V: SimdVector>(y: V) -> V {
    y.mul(horner(y, <V::Scalar as SimdElement>::EXPM1_COEFFS))
}

/// Base-2 exponential 2^x.
///
/// # Algorithm
///
/// x is clamped to the format's meaningful exponent range and split into
/// n = ⌊x⌋ and f = x − n ∈ [0, 1). The integer part becomes a bit-constructed
/// 2^n via [`exp2n`]; the fraction is 2^f = 1 + expm1wc(f·ln 2). Overflow
/// saturates to +Inf and underflow to 0.0 through the clamp; NaN propagates.
///
/// # Error bounds
///
/// Relative error below 1e-6 (f32) / 1e-14 (f64) over the finite range; exact
/// for integer x down to the normal range.
///
/// # Example
///
/// ```
/// use altair_math::backends::scalar::ScalarVector;
/// use altair_math::math::exp2;
///
/// assert_eq!(exp2(ScalarVector(10.0f64)).0, 1024.0);
/// ```
#[inline(always)]
pub fn exp2<V: SimdVector>(x: V) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);

    let xc = x
        .max(V::splat(<V::Scalar as SimdElement>::EXP2N_MIN))
        .min(V::splat(<V::Scalar as SimdElement>::EXP2N_MAX));
    let n = xc.floor();
    let f = xc.sub(n);

    let frac = expm1_wc(f.mul(constant::<V>(core::f64::consts::LN_2))).add(one);
    let result = exp2n(n).mul(frac);

    // The clamp destroys NaN lanes; restore them
    V::select(x.eq(x).not(), x, result)
}

/// Natural exponential e^x, evaluated as 2^(x·log₂e).
#[inline(always)]
pub fn exp<V: SimdVector>(x: V) -> V {
    exp2(x.mul(constant::<V>(core::f64::consts::LOG2_E)))
}

/// Base-10 exponential 10^x, evaluated as 2^(x·log₂10).
#[inline(always)]
pub fn exp10<V: SimdVector>(x: V) -> V {
    exp2(x.mul(constant::<V>(core::f64::consts::LOG2_10)))
}

/// e^x − 1, accurate near zero.
///
/// For |x| < 0.5 the Taylor core is used directly, keeping full relative
/// accuracy where e^x − 1 ≈ x; elsewhere exp(x) − 1 is exact enough.
#[inline(always)]
pub fn expm1<V: SimdVector>(x: V) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    let near = expm1_wc(x);
    let far = exp(x).sub(one);
    V::select(x.abs().lt(constant::<V>(0.5)), near, far)
}
