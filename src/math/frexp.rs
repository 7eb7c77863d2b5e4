//! IEEE 754 decomposition: frexp, ldexp, exp2n
//!
//! Bit-level exponent extraction and reconstruction, the foundation of the
//! log2/exp2/cbrt range reductions. Everything operates on the binary
//! representation through the integer-lane view; no division or rounding is
//! involved on the normal path.

use crate::traits::{constant, SimdElement, SimdInt, SimdMask, SimdVector};

/// Decompose x into (m, e) with x = m · 2^e and |m| in [0.5, 1).
///
/// # Algorithm
///
/// The biased exponent field is extracted with integer masking; the mantissa
/// keeps its sign and fraction bits with the exponent field overwritten by
/// 0.5's. Subnormal inputs are first renormalized by multiplying with
/// 2^mantissa-bits, which makes them normal, then the shift is subtracted from
/// the reported exponent.
///
/// The exponent is returned as an integer-valued float vector, which is exact
/// (|e| ≤ 1075 ≪ 2^mantissa-bits) and is the form every consumer wants it in.
///
/// # Special cases
///
/// ±0, ±Inf and NaN return (x, 0).
///
/// # Example
///
/// ```
/// use altair_math::backends::scalar::ScalarVector;
/// use altair_math::math::frexp;
///
/// let (m, e) = frexp(ScalarVector(24.0f64));
/// assert_eq!((m.0, e.0), (0.75, 5.0));
/// ```
#[inline(always)]
pub fn frexp<V: SimdVector>(x: V) -> (V, V) {
    type S<V> = <V as SimdVector>::Scalar;

    let zero = V::splat(S::<V>::ZERO);
    let abs_x = x.abs();

    // Renormalize subnormals so the exponent field is meaningful
    let subnormal = abs_x.lt(V::splat(S::<V>::MIN_NORMAL));
    let xn = V::select(subnormal, x.mul(V::splat(S::<V>::SUBNORMAL_SCALE)), x);

    let bits = xn.to_bits();
    let biased = V::from_int(
        bits.and(V::IntBits::splat(S::<V>::EXP_MASK))
            .shr(S::<V>::MANTISSA_BITS),
    );

    // Unbias so the mantissa lands in [0.5, 1) rather than [1, 2)
    let e = biased.sub(constant::<V>(f64::from(S::<V>::EXP_BIAS - 1)));
    let e = V::select(subnormal, e.sub(V::splat(S::<V>::SUBNORMAL_SHIFT)), e);

    let m = V::from_bits(
        bits.and(V::IntBits::splat(S::<V>::SIGN_MANTISSA_MASK))
            .or(V::IntBits::splat(S::<V>::HALF_BITS)),
    );

    // Zero, Inf and NaN all pass through with exponent 0
    let max_biased = constant::<V>(f64::from(2 * S::<V>::EXP_BIAS + 1));
    let special = x.eq(zero).or(biased.eq(max_biased));
    (V::select(special, x, m), V::select(special, zero, e))
}

/// Build 2^k for an integer-valued float vector k by writing the exponent field
/// directly. Defined for k + bias in the representable exponent range.
#[inline(always)]
fn pow2i<V: SimdVector>(k: V) -> V {
    let bias = V::IntBits::splat(<V::Scalar as SimdElement>::BIAS_BITS);
    V::from_bits(
        k.to_int()
            .add(bias)
            .shl(<V::Scalar as SimdElement>::MANTISSA_BITS),
    )
}

/// Compute 2^e for an integer-valued float vector e, over the full exponent
/// range of the format including subnormal results.
///
/// # Algorithm
///
/// e is clamped to the format's meaningful range, then split into two
/// half-sized exponents h = ⌊e/2⌋ and r = e − h, each built by direct bit
/// construction. Their product covers the subnormal range without per-lane
/// variable shifts: below the subnormal floor it underflows to exactly 0.0,
/// and above the maximum exponent it overflows to +Inf.
#[inline(always)]
pub fn exp2n<V: SimdVector>(e: V) -> V {
    let e = e
        .max(V::splat(<V::Scalar as SimdElement>::EXP2N_MIN))
        .min(V::splat(<V::Scalar as SimdElement>::EXP2N_MAX));
    let h = e.mul(constant::<V>(0.5)).floor();
    pow2i(h).mul(pow2i(e.sub(h)))
}

/// Scale x by 2^e: the exact inverse of [`frexp`] for finite x.
///
/// Unlike [`exp2n`], the exponent here can exceed the format's own range: a
/// subnormal x scaled up needs e beyond the overflow threshold (up to 2098
/// for f64) before the result actually overflows, and a huge x scaled down
/// reaches the subnormal floor just as far below it. The exponent is split
/// into three third-sized factors, each built by direct bit construction and
/// applied as a separate multiply, so no intermediate 2^k leaves the
/// representable exponent range.
#[inline(always)]
pub fn ldexp<V: SimdVector>(x: V, e: V) -> V {
    // Beyond twice the exp2n floor every scaling is saturated anyway
    let lim = V::splat(<V::Scalar as SimdElement>::EXP2N_MIN).mul(constant::<V>(-2.0));
    let e = e.max(lim.neg()).min(lim);
    let t = e.mul(constant::<V>(1.0 / 3.0)).floor();
    x.mul(pow2i(t)).mul(pow2i(t)).mul(pow2i(e.sub(t.add(t))))
}
