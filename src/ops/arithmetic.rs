//! Branch-free arithmetic primitives
//!
//! Functional-style operations over SIMD vectors. Everything here is lane-wise
//! and branchless: conditionals are mask selects, signs are bit operations.

use crate::traits::{SimdElement, SimdInt, SimdVector};

/// Add two SIMD vectors element-wise.
#[inline(always)]
pub fn add<V: SimdVector>(a: V, b: V) -> V {
    a.add(b)
}

/// Subtract two SIMD vectors element-wise.
#[inline(always)]
pub fn sub<V: SimdVector>(a: V, b: V) -> V {
    a.sub(b)
}

/// Multiply two SIMD vectors element-wise.
#[inline(always)]
pub fn mul<V: SimdVector>(a: V, b: V) -> V {
    a.mul(b)
}

/// Divide two SIMD vectors element-wise.
#[inline(always)]
pub fn div<V: SimdVector>(a: V, b: V) -> V {
    a.div(b)
}

/// Negate a SIMD vector element-wise.
#[inline(always)]
pub fn neg<V: SimdVector>(a: V) -> V {
    a.neg()
}

/// Absolute value (sign bit cleared, so abs(-0.0) = 0.0 and NaN payloads survive).
#[inline(always)]
pub fn abs<V: SimdVector>(x: V) -> V {
    x.abs()
}

/// Double a value: x + x.
#[inline(always)]
pub fn dbl<V: SimdVector>(x: V) -> V {
    x.add(x)
}

/// Square a value: x · x.
#[inline(always)]
pub fn sqr<V: SimdVector>(x: V) -> V {
    x.mul(x)
}

/// Multiplicative inverse 1/x. Reciprocal of ±0 is ±Inf; no approximation
/// instruction is used.
#[inline(always)]
pub fn reciprocal<V: SimdVector>(x: V) -> V {
    V::splat(<V::Scalar as SimdElement>::ONE).div(x)
}

/// Compose the magnitude of `x` with the sign bit of `y`.
///
/// Pure bit manipulation, so copysign(NaN, -1.0) is a negative NaN and
/// copysign(0.0, -0.0) is -0.0.
#[inline(always)]
pub fn copysign<V: SimdVector>(x: V, y: V) -> V {
    let abs_mask = V::IntBits::splat(<V::Scalar as SimdElement>::ABS_MASK);
    let sign_mask = V::IntBits::splat(<V::Scalar as SimdElement>::SIGN_MASK);
    V::from_bits(x.to_bits().and(abs_mask).or(y.to_bits().and(sign_mask)))
}

/// Sign of x as ±1, taken from the sign bit: sign(-0.0) = -1, sign(NaN)
/// follows the NaN's sign bit.
#[inline(always)]
pub fn sign<V: SimdVector>(x: V) -> V {
    copysign(V::splat(<V::Scalar as SimdElement>::ONE), x)
}

/// Euclidean norm √(x² + y²).
///
/// Evaluated as `sqrt(fma(x, x, y·y))`; there is no overflow rescaling, so
/// components near the format maximum overflow to +Inf.
///
/// # Example
///
/// ```
/// use altair_math::backends::scalar::ScalarVector;
/// use altair_math::ops::hypot;
///
/// let h = hypot(ScalarVector(3.0f64), ScalarVector(4.0));
/// assert_eq!(h.0, 5.0);
/// ```
#[inline(always)]
pub fn hypot<V: SimdVector>(x: V, y: V) -> V {
    x.fma(x, y.mul(y)).sqrt()
}

/// Distance between the 2D points (x1, y1) and (x2, y2).
#[inline(always)]
pub fn v2_length<V: SimdVector>(x1: V, y1: V, x2: V, y2: V) -> V {
    hypot(x2.sub(x1), y2.sub(y1))
}

/// Distance between the 3D points (x1, y1, z1) and (x2, y2, z2).
#[inline(always)]
pub fn v3_length<V: SimdVector>(x1: V, y1: V, z1: V, x2: V, y2: V, z2: V) -> V {
    let dx = x2.sub(x1);
    let dy = y2.sub(y1);
    let dz = z2.sub(z1);
    dx.fma(dx, dy.fma(dy, dz.mul(dz))).sqrt()
}

/// Floored floating-point remainder x − ⌊x/d⌋·d, in [0, |d|) for finite
/// quotients.
///
/// When |x/d| exceeds 1/ε the subtraction has lost all fractional information;
/// those lanes return d/2 instead of a meaningless cancellation result.
#[inline(always)]
pub fn modulo<V: SimdVector>(x: V, d: V) -> V {
    let q = x.div(d);
    let reduced = x.sub(q.floor().mul(d));
    let huge = V::splat(<V::Scalar as SimdElement>::ONE)
        .div(V::splat(<V::Scalar as SimdElement>::EPSILON));
    let half_d = d.mul(crate::traits::constant::<V>(0.5));
    V::select(q.abs().gt(huge), half_d, reduced)
}

/// Minmod-style pair reduction: 0 when the operands disagree in sign (or
/// either is zero), otherwise the one of smaller magnitude with the sign of `a`.
#[inline(always)]
pub fn modmin<V: SimdVector>(a: V, b: V) -> V {
    let zero = V::splat(<V::Scalar as SimdElement>::ZERO);
    let smaller = copysign(a.abs().min(b.abs()), a);
    V::select(a.mul(b).le(zero), zero, smaller)
}

/// Linear interpolation of (x1, y1)-(x2, y2) at x, clamped to the endpoint
/// values outside [x1, x2].
///
/// # Example
///
/// ```
/// use altair_math::backends::scalar::ScalarVector;
/// use altair_math::ops::interpolate;
///
/// let s = |v: f64| ScalarVector(v);
/// assert_eq!(interpolate(s(0.5), s(0.0), s(1.0), s(10.0), s(20.0)).0, 15.0);
/// assert_eq!(interpolate(s(-3.0), s(0.0), s(1.0), s(10.0), s(20.0)).0, 10.0);
/// ```
#[inline(always)]
pub fn interpolate<V: SimdVector>(x: V, x1: V, x2: V, y1: V, y2: V) -> V {
    let inner = extrapolate(x, x1, x2, y1, y2);
    let low = V::select(x.lt(x1), y1, inner);
    V::select(x.gt(x2), y2, low)
}

/// Linear extension of the line through (x1, y1) and (x2, y2) at x, without
/// clamping. x1 = x2 divides by zero and yields ±Inf/NaN lanes.
#[inline(always)]
pub fn extrapolate<V: SimdVector>(x: V, x1: V, x2: V, y1: V, y2: V) -> V {
    let slope = y2.sub(y1).div(x2.sub(x1));
    x.sub(x1).fma(slope, y1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::scalar::ScalarVector;

    fn s(v: f64) -> ScalarVector<f64> {
        ScalarVector(v)
    }

    #[test]
    fn test_sign_honours_the_sign_bit_of_zero() {
        assert_eq!(sign(s(-0.0)).0, -1.0);
        assert_eq!(sign(s(0.0)).0, 1.0);
        assert_eq!(sign(s(-3.5)).0, -1.0);
    }

    #[test]
    fn test_copysign_is_pure_bit_manipulation() {
        assert_eq!(copysign(s(2.0), s(-0.0)).0, -2.0);
        assert!(copysign(s(f64::NAN), s(-1.0)).0.is_nan());
        assert!(copysign(s(f64::NAN), s(-1.0)).0.is_sign_negative());
    }

    #[test]
    fn test_reciprocal_of_signed_zero() {
        assert_eq!(reciprocal(s(0.0)).0, f64::INFINITY);
        assert_eq!(reciprocal(s(-0.0)).0, f64::NEG_INFINITY);
    }

    #[test]
    fn test_modulo_stays_in_range() {
        for &(x, d) in &[(7.5, 2.0), (-7.5, 2.0), (1.0, 0.3), (-0.1, 1.0)] {
            let r = modulo(s(x), s(d)).0;
            assert!((0.0..d).contains(&r), "modulo({x}, {d}) = {r}");
            let k = (x - r) / d;
            assert!((k - libm::round(k)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_modulo_huge_quotient_falls_back_to_half_divisor() {
        let r = modulo(s(1.0e300), s(1.0e-14)).0;
        assert_eq!(r, 0.5e-14);
    }

    #[test]
    fn test_modmin_zero_on_sign_disagreement() {
        assert_eq!(modmin(s(3.0), s(-2.0)).0, 0.0);
        assert_eq!(modmin(s(0.0), s(5.0)).0, 0.0);
        assert_eq!(modmin(s(3.0), s(2.0)).0, 2.0);
        assert_eq!(modmin(s(-3.0), s(-2.0)).0, -2.0);
    }

    #[test]
    fn test_interpolate_clamps_extrapolate_extends() {
        let (x1, x2, y1, y2) = (s(1.0), s(3.0), s(10.0), s(30.0));
        assert_eq!(interpolate(s(2.0), x1, x2, y1, y2).0, 20.0);
        assert_eq!(interpolate(s(0.0), x1, x2, y1, y2).0, 10.0);
        assert_eq!(interpolate(s(9.0), x1, x2, y1, y2).0, 30.0);
        assert_eq!(extrapolate(s(0.0), x1, x2, y1, y2).0, 0.0);
        assert_eq!(extrapolate(s(9.0), x1, x2, y1, y2).0, 90.0);
    }

    #[test]
    fn test_hypot_and_lengths() {
        assert_eq!(hypot(s(3.0), s(4.0)).0, 5.0);
        assert_eq!(v2_length(s(1.0), s(1.0), s(4.0), s(5.0)).0, 5.0);
        let d = v3_length(s(0.0), s(0.0), s(0.0), s(2.0), s(3.0), s(6.0)).0;
        assert_eq!(d, 7.0);
    }
}
