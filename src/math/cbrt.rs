//! Cube root

use crate::math::frexp::{exp2n, frexp};
use crate::ops::copysign;
use crate::traits::{constant, SimdElement, SimdMask, SimdVector};

const CBRT_2: f64 = 1.259_921_049_894_873_2;
const CBRT_4: f64 = 1.587_401_051_968_199_4;

/// Cube root, defined for the whole real line.
///
/// # Algorithm
///
/// |x| is split into m·2^e with m ∈ [0.5, 1). The exponent is decomposed
/// e = 3q + r with r ∈ {0, 1, 2} by floored division, which keeps r
/// non-negative for negative e. A quadratic seed on the mantissa (exact at the
/// interval ends) is refined by Newton steps y ← (2y + m/y²)/3, then the
/// result is rebuilt as y · 2^q · cbrt(2^r) with the sign of x restored by a
/// bit copy.
///
/// # Special cases
///
/// cbrt(±0) = ±0, cbrt(±Inf) = ±Inf, NaN propagates.
#[inline(always)]
pub fn cbrt<V: SimdVector>(x: V) -> V {
    let zero = V::splat(<V::Scalar as SimdElement>::ZERO);
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    let third = constant::<V>(1.0 / 3.0);
    let three = constant::<V>(3.0);

    let ax = x.abs();
    let (m, e) = frexp(ax);

    let q = e.div(three).floor();
    let r = e.sub(q.mul(three)); // 0, 1 or 2, exactly

    // Seed: quadratic fit of m^(1/3) on [0.5, 1], exact at both ends
    let y = m
        .fma(constant::<V>(-0.18736), constant::<V>(0.69364))
        .fma(m, constant::<V>(0.49372));

    let mut y = y;
    for _ in 0..<V::Scalar as SimdElement>::CBRT_ITERS {
        y = y.add(y).add(m.div(y.mul(y))).mul(third);
    }

    let corr = V::select(r.eq(one), constant::<V>(CBRT_2), one);
    let corr = V::select(r.eq(constant::<V>(2.0)), constant::<V>(CBRT_4), corr);
    let result = copysign(y.mul(exp2n(q)).mul(corr), x);

    // Zero and Inf mantissas would poison the Newton iteration
    let passthrough = ax.eq(zero).or(ax.eq(constant::<V>(f64::INFINITY)));
    V::select(passthrough, x, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::scalar::ScalarVector;

    fn s32(v: f32) -> ScalarVector<f32> {
        ScalarVector(v)
    }

    fn s64(v: f64) -> ScalarVector<f64> {
        ScalarVector(v)
    }

    #[test]
    fn test_cbrt_exact_cubes() {
        for &(x, want) in &[(8.0f64, 2.0), (27.0, 3.0), (-27.0, -3.0), (0.001, 0.1)] {
            let got = cbrt(s64(x)).0;
            assert!((got - want).abs() <= 1e-14 * want.abs(), "cbrt({x})");
        }
    }

    #[test]
    fn test_cbrt_against_libm() {
        let mut x = 1.0e-20f64;
        while x < 1.0e20 {
            let got = cbrt(s64(x)).0;
            let expected = libm::cbrt(x);
            assert!(
                (got - expected).abs() <= 1e-14 * expected,
                "cbrt({x}): {got} vs {expected}"
            );
            let gotn = cbrt(s64(-x)).0;
            assert!((gotn + expected).abs() <= 1e-14 * expected);
            x *= 2.7;
        }
    }

    #[test]
    fn test_cbrt_f32_accuracy() {
        let mut x = 1.0e-10f32;
        while x < 1.0e10 {
            let got = cbrt(s32(x)).0;
            let expected = libm::cbrtf(x);
            assert!(
                (got - expected).abs() <= 1e-6 * expected,
                "cbrtf({x}): {got} vs {expected}"
            );
            x *= 3.3;
        }
    }

    #[test]
    fn test_cbrt_specials() {
        assert_eq!(cbrt(s64(0.0)).0.to_bits(), 0.0f64.to_bits());
        assert_eq!(cbrt(s64(-0.0)).0.to_bits(), (-0.0f64).to_bits());
        assert_eq!(cbrt(s64(f64::INFINITY)).0, f64::INFINITY);
        assert_eq!(cbrt(s64(f64::NEG_INFINITY)).0, f64::NEG_INFINITY);
        assert!(cbrt(s64(f64::NAN)).0.is_nan());
    }
}
