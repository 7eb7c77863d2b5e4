//! Hyperbolic functions and their inverses
//!
//! All eight functions reduce to the exp/log kernels through the defining
//! identities; no dedicated approximation cores are carried.

use crate::math::exp::exp;
use crate::math::log::log;
use crate::ops::{copysign, reciprocal};
use crate::traits::{constant, SimdElement, SimdVector};

/// Hyperbolic sine: (e^x − e^−x)/2.
#[inline(always)]
pub fn sinh<V: SimdVector>(x: V) -> V {
    let t = exp(x);
    t.sub(reciprocal(t)).mul(constant::<V>(0.5))
}

/// Hyperbolic cosine: (e^x + e^−x)/2.
#[inline(always)]
pub fn cosh<V: SimdVector>(x: V) -> V {
    let t = exp(x);
    t.add(reciprocal(t)).mul(constant::<V>(0.5))
}

/// Hyperbolic tangent, clamped to exactly ±1 once the quotient saturates.
///
/// Evaluated as (e^2x − 1)/(e^2x + 1). Beyond a precision-dependent |x|
/// threshold the quotient is 1 to the last bit anyway; the clamp keeps the
/// large-argument path from evaluating an enormous exponential.
#[inline(always)]
pub fn tanh<V: SimdVector>(x: V) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    let e2 = exp(x.add(x));
    let t = e2.sub(one).div(e2.add(one));
    let saturated = x.abs().gt(V::splat(<V::Scalar as SimdElement>::TANH_SATURATION));
    V::select(saturated, copysign(one, x), t)
}

/// Inverse hyperbolic sine: ln(x + √(x² + 1)).
#[inline(always)]
pub fn asinh<V: SimdVector>(x: V) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    log(x.add(x.fma(x, one).sqrt()))
}

/// Inverse hyperbolic cosine: ln(x + √(x² − 1)). NaN for x < 1.
#[inline(always)]
pub fn acosh<V: SimdVector>(x: V) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    log(x.add(x.fma(x, one.neg()).sqrt()))
}

/// Inverse hyperbolic tangent: ln((1+x)/(1−x))/2. NaN outside [−1, 1],
/// ±Inf at the endpoints.
#[inline(always)]
pub fn atanh<V: SimdVector>(x: V) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    log(one.add(x).div(one.sub(x))).mul(constant::<V>(0.5))
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
    fn test_sinh_cosh_against_libm() {
        let mut x = -15.0f64;
        while x < 15.0 {
            let sh = sinh(s64(x)).0;
            let ch = cosh(s64(x)).0;
            assert!((sh - libm::sinh(x)).abs() <= 1e-13 * libm::cosh(x), "sinh({x})");
            assert!((ch - libm::cosh(x)).abs() <= 1e-13 * libm::cosh(x), "cosh({x})");
            // cosh² − sinh² = 1; the squares round at the scale of cosh²
            assert!((ch * ch - sh * sh - 1.0).abs() < 1e-9 * ch * ch, "identity at {x}");
            x += 0.217;
        }
    }

    #[test]
    fn test_tanh_saturation_is_exact() {
        assert_eq!(tanh(s64(25.0)).0, 1.0);
        assert_eq!(tanh(s64(-25.0)).0, -1.0);
        assert_eq!(tanh(s64(f64::INFINITY)).0, 1.0);
        assert_eq!(tanh(s32(10.0)).0, 1.0);
        assert_eq!(tanh(s32(-10.0)).0, -1.0);
    }

    #[test]
    fn test_tanh_against_libm() {
        let mut x = -8.0f64;
        while x < 8.0 {
            assert!((tanh(s64(x)).0 - libm::tanh(x)).abs() < 1e-13, "tanh({x})");
            x += 0.139;
        }
        assert_eq!(tanh(s64(0.0)).0, 0.0);
        assert!(tanh(s64(f64::NAN)).0.is_nan());
    }

    #[test]
    fn test_inverse_functions_against_libm() {
        for &x in &[-20.0f64, -1.5, -0.1, 0.0, 0.7, 3.0, 1.0e6] {
            let got = asinh(s64(x)).0;
            assert!((got - libm::asinh(x)).abs() <= 1e-12 * got.abs().max(1e-9), "asinh({x})");
        }
        for &x in &[1.0f64, 1.001, 2.0, 10.0, 1.0e8] {
            let got = acosh(s64(x)).0;
            assert!((got - libm::acosh(x)).abs() <= 1e-10 * got.abs().max(1e-2), "acosh({x})");
        }
        for &x in &[-0.99f64, -0.5, 0.0, 0.3, 0.99] {
            let got = atanh(s64(x)).0;
            assert!((got - libm::atanh(x)).abs() <= 1e-12 * got.abs().max(1e-12), "atanh({x})");
        }
    }

    #[test]
    fn test_inverse_domain_edges() {
        assert!(acosh(s64(0.5)).0.is_nan());
        assert_eq!(atanh(s64(1.0)).0, f64::INFINITY);
        assert_eq!(atanh(s64(-1.0)).0, f64::NEG_INFINITY);
        assert!(atanh(s64(1.5)).0.is_nan());
        assert_eq!(asinh(s64(0.0)).0, 0.0);
        assert_eq!(acosh(s64(1.0)).0, 0.0);
    }
}
