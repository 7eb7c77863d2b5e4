//! Error function and its complement
//!
//! The |x| < 1 rational core lives here; the |x| ≥ 1 complementary core is the
//! per-precision `erfc_wc` hook on the scalar trait, since the published
//! approximations differ structurally between the precisions.

use crate::ops::copysign;
use crate::poly::ratio;
use crate::traits::{SimdElement, SimdVector};

/// Rational core on [−1, 1]: erf(x) = x·P(x²)/Q(x²).
#[inline(always)]
fn erf_wc<V: SimdVector>(x: V) -> V {
    x.mul(ratio(
        x.mul(x),
        <V::Scalar as SimdElement>::ERF_NUM,
        <V::Scalar as SimdElement>::ERF_DEN,
    ))
}

/// Gauss error function, odd, saturating at ±1.
///
/// |x| < 1 uses the direct rational core; beyond that 1 − erfc(|x|) is sharper
/// because erfc carries the exp(−x²) decay explicitly. Sign restored by bit
/// copy, so erf(−0.0) = −0.0.
#[inline(always)]
pub fn erf<V: SimdVector>(x: V) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    let ax = x.abs();
    let outer = one.sub(<V::Scalar as SimdElement>::erfc_wc(ax));
    let inner = erf_wc(ax);
    copysign(V::select(ax.ge(one), outer, inner), x)
}

/// Complementary error function 1 − erf(x), accurate into the far positive
/// tail where erf itself rounds to 1.
///
/// Beyond the precision's cutoff (where exp(−x²) underflows) the result is
/// exactly 0; the negative side folds through erfc(−x) = 2 − erfc(x).
#[inline(always)]
pub fn erfc<V: SimdVector>(x: V) -> V {
    let zero = V::splat(<V::Scalar as SimdElement>::ZERO);
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    let two = one.add(one);

    let ax = x.abs();
    let positive = V::select(
        ax.ge(one),
        <V::Scalar as SimdElement>::erfc_wc(ax),
        one.sub(erf_wc(ax)),
    );
    // Cutoff after the core so the far-tail lanes are exactly zero
    let positive = V::select(
        ax.gt(V::splat(<V::Scalar as SimdElement>::ERFC_CUTOFF)),
        zero,
        positive,
    );
    V::select(x.lt(zero), two.sub(positive), positive)
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
    fn test_erf_against_libm() {
        let mut x = -6.0f64;
        while x < 6.0 {
            let got = erf(s64(x)).0;
            let expected = libm::erf(x);
            assert!((got - expected).abs() < 1e-13, "erf({x}): {got} vs {expected}");
            x += 0.0439;
        }
    }

    #[test]
    fn test_erf_f32_absolute_accuracy() {
        let mut x = -4.0f32;
        while x < 4.0 {
            let got = erf(s32(x)).0;
            let expected = libm::erff(x);
            assert!((got - expected).abs() < 3e-7, "erff({x}): {got} vs {expected}");
            x += 0.071;
        }
    }

    #[test]
    fn test_erf_is_odd_and_saturates() {
        for &x in &[0.3f64, 1.0, 2.5, 7.0] {
            assert_eq!(erf(s64(x)).0, -erf(s64(-x)).0);
        }
        assert_eq!(erf(s64(f64::INFINITY)).0, 1.0);
        assert_eq!(erf(s64(f64::NEG_INFINITY)).0, -1.0);
        assert_eq!(erf(s64(0.0)).0.to_bits(), 0.0f64.to_bits());
        assert_eq!(erf(s64(-0.0)).0.to_bits(), (-0.0f64).to_bits());
        assert!(erf(s64(f64::NAN)).0.is_nan());
    }

    #[test]
    fn test_erfc_relative_accuracy_in_the_tail() {
        for &x in &[1.0f64, 2.0, 4.0, 6.0, 10.0, 15.0, 20.0, 26.0] {
            let got = erfc(s64(x)).0;
            let expected = libm::erfc(x);
            assert!(
                (got - expected).abs() <= 1e-10 * expected,
                "erfc({x}): {got} vs {expected}"
            );
        }
    }

    #[test]
    fn test_erfc_cutoff_and_negative_fold() {
        assert_eq!(erfc(s64(28.0)).0, 0.0);
        assert_eq!(erfc(s64(f64::INFINITY)).0, 0.0);
        assert_eq!(erfc(s64(f64::NEG_INFINITY)).0, 2.0);
        assert_eq!(erfc(s32(11.0)).0, 0.0);
        for &x in &[0.5f64, 1.5, 3.0] {
            let sum = erfc(s64(x)).0 + erfc(s64(-x)).0;
            assert!((sum - 2.0).abs() < 1e-13);
        }
        assert!(erfc(s64(f64::NAN)).0.is_nan());
    }

    #[test]
    fn test_erf_erfc_complement_near_one() {
        for &x in &[0.2f64, 0.9, 1.0, 1.1, 2.0] {
            let total = erf(s64(x)).0 + erfc(s64(x)).0;
            assert!((total - 1.0).abs() < 1e-13, "erf+erfc at {x}");
        }
    }
}
