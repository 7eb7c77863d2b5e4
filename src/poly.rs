//! Polynomial and rational function evaluation
//!
//! Horner-scheme evaluators over SIMD vectors, fused when the backend has FMA.
//! Coefficients are given in ascending power order: `coeffs[k]` multiplies x^k.
//! These back every approximation core in [`crate::math`] and are exported for
//! callers fitting their own minimax polynomials.

use crate::traits::{SimdElement, SimdVector};

/// Evaluate the polynomial c₀ + c₁x + ... + c₍N₋₁₎x^(N-1) by Horner's scheme.
///
/// One fused multiply-add per degree on FMA-capable backends.
///
/// # Example
///
/// ```
/// use altair_math::backends::scalar::ScalarVector;
/// use altair_math::poly::polynomial;
///
/// // 1 + 2x + 3x² at x = 2 is 17
/// let y = polynomial(ScalarVector(2.0f64), &[1.0, 2.0, 3.0]);
/// assert_eq!(y.0, 17.0);
/// ```
#[inline(always)]
pub fn polynomial<V: SimdVector, const N: usize>(x: V, coeffs: &[V::Scalar; N]) -> V {
    horner(x, coeffs)
}

/// Evaluate the rational function P(x) / (1 + x·Q(x)) by two Horner passes.
///
/// `num` holds P's coefficients, `den` holds Q's; the denominator's constant
/// term is implicitly 1, the form every well-conditioned rational core here
/// normalizes to.
#[inline(always)]
pub fn rational<V: SimdVector, const N: usize, const M: usize>(
    x: V,
    num: &[V::Scalar; N],
    den: &[V::Scalar; M],
) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    horner(x, num).div(x.fma(horner(x, den), one))
}

/// Horner evaluation over a coefficient slice (ascending powers).
///
/// Empty slices evaluate to 0.
#[inline(always)]
pub(crate) fn horner<V: SimdVector>(x: V, coeffs: &[V::Scalar]) -> V {
    let mut iter = coeffs.iter().rev();
    let mut acc = match iter.next() {
        Some(&c) => V::splat(c),
        None => return V::splat(<V::Scalar as SimdElement>::ZERO),
    };
    for &c in iter {
        acc = acc.fma(x, V::splat(c));
    }
    acc
}

/// Quotient of two Horner evaluations with explicit denominator coefficients
/// (the published tables carry a leading 1 on the highest power).
#[inline(always)]
pub(crate) fn ratio<V: SimdVector>(x: V, num: &[V::Scalar], den: &[V::Scalar]) -> V {
    horner(x, num).div(horner(x, den))
}
