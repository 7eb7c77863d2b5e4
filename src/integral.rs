//! Fixed-order Gauss-Legendre quadrature
//!
//! An 8-point rule, exact for polynomials through degree 15, evaluated with
//! the integrand vectorized over the abscissas. The node table is padded with
//! zero-weight entries to 16 so every supported lane count divides it evenly;
//! padded lanes evaluate the integrand at the interval midpoint and contribute
//! nothing.

use crate::traits::{SimdElement, SimdVector};

// 8-point Gauss-Legendre abscissas/weights on [-1, 1], zero-padded to 16
const GAUSS_NODES: [f64; 16] = [
    -0.960_289_856_497_536_3,
    -0.796_666_477_413_626_7,
    -0.525_532_409_916_329,
    -0.183_434_642_495_649_8,
    0.183_434_642_495_649_8,
    0.525_532_409_916_329,
    0.796_666_477_413_626_7,
    0.960_289_856_497_536_3,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
];

const GAUSS_WEIGHTS: [f64; 16] = [
    0.101_228_536_290_376_3,
    0.222_381_034_453_374_5,
    0.313_706_645_877_887_3,
    0.362_683_783_378_362,
    0.362_683_783_378_362,
    0.313_706_645_877_887_3,
    0.222_381_034_453_374_5,
    0.101_228_536_290_376_3,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
];

/// Integrate `f` over [x1, x2] with the 8-point Gauss-Legendre rule.
///
/// The integrand receives full vectors of abscissas, so one call evaluates
/// LANES points at once. Exact for polynomial integrands through degree 15;
/// for smooth non-polynomial integrands the error scales with the 16th
/// derivative over the interval, so split wide or rough intervals into panels
/// and sum.
///
/// # Example
///
/// ```
/// use altair_math::backends::scalar::ScalarVector;
/// use altair_math::integral::integral;
/// use altair_math::SimdVector;
///
/// // ∫₀¹ x² dx = 1/3
/// let v = integral(|x: ScalarVector<f64>| x.mul(x), 0.0, 1.0);
/// assert!((v - 1.0 / 3.0).abs() < 1e-15);
/// ```
#[inline]
pub fn integral<V, F>(f: F, x1: V::Scalar, x2: V::Scalar) -> V::Scalar
where
    V: SimdVector,
    F: Fn(V) -> V,
{
    let half = <V::Scalar as SimdElement>::from_f64(0.5);
    let center = (x1 + x2) * half;
    let half_width = (x2 - x1) * half;

    let mut nodes = [<V::Scalar as SimdElement>::ZERO; 16];
    let mut weights = [<V::Scalar as SimdElement>::ZERO; 16];
    for k in 0..16 {
        nodes[k] = <V::Scalar as SimdElement>::from_f64(GAUSS_NODES[k]);
        weights[k] = <V::Scalar as SimdElement>::from_f64(GAUSS_WEIGHTS[k]);
    }

    let mut acc = V::splat(<V::Scalar as SimdElement>::ZERO);
    let mut i = 0;
    while i + V::LANES <= 16 {
        let n = V::from_slice(&nodes[i..]);
        let w = V::from_slice(&weights[i..]);
        let x = n.fma(V::splat(half_width), V::splat(center));
        acc = f(x).fma(w, acc);
        i += V::LANES;
    }
    acc.horizontal_sum() * half_width
}
