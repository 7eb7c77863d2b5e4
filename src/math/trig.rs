//! Circular functions: sin, cos, sincos, tan
//!
//! One shared kernel computes sine and cosine together; `sin`, `cos` and `tan`
//! are thin wrappers over it, so `sincos` returns bit-identical values to the
//! individual calls.

use crate::ops::modulo;
use crate::poly::horner;
use crate::traits::{constant, SimdElement, SimdVector};

/// Sine and cosine of the same angle in one evaluation.
///
/// # Algorithm
///
/// The angle is first reduced into [0, 2π) with the floored modulo, then into
/// a quarter-period window: k = ⌊y/(π/2) + ½⌋ ∈ {0..4} and u = y − k·π/2 in
/// [−π/4, π/4]. One minimax sine core (odd, u + u³·P(u²)) and one cosine core
/// (even, 1 − u²/2 + u⁴·P(u²)) are evaluated on u and recombined per window:
/// window 1 swaps, 2 negates both, 3 swaps the other way, 0 and 4 pass through.
///
/// # Error bounds
///
/// Absolute error below 1e-6 (f32) / 1e-15 (f64) for |x| up to where the
/// single-width 2π reduction itself loses the angle (|x|·ε approaching 2π).
///
/// # Example
///
/// ```
/// use altair_math::backends::scalar::ScalarVector;
/// use altair_math::math::sincos;
///
/// let (s, c) = sincos(ScalarVector(core::f64::consts::FRAC_PI_2));
/// assert!((s.0 - 1.0).abs() < 1e-15 && c.0.abs() < 1e-15);
/// ```
#[inline(always)]
pub fn sincos<V: SimdVector>(x: V) -> (V, V) {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    let half = constant::<V>(0.5);
    let half_pi = constant::<V>(core::f64::consts::FRAC_PI_2);

    let y = modulo(x, constant::<V>(core::f64::consts::TAU));
    let k = y.div(half_pi).add(half).floor();
    let u = y.sub(k.mul(half_pi));

    let z = u.mul(u);
    let s = u.add(u.mul(z).mul(horner(z, <V::Scalar as SimdElement>::SIN_COEFFS)));
    let c = one
        .sub(z.mul(half))
        .add(z.mul(z).mul(horner(z, <V::Scalar as SimdElement>::COS_COEFFS)));

    let k1 = k.eq(one);
    let k2 = k.eq(constant::<V>(2.0));
    let k3 = k.eq(constant::<V>(3.0));

    let sin_r = V::select(k1, c, s);
    let sin_r = V::select(k2, s.neg(), sin_r);
    let sin_r = V::select(k3, c.neg(), sin_r);

    let cos_r = V::select(k1, s.neg(), c);
    let cos_r = V::select(k2, c.neg(), cos_r);
    let cos_r = V::select(k3, s, cos_r);

    (sin_r, cos_r)
}

/// Sine; identical lanes to `sincos(x).0`.
#[inline(always)]
pub fn sin<V: SimdVector>(x: V) -> V {
    sincos(x).0
}

/// Cosine; identical lanes to `sincos(x).1`.
#[inline(always)]
pub fn cos<V: SimdVector>(x: V) -> V {
    sincos(x).1
}

/// Tangent as the quotient of the shared kernel's sine and cosine.
#[inline(always)]
pub fn tan<V: SimdVector>(x: V) -> V {
    let (s, c) = sincos(x);
    s.div(c)
}
