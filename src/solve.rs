//! Quadratic and cubic solvers over a search interval
//!
//! Lane-wise polynomial root finders for numerical schemes that know which
//! bracket their physical root lives in. Each lane picks, among the real
//! roots of its polynomial, one lying inside [x1, x2]; when several
//! qualify the candidates are scanned in a fixed order and the last
//! qualifying one wins. When none qualifies the first candidate is returned.
//! Degenerate leading coefficients fall back to the lower-degree solver.

use crate::math::{acos, cbrt, cos};
use crate::ops::copysign;
use crate::traits::{constant, SimdElement, SimdMask, SimdVector};

/// Roots of the monic quadratic x² + ax + b, filtered by [x1, x2].
///
/// Both roots come from the textbook formula −a/2 ± √(a²/4 − b); the "+" root
/// is preferred, the "−" root replaces it when the "+" root is outside the
/// interval. Complex conjugate pairs surface as NaN lanes through the square
/// root.
#[inline(always)]
pub fn solve_quadratic_reduced<V: SimdVector>(a: V, b: V, x1: V, x2: V) -> V {
    let k1 = a.mul(constant::<V>(0.5)).neg();
    let k2 = k1.fma(k1, b.neg()).sqrt();
    let x = k1.add(k2);
    let outside = x.lt(x1).or(x.gt(x2));
    V::select(outside, k1.sub(k2), x)
}

/// Roots of ax² + bx + c filtered by [x1, x2], degrading per lane to the
/// linear root −c/b where |a| is below machine epsilon.
#[inline(always)]
pub fn solve_quadratic<V: SimdVector>(a: V, b: V, c: V, x1: V, x2: V) -> V {
    let linear = c.div(b).neg();
    let quadratic = solve_quadratic_reduced(b.div(a), c.div(a), x1, x2);
    let degenerate = a.abs().lt(V::splat(<V::Scalar as SimdElement>::EPSILON));
    V::select(degenerate, linear, quadratic)
}

/// Root of the monic cubic x³ + ax² + bx + c selected by [x1, x2].
///
/// # Algorithm
///
/// Cardano/Viète with the depressed-cubic invariants
/// Q = (a/3)² − b/3 and R = (a/3)·b/2 − (a/3)³ − c/2.
///
/// When Q³ ≥ R² there are three real roots
/// 2√Q·cos((θ + 2πk)/3) − a/3, θ = acos(R/Q^{3/2}), k = 0, 1, 2,
/// scanned in that order with the last one inside [x1, x2] winning.
///
/// Otherwise the single real root is A + Q/A − a/3 with
/// A = sign(R)·cbrt(|R| + √(R² − Q³)).
#[inline(always)]
pub fn solve_cubic_reduced<V: SimdVector>(a: V, b: V, c: V, x1: V, x2: V) -> V {
    let half = constant::<V>(0.5);
    let third = constant::<V>(1.0 / 3.0);

    let a3 = a.mul(third);
    let q = a3.mul(a3).sub(b.mul(third));
    let r = a3.mul(b).mul(half).sub(a3.mul(a3).mul(a3)).sub(c.mul(half));
    let q3 = q.mul(q).mul(q);
    let disc = q3.sub(r.mul(r));

    // Three-real-roots branch
    let sq = q.sqrt();
    let theta = acos(r.div(q.mul(sq)));
    let two_sq = sq.add(sq);
    let k0 = two_sq.mul(cos(theta.mul(third))).sub(a3);
    let k1 = two_sq
        .mul(cos(theta.add(constant::<V>(2.0 * core::f64::consts::PI)).mul(third)))
        .sub(a3);
    let k2 = two_sq
        .mul(cos(theta.add(constant::<V>(4.0 * core::f64::consts::PI)).mul(third)))
        .sub(a3);
    let in1 = k1.ge(x1).and(k1.le(x2));
    let in2 = k2.ge(x1).and(k2.le(x2));
    let triple = V::select(in2, k2, V::select(in1, k1, k0));

    // Single-real-root branch
    let big = r.abs().add(r.mul(r).sub(q3).sqrt());
    let aa = copysign(cbrt(big), r);
    let single = aa.add(q.div(aa)).sub(a3);

    let zero = V::splat(<V::Scalar as SimdElement>::ZERO);
    V::select(disc.lt(zero), single, triple)
}

/// Root of ax³ + bx² + cx + d selected by [x1, x2], degrading per lane to
/// [`solve_quadratic`] where |a| is below machine epsilon.
#[inline(always)]
pub fn solve_cubic<V: SimdVector>(a: V, b: V, c: V, d: V, x1: V, x2: V) -> V {
    let quadratic = solve_quadratic(b, c, d, x1, x2);
    let cubic = solve_cubic_reduced(b.div(a), c.div(a), d.div(a), x1, x2);
    let degenerate = a.abs().lt(V::splat(<V::Scalar as SimdElement>::EPSILON));
    V::select(degenerate, quadratic, cubic)
}
