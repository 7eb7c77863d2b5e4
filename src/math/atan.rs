//! Inverse circular functions: atan, atan2, asin, acos
//!
//! asin and acos route through atan, trading a square root for the shared
//! rational core instead of carrying separate approximations.

use crate::ops::copysign;
use crate::poly::ratio;
use crate::traits::{constant, SimdElement, SimdVector};

const TAN_PI_8: f64 = 0.414_213_562_373_095_05; // √2 − 1
const TAN_3PI_8: f64 = 2.414_213_562_373_095; // √2 + 1

/// Rational core on |u| ≤ tan(π/8): atan(u) = u + u·z·P(z)/Q(z), z = u².
#[inline(always)]
fn atan_wc<V: SimdVector>(u: V) -> V {
    let z = u.mul(u);
    u.add(u.mul(z).mul(ratio(
        z,
        <V::Scalar as SimdElement>::ATAN_NUM,
        <V::Scalar as SimdElement>::ATAN_DEN,
    )))
}

/// Arc tangent into (−π/2, π/2).
///
/// # Algorithm
///
/// |x| is folded into the core's octant with two identities:
/// above tan(3π/8), atan(t) = π/2 − atan(1/t); between the thresholds,
/// atan(t) = π/4 + atan((t−1)/(t+1)). Both substitution arguments land in
/// [−tan(π/8), tan(π/8)]. The sign returns by bit copy.
///
/// atan(±Inf) = ±π/2, NaN propagates.
#[inline(always)]
pub fn atan<V: SimdVector>(x: V) -> V {
    let zero = V::splat(<V::Scalar as SimdElement>::ZERO);
    let one = V::splat(<V::Scalar as SimdElement>::ONE);

    let t = x.abs();
    let hi = t.gt(constant::<V>(TAN_3PI_8));
    let mid = t.gt(constant::<V>(TAN_PI_8));

    let u_hi = one.neg().div(t);
    let u_mid = t.sub(one).div(t.add(one));
    let u = V::select(hi, u_hi, V::select(mid, u_mid, t));

    let base = V::select(
        hi,
        constant::<V>(core::f64::consts::FRAC_PI_2),
        V::select(mid, constant::<V>(core::f64::consts::FRAC_PI_4), zero),
    );

    copysign(base.add(atan_wc(u)), x)
}

/// Full-plane arc tangent of y/x into (−π, π].
///
/// atan(y/x) corrected by ±π when x < 0. Both arguments zero gives NaN
/// (0/0 inside the quotient).
#[inline(always)]
pub fn atan2<V: SimdVector>(y: V, x: V) -> V {
    let zero = V::splat(<V::Scalar as SimdElement>::ZERO);
    let correction = copysign(constant::<V>(core::f64::consts::PI), y);
    atan(y.div(x)).add(V::select(x.lt(zero), correction, zero))
}

/// Arc sine into [−π/2, π/2], via atan(x/√(1−x²)).
///
/// |x| > 1 yields NaN through the square root of a negative number;
/// x = ±1 gives exactly ±π/2 through the ±Inf quotient.
#[inline(always)]
pub fn asin<V: SimdVector>(x: V) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    atan(x.div(one.sub(x.mul(x)).sqrt()))
}

/// Arc cosine into [0, π], as π/2 − asin(x).
#[inline(always)]
pub fn acos<V: SimdVector>(x: V) -> V {
    constant::<V>(core::f64::consts::FRAC_PI_2).sub(asin(x))
}
