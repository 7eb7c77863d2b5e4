//! Flux limiters for high-resolution finite-volume schemes
//!
//! Every limiter takes the upwind and downwind differences (d1, d2) and
//! returns the limiter value ψ(r) at r = d1/d2. A shared guard returns 0
//! whenever d1·d2 is not positive beyond machine epsilon, which covers
//! opposite-sign gradients, zeros, and the NaN lanes a zero d2 would produce.

use crate::traits::{SimdElement, SimdVector};

/// Closed set of the supported flux limiter functions.
///
/// Integer tags from configuration files convert through [`from_tag`]
/// (unknown tags fall back to `Mean`); lane-wise evaluation dispatches
/// through [`apply`].
///
/// [`from_tag`]: FluxLimiter::from_tag
/// [`apply`]: FluxLimiter::apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluxLimiter {
    /// ψ ≡ 0: first-order upwind everywhere.
    Total,
    /// ψ ≡ 1: no limiting at all.
    Null,
    /// ψ(r) = r: the centred (Lax-Wendroff-like) choice.
    Centred,
    /// Superbee: max(min(2r, 1), min(r, 2)).
    Superbee,
    /// Minmod: min(r, 1).
    Minmod,
    /// Van Leer: 2r/(1 + r).
    VanLeer,
    /// Van Albada: (r + r²)/(1 + r²).
    VanAlbada,
    /// Minsuper: min(r, 2).
    Minsuper,
    /// Supermin: min(2r, 1).
    Supermin,
    /// Monotonized central: min((1 + r)/2, 2, 2r).
    MonotonizedCentral,
    /// Arithmetic mean: (1 + r)/2.
    Mean,
}

impl FluxLimiter {
    /// Convert an integer tag (the on-disk scheme selector) to a limiter,
    /// defaulting to `Mean` for any out-of-range value.
    #[inline]
    pub fn from_tag(tag: u32) -> Self {
        match tag {
            0 => FluxLimiter::Total,
            1 => FluxLimiter::Null,
            2 => FluxLimiter::Centred,
            3 => FluxLimiter::Superbee,
            4 => FluxLimiter::Minmod,
            5 => FluxLimiter::VanLeer,
            6 => FluxLimiter::VanAlbada,
            7 => FluxLimiter::Minsuper,
            8 => FluxLimiter::Supermin,
            9 => FluxLimiter::MonotonizedCentral,
            _ => FluxLimiter::Mean,
        }
    }

    /// Evaluate the selected limiter lane-wise on the difference pair.
    #[inline]
    pub fn apply<V: SimdVector>(self, d1: V, d2: V) -> V {
        match self {
            FluxLimiter::Total => total(d1, d2),
            FluxLimiter::Null => null(d1, d2),
            FluxLimiter::Centred => centred(d1, d2),
            FluxLimiter::Superbee => superbee(d1, d2),
            FluxLimiter::Minmod => minmod(d1, d2),
            FluxLimiter::VanLeer => van_leer(d1, d2),
            FluxLimiter::VanAlbada => van_albada(d1, d2),
            FluxLimiter::Minsuper => minsuper(d1, d2),
            FluxLimiter::Supermin => supermin(d1, d2),
            FluxLimiter::MonotonizedCentral => monotonized_central(d1, d2),
            FluxLimiter::Mean => mean(d1, d2),
        }
    }
}

/// Sign-agreement guard shared by the input-dependent limiters: ψ only where
/// d1·d2 exceeds machine epsilon, 0 elsewhere.
#[inline(always)]
fn guarded<V: SimdVector>(d1: V, d2: V, psi: V) -> V {
    let zero = V::splat(<V::Scalar as SimdElement>::ZERO);
    let ok = d1.mul(d2).gt(V::splat(<V::Scalar as SimdElement>::EPSILON));
    V::select(ok, psi, zero)
}

/// ψ ≡ 0.
#[inline(always)]
pub fn total<V: SimdVector>(_d1: V, _d2: V) -> V {
    V::splat(<V::Scalar as SimdElement>::ZERO)
}

/// ψ ≡ 1.
#[inline(always)]
pub fn null<V: SimdVector>(_d1: V, _d2: V) -> V {
    V::splat(<V::Scalar as SimdElement>::ONE)
}

/// ψ(r) = r.
#[inline(always)]
pub fn centred<V: SimdVector>(d1: V, d2: V) -> V {
    guarded(d1, d2, d1.div(d2))
}

/// Superbee: the most compressive second-order TVD limiter,
/// max(min(2r, 1), min(r, 2)).
#[inline(always)]
pub fn superbee<V: SimdVector>(d1: V, d2: V) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    let two = one.add(one);
    let r = d1.div(d2);
    let psi = r.add(r).min(one).max(r.min(two));
    guarded(d1, d2, psi)
}

/// Minmod: the most diffusive second-order TVD limiter, min(r, 1).
#[inline(always)]
pub fn minmod<V: SimdVector>(d1: V, d2: V) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    guarded(d1, d2, d1.div(d2).min(one))
}

/// Van Leer: smooth limiter 2r/(1 + r).
#[inline(always)]
pub fn van_leer<V: SimdVector>(d1: V, d2: V) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    let r = d1.div(d2);
    guarded(d1, d2, r.add(r).div(one.add(r)))
}

/// Van Albada: smooth limiter (r + r²)/(1 + r²).
#[inline(always)]
pub fn van_albada<V: SimdVector>(d1: V, d2: V) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    let r = d1.div(d2);
    let r2 = r.mul(r);
    guarded(d1, d2, r.add(r2).div(one.add(r2)))
}

/// Minsuper: min(r, 2).
#[inline(always)]
pub fn minsuper<V: SimdVector>(d1: V, d2: V) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    let two = one.add(one);
    guarded(d1, d2, d1.div(d2).min(two))
}

/// Supermin: min(2r, 1).
#[inline(always)]
pub fn supermin<V: SimdVector>(d1: V, d2: V) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    let r = d1.div(d2);
    guarded(d1, d2, r.add(r).min(one))
}

/// Monotonized central: min((1 + r)/2, 2, 2r).
#[inline(always)]
pub fn monotonized_central<V: SimdVector>(d1: V, d2: V) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    let two = one.add(one);
    let half = crate::traits::constant::<V>(0.5);
    let r = d1.div(d2);
    let psi = one.add(r).mul(half).min(two.min(r.add(r)));
    guarded(d1, d2, psi)
}

/// Arithmetic mean: (1 + r)/2.
#[inline(always)]
pub fn mean<V: SimdVector>(d1: V, d2: V) -> V {
    let one = V::splat(<V::Scalar as SimdElement>::ONE);
    let half = crate::traits::constant::<V>(0.5);
    guarded(d1, d2, one.add(d1.div(d2)).mul(half))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::scalar::ScalarVector;

    fn s(v: f64) -> ScalarVector<f64> {
        ScalarVector(v)
    }

    type Limiter = fn(ScalarVector<f64>, ScalarVector<f64>) -> ScalarVector<f64>;

    #[test]
    fn test_reference_values() {
        assert_eq!(minmod(s(1.0), s(2.0)).0, 0.5);
        assert_eq!(superbee(s(1.0), s(1.0)).0, 1.0);
        assert_eq!(total(s(3.0), s(4.0)).0, 0.0);
        assert_eq!(null(s(-3.0), s(4.0)).0, 1.0);
        assert_eq!(mean(s(1.0), s(1.0)).0, 1.0);
        assert_eq!(centred(s(3.0), s(2.0)).0, 1.5);
    }

    #[test]
    fn test_guard_kills_sign_disagreement() {
        let limiters: [Limiter; 9] = [
            centred, superbee, minmod, van_leer, van_albada, minsuper, supermin,
            monotonized_central, mean,
        ];
        for f in limiters {
            assert_eq!(f(s(1.0), s(-1.0)).0, 0.0);
            assert_eq!(f(s(0.0), s(5.0)).0, 0.0);
            assert_eq!(f(s(5.0), s(0.0)).0, 0.0);
        }
    }

    #[test]
    fn test_tvd_region_for_the_second_order_limiters() {
        // Second-order TVD limiters stay within [max(0, min(2r, 1)),
        // min(r·2, 2)] on r > 0
        let mut r = 0.05f64;
        while r < 10.0 {
            let d1 = r;
            let d2 = 1.0;
            let limiters: [Limiter; 5] =
                [superbee, minmod, van_leer, van_albada, monotonized_central];
            for f in limiters {
                let psi = f(s(d1), s(d2)).0;
                assert!(psi >= 0.0 && psi <= (2.0 * r).min(2.0) + 1e-12, "psi({r}) = {psi}");
            }
            r *= 1.3;
        }
    }

    #[test]
    fn test_symmetric_input_values() {
        // At r = 1 every second-order limiter passes through 1
        let limiters: [Limiter; 9] = [
            superbee, minmod, van_leer, van_albada, minsuper, supermin,
            monotonized_central, mean, centred,
        ];
        for f in limiters {
            assert!((f(s(2.0), s(2.0)).0 - 1.0).abs() < 1e-15);
        }
    }

    #[test]
    fn test_from_tag_dispatch_and_default() {
        assert_eq!(FluxLimiter::from_tag(0), FluxLimiter::Total);
        assert_eq!(FluxLimiter::from_tag(3), FluxLimiter::Superbee);
        assert_eq!(FluxLimiter::from_tag(9), FluxLimiter::MonotonizedCentral);
        assert_eq!(FluxLimiter::from_tag(10), FluxLimiter::Mean);
        assert_eq!(FluxLimiter::from_tag(u32::MAX), FluxLimiter::Mean);

        let tagged = FluxLimiter::from_tag(4).apply(s(1.0), s(2.0)).0;
        assert_eq!(tagged, minmod(s(1.0), s(2.0)).0);
    }
}
