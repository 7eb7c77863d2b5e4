//! Property-based tests
//!
//! proptest drives the mathematical identities the kernels are supposed to
//! satisfy; each property runs across the full default backend width so every
//! lane is checked, not just lane 0.


use altair_math::math::{
    atan, atan2, cbrt, cos, erf, exp, exp2, frexp, ldexp, log, log2, pow, pown, sin, sincos, tanh,
};
use altair_math::ops::{copysign, hypot, interpolate, modulo, sign};
use altair_math::{constant, DefaultF64Vector, ScalarVector, SimdVector};
use proptest::prelude::*;
use test_utils::*;

type V = DefaultF64Vector;

proptest! {
    #[test]
    fn prop_exp2_log2_inverse(x in 1e-300f64..=1e300) {
        prop_assume!(x.is_normal());
        let back = first(exp2(log2(V::splat(x))));
        prop_assert!(rel_err(back, x) < 1e-12, "roundtrip {x} -> {back}");
    }

    #[test]
    fn prop_log_of_product(a in positive_f64(), b in positive_f64()) {
        prop_assume!((a * b).is_normal());
        let lhs = first(log(V::splat(a * b)));
        let rhs = first(log(V::splat(a))) + first(log(V::splat(b)));
        prop_assert!((lhs - rhs).abs() < 1e-10 * (1.0 + rhs.abs()));
    }

    #[test]
    fn prop_pythagorean_identity(x in -1e6f64..=1e6) {
        let (s, c) = sincos(V::splat(x));
        let r = first(s.fma(s, c.mul(c)));
        prop_assert!((r - 1.0).abs() < 1e-9, "sin^2+cos^2 = {r} at {x}");
    }

    #[test]
    fn prop_sincos_matches_sin_cos(x in -1e4f64..=1e4) {
        let (s, c) = sincos(V::splat(x));
        prop_assert_eq!(first(s).to_bits(), first(sin(V::splat(x))).to_bits());
        prop_assert_eq!(first(c).to_bits(), first(cos(V::splat(x))).to_bits());
    }

    #[test]
    fn prop_cbrt_cubes_back(x in normal_f64()) {
        let c = first(cbrt(V::splat(x)));
        prop_assert!((c * c * c - x).abs() <= 1e-12 * (1.0 + x.abs()));
    }

    #[test]
    fn prop_cbrt_is_odd(x in positive_f64()) {
        let p = first(cbrt(V::splat(x)));
        let n = first(cbrt(V::splat(-x)));
        prop_assert_eq!(p.to_bits(), (-n).to_bits());
    }

    #[test]
    fn prop_frexp_ldexp_roundtrip(x in normal_f64()) {
        prop_assume!(x != 0.0);
        let (m, e) = frexp(V::splat(x));
        let m0 = first(m);
        prop_assert!((0.5..1.0).contains(&m0.abs()), "mantissa {m0} of {x}");
        let back = first(ldexp(m, e));
        prop_assert_eq!(back.to_bits(), x.to_bits());
    }

    #[test]
    fn prop_exp_never_negative(x in -1e4f64..=1e4) {
        prop_assert!(first(exp(V::splat(x))) >= 0.0);
    }

    #[test]
    fn prop_tanh_bounded_and_odd(x in normal_f64()) {
        let t = first(tanh(V::splat(x)));
        prop_assert!((-1.0..=1.0).contains(&t));
        // Both sides round their own exponential, so odd symmetry holds to an
        // ulp rather than bitwise
        let n = first(tanh(V::splat(-x)));
        prop_assert!((t + n).abs() < 1e-15);
    }

    #[test]
    fn prop_erf_odd_and_bounded(x in normal_f64()) {
        let p = first(erf(V::splat(x)));
        prop_assert!((-1.0..=1.0).contains(&p));
        let n = first(erf(V::splat(-x)));
        prop_assert!((p + n).abs() < 1e-15);
    }

    #[test]
    fn prop_atan_odd(x in normal_f64()) {
        let p = first(atan(V::splat(x)));
        let n = first(atan(V::splat(-x)));
        prop_assert_eq!(p.to_bits(), (-n).to_bits());
        prop_assert!(p.abs() < core::f64::consts::FRAC_PI_2 + 1e-15);
    }

    #[test]
    fn prop_atan2_quadrants(y in normal_f64(), x in normal_f64()) {
        prop_assume!(x.abs() > 1e-6 && y.abs() > 1e-6);
        let a = first(atan2(V::splat(y), V::splat(x)));
        let want = libm::atan2(y, x);
        prop_assert!((a - want).abs() < 1e-10, "atan2({y}, {x}) = {a}, want {want}");
    }

    #[test]
    fn prop_pow_integer_exponent_agrees(x in 0.01f64..=100.0, n in 1i32..=8) {
        let via_pow = first(pow(V::splat(x), constant::<V>(n as f64)));
        let via_pown = first(pown(V::splat(x), n));
        prop_assert!(rel_err(via_pow, via_pown) < 1e-10);
    }

    #[test]
    fn prop_copysign_and_sign(x in normal_f64(), y in normal_f64()) {
        let c = first(copysign(V::splat(x), V::splat(y)));
        prop_assert_eq!(c.to_bits(), libm::copysign(x, y).to_bits());
        let s = first(sign(V::splat(x)));
        prop_assert_eq!(s, libm::copysign(1.0, x));
    }

    #[test]
    fn prop_hypot_exceeds_legs(x in -1e100f64..=1e100, y in -1e100f64..=1e100) {
        let h = first(hypot(V::splat(x), V::splat(y)));
        prop_assert!(h >= x.abs() * (1.0 - 1e-15));
        prop_assert!(h >= y.abs() * (1.0 - 1e-15));
        prop_assert!(h <= (x.abs() + y.abs()) * (1.0 + 1e-15));
    }

    #[test]
    fn prop_modulo_in_range(x in -1e6f64..=1e6, d in 1e-3f64..=1e3) {
        let m = first(modulo(V::splat(x), V::splat(d)));
        // The quotient may round across an integer, leaving the remainder an
        // ulp outside [0, d)
        prop_assert!((-1e-9..d * (1.0 + 1e-12)).contains(&m), "modulo({x}, {d}) = {m}");
    }

    #[test]
    fn prop_interpolate_is_clamped(t in -10.0f64..=10.0) {
        let y = first(interpolate(
            V::splat(t),
            constant::<V>(0.0),
            constant::<V>(1.0),
            constant::<V>(-2.0),
            constant::<V>(6.0),
        ));
        prop_assert!((-2.0..=6.0).contains(&y));
        if (0.0..=1.0).contains(&t) {
            prop_assert!((y - (-2.0 + 8.0 * t)).abs() < 1e-12);
        }
    }

    #[test]
    fn prop_lanes_agree_with_scalar_backend(x in -700.0f64..=700.0) {
        // Backends may fuse multiplies differently, so agreement is to an ulp
        let wide = exp(V::splat(x));
        let narrow = first(exp(ScalarVector(x)));
        let mut lanes = [0.0f64; 16];
        wide.to_slice(&mut lanes[..V::LANES]);
        for lane in &lanes[..V::LANES] {
            prop_assert!(rel_err(*lane, narrow) < 1e-14);
        }
    }
}
