//! Special-value policies
//!
//! Pins down the fixed behavior at zeros, infinities, NaN, and the saturation
//! cutoffs, in both precisions.


use altair_math::math::{
    atan, cbrt, cos, erf, erfc, exp, exp2, exp2n, expm1, frexp, ldexp, log, log2, pow, pown, sin,
    tanh,
};
use altair_math::{DefaultF64Vector, ScalarVector, SimdVector};
use test_utils::{assert_all_lanes, first};

type V = DefaultF64Vector;

#[test]
fn test_log_specials() {
    assert_all_lanes(log2(V::splat(0.0)), f64::NEG_INFINITY, 0.0);
    assert_all_lanes(log2(V::splat(-0.0)), f64::NEG_INFINITY, 0.0);
    assert_all_lanes(log2(V::splat(f64::INFINITY)), f64::INFINITY, 0.0);
    assert_all_lanes(log2(V::splat(-3.0)), f64::NAN, 0.0);
    assert_all_lanes(log2(V::splat(f64::NAN)), f64::NAN, 0.0);
    assert_all_lanes(log(V::splat(0.0)), f64::NEG_INFINITY, 0.0);

    // Subnormal arguments are renormalized, not flushed
    let sub = 4.9e-324f64;
    let got = first(log2(V::splat(sub)));
    assert!((got - libm::log2(sub)).abs() < 1e-10, "log2(subnormal) = {got}");

    assert_eq!(first(log2(ScalarVector(0.0f32))), f32::NEG_INFINITY);
    assert!(first(log2(ScalarVector(-1.0f32))).is_nan());
}

#[test]
fn test_exp_saturation() {
    assert_all_lanes(exp(V::splat(f64::NEG_INFINITY)), 0.0, 0.0);
    assert_all_lanes(exp(V::splat(f64::INFINITY)), f64::INFINITY, 0.0);
    assert_all_lanes(exp(V::splat(f64::NAN)), f64::NAN, 0.0);
    assert_all_lanes(exp(V::splat(-800.0)), 0.0, 0.0);
    assert_all_lanes(exp(V::splat(800.0)), f64::INFINITY, 0.0);
    assert_all_lanes(exp2(V::splat(-1100.0)), 0.0, 0.0);
    assert_all_lanes(exp2(V::splat(1025.0)), f64::INFINITY, 0.0);

    assert_eq!(first(exp(ScalarVector(-200.0f32))), 0.0);
    assert_eq!(first(exp(ScalarVector(200.0f32))), f32::INFINITY);
    assert!(first(exp(ScalarVector(f32::NAN))).is_nan());
}

#[test]
fn test_exp2_exact_on_integers() {
    for k in [-1022i32, -100, -1, 0, 1, 10, 100, 1023] {
        let got = first(exp2(V::splat(k as f64)));
        assert_eq!(got, libm::exp2(k as f64), "exp2({k})");
    }
    // exp2n reaches down into the subnormals and up to overflow
    assert_eq!(first(exp2n(V::splat(-1074.0))), 4.9e-324);
    assert_eq!(first(exp2n(V::splat(-1075.0))), 0.0);
    assert_eq!(first(exp2n(V::splat(1023.0))), libm::exp2(1023.0));
    assert_eq!(first(exp2n(V::splat(1024.0))), f64::INFINITY);
}

#[test]
fn test_expm1_specials() {
    assert_all_lanes(expm1(V::splat(0.0)), 0.0, 0.0);
    assert_all_lanes(expm1(V::splat(f64::NEG_INFINITY)), -1.0, 0.0);
    assert_all_lanes(expm1(V::splat(f64::INFINITY)), f64::INFINITY, 0.0);
    assert_eq!(first(expm1(V::splat(-100.0))), -1.0);
    // No cancellation for tiny arguments
    let tiny = 1e-20f64;
    assert_eq!(first(expm1(V::splat(tiny))), tiny);
}

#[test]
fn test_frexp_and_ldexp_specials() {
    let (m, e) = frexp(V::splat(0.0));
    assert_eq!(first(m), 0.0);
    assert_eq!(first(e), 0.0);
    let (m, e) = frexp(V::splat(f64::INFINITY));
    assert_eq!(first(m), f64::INFINITY);
    assert_eq!(first(e), 0.0);
    let (m, e) = frexp(V::splat(f64::NAN));
    assert!(first(m).is_nan());
    assert_eq!(first(e), 0.0);

    // Subnormals renormalize to a mantissa in [0.5, 1)
    let (m, e) = frexp(V::splat(4.9e-324));
    assert_eq!(first(m), 0.5);
    assert_eq!(first(e), -1073.0);
    assert_eq!(first(ldexp(m, e)), 4.9e-324);

    // Scaling far down then back up must not round through zero
    let x = V::splat(3.0);
    let down = ldexp(x, V::splat(-1060.0));
    assert_eq!(first(ldexp(down, V::splat(1060.0))), 3.0);
}

#[test]
fn test_trig_specials() {
    assert_all_lanes(sin(V::splat(0.0)), 0.0, 0.0);
    assert_all_lanes(cos(V::splat(0.0)), 1.0, 0.0);
    assert!(first(sin(V::splat(f64::NAN))).is_nan());
    // Arguments too large for the 2π reduction collapse to the interval
    // midpoint, so infinity lands on π rather than NaN
    assert_eq!(first(cos(V::splat(f64::INFINITY))), -1.0);
    assert_eq!(first(sin(V::splat(f64::INFINITY))).abs(), 0.0);

    assert_all_lanes(
        atan(V::splat(f64::INFINITY)),
        core::f64::consts::FRAC_PI_2,
        1e-15,
    );
    assert_all_lanes(
        atan(V::splat(f64::NEG_INFINITY)),
        -core::f64::consts::FRAC_PI_2,
        1e-15,
    );
}

#[test]
fn test_tanh_saturates_exactly() {
    assert_eq!(first(tanh(V::splat(25.0))), 1.0);
    assert_eq!(first(tanh(V::splat(-25.0))), -1.0);
    assert_eq!(first(tanh(V::splat(f64::INFINITY))), 1.0);
    assert_eq!(first(tanh(V::splat(f64::NEG_INFINITY))), -1.0);
    assert_eq!(first(tanh(ScalarVector(12.0f32))), 1.0);
    assert_eq!(first(tanh(ScalarVector(-12.0f32))), -1.0);
}

#[test]
fn test_erfc_cutoff_is_exact_zero() {
    assert_eq!(first(erfc(V::splat(28.0))), 0.0);
    assert_eq!(first(erfc(V::splat(f64::INFINITY))), 0.0);
    assert_eq!(first(erfc(V::splat(f64::NEG_INFINITY))), 2.0);
    assert_eq!(first(erfc(ScalarVector(11.0f32))), 0.0);
    assert_eq!(first(erfc(ScalarVector(-11.0f32))), 2.0);

    assert_eq!(first(erf(V::splat(f64::INFINITY))), 1.0);
    assert_eq!(first(erf(V::splat(f64::NEG_INFINITY))), -1.0);
    assert_eq!(first(erf(V::splat(0.0))), 0.0);
}

#[test]
fn test_cbrt_passes_zero_and_infinity_through() {
    assert_eq!(first(cbrt(V::splat(0.0))).to_bits(), 0.0f64.to_bits());
    assert_eq!(first(cbrt(V::splat(-0.0))).to_bits(), (-0.0f64).to_bits());
    assert_eq!(first(cbrt(V::splat(f64::INFINITY))), f64::INFINITY);
    assert_eq!(first(cbrt(V::splat(f64::NEG_INFINITY))), f64::NEG_INFINITY);
    // Perfect cubes come back to within an ulp, not bit-exactly
    assert!((first(cbrt(V::splat(-8.0))) + 2.0).abs() <= 2.0 * f64::EPSILON);
    assert!((first(cbrt(V::splat(27.0))) - 3.0).abs() <= 3.0 * f64::EPSILON);
}

#[test]
fn test_pow_composition_edges() {
    // pow goes through exp2(y log2 x), so the log edge policies flow through
    assert_eq!(first(pow(V::splat(0.0), V::splat(3.0))), 0.0);
    assert_eq!(first(pow(V::splat(0.0), V::splat(-2.0))), f64::INFINITY);
    assert!(first(pow(V::splat(-2.0), V::splat(0.5))).is_nan());
    assert_eq!(first(pow(V::splat(2.0), V::splat(10.0))), 1024.0);
    assert_eq!(first(pow(V::splat(1.0), V::splat(1e18))), 1.0);

    assert_eq!(first(pown(V::splat(-3.0), 3)), -27.0);
    assert_eq!(first(pown(V::splat(2.0), -2)), 0.25);
    assert_eq!(first(pown(V::splat(5.0), 0)), 1.0);
}
