//! Batch operations over scalar slices
//!
//! Each operation runs a vectorized bulk loop in the selected backend's width
//! and finishes the `n mod LANES` remainder with scalar arithmetic, so any
//! slice length works. Reductions combine per-chunk lane reductions and the
//! tail with the same associative operator; empty slices return the operator
//! identity.
//!
//! # Panics
//!
//! Every function with multiple slice arguments panics if their lengths differ.

use crate::traits::{SimdElement, SimdVector};

macro_rules! binary_array_op {
    ($(#[$doc:meta])* $name:ident, $vop:ident, $sop:tt) => {
        $(#[$doc])*
        pub fn $name<V: SimdVector>(
            xr: &mut [V::Scalar],
            x1: &[V::Scalar],
            x2: &[V::Scalar],
        ) {
            assert_eq!(xr.len(), x1.len(), "result and operand lengths differ");
            assert_eq!(xr.len(), x2.len(), "result and operand lengths differ");
            let n = xr.len();
            let mut i = 0;
            while i + V::LANES <= n {
                V::from_slice(&x1[i..])
                    .$vop(V::from_slice(&x2[i..]))
                    .to_slice(&mut xr[i..]);
                i += V::LANES;
            }
            while i < n {
                xr[i] = x1[i] $sop x2[i];
                i += 1;
            }
        }
    };
}

binary_array_op!(
    /// xr[i] = x1[i] + x2[i].
    add, add, +
);
binary_array_op!(
    /// xr[i] = x1[i] − x2[i].
    sub, sub, -
);
binary_array_op!(
    /// xr[i] = x1[i] · x2[i].
    mul, mul, *
);
binary_array_op!(
    /// xr[i] = x1[i] / x2[i].
    div, div, /
);

/// xr[i] = x1[i] · d for a single broadcast factor.
pub fn mul1<V: SimdVector>(xr: &mut [V::Scalar], x1: &[V::Scalar], d: V::Scalar) {
    assert_eq!(xr.len(), x1.len(), "result and operand lengths differ");
    let n = xr.len();
    let dv = V::splat(d);
    let mut i = 0;
    while i + V::LANES <= n {
        V::from_slice(&x1[i..]).mul(dv).to_slice(&mut xr[i..]);
        i += V::LANES;
    }
    while i < n {
        xr[i] = x1[i] * d;
        i += 1;
    }
}

/// xr[i] = x1[i] / d for a single broadcast divisor.
pub fn div1<V: SimdVector>(xr: &mut [V::Scalar], x1: &[V::Scalar], d: V::Scalar) {
    assert_eq!(xr.len(), x1.len(), "result and operand lengths differ");
    let n = xr.len();
    let dv = V::splat(d);
    let mut i = 0;
    while i + V::LANES <= n {
        V::from_slice(&x1[i..]).div(dv).to_slice(&mut xr[i..]);
        i += V::LANES;
    }
    while i < n {
        xr[i] = x1[i] / d;
        i += 1;
    }
}

/// xr[i] = 2·x[i].
pub fn dbl<V: SimdVector>(xr: &mut [V::Scalar], x: &[V::Scalar]) {
    assert_eq!(xr.len(), x.len(), "result and operand lengths differ");
    let n = xr.len();
    let mut i = 0;
    while i + V::LANES <= n {
        let v = V::from_slice(&x[i..]);
        v.add(v).to_slice(&mut xr[i..]);
        i += V::LANES;
    }
    while i < n {
        xr[i] = x[i] + x[i];
        i += 1;
    }
}

/// xr[i] = x[i]².
pub fn sqr<V: SimdVector>(xr: &mut [V::Scalar], x: &[V::Scalar]) {
    assert_eq!(xr.len(), x.len(), "result and operand lengths differ");
    let n = xr.len();
    let mut i = 0;
    while i + V::LANES <= n {
        let v = V::from_slice(&x[i..]);
        v.mul(v).to_slice(&mut xr[i..]);
        i += V::LANES;
    }
    while i < n {
        xr[i] = x[i] * x[i];
        i += 1;
    }
}

/// Dot product Σ x1[i]·x2[i], accumulated with fused multiply-adds.
///
/// The vector accumulator reduces pairwise, so the result can differ from a
/// left-to-right scalar sum by reassociation error. Empty slices return 0.
pub fn dot<V: SimdVector>(x1: &[V::Scalar], x2: &[V::Scalar]) -> V::Scalar {
    assert_eq!(x1.len(), x2.len(), "operand lengths differ");
    let n = x1.len();
    let mut acc = V::splat(<V::Scalar as SimdElement>::ZERO);
    let mut i = 0;
    while i + V::LANES <= n {
        acc = V::from_slice(&x1[i..]).fma(V::from_slice(&x2[i..]), acc);
        i += V::LANES;
    }
    let mut sum = acc.horizontal_sum();
    while i < n {
        sum = x1[i].fma_scalar(x2[i], sum);
        i += 1;
    }
    sum
}

/// Largest element; −Inf for an empty slice.
pub fn max<V: SimdVector>(x: &[V::Scalar]) -> V::Scalar {
    let n = x.len();
    let mut m = <V::Scalar as SimdElement>::from_f64(f64::NEG_INFINITY);
    let mut i = 0;
    while i + V::LANES <= n {
        m = m.max_scalar(V::from_slice(&x[i..]).horizontal_max());
        i += V::LANES;
    }
    while i < n {
        m = m.max_scalar(x[i]);
        i += 1;
    }
    m
}

/// Smallest element; +Inf for an empty slice.
pub fn min<V: SimdVector>(x: &[V::Scalar]) -> V::Scalar {
    let n = x.len();
    let mut m = <V::Scalar as SimdElement>::from_f64(f64::INFINITY);
    let mut i = 0;
    while i + V::LANES <= n {
        m = m.min_scalar(V::from_slice(&x[i..]).horizontal_min());
        i += V::LANES;
    }
    while i < n {
        m = m.min_scalar(x[i]);
        i += 1;
    }
    m
}

/// Largest and smallest element in one pass; (−Inf, +Inf) for an empty slice.
pub fn max_min<V: SimdVector>(x: &[V::Scalar]) -> (V::Scalar, V::Scalar) {
    let n = x.len();
    let mut hi = <V::Scalar as SimdElement>::from_f64(f64::NEG_INFINITY);
    let mut lo = <V::Scalar as SimdElement>::from_f64(f64::INFINITY);
    let mut i = 0;
    while i + V::LANES <= n {
        let v = V::from_slice(&x[i..]);
        hi = hi.max_scalar(v.horizontal_max());
        lo = lo.min_scalar(v.horizontal_min());
        i += V::LANES;
    }
    while i < n {
        hi = hi.max_scalar(x[i]);
        lo = lo.min_scalar(x[i]);
        i += 1;
    }
    (hi, lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::scalar::ScalarVector;

    type S = ScalarVector<f64>;

    #[test]
    fn test_elementwise_ops_any_length() {
        let a: [f64; 16] = core::array::from_fn(|i| i as f64 + 1.0);
        let b: [f64; 16] = core::array::from_fn(|i| i as f64 * 0.5 + 2.0);
        for n in [0usize, 1, 3, 7, 16] {
            let mut r = [0.0f64; 16];
            add::<S>(&mut r[..n], &a[..n], &b[..n]);
            for i in 0..n {
                assert_eq!(r[i], a[i] + b[i]);
            }
            mul::<S>(&mut r[..n], &a[..n], &b[..n]);
            for i in 0..n {
                assert_eq!(r[i], a[i] * b[i]);
            }
            sub::<S>(&mut r[..n], &a[..n], &b[..n]);
            for i in 0..n {
                assert_eq!(r[i], a[i] - b[i]);
            }
            div::<S>(&mut r[..n], &a[..n], &b[..n]);
            for i in 0..n {
                assert_eq!(r[i], a[i] / b[i]);
            }
        }
    }

    #[test]
    fn test_scalar_broadcast_ops() {
        let x = [1.0f64, -2.0, 4.0];
        let mut r = [0.0f64; 3];
        mul1::<S>(&mut r, &x, 3.0);
        assert_eq!(r, [3.0, -6.0, 12.0]);
        div1::<S>(&mut r, &x, 2.0);
        assert_eq!(r, [0.5, -1.0, 2.0]);
        dbl::<S>(&mut r, &x);
        assert_eq!(r, [2.0, -4.0, 8.0]);
        sqr::<S>(&mut r, &x);
        assert_eq!(r, [1.0, 4.0, 16.0]);
    }

    #[test]
    fn test_dot_product() {
        let a = [1.0f64, 2.0, 3.0, 4.0];
        let b = [10.0f64, 20.0, 30.0, 40.0];
        assert_eq!(dot::<S>(&a, &b), 300.0);
        assert_eq!(dot::<S>(&[], &[]), 0.0);
    }

    #[test]
    fn test_reductions_and_identities() {
        let x = [3.0f64, -7.5, 12.0, 0.0, 5.5];
        assert_eq!(max::<S>(&x), 12.0);
        assert_eq!(min::<S>(&x), -7.5);
        assert_eq!(max_min::<S>(&x), (12.0, -7.5));

        let empty: [f64; 0] = [];
        assert_eq!(max::<S>(&empty), f64::NEG_INFINITY);
        assert_eq!(min::<S>(&empty), f64::INFINITY);
        assert_eq!(max_min::<S>(&empty), (f64::NEG_INFINITY, f64::INFINITY));
    }

    #[test]
    #[should_panic(expected = "lengths differ")]
    fn test_length_mismatch_panics() {
        let mut r = [0.0f64; 3];
        add::<S>(&mut r, &[1.0, 2.0, 3.0], &[1.0, 2.0]);
    }
}
