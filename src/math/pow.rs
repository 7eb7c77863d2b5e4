//! Power functions: pow, pown

use crate::ops::reciprocal;
use crate::traits::{SimdElement, SimdVector};

/// General power x^y, evaluated as 2^(y·log₂x).
///
/// Negative bases yield NaN (the log is undefined there), as does 0^0
/// (0·−Inf inside the reduction). 0^y is 0 for y > 0 and +Inf for y < 0.
///
/// # Example
///
/// ```
/// use altair_math::backends::scalar::ScalarVector;
/// use altair_math::math::pow;
///
/// let y = pow(ScalarVector(2.0f64), ScalarVector(10.0));
/// assert!((y.0 - 1024.0).abs() < 1e-10);
/// ```
#[inline(always)]
pub fn pow<V: SimdVector>(x: V, y: V) -> V {
    crate::math::exp::exp2(y.mul(crate::math::log::log2(x)))
}

/// Integer power x^n by binary exponentiation, the same n for every lane.
///
/// Exact products only, so negative bases are handled correctly and
/// pown(x, 0) = 1 for every x including 0 and NaN. Negative n takes the
/// reciprocal of the positive power.
#[inline(always)]
pub fn pown<V: SimdVector>(x: V, n: i32) -> V {
    let mut result = V::splat(<V::Scalar as SimdElement>::ONE);
    let mut power = x;
    let mut m = n.unsigned_abs();
    while m != 0 {
        if m & 1 == 1 {
            result = result.mul(power);
        }
        m >>= 1;
        if m != 0 {
            power = power.mul(power);
        }
    }
    if n < 0 {
        reciprocal(result)
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::scalar::ScalarVector;

    fn s64(v: f64) -> ScalarVector<f64> {
        ScalarVector(v)
    }

    #[test]
    fn test_pow_against_libm() {
        for &(x, y) in &[
            (2.0f64, 0.5),
            (10.0, 3.0),
            (0.3, -2.7),
            (1.0, 1000.0),
            (123.456, 0.789),
        ] {
            let got = pow(s64(x), s64(y)).0;
            let expected = libm::pow(x, y);
            assert!(
                (got - expected).abs() <= 1e-12 * expected.abs(),
                "pow({x}, {y}): {got} vs {expected}"
            );
        }
    }

    #[test]
    fn test_pow_edge_cases() {
        assert!(pow(s64(-2.0), s64(0.5)).0.is_nan());
        assert!(pow(s64(0.0), s64(0.0)).0.is_nan());
        assert_eq!(pow(s64(0.0), s64(3.0)).0, 0.0);
        assert_eq!(pow(s64(0.0), s64(-3.0)).0, f64::INFINITY);
    }

    #[test]
    fn test_pown_exact_small_powers() {
        assert_eq!(pown(s64(3.0), 4).0, 81.0);
        assert_eq!(pown(s64(-2.0), 3).0, -8.0);
        assert_eq!(pown(s64(-2.0), 10).0, 1024.0);
        assert_eq!(pown(s64(2.0), -3).0, 0.125);
        assert_eq!(pown(s64(7.5), 0).0, 1.0);
        assert_eq!(pown(s64(0.0), 0).0, 1.0);
        assert_eq!(pown(s64(f64::NAN), 0).0, 1.0);
    }

    #[test]
    fn test_pown_matches_pow_for_positive_bases() {
        for n in [-7, -1, 1, 2, 5, 13] {
            let got = pown(s64(1.7), n).0;
            let expected = libm::pow(1.7, f64::from(n));
            assert!((got - expected).abs() <= 1e-13 * expected.abs());
        }
    }
}
