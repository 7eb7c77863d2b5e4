//! Horizontal reduction operations
//!
//! Operations that reduce a SIMD vector to scalar values by combining all lanes.
//! Sums reduce in pairwise-halving order, so results can differ from a
//! left-to-right scalar loop by the usual reassociation error.

use crate::traits::SimdVector;

/// Horizontal sum: add all lanes together.
///
/// # Example
///
/// ```
/// use altair_math::{DefaultF32Vector, SimdVector};
/// use altair_math::ops::horizontal_sum;
///
/// let a = DefaultF32Vector::splat(2.0);
/// assert_eq!(horizontal_sum(a), 2.0 * DefaultF32Vector::LANES as f32);
/// ```
#[inline(always)]
pub fn horizontal_sum<V: SimdVector>(a: V) -> V::Scalar {
    a.horizontal_sum()
}

/// Horizontal maximum: the largest lane value.
#[inline(always)]
pub fn horizontal_max<V: SimdVector>(a: V) -> V::Scalar {
    a.horizontal_max()
}

/// Horizontal minimum: the smallest lane value.
#[inline(always)]
pub fn horizontal_min<V: SimdVector>(a: V) -> V::Scalar {
    a.horizontal_min()
}

/// Maximum and minimum lane values in one call.
#[inline(always)]
pub fn horizontal_max_min<V: SimdVector>(a: V) -> (V::Scalar, V::Scalar) {
    (a.horizontal_max(), a.horizontal_min())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::scalar::ScalarVector;

    #[test]
    fn test_single_lane_reductions_are_identity() {
        let a = ScalarVector(2.5f32);
        assert_eq!(horizontal_sum(a), 2.5);
        assert_eq!(horizontal_max(a), 2.5);
        assert_eq!(horizontal_min(a), 2.5);
        assert_eq!(horizontal_max_min(a), (2.5, 2.5));
    }
}
