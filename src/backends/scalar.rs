//! Scalar backend implementation
//!
//! This backend provides a scalar (non-SIMD) fallback that always works on any platform.
//! It serves as the reference implementation and is useful for testing backend consistency.

use crate::traits::{SimdInt, SimdMask, SimdVector};

/// Scalar vector wrapper (single-lane SIMD)
///
/// This wraps a single scalar value to implement the SimdVector trait,
/// providing a fallback when SIMD is not available or desired.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct ScalarVector<T>(pub T);

/// Scalar mask wrapper (single boolean)
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct ScalarMask(pub bool);

/// Scalar integer wrapper (single u32/u64 lane)
///
/// Used for IEEE 754 bit-pattern manipulation in the exponent kernels.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct ScalarInt<T>(pub T);

impl SimdMask for ScalarMask {
    #[inline(always)]
    fn all(self) -> bool {
        self.0
    }

    #[inline(always)]
    fn any(self) -> bool {
        self.0
    }

    #[inline(always)]
    fn none(self) -> bool {
        !self.0
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        ScalarMask(self.0 && rhs.0)
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        ScalarMask(self.0 || rhs.0)
    }

    #[inline(always)]
    fn not(self) -> Self {
        ScalarMask(!self.0)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        ScalarMask(self.0 ^ rhs.0)
    }
}

impl SimdInt for ScalarInt<u32> {
    type Scalar = u32;
    type FloatVec = ScalarVector<f32>;

    const LANES: usize = 1;

    #[inline(always)]
    fn splat(value: u32) -> Self {
        ScalarInt(value)
    }

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        ScalarInt(self.0 << count)
    }

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        ScalarInt(self.0 >> count)
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        ScalarInt(self.0 & rhs.0)
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        ScalarInt(self.0 | rhs.0)
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        ScalarInt(self.0.wrapping_add(rhs.0))
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ScalarInt(self.0.wrapping_sub(rhs.0))
    }
}

impl SimdInt for ScalarInt<u64> {
    type Scalar = u64;
    type FloatVec = ScalarVector<f64>;

    const LANES: usize = 1;

    #[inline(always)]
    fn splat(value: u64) -> Self {
        ScalarInt(value)
    }

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        ScalarInt(self.0 << count)
    }

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        ScalarInt(self.0 >> count)
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        ScalarInt(self.0 & rhs.0)
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        ScalarInt(self.0 | rhs.0)
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        ScalarInt(self.0.wrapping_add(rhs.0))
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ScalarInt(self.0.wrapping_sub(rhs.0))
    }
}

// Implement SimdVector for ScalarVector<f32>
impl SimdVector for ScalarVector<f32> {
    type Scalar = f32;
    type Mask = ScalarMask;
    type IntBits = ScalarInt<u32>;

    const LANES: usize = 1;

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        ScalarVector(value)
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for scalar load");
        ScalarVector(slice[0])
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(
            slice.len() >= Self::LANES,
            "Slice too short for scalar store"
        );
        slice[0] = self.0;
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        ScalarVector(self.0 + rhs.0)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ScalarVector(self.0 - rhs.0)
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        ScalarVector(self.0 * rhs.0)
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        ScalarVector(self.0 / rhs.0)
    }

    #[inline(always)]
    fn neg(self) -> Self {
        ScalarVector(-self.0)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        ScalarVector(libm::fabsf(self.0))
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        ScalarVector(libm::fmaf(self.0, b.0, c.0))
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        ScalarVector(libm::sqrtf(self.0))
    }

    #[inline(always)]
    fn floor(self) -> Self {
        ScalarVector(libm::floorf(self.0))
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        ScalarVector(libm::fminf(self.0, rhs.0))
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        ScalarVector(libm::fmaxf(self.0, rhs.0))
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 < rhs.0)
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 <= rhs.0)
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 > rhs.0)
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 >= rhs.0)
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 == rhs.0)
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        if mask.0 {
            true_val
        } else {
            false_val
        }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> Self::Scalar {
        self.0
    }

    #[inline(always)]
    fn horizontal_max(self) -> Self::Scalar {
        self.0
    }

    #[inline(always)]
    fn horizontal_min(self) -> Self::Scalar {
        self.0
    }

    #[inline(always)]
    fn to_bits(self) -> Self::IntBits {
        ScalarInt(self.0.to_bits())
    }

    #[inline(always)]
    fn from_bits(bits: Self::IntBits) -> Self {
        ScalarVector(f32::from_bits(bits.0))
    }

    #[inline(always)]
    fn to_int(self) -> Self::IntBits {
        ScalarInt(libm::rintf(self.0) as i32 as u32)
    }

    #[inline(always)]
    fn from_int(bits: Self::IntBits) -> Self {
        ScalarVector(bits.0 as i32 as f32)
    }
}

// Implement SimdVector for ScalarVector<f64>
impl SimdVector for ScalarVector<f64> {
    type Scalar = f64;
    type Mask = ScalarMask;
    type IntBits = ScalarInt<u64>;

    const LANES: usize = 1;

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        ScalarVector(value)
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for scalar load");
        ScalarVector(slice[0])
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(
            slice.len() >= Self::LANES,
            "Slice too short for scalar store"
        );
        slice[0] = self.0;
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        ScalarVector(self.0 + rhs.0)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ScalarVector(self.0 - rhs.0)
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        ScalarVector(self.0 * rhs.0)
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        ScalarVector(self.0 / rhs.0)
    }

    #[inline(always)]
    fn neg(self) -> Self {
        ScalarVector(-self.0)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        ScalarVector(libm::fabs(self.0))
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        ScalarVector(libm::fma(self.0, b.0, c.0))
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        ScalarVector(libm::sqrt(self.0))
    }

    #[inline(always)]
    fn floor(self) -> Self {
        ScalarVector(libm::floor(self.0))
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        ScalarVector(libm::fmin(self.0, rhs.0))
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        ScalarVector(libm::fmax(self.0, rhs.0))
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 < rhs.0)
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 <= rhs.0)
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 > rhs.0)
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 >= rhs.0)
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 == rhs.0)
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        if mask.0 {
            true_val
        } else {
            false_val
        }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> Self::Scalar {
        self.0
    }

    #[inline(always)]
    fn horizontal_max(self) -> Self::Scalar {
        self.0
    }

    #[inline(always)]
    fn horizontal_min(self) -> Self::Scalar {
        self.0
    }

    #[inline(always)]
    fn to_bits(self) -> Self::IntBits {
        ScalarInt(self.0.to_bits())
    }

    #[inline(always)]
    fn from_bits(bits: Self::IntBits) -> Self {
        ScalarVector(f64::from_bits(bits.0))
    }

    #[inline(always)]
    fn to_int(self) -> Self::IntBits {
        ScalarInt(libm::rint(self.0) as i64 as u64)
    }

    #[inline(always)]
    fn from_int(bits: Self::IntBits) -> Self {
        ScalarVector(bits.0 as i64 as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_arithmetic() {
        let a = ScalarVector(3.0f32);
        let b = ScalarVector(4.0f32);
        assert_eq!(a.add(b).0, 7.0);
        assert_eq!(a.sub(b).0, -1.0);
        assert_eq!(a.mul(b).0, 12.0);
        assert_eq!(a.div(b).0, 0.75);
        assert_eq!(a.fma(b, ScalarVector(1.0)).0, 13.0);
    }

    #[test]
    fn test_scalar_bitcast_roundtrip() {
        let x = ScalarVector(-1.5f64);
        let back = <ScalarVector<f64>>::from_bits(x.to_bits());
        assert_eq!(back.0.to_bits(), (-1.5f64).to_bits());
    }

    #[test]
    fn test_scalar_int_conversion_rounds_to_nearest_even() {
        assert_eq!(ScalarVector(2.5f32).to_int().0, 2);
        assert_eq!(ScalarVector(3.5f32).to_int().0, 4);
        assert_eq!(ScalarVector(-2.5f64).to_int().0, (-2i64) as u64);
        assert_eq!(<ScalarVector<f32>>::from_int(ScalarInt(-3i32 as u32)).0, -3.0);
    }

    #[test]
    fn test_scalar_select_and_masks() {
        let m = ScalarVector(1.0f32).lt(ScalarVector(2.0));
        assert!(m.all());
        assert!(m.not().none());
        let picked = <ScalarVector<f32>>::select(m, ScalarVector(10.0), ScalarVector(20.0));
        assert_eq!(picked.0, 10.0);
    }

    #[test]
    fn test_scalar_shift_ops() {
        let x = <ScalarInt<u32> as SimdInt>::splat(1).shl(23);
        assert_eq!(x.0, 0x0080_0000);
        assert_eq!(x.shr(23).0, 1);
    }
}
