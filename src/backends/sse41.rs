//! SSE4.1 backend implementation (x86/x86-64)
//!
//! This backend provides 128-bit SIMD operations: 4 lanes of f32 or 2 lanes of f64.
//! Requires SSE4.1 for `_mm_floor_ps`/`_mm_floor_pd` and `_mm_blendv_ps`/`_mm_blendv_pd`
//! (Intel Penryn 2008+, any AMD64 CPU from Bulldozer on).
//!
//! **Note**: This implementation assumes SSE4.1 is available when the `sse41` feature
//! is enabled. Runtime CPU detection is not performed.
//!
//! SSE4.1 has no fused multiply-add instruction; `fma` lowers to a multiply
//! followed by an add (two roundings). The kernels tolerate this.

// This backend only compiles on x86/x86_64 targets
#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]

use crate::traits::{SimdInt, SimdMask, SimdVector};

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;

// f64 ↔ u64 numeric conversion goes through the 1.5·2^52 magic constant: adding
// it pins the integer part into the low mantissa bits with round-to-nearest.
// SSE has no packed 64-bit integer convert.
const F64_CVT_MAGIC: f64 = 6_755_399_441_055_744.0;
const F64_CVT_MAGIC_BITS: u64 = 0x4338_0000_0000_0000;

/// SSE4.1 vector wrapper (4 lanes of f32)
///
/// Wraps the __m128 intrinsic type to provide the SimdVector trait implementation.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Sse41F32Vector(__m128);

/// SSE4.1 mask wrapper for f32 lanes (all-ones / all-zeros lane patterns)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Sse41F32Mask(__m128);

/// SSE4.1 integer vector wrapper (4 lanes of u32)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Sse41Int32(__m128i);

/// SSE4.1 vector wrapper (2 lanes of f64)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Sse41F64Vector(__m128d);

/// SSE4.1 mask wrapper for f64 lanes
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Sse41F64Mask(__m128d);

/// SSE4.1 integer vector wrapper (2 lanes of u64)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Sse41Int64(__m128i);

impl SimdMask for Sse41F32Mask {
    #[inline(always)]
    fn all(self) -> bool {
        unsafe { _mm_movemask_ps(self.0) == 0xf }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { _mm_movemask_ps(self.0) != 0 }
    }

    #[inline(always)]
    fn none(self) -> bool {
        unsafe { _mm_movemask_ps(self.0) == 0 }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { Sse41F32Mask(_mm_and_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Sse41F32Mask(_mm_or_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe {
            let ones = _mm_castsi128_ps(_mm_set1_epi32(-1));
            Sse41F32Mask(_mm_xor_ps(self.0, ones))
        }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { Sse41F32Mask(_mm_xor_ps(self.0, rhs.0)) }
    }
}

impl SimdMask for Sse41F64Mask {
    #[inline(always)]
    fn all(self) -> bool {
        unsafe { _mm_movemask_pd(self.0) == 0x3 }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { _mm_movemask_pd(self.0) != 0 }
    }

    #[inline(always)]
    fn none(self) -> bool {
        unsafe { _mm_movemask_pd(self.0) == 0 }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { Sse41F64Mask(_mm_and_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Sse41F64Mask(_mm_or_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe {
            let ones = _mm_castsi128_pd(_mm_set1_epi32(-1));
            Sse41F64Mask(_mm_xor_pd(self.0, ones))
        }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { Sse41F64Mask(_mm_xor_pd(self.0, rhs.0)) }
    }
}

impl SimdInt for Sse41Int32 {
    type Scalar = u32;
    type FloatVec = Sse41F32Vector;

    const LANES: usize = 4;

    #[inline(always)]
    fn splat(value: u32) -> Self {
        unsafe { Sse41Int32(_mm_set1_epi32(value as i32)) }
    }

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        unsafe {
            // SSE shifts take the count in the low 64 bits of a vector register
            let shift_count = _mm_cvtsi32_si128(count as i32);
            Sse41Int32(_mm_sll_epi32(self.0, shift_count))
        }
    }

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        unsafe {
            let shift_count = _mm_cvtsi32_si128(count as i32);
            Sse41Int32(_mm_srl_epi32(self.0, shift_count))
        }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { Sse41Int32(_mm_and_si128(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Sse41Int32(_mm_or_si128(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Sse41Int32(_mm_add_epi32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Sse41Int32(_mm_sub_epi32(self.0, rhs.0)) }
    }
}

impl SimdInt for Sse41Int64 {
    type Scalar = u64;
    type FloatVec = Sse41F64Vector;

    const LANES: usize = 2;

    #[inline(always)]
    fn splat(value: u64) -> Self {
        unsafe { Sse41Int64(_mm_set1_epi64x(value as i64)) }
    }

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        unsafe {
            let shift_count = _mm_cvtsi32_si128(count as i32);
            Sse41Int64(_mm_sll_epi64(self.0, shift_count))
        }
    }

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        unsafe {
            let shift_count = _mm_cvtsi32_si128(count as i32);
            Sse41Int64(_mm_srl_epi64(self.0, shift_count))
        }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { Sse41Int64(_mm_and_si128(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Sse41Int64(_mm_or_si128(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Sse41Int64(_mm_add_epi64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Sse41Int64(_mm_sub_epi64(self.0, rhs.0)) }
    }
}

// Implement SimdVector for Sse41F32Vector
impl SimdVector for Sse41F32Vector {
    type Scalar = f32;
    type Mask = Sse41F32Mask;
    type IntBits = Sse41Int32;

    const LANES: usize = 4;

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        unsafe { Sse41F32Vector(_mm_set1_ps(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for SSE4.1 load");
        unsafe { Sse41F32Vector(_mm_loadu_ps(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(
            slice.len() >= Self::LANES,
            "Slice too short for SSE4.1 store"
        );
        unsafe { _mm_storeu_ps(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Sse41F32Vector(_mm_add_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Sse41F32Vector(_mm_sub_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Sse41F32Vector(_mm_mul_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Sse41F32Vector(_mm_div_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe {
            let sign = _mm_castsi128_ps(_mm_set1_epi32(i32::MIN));
            Sse41F32Vector(_mm_xor_ps(self.0, sign))
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe {
            let mask = _mm_castsi128_ps(_mm_set1_epi32(0x7fff_ffff));
            Sse41F32Vector(_mm_and_ps(self.0, mask))
        }
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        // No FMA instruction at this feature level: multiply then add
        unsafe { Sse41F32Vector(_mm_add_ps(_mm_mul_ps(self.0, b.0), c.0)) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { Sse41F32Vector(_mm_sqrt_ps(self.0)) }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        unsafe { Sse41F32Vector(_mm_floor_ps(self.0)) }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe { Sse41F32Vector(_mm_min_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe { Sse41F32Vector(_mm_max_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        unsafe { Sse41F32Mask(_mm_cmplt_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> Self::Mask {
        unsafe { Sse41F32Mask(_mm_cmple_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        unsafe { Sse41F32Mask(_mm_cmpgt_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> Self::Mask {
        unsafe { Sse41F32Mask(_mm_cmpge_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        unsafe { Sse41F32Mask(_mm_cmpeq_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        unsafe { Sse41F32Vector(_mm_blendv_ps(false_val.0, true_val.0, mask.0)) }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> Self::Scalar {
        unsafe {
            // Pairwise halving: [a b c d] -> [a+c b+d] -> a+c+b+d
            let hi = _mm_movehl_ps(self.0, self.0);
            let pair = _mm_add_ps(self.0, hi);
            let swapped = _mm_shuffle_ps::<0x1>(pair, pair);
            _mm_cvtss_f32(_mm_add_ss(pair, swapped))
        }
    }

    #[inline(always)]
    fn horizontal_max(self) -> Self::Scalar {
        unsafe {
            let hi = _mm_movehl_ps(self.0, self.0);
            let pair = _mm_max_ps(self.0, hi);
            let swapped = _mm_shuffle_ps::<0x1>(pair, pair);
            _mm_cvtss_f32(_mm_max_ss(pair, swapped))
        }
    }

    #[inline(always)]
    fn horizontal_min(self) -> Self::Scalar {
        unsafe {
            let hi = _mm_movehl_ps(self.0, self.0);
            let pair = _mm_min_ps(self.0, hi);
            let swapped = _mm_shuffle_ps::<0x1>(pair, pair);
            _mm_cvtss_f32(_mm_min_ss(pair, swapped))
        }
    }

    #[inline(always)]
    fn to_bits(self) -> Self::IntBits {
        unsafe { Sse41Int32(_mm_castps_si128(self.0)) }
    }

    #[inline(always)]
    fn from_bits(bits: Self::IntBits) -> Self {
        unsafe { Sse41F32Vector(_mm_castsi128_ps(bits.0)) }
    }

    #[inline(always)]
    fn to_int(self) -> Self::IntBits {
        // Rounds to nearest even under the default MXCSR mode
        unsafe { Sse41Int32(_mm_cvtps_epi32(self.0)) }
    }

    #[inline(always)]
    fn from_int(bits: Self::IntBits) -> Self {
        unsafe { Sse41F32Vector(_mm_cvtepi32_ps(bits.0)) }
    }
}

// Implement SimdVector for Sse41F64Vector
impl SimdVector for Sse41F64Vector {
    type Scalar = f64;
    type Mask = Sse41F64Mask;
    type IntBits = Sse41Int64;

    const LANES: usize = 2;

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        unsafe { Sse41F64Vector(_mm_set1_pd(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for SSE4.1 load");
        unsafe { Sse41F64Vector(_mm_loadu_pd(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(
            slice.len() >= Self::LANES,
            "Slice too short for SSE4.1 store"
        );
        unsafe { _mm_storeu_pd(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Sse41F64Vector(_mm_add_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Sse41F64Vector(_mm_sub_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Sse41F64Vector(_mm_mul_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Sse41F64Vector(_mm_div_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe {
            let sign = _mm_castsi128_pd(_mm_set1_epi64x(i64::MIN));
            Sse41F64Vector(_mm_xor_pd(self.0, sign))
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe {
            let mask = _mm_castsi128_pd(_mm_set1_epi64x(0x7fff_ffff_ffff_ffff));
            Sse41F64Vector(_mm_and_pd(self.0, mask))
        }
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        unsafe { Sse41F64Vector(_mm_add_pd(_mm_mul_pd(self.0, b.0), c.0)) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { Sse41F64Vector(_mm_sqrt_pd(self.0)) }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        unsafe { Sse41F64Vector(_mm_floor_pd(self.0)) }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe { Sse41F64Vector(_mm_min_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe { Sse41F64Vector(_mm_max_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        unsafe { Sse41F64Mask(_mm_cmplt_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> Self::Mask {
        unsafe { Sse41F64Mask(_mm_cmple_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        unsafe { Sse41F64Mask(_mm_cmpgt_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> Self::Mask {
        unsafe { Sse41F64Mask(_mm_cmpge_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        unsafe { Sse41F64Mask(_mm_cmpeq_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        unsafe { Sse41F64Vector(_mm_blendv_pd(false_val.0, true_val.0, mask.0)) }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> Self::Scalar {
        unsafe {
            let hi = _mm_unpackhi_pd(self.0, self.0);
            _mm_cvtsd_f64(_mm_add_sd(self.0, hi))
        }
    }

    #[inline(always)]
    fn horizontal_max(self) -> Self::Scalar {
        unsafe {
            let hi = _mm_unpackhi_pd(self.0, self.0);
            _mm_cvtsd_f64(_mm_max_sd(self.0, hi))
        }
    }

    #[inline(always)]
    fn horizontal_min(self) -> Self::Scalar {
        unsafe {
            let hi = _mm_unpackhi_pd(self.0, self.0);
            _mm_cvtsd_f64(_mm_min_sd(self.0, hi))
        }
    }

    #[inline(always)]
    fn to_bits(self) -> Self::IntBits {
        unsafe { Sse41Int64(_mm_castpd_si128(self.0)) }
    }

    #[inline(always)]
    fn from_bits(bits: Self::IntBits) -> Self {
        unsafe { Sse41F64Vector(_mm_castsi128_pd(bits.0)) }
    }

    #[inline(always)]
    fn to_int(self) -> Self::IntBits {
        unsafe {
            let magic = _mm_set1_pd(F64_CVT_MAGIC);
            let shifted = _mm_add_pd(self.0, magic);
            let bits = _mm_castpd_si128(shifted);
            Sse41Int64(_mm_sub_epi64(bits, _mm_set1_epi64x(F64_CVT_MAGIC_BITS as i64)))
        }
    }

    #[inline(always)]
    fn from_int(bits: Self::IntBits) -> Self {
        unsafe {
            let shifted = _mm_add_epi64(bits.0, _mm_set1_epi64x(F64_CVT_MAGIC_BITS as i64));
            let magic = _mm_set1_pd(F64_CVT_MAGIC);
            Sse41F64Vector(_mm_sub_pd(_mm_castsi128_pd(shifted), magic))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lanes4(v: Sse41F32Vector) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        v.to_slice(&mut out);
        out
    }

    fn lanes2(v: Sse41F64Vector) -> [f64; 2] {
        let mut out = [0.0f64; 2];
        v.to_slice(&mut out);
        out
    }

    #[test]
    #[cfg_attr(not(target_feature = "sse4.1"), ignore)]
    fn test_sse41_f32_lanes() {
        let a = Sse41F32Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        let b = Sse41F32Vector::splat(10.0);
        assert_eq!(lanes4(a.add(b)), [11.0, 12.0, 13.0, 14.0]);
        assert_eq!(a.horizontal_sum(), 10.0);
        assert_eq!(a.horizontal_max(), 4.0);
        assert_eq!(a.horizontal_min(), 1.0);
    }

    #[test]
    #[cfg_attr(not(target_feature = "sse4.1"), ignore)]
    fn test_sse41_f64_int_conversion_magic() {
        let x = Sse41F64Vector::from_slice(&[-3.0, 2.5]);
        let back = Sse41F64Vector::from_int(x.to_int());
        // 2.5 rounds to 2 under nearest-even
        assert_eq!(lanes2(back), [-3.0, 2.0]);
    }

    #[test]
    #[cfg_attr(not(target_feature = "sse4.1"), ignore)]
    fn test_sse41_select_per_lane() {
        let a = Sse41F32Vector::from_slice(&[1.0, 5.0, 2.0, 8.0]);
        let b = Sse41F32Vector::splat(3.0);
        let picked = Sse41F32Vector::select(a.lt(b), a, b);
        assert_eq!(lanes4(picked), [1.0, 3.0, 2.0, 3.0]);
    }
}
