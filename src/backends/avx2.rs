//! AVX2 backend implementation (x86/x86-64)
//!
//! This backend provides 256-bit SIMD operations: 8 lanes of f32 or 4 lanes of f64,
//! using AVX2 + FMA instructions (Intel Haswell 2013+, AMD Excavator 2015+).
//!
//! **Note**: This implementation assumes AVX2 and FMA are available when the `avx2`
//! feature is enabled. Runtime CPU detection is not performed.

// This backend only compiles on x86/x86_64 targets
#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]

use crate::traits::{SimdInt, SimdMask, SimdVector};

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;

// f64 ↔ u64 numeric conversion via the 1.5·2^52 magic constant; AVX2 lacks a
// packed 64-bit integer convert (that needs AVX-512DQ).
const F64_CVT_MAGIC: f64 = 6_755_399_441_055_744.0;
const F64_CVT_MAGIC_BITS: u64 = 0x4338_0000_0000_0000;

/// AVX2 vector wrapper (8 lanes of f32)
///
/// Wraps the __m256 intrinsic type to provide the SimdVector trait implementation.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx2F32Vector(__m256);

/// AVX2 mask wrapper for f32 lanes (all-ones / all-zeros lane patterns)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx2F32Mask(__m256);

/// AVX2 integer vector wrapper (8 lanes of u32)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx2Int32(__m256i);

/// AVX2 vector wrapper (4 lanes of f64)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx2F64Vector(__m256d);

/// AVX2 mask wrapper for f64 lanes
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx2F64Mask(__m256d);

/// AVX2 integer vector wrapper (4 lanes of u64)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx2Int64(__m256i);

impl SimdMask for Avx2F32Mask {
    #[inline(always)]
    fn all(self) -> bool {
        unsafe { _mm256_movemask_ps(self.0) == 0xff }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { _mm256_movemask_ps(self.0) != 0 }
    }

    #[inline(always)]
    fn none(self) -> bool {
        unsafe { _mm256_movemask_ps(self.0) == 0 }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { Avx2F32Mask(_mm256_and_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Avx2F32Mask(_mm256_or_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe {
            let ones = _mm256_castsi256_ps(_mm256_set1_epi32(-1));
            Avx2F32Mask(_mm256_xor_ps(self.0, ones))
        }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { Avx2F32Mask(_mm256_xor_ps(self.0, rhs.0)) }
    }
}

impl SimdMask for Avx2F64Mask {
    #[inline(always)]
    fn all(self) -> bool {
        unsafe { _mm256_movemask_pd(self.0) == 0xf }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { _mm256_movemask_pd(self.0) != 0 }
    }

    #[inline(always)]
    fn none(self) -> bool {
        unsafe { _mm256_movemask_pd(self.0) == 0 }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { Avx2F64Mask(_mm256_and_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Avx2F64Mask(_mm256_or_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe {
            let ones = _mm256_castsi256_pd(_mm256_set1_epi32(-1));
            Avx2F64Mask(_mm256_xor_pd(self.0, ones))
        }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { Avx2F64Mask(_mm256_xor_pd(self.0, rhs.0)) }
    }
}

impl SimdInt for Avx2Int32 {
    type Scalar = u32;
    type FloatVec = Avx2F32Vector;

    const LANES: usize = 8;

    #[inline(always)]
    fn splat(value: u32) -> Self {
        unsafe { Avx2Int32(_mm256_set1_epi32(value as i32)) }
    }

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        unsafe {
            // AVX2 shift takes the count in a 128-bit vector register
            let shift_count = _mm_cvtsi32_si128(count as i32);
            Avx2Int32(_mm256_sll_epi32(self.0, shift_count))
        }
    }

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        unsafe {
            let shift_count = _mm_cvtsi32_si128(count as i32);
            Avx2Int32(_mm256_srl_epi32(self.0, shift_count))
        }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { Avx2Int32(_mm256_and_si256(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Avx2Int32(_mm256_or_si256(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Avx2Int32(_mm256_add_epi32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx2Int32(_mm256_sub_epi32(self.0, rhs.0)) }
    }
}

impl SimdInt for Avx2Int64 {
    type Scalar = u64;
    type FloatVec = Avx2F64Vector;

    const LANES: usize = 4;

    #[inline(always)]
    fn splat(value: u64) -> Self {
        unsafe { Avx2Int64(_mm256_set1_epi64x(value as i64)) }
    }

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        unsafe {
            let shift_count = _mm_cvtsi32_si128(count as i32);
            Avx2Int64(_mm256_sll_epi64(self.0, shift_count))
        }
    }

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        unsafe {
            let shift_count = _mm_cvtsi32_si128(count as i32);
            Avx2Int64(_mm256_srl_epi64(self.0, shift_count))
        }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { Avx2Int64(_mm256_and_si256(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Avx2Int64(_mm256_or_si256(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Avx2Int64(_mm256_add_epi64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx2Int64(_mm256_sub_epi64(self.0, rhs.0)) }
    }
}

// Implement SimdVector for Avx2F32Vector
impl SimdVector for Avx2F32Vector {
    type Scalar = f32;
    type Mask = Avx2F32Mask;
    type IntBits = Avx2Int32;

    const LANES: usize = 8;

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        unsafe { Avx2F32Vector(_mm256_set1_ps(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for AVX2 load");
        unsafe { Avx2F32Vector(_mm256_loadu_ps(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(slice.len() >= Self::LANES, "Slice too short for AVX2 store");
        unsafe { _mm256_storeu_ps(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Avx2F32Vector(_mm256_add_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx2F32Vector(_mm256_sub_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Avx2F32Vector(_mm256_mul_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Avx2F32Vector(_mm256_div_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe {
            let sign = _mm256_castsi256_ps(_mm256_set1_epi32(i32::MIN));
            Avx2F32Vector(_mm256_xor_ps(self.0, sign))
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe {
            let mask = _mm256_castsi256_ps(_mm256_set1_epi32(0x7fff_ffff));
            Avx2F32Vector(_mm256_and_ps(self.0, mask))
        }
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        unsafe { Avx2F32Vector(_mm256_fmadd_ps(self.0, b.0, c.0)) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { Avx2F32Vector(_mm256_sqrt_ps(self.0)) }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        unsafe { Avx2F32Vector(_mm256_floor_ps(self.0)) }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe { Avx2F32Vector(_mm256_min_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe { Avx2F32Vector(_mm256_max_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        unsafe { Avx2F32Mask(_mm256_cmp_ps::<_CMP_LT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> Self::Mask {
        unsafe { Avx2F32Mask(_mm256_cmp_ps::<_CMP_LE_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        unsafe { Avx2F32Mask(_mm256_cmp_ps::<_CMP_GT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> Self::Mask {
        unsafe { Avx2F32Mask(_mm256_cmp_ps::<_CMP_GE_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        unsafe { Avx2F32Mask(_mm256_cmp_ps::<_CMP_EQ_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        unsafe { Avx2F32Vector(_mm256_blendv_ps(false_val.0, true_val.0, mask.0)) }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> Self::Scalar {
        unsafe {
            // Fold 256 -> 128, then pairwise-halve within the 128-bit half
            let lo = _mm256_castps256_ps128(self.0);
            let hi = _mm256_extractf128_ps::<1>(self.0);
            let quad = _mm_add_ps(lo, hi);
            let pair = _mm_add_ps(quad, _mm_movehl_ps(quad, quad));
            let swapped = _mm_shuffle_ps::<0x1>(pair, pair);
            _mm_cvtss_f32(_mm_add_ss(pair, swapped))
        }
    }

    #[inline(always)]
    fn horizontal_max(self) -> Self::Scalar {
        unsafe {
            let lo = _mm256_castps256_ps128(self.0);
            let hi = _mm256_extractf128_ps::<1>(self.0);
            let quad = _mm_max_ps(lo, hi);
            let pair = _mm_max_ps(quad, _mm_movehl_ps(quad, quad));
            let swapped = _mm_shuffle_ps::<0x1>(pair, pair);
            _mm_cvtss_f32(_mm_max_ss(pair, swapped))
        }
    }

    #[inline(always)]
    fn horizontal_min(self) -> Self::Scalar {
        unsafe {
            let lo = _mm256_castps256_ps128(self.0);
            let hi = _mm256_extractf128_ps::<1>(self.0);
            let quad = _mm_min_ps(lo, hi);
            let pair = _mm_min_ps(quad, _mm_movehl_ps(quad, quad));
            let swapped = _mm_shuffle_ps::<0x1>(pair, pair);
            _mm_cvtss_f32(_mm_min_ss(pair, swapped))
        }
    }

    #[inline(always)]
    fn to_bits(self) -> Self::IntBits {
        unsafe { Avx2Int32(_mm256_castps_si256(self.0)) }
    }

    #[inline(always)]
    fn from_bits(bits: Self::IntBits) -> Self {
        unsafe { Avx2F32Vector(_mm256_castsi256_ps(bits.0)) }
    }

    #[inline(always)]
    fn to_int(self) -> Self::IntBits {
        unsafe { Avx2Int32(_mm256_cvtps_epi32(self.0)) }
    }

    #[inline(always)]
    fn from_int(bits: Self::IntBits) -> Self {
        unsafe { Avx2F32Vector(_mm256_cvtepi32_ps(bits.0)) }
    }
}

// Implement SimdVector for Avx2F64Vector
impl SimdVector for Avx2F64Vector {
    type Scalar = f64;
    type Mask = Avx2F64Mask;
    type IntBits = Avx2Int64;

    const LANES: usize = 4;

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        unsafe { Avx2F64Vector(_mm256_set1_pd(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for AVX2 load");
        unsafe { Avx2F64Vector(_mm256_loadu_pd(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(slice.len() >= Self::LANES, "Slice too short for AVX2 store");
        unsafe { _mm256_storeu_pd(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Avx2F64Vector(_mm256_add_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx2F64Vector(_mm256_sub_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Avx2F64Vector(_mm256_mul_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Avx2F64Vector(_mm256_div_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe {
            let sign = _mm256_castsi256_pd(_mm256_set1_epi64x(i64::MIN));
            Avx2F64Vector(_mm256_xor_pd(self.0, sign))
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe {
            let mask = _mm256_castsi256_pd(_mm256_set1_epi64x(0x7fff_ffff_ffff_ffff));
            Avx2F64Vector(_mm256_and_pd(self.0, mask))
        }
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        unsafe { Avx2F64Vector(_mm256_fmadd_pd(self.0, b.0, c.0)) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { Avx2F64Vector(_mm256_sqrt_pd(self.0)) }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        unsafe { Avx2F64Vector(_mm256_floor_pd(self.0)) }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe { Avx2F64Vector(_mm256_min_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe { Avx2F64Vector(_mm256_max_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        unsafe { Avx2F64Mask(_mm256_cmp_pd::<_CMP_LT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> Self::Mask {
        unsafe { Avx2F64Mask(_mm256_cmp_pd::<_CMP_LE_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        unsafe { Avx2F64Mask(_mm256_cmp_pd::<_CMP_GT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> Self::Mask {
        unsafe { Avx2F64Mask(_mm256_cmp_pd::<_CMP_GE_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        unsafe { Avx2F64Mask(_mm256_cmp_pd::<_CMP_EQ_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        unsafe { Avx2F64Vector(_mm256_blendv_pd(false_val.0, true_val.0, mask.0)) }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> Self::Scalar {
        unsafe {
            let lo = _mm256_castpd256_pd128(self.0);
            let hi = _mm256_extractf128_pd::<1>(self.0);
            let pair = _mm_add_pd(lo, hi);
            _mm_cvtsd_f64(_mm_add_sd(pair, _mm_unpackhi_pd(pair, pair)))
        }
    }

    #[inline(always)]
    fn horizontal_max(self) -> Self::Scalar {
        unsafe {
            let lo = _mm256_castpd256_pd128(self.0);
            let hi = _mm256_extractf128_pd::<1>(self.0);
            let pair = _mm_max_pd(lo, hi);
            _mm_cvtsd_f64(_mm_max_sd(pair, _mm_unpackhi_pd(pair, pair)))
        }
    }

    #[inline(always)]
    fn horizontal_min(self) -> Self::Scalar {
        unsafe {
            let lo = _mm256_castpd256_pd128(self.0);
            let hi = _mm256_extractf128_pd::<1>(self.0);
            let pair = _mm_min_pd(lo, hi);
            _mm_cvtsd_f64(_mm_min_sd(pair, _mm_unpackhi_pd(pair, pair)))
        }
    }

    #[inline(always)]
    fn to_bits(self) -> Self::IntBits {
        unsafe { Avx2Int64(_mm256_castpd_si256(self.0)) }
    }

    #[inline(always)]
    fn from_bits(bits: Self::IntBits) -> Self {
        unsafe { Avx2F64Vector(_mm256_castsi256_pd(bits.0)) }
    }

    #[inline(always)]
    fn to_int(self) -> Self::IntBits {
        unsafe {
            let magic = _mm256_set1_pd(F64_CVT_MAGIC);
            let shifted = _mm256_add_pd(self.0, magic);
            let bits = _mm256_castpd_si256(shifted);
            Avx2Int64(_mm256_sub_epi64(
                bits,
                _mm256_set1_epi64x(F64_CVT_MAGIC_BITS as i64),
            ))
        }
    }

    #[inline(always)]
    fn from_int(bits: Self::IntBits) -> Self {
        unsafe {
            let shifted = _mm256_add_epi64(bits.0, _mm256_set1_epi64x(F64_CVT_MAGIC_BITS as i64));
            let magic = _mm256_set1_pd(F64_CVT_MAGIC);
            Avx2F64Vector(_mm256_sub_pd(_mm256_castsi256_pd(shifted), magic))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(not(target_feature = "avx2"), ignore)]
    fn test_avx2_f32_horizontal_ops() {
        let v = Avx2F32Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(v.horizontal_sum(), 36.0);
        assert_eq!(v.horizontal_max(), 8.0);
        assert_eq!(v.horizontal_min(), 1.0);
    }

    #[test]
    #[cfg_attr(not(target_feature = "avx2"), ignore)]
    fn test_avx2_f64_int_conversion_magic() {
        let x = Avx2F64Vector::from_slice(&[-7.0, 0.0, 1.5, 1000.0]);
        let mut out = [0.0f64; 4];
        Avx2F64Vector::from_int(x.to_int()).to_slice(&mut out);
        // 1.5 rounds to 2 under nearest-even
        assert_eq!(out, [-7.0, 0.0, 2.0, 1000.0]);
    }

    #[test]
    #[cfg_attr(not(target_feature = "avx2"), ignore)]
    fn test_avx2_bit_roundtrip() {
        let v = Avx2F32Vector::splat(-0.0);
        let sign = <Avx2Int32 as SimdInt>::splat(0x8000_0000);
        let cleared = Avx2F32Vector::from_bits(v.to_bits().and(sign).sub(sign));
        let mut out = [1.0f32; 8];
        cleared.to_slice(&mut out);
        assert_eq!(out, [0.0f32; 8]);
    }
}
