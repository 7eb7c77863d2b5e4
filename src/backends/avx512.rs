//! AVX-512 backend implementation (x86-64)
//!
//! This backend provides 512-bit SIMD operations: 16 lanes of f32 or 8 lanes of f64,
//! using AVX-512 Foundation instructions (Intel Skylake-X 2017+, AMD Zen 4 2022+).
//! Comparison results live in the native __mmask16/__mmask8 mask registers.
//!
//! **Note**: This implementation assumes AVX-512F is available when the `avx512`
//! feature is enabled. Runtime CPU detection is not performed. Only Foundation
//! instructions are used; the f64 integer conversions go through the magic-constant
//! trick rather than the AVX-512DQ packed converts.

// This backend only compiles on x86/x86_64 targets
#![cfg(any(target_arch = "x86", target_arch = "x86_64"))]

use crate::traits::{SimdInt, SimdMask, SimdVector};

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;

const F64_CVT_MAGIC: f64 = 6_755_399_441_055_744.0;
const F64_CVT_MAGIC_BITS: u64 = 0x4338_0000_0000_0000;

// roundscale immediate: round toward negative infinity, suppress exceptions
const ROUND_DOWN: i32 = 0x09;

/// AVX-512 vector wrapper (16 lanes of f32)
///
/// Wraps the __m512 intrinsic type to provide the SimdVector trait implementation.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx512F32Vector(__m512);

/// AVX-512 mask wrapper for f32 lanes (native 16-bit mask register)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx512F32Mask(__mmask16);

/// AVX-512 integer vector wrapper (16 lanes of u32)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx512Int32(__m512i);

/// AVX-512 vector wrapper (8 lanes of f64)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx512F64Vector(__m512d);

/// AVX-512 mask wrapper for f64 lanes (native 8-bit mask register)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx512F64Mask(__mmask8);

/// AVX-512 integer vector wrapper (8 lanes of u64)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Avx512Int64(__m512i);

impl SimdMask for Avx512F32Mask {
    #[inline(always)]
    fn all(self) -> bool {
        self.0 == 0xffff
    }

    #[inline(always)]
    fn any(self) -> bool {
        self.0 != 0
    }

    #[inline(always)]
    fn none(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Avx512F32Mask(self.0 & rhs.0)
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Avx512F32Mask(self.0 | rhs.0)
    }

    #[inline(always)]
    fn not(self) -> Self {
        Avx512F32Mask(!self.0)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Avx512F32Mask(self.0 ^ rhs.0)
    }
}

impl SimdMask for Avx512F64Mask {
    #[inline(always)]
    fn all(self) -> bool {
        self.0 == 0xff
    }

    #[inline(always)]
    fn any(self) -> bool {
        self.0 != 0
    }

    #[inline(always)]
    fn none(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Avx512F64Mask(self.0 & rhs.0)
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Avx512F64Mask(self.0 | rhs.0)
    }

    #[inline(always)]
    fn not(self) -> Self {
        Avx512F64Mask(!self.0)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Avx512F64Mask(self.0 ^ rhs.0)
    }
}

impl SimdInt for Avx512Int32 {
    type Scalar = u32;
    type FloatVec = Avx512F32Vector;

    const LANES: usize = 16;

    #[inline(always)]
    fn splat(value: u32) -> Self {
        unsafe { Avx512Int32(_mm512_set1_epi32(value as i32)) }
    }

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        unsafe {
            // AVX-512 shift takes the count in a 128-bit vector register
            let shift_count = _mm_cvtsi32_si128(count as i32);
            Avx512Int32(_mm512_sll_epi32(self.0, shift_count))
        }
    }

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        unsafe {
            let shift_count = _mm_cvtsi32_si128(count as i32);
            Avx512Int32(_mm512_srl_epi32(self.0, shift_count))
        }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { Avx512Int32(_mm512_and_si512(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Avx512Int32(_mm512_or_si512(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Avx512Int32(_mm512_add_epi32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx512Int32(_mm512_sub_epi32(self.0, rhs.0)) }
    }
}

impl SimdInt for Avx512Int64 {
    type Scalar = u64;
    type FloatVec = Avx512F64Vector;

    const LANES: usize = 8;

    #[inline(always)]
    fn splat(value: u64) -> Self {
        unsafe { Avx512Int64(_mm512_set1_epi64(value as i64)) }
    }

    #[inline(always)]
    fn shl(self, count: u32) -> Self {
        unsafe {
            let shift_count = _mm_cvtsi32_si128(count as i32);
            Avx512Int64(_mm512_sll_epi64(self.0, shift_count))
        }
    }

    #[inline(always)]
    fn shr(self, count: u32) -> Self {
        unsafe {
            let shift_count = _mm_cvtsi32_si128(count as i32);
            Avx512Int64(_mm512_srl_epi64(self.0, shift_count))
        }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { Avx512Int64(_mm512_and_si512(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Avx512Int64(_mm512_or_si512(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Avx512Int64(_mm512_add_epi64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx512Int64(_mm512_sub_epi64(self.0, rhs.0)) }
    }
}

// Implement SimdVector for Avx512F32Vector
impl SimdVector for Avx512F32Vector {
    type Scalar = f32;
    type Mask = Avx512F32Mask;
    type IntBits = Avx512Int32;

    const LANES: usize = 16;

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        unsafe { Avx512F32Vector(_mm512_set1_ps(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(
            slice.len() >= Self::LANES,
            "Slice too short for AVX-512 load"
        );
        unsafe { Avx512F32Vector(_mm512_loadu_ps(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(
            slice.len() >= Self::LANES,
            "Slice too short for AVX-512 store"
        );
        unsafe { _mm512_storeu_ps(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Avx512F32Vector(_mm512_add_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx512F32Vector(_mm512_sub_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Avx512F32Vector(_mm512_mul_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Avx512F32Vector(_mm512_div_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe {
            let zero = _mm512_setzero_ps();
            Avx512F32Vector(_mm512_sub_ps(zero, self.0))
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe { Avx512F32Vector(_mm512_abs_ps(self.0)) }
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        unsafe { Avx512F32Vector(_mm512_fmadd_ps(self.0, b.0, c.0)) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { Avx512F32Vector(_mm512_sqrt_ps(self.0)) }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        unsafe { Avx512F32Vector(_mm512_roundscale_ps::<ROUND_DOWN>(self.0)) }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe { Avx512F32Vector(_mm512_min_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe { Avx512F32Vector(_mm512_max_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        unsafe { Avx512F32Mask(_mm512_cmp_ps_mask::<_CMP_LT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> Self::Mask {
        unsafe { Avx512F32Mask(_mm512_cmp_ps_mask::<_CMP_LE_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        unsafe { Avx512F32Mask(_mm512_cmp_ps_mask::<_CMP_GT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> Self::Mask {
        unsafe { Avx512F32Mask(_mm512_cmp_ps_mask::<_CMP_GE_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        unsafe { Avx512F32Mask(_mm512_cmp_ps_mask::<_CMP_EQ_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        unsafe { Avx512F32Vector(_mm512_mask_blend_ps(mask.0, false_val.0, true_val.0)) }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> Self::Scalar {
        unsafe { _mm512_reduce_add_ps(self.0) }
    }

    #[inline(always)]
    fn horizontal_max(self) -> Self::Scalar {
        unsafe { _mm512_reduce_max_ps(self.0) }
    }

    #[inline(always)]
    fn horizontal_min(self) -> Self::Scalar {
        unsafe { _mm512_reduce_min_ps(self.0) }
    }

    #[inline(always)]
    fn to_bits(self) -> Self::IntBits {
        unsafe { Avx512Int32(_mm512_castps_si512(self.0)) }
    }

    #[inline(always)]
    fn from_bits(bits: Self::IntBits) -> Self {
        unsafe { Avx512F32Vector(_mm512_castsi512_ps(bits.0)) }
    }

    #[inline(always)]
    fn to_int(self) -> Self::IntBits {
        unsafe { Avx512Int32(_mm512_cvtps_epi32(self.0)) }
    }

    #[inline(always)]
    fn from_int(bits: Self::IntBits) -> Self {
        unsafe { Avx512F32Vector(_mm512_cvtepi32_ps(bits.0)) }
    }
}

// Implement SimdVector for Avx512F64Vector
impl SimdVector for Avx512F64Vector {
    type Scalar = f64;
    type Mask = Avx512F64Mask;
    type IntBits = Avx512Int64;

    const LANES: usize = 8;

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        unsafe { Avx512F64Vector(_mm512_set1_pd(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(
            slice.len() >= Self::LANES,
            "Slice too short for AVX-512 load"
        );
        unsafe { Avx512F64Vector(_mm512_loadu_pd(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(
            slice.len() >= Self::LANES,
            "Slice too short for AVX-512 store"
        );
        unsafe { _mm512_storeu_pd(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Avx512F64Vector(_mm512_add_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx512F64Vector(_mm512_sub_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Avx512F64Vector(_mm512_mul_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Avx512F64Vector(_mm512_div_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe {
            let zero = _mm512_setzero_pd();
            Avx512F64Vector(_mm512_sub_pd(zero, self.0))
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe { Avx512F64Vector(_mm512_abs_pd(self.0)) }
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        unsafe { Avx512F64Vector(_mm512_fmadd_pd(self.0, b.0, c.0)) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { Avx512F64Vector(_mm512_sqrt_pd(self.0)) }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        unsafe { Avx512F64Vector(_mm512_roundscale_pd::<ROUND_DOWN>(self.0)) }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe { Avx512F64Vector(_mm512_min_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe { Avx512F64Vector(_mm512_max_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        unsafe { Avx512F64Mask(_mm512_cmp_pd_mask::<_CMP_LT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn le(self, rhs: Self) -> Self::Mask {
        unsafe { Avx512F64Mask(_mm512_cmp_pd_mask::<_CMP_LE_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        unsafe { Avx512F64Mask(_mm512_cmp_pd_mask::<_CMP_GT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> Self::Mask {
        unsafe { Avx512F64Mask(_mm512_cmp_pd_mask::<_CMP_GE_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        unsafe { Avx512F64Mask(_mm512_cmp_pd_mask::<_CMP_EQ_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        unsafe { Avx512F64Vector(_mm512_mask_blend_pd(mask.0, false_val.0, true_val.0)) }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> Self::Scalar {
        unsafe { _mm512_reduce_add_pd(self.0) }
    }

    #[inline(always)]
    fn horizontal_max(self) -> Self::Scalar {
        unsafe { _mm512_reduce_max_pd(self.0) }
    }

    #[inline(always)]
    fn horizontal_min(self) -> Self::Scalar {
        unsafe { _mm512_reduce_min_pd(self.0) }
    }

    #[inline(always)]
    fn to_bits(self) -> Self::IntBits {
        unsafe { Avx512Int64(_mm512_castpd_si512(self.0)) }
    }

    #[inline(always)]
    fn from_bits(bits: Self::IntBits) -> Self {
        unsafe { Avx512F64Vector(_mm512_castsi512_pd(bits.0)) }
    }

    #[inline(always)]
    fn to_int(self) -> Self::IntBits {
        unsafe {
            let magic = _mm512_set1_pd(F64_CVT_MAGIC);
            let shifted = _mm512_add_pd(self.0, magic);
            let bits = _mm512_castpd_si512(shifted);
            Avx512Int64(_mm512_sub_epi64(
                bits,
                _mm512_set1_epi64(F64_CVT_MAGIC_BITS as i64),
            ))
        }
    }

    #[inline(always)]
    fn from_int(bits: Self::IntBits) -> Self {
        unsafe {
            let shifted = _mm512_add_epi64(bits.0, _mm512_set1_epi64(F64_CVT_MAGIC_BITS as i64));
            let magic = _mm512_set1_pd(F64_CVT_MAGIC);
            Avx512F64Vector(_mm512_sub_pd(_mm512_castsi512_pd(shifted), magic))
        }
    }
}
