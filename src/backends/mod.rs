//! SIMD backend implementations
//!
//! This module contains platform-specific SIMD implementations selected at compile time
//! via cargo features. Only one backend is active per build; the scalar backend is
//! always compiled and is the default when no feature is enabled.

// Scalar backend (always available as fallback)
pub mod scalar;

// Platform-specific backends (feature-gated)
#[cfg(feature = "sse41")]
pub mod sse41;

#[cfg(feature = "avx2")]
pub mod avx2;

#[cfg(feature = "avx512")]
pub mod avx512;

// Compile-time checks to prevent conflicting backend selections
#[cfg(all(feature = "sse41", feature = "avx2"))]
compile_error!("Cannot enable both sse41 and avx2 features simultaneously. Choose one backend.");

#[cfg(all(feature = "sse41", feature = "avx512"))]
compile_error!("Cannot enable both sse41 and avx512 features simultaneously. Choose one backend.");

#[cfg(all(feature = "avx2", feature = "avx512"))]
compile_error!("Cannot enable both avx2 and avx512 features simultaneously. Choose one backend.");

/// Widest enabled f32 vector type (scalar fallback when no SIMD feature is on).
#[cfg(all(
    feature = "sse41",
    any(target_arch = "x86", target_arch = "x86_64")
))]
pub type DefaultF32Vector = sse41::Sse41F32Vector;

/// Widest enabled f64 vector type (scalar fallback when no SIMD feature is on).
#[cfg(all(
    feature = "sse41",
    any(target_arch = "x86", target_arch = "x86_64")
))]
pub type DefaultF64Vector = sse41::Sse41F64Vector;

/// Widest enabled f32 vector type (scalar fallback when no SIMD feature is on).
#[cfg(all(
    feature = "avx2",
    any(target_arch = "x86", target_arch = "x86_64")
))]
pub type DefaultF32Vector = avx2::Avx2F32Vector;

/// Widest enabled f64 vector type (scalar fallback when no SIMD feature is on).
#[cfg(all(
    feature = "avx2",
    any(target_arch = "x86", target_arch = "x86_64")
))]
pub type DefaultF64Vector = avx2::Avx2F64Vector;

/// Widest enabled f32 vector type (scalar fallback when no SIMD feature is on).
#[cfg(all(
    feature = "avx512",
    any(target_arch = "x86", target_arch = "x86_64")
))]
pub type DefaultF32Vector = avx512::Avx512F32Vector;

/// Widest enabled f64 vector type (scalar fallback when no SIMD feature is on).
#[cfg(all(
    feature = "avx512",
    any(target_arch = "x86", target_arch = "x86_64")
))]
pub type DefaultF64Vector = avx512::Avx512F64Vector;

/// Widest enabled f32 vector type (scalar fallback when no SIMD feature is on).
#[cfg(not(all(
    any(feature = "sse41", feature = "avx2", feature = "avx512"),
    any(target_arch = "x86", target_arch = "x86_64")
)))]
pub type DefaultF32Vector = scalar::ScalarVector<f32>;

/// Widest enabled f64 vector type (scalar fallback when no SIMD feature is on).
#[cfg(not(all(
    any(feature = "sse41", feature = "avx2", feature = "avx512"),
    any(target_arch = "x86", target_arch = "x86_64")
)))]
pub type DefaultF64Vector = scalar::ScalarVector<f64>;
