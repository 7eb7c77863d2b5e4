#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! altair-math: trait-based SIMD library of vectorized elementary functions
//!
//! This library provides zero-cost SIMD abstractions for writing numerical
//! kernels once and compiling them to the optimal instruction set per target.
//! On top of the abstraction sit approximations of the elementary functions
//! (exp/log families, circular and hyperbolic functions, erf/erfc, cbrt, pow),
//! interval-filtered quadratic/cubic solvers, the standard flux limiters of
//! high-resolution finite-volume schemes, Gauss-Legendre quadrature, and batch
//! operations over scalar slices.
//!
//! # Features
//!
//! - **Trait-based SIMD abstraction**: write backend-agnostic code against
//!   `SimdVector`; both f32 and f64 lanes are supported throughout
//! - **Compile-time backend selection**: scalar, SSE4.1, AVX2 or AVX-512 via
//!   cargo features
//! - **Branch-free numerics**: range reductions and special cases by mask
//!   select, IEEE 754 bit manipulation through integer lanes
//! - **No allocations**: stack-only, `no_std`
//!
//! # Quick Start
//!
//! ```rust
//! use altair_math::{DefaultF64Vector, SimdVector};
//! use altair_math::math::exp;
//!
//! fn exp_all(values: &mut [f64]) {
//!     let n = values.len();
//!     let mut i = 0;
//!     while i + DefaultF64Vector::LANES <= n {
//!         let x = DefaultF64Vector::from_slice(&values[i..]);
//!         exp(x).to_slice(&mut values[i..]);
//!         i += DefaultF64Vector::LANES;
//!     }
//!     // remainder lanes go through the same kernel one at a time
//!     while i < n {
//!         let mut one = [values[i]];
//!         let x = altair_math::ScalarVector::<f64>::from_slice(&one);
//!         exp(x).to_slice(&mut one);
//!         values[i] = one[0];
//!         i += 1;
//!     }
//! }
//!
//! let mut data = [0.0, 1.0, 2.0];
//! exp_all(&mut data);
//! assert!((data[1] - core::f64::consts::E).abs() < 1e-14);
//! ```

// Scalar backend fallback and test reference implementations
extern crate libm;

// Core trait definitions
pub mod traits;

// Backend implementations
pub mod backends;

// Functional-style vector operations
pub mod ops;

// Polynomial evaluation
pub mod poly;

// Elementary function kernels
pub mod math;

// Interval-filtered polynomial solvers
pub mod solve;

// Flux limiters
pub mod limiter;

// Gauss-Legendre quadrature
pub mod integral;

// Batch slice operations
pub mod array;

// Public re-exports for convenience
pub use traits::{constant, SimdElement, SimdInt, SimdMask, SimdVector};

pub use backends::scalar::{ScalarInt, ScalarMask, ScalarVector};

pub use backends::{DefaultF32Vector, DefaultF64Vector};

pub use limiter::FluxLimiter;

#[cfg(all(feature = "sse41", any(target_arch = "x86", target_arch = "x86_64")))]
pub use backends::sse41::{
    Sse41F32Mask, Sse41F32Vector, Sse41F64Mask, Sse41F64Vector, Sse41Int32, Sse41Int64,
};

#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub use backends::avx2::{
    Avx2F32Mask, Avx2F32Vector, Avx2F64Mask, Avx2F64Vector, Avx2Int32, Avx2Int64,
};

#[cfg(all(feature = "avx512", any(target_arch = "x86", target_arch = "x86_64")))]
pub use backends::avx512::{
    Avx512F32Mask, Avx512F32Vector, Avx512F64Mask, Avx512F64Vector, Avx512Int32, Avx512Int64,
};
