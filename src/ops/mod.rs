//! Functional-style SIMD operations
//!
//! Lane-wise arithmetic primitives and horizontal reductions, re-exported flat
//! so call sites read as `ops::hypot(a, b)`.

pub mod arithmetic;
pub mod horizontal;

pub use arithmetic::{
    abs, add, copysign, dbl, div, extrapolate, hypot, interpolate, modmin, modulo, mul, neg,
    reciprocal, sign, sqr, sub, v2_length, v3_length,
};
pub use horizontal::{horizontal_max, horizontal_max_min, horizontal_min, horizontal_sum};
