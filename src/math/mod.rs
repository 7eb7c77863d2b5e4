//! Vectorized elementary functions
//!
//! Every function here is generic over [`SimdVector`](crate::traits::SimdVector)
//! and written once; the backends supply the widths. Range reduction is
//! branchless (mask selects), approximation cores are minimax polynomials or
//! rationals evaluated by Horner's scheme, and reconstruction goes through the
//! bit-level exponent kernels in [`frexp`].

mod atan;
mod cbrt;
mod erf;
pub(crate) mod exp;
mod frexp;
mod hyperbolic;
mod log;
mod pow;
mod trig;

pub use atan::{acos, asin, atan, atan2};
pub use cbrt::cbrt;
pub use erf::{erf, erfc};
pub use exp::{exp, exp10, exp2, expm1};
pub use frexp::{exp2n, frexp, ldexp};
pub use hyperbolic::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use log::{log, log10, log2};
pub use pow::{pow, pown};
pub use trig::{cos, sin, sincos, tan};
