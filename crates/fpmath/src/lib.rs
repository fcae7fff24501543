#![forbid(unsafe_code)]

//! Elementary exponential and logarithmic functions for IEEE-754 binary32,
//! binary64 and binary128, in pure Rust.
//!
//! Seven function families, each at three widths: [`exp`], [`exp2`],
//! [`expm1`], [`log`], [`log2`], [`log10`] and [`log1p`]. The `f`-suffixed
//! variants take `f32`, the unsuffixed ones `f64`, and the `q`-suffixed
//! ones operate on [`Quad`], a binary128 value backed by software
//! arithmetic. All follow the Sun fdlibm / FreeBSD msun algorithms:
//! bit-level argument reduction, short minimax kernels evaluated with
//! compensated hi/lo arithmetic, and sub-ulp accuracy across the full
//! range including subnormals.
//!
//! Special values behave as the C math library's do: `log` of a negative
//! number is NaN, `log(+-0)` is -infinity, `exp(-inf)` is `+0`, `expm1` of
//! a large negative argument is exactly `-1`, and NaN arguments propagate.
//! Results near the overflow and underflow thresholds round through the
//! ordinary scaling path, so boundary bit patterns match the reference
//! implementations exactly.

pub mod bits;
mod exp;
mod exp2;
mod expm1;
mod log;
mod log10;
mod log1p;
mod log2;
pub mod quad;
mod support;
mod tables;

pub use bits::{Fields, Ieee};
pub use exp::{exp, expf, expq};
pub use exp2::{exp2, exp2f, exp2q};
pub use expm1::{expm1, expm1f, expm1q};
pub use log::{log, logf, logq};
pub use log10::{log10, log10f, log10q};
pub use log1p::{log1p, log1pf, log1pq};
pub use log2::{log2, log2f, log2q};
pub use quad::Quad;
