#![forbid(unsafe_code)]

//! Binary128 value type.
//!
//! Rust has no stable native 128-bit float, so the 128-bit drivers run on
//! `rustc_apfloat`'s software IEEE implementation. [`Quad`] wraps
//! `rustc_apfloat::ieee::Quad` to give it plain value semantics: the
//! softfloat's arithmetic returns `StatusAnd<Self>` so callers can observe
//! the status flags, but every call site here wants round-to-nearest-even
//! and the value alone.

use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};
use rustc_apfloat::ieee;
use rustc_apfloat::{Float, FloatConvert};

/// An IEEE binary128 value with the usual operator surface.
///
/// All arithmetic rounds to nearest, ties to even, matching the rounding
/// the reference library assumes. Comparison follows IEEE semantics
/// (`NaN` unordered, `-0 == +0`).
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Quad(ieee::Quad);

impl Quad {
    pub fn from_bits(bits: u128) -> Self {
        Quad(ieee::Quad::from_bits(bits))
    }

    pub fn to_bits(self) -> u128 {
        self.0.to_bits()
    }

    pub fn zero() -> Self {
        Quad(ieee::Quad::ZERO)
    }

    pub fn one() -> Self {
        Self::from_bits(0x3fff_0000_0000_0000_0000_0000_0000_0000)
    }

    pub fn infinity() -> Self {
        Quad(ieee::Quad::INFINITY)
    }

    pub fn nan() -> Self {
        Quad(ieee::Quad::qnan(None))
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    pub fn is_infinite(self) -> bool {
        self.0.is_infinite()
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_sign_negative(self) -> bool {
        self.0.is_negative()
    }

    /// Exact widening from binary64.
    pub fn from_f64(x: f64) -> Self {
        let d = ieee::Double::from_bits(x.to_bits() as u128);
        let mut loses_info = false;
        Quad(d.convert(&mut loses_info).value)
    }

    /// Narrowing to binary64, round to nearest even.
    pub fn to_f64(self) -> f64 {
        let mut loses_info = false;
        let d: ieee::Double = self.0.convert(&mut loses_info).value;
        f64::from_bits(d.to_bits() as u64)
    }

    /// `self * 2^n` with IEEE over/underflow at the range ends.
    pub fn scalbn(self, n: i32) -> Self {
        Quad(self.0.scalbn(n))
    }

    /// Rounds to the nearest integral value, ties to even.
    pub fn round_to_nearest(self) -> Self {
        Quad(
            self.0
                .round_to_integral(rustc_apfloat::Round::NearestTiesToEven)
                .value,
        )
    }

    /// The value as an `i32`. Exact only when `self` is already integral
    /// and in range; drivers call this after [`Self::round_to_nearest`].
    pub fn to_i32(self) -> i32 {
        self.0.to_i128(32).value as i32
    }
}

impl Add for Quad {
    type Output = Quad;
    fn add(self, rhs: Quad) -> Quad {
        Quad((self.0 + rhs.0).value)
    }
}

impl AddAssign for Quad {
    fn add_assign(&mut self, rhs: Quad) {
        *self = *self + rhs;
    }
}

impl Sub for Quad {
    type Output = Quad;
    fn sub(self, rhs: Quad) -> Quad {
        Quad((self.0 - rhs.0).value)
    }
}

impl Mul for Quad {
    type Output = Quad;
    fn mul(self, rhs: Quad) -> Quad {
        Quad((self.0 * rhs.0).value)
    }
}

impl Div for Quad {
    type Output = Quad;
    fn div(self, rhs: Quad) -> Quad {
        Quad((self.0 / rhs.0).value)
    }
}

impl Neg for Quad {
    type Output = Quad;
    fn neg(self) -> Quad {
        Quad(-self.0)
    }
}
