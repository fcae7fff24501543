#![forbid(unsafe_code)]

//! Lossless reinterpretation between floating-point values and their raw
//! bit patterns, plus sign/exponent/mantissa field access.
//!
//! Every bit pattern of a width is a valid encoding (NaNs and infinities
//! included), so all of these are total and mutually inverse.

use crate::quad::Quad;

/// Sign/biased-exponent/mantissa decomposition of one value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fields<B> {
    pub sign: bool,
    /// Biased exponent field, zero for zeros/subnormals, all-ones for
    /// infinities and NaNs.
    pub exp: u32,
    pub mant: B,
}

/// One IEEE 754 binary interchange width.
pub trait Ieee: Copy {
    type Bits: Copy + Eq;

    const BITS: u32;
    const EXP_BITS: u32;
    const MANT_BITS: u32;
    const EXP_BIAS: u32 = (1 << (Self::EXP_BITS - 1)) - 1;
    /// Canonical positive infinity.
    const INF_BITS: Self::Bits;
    /// Canonical quiet NaN (top mantissa bit set, rest zero).
    const QNAN_BITS: Self::Bits;

    fn to_bits(self) -> Self::Bits;
    fn from_bits(bits: Self::Bits) -> Self;
    fn fields(self) -> Fields<Self::Bits>;
    fn pack(fields: Fields<Self::Bits>) -> Self;
}

impl Ieee for f32 {
    type Bits = u32;

    const BITS: u32 = 32;
    const EXP_BITS: u32 = 8;
    const MANT_BITS: u32 = 23;
    const INF_BITS: u32 = 0x7f80_0000;
    const QNAN_BITS: u32 = 0x7fc0_0000;

    fn to_bits(self) -> u32 {
        self.to_bits()
    }

    fn from_bits(bits: u32) -> f32 {
        f32::from_bits(bits)
    }

    fn fields(self) -> Fields<u32> {
        let bits = self.to_bits();
        Fields {
            sign: bits >> 31 != 0,
            exp: (bits >> 23) & 0xff,
            mant: bits & 0x007f_ffff,
        }
    }

    fn pack(fields: Fields<u32>) -> f32 {
        f32::from_bits(((fields.sign as u32) << 31) | (fields.exp << 23) | fields.mant)
    }
}

impl Ieee for f64 {
    type Bits = u64;

    const BITS: u32 = 64;
    const EXP_BITS: u32 = 11;
    const MANT_BITS: u32 = 52;
    const INF_BITS: u64 = 0x7ff0_0000_0000_0000;
    const QNAN_BITS: u64 = 0x7ff8_0000_0000_0000;

    fn to_bits(self) -> u64 {
        self.to_bits()
    }

    fn from_bits(bits: u64) -> f64 {
        f64::from_bits(bits)
    }

    fn fields(self) -> Fields<u64> {
        let bits = self.to_bits();
        Fields {
            sign: bits >> 63 != 0,
            exp: ((bits >> 52) & 0x7ff) as u32,
            mant: bits & 0x000f_ffff_ffff_ffff,
        }
    }

    fn pack(fields: Fields<u64>) -> f64 {
        f64::from_bits(((fields.sign as u64) << 63) | ((fields.exp as u64) << 52) | fields.mant)
    }
}

impl Ieee for Quad {
    type Bits = u128;

    const BITS: u32 = 128;
    const EXP_BITS: u32 = 15;
    const MANT_BITS: u32 = 112;
    const INF_BITS: u128 = 0x7fff << 112;
    const QNAN_BITS: u128 = (0x7fff << 112) | (1 << 111);

    fn to_bits(self) -> u128 {
        Quad::to_bits(self)
    }

    fn from_bits(bits: u128) -> Quad {
        Quad::from_bits(bits)
    }

    fn fields(self) -> Fields<u128> {
        let bits = Quad::to_bits(self);
        Fields {
            sign: bits >> 127 != 0,
            exp: ((bits >> 112) & 0x7fff) as u32,
            mant: bits & ((1 << 112) - 1),
        }
    }

    fn pack(fields: Fields<u128>) -> Quad {
        Quad::from_bits(((fields.sign as u128) << 127) | ((fields.exp as u128) << 112) | fields.mant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_pack_inverse_f32() {
        for bits in [0u32, 0x8000_0000, 0x3f80_0000, 0x0000_0001, 0x7fc0_1234, f32::INF_BITS] {
            let x = f32::from_bits(bits);
            assert_eq!(f32::pack(x.fields()).to_bits(), bits);
        }
    }

    #[test]
    fn fields_pack_inverse_f64() {
        for bits in [0u64, 1 << 63, 0x3ff0_0000_0000_0000, 1, f64::QNAN_BITS | 0xdead] {
            let x = f64::from_bits(bits);
            assert_eq!(f64::pack(x.fields()).to_bits(), bits);
        }
    }

    #[test]
    fn fields_pack_inverse_quad() {
        for bits in [0u128, 1 << 127, 0x3fff << 112, 1, Quad::QNAN_BITS | 0xbeef] {
            let x = <Quad as Ieee>::from_bits(bits);
            assert_eq!(Quad::pack(Ieee::fields(x)).to_bits(), bits);
        }
    }

    #[test]
    fn biases_match_the_formats() {
        assert_eq!(<f32 as Ieee>::EXP_BIAS, 127);
        assert_eq!(<f64 as Ieee>::EXP_BIAS, 1023);
        assert_eq!(<Quad as Ieee>::EXP_BIAS, 16383);
    }

    #[test]
    fn one_decomposes_as_expected() {
        let f = 1.0f64.fields();
        assert!(!f.sign);
        assert_eq!(f.exp, <f64 as Ieee>::EXP_BIAS);
        assert_eq!(f.mant, 0);
    }
}
