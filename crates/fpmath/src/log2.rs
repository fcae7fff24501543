#![forbid(unsafe_code)]

//! Base-2 logarithm.
//!
//! Same reduction and kernel as `log`, but the reconstruction divides by
//! ln2 in extra precision: f - hfsq is split with Dekker's trick, then
//! the integer part k is added through a two-sum so that arguments near
//! sqrt(2) and 1/sqrt(2) do not cancel.

use crate::log::{Reduced, kernel32, kernel64, kernelq, reduce32, reduce64, reduceq};
use crate::quad::Quad;
use crate::tables;

pub fn log2f(x: f32) -> f32 {
    use tables::log2 as c;

    let (f, k) = match reduce32(x) {
        Reduced::Early(r) => return r,
        Reduced::Scaled { f, k } => (f, k),
    };
    let (s, hfsq, r) = kernel32(f);

    let mut hi = f - hfsq;
    hi = f32::from_bits(hi.to_bits() & 0xfffff000);
    let lo = f - hi - hfsq + s * (hfsq + r);
    (lo + hi) * c::IVLN2_LO_F + lo * c::IVLN2_HI_F + hi * c::IVLN2_HI_F + k as f32
}

pub fn log2(x: f64) -> f64 {
    use tables::log2 as c;

    let (f, k) = match reduce64(x) {
        Reduced::Early(r) => return r,
        Reduced::Scaled { f, k } => (f, k),
    };
    let (s, hfsq, r) = kernel64(f);

    // hi+lo = f - hfsq + s*(hfsq+R) ~ log(1+f), with hi truncated so
    // hi*ivln2hi is exact.
    let mut hi = f - hfsq;
    hi = f64::from_bits(hi.to_bits() & (u64::MAX << 32));
    let lo = f - hi - hfsq + s * (hfsq + r);

    let val_hi = hi * c::IVLN2_HI;
    let mut val_lo = (lo + hi) * c::IVLN2_LO + lo * c::IVLN2_HI;

    // spadd(val_hi, val_lo, y)
    let y = k as f64;
    let w = y + val_hi;
    val_lo += (y - w) + val_hi;
    val_lo + w
}

pub fn log2q(x: Quad) -> Quad {
    use tables::logq as c;

    let (f, k) = match reduceq(x) {
        Reduced::Early(r) => return r,
        Reduced::Scaled { f, k } => (f, k),
    };
    let (s, hfsq, r) = kernelq(f);

    let mut hi = f - hfsq;
    hi = Quad::from_bits(hi.to_bits() & (u128::MAX << 64));
    let lo = f - hi - hfsq + s * (hfsq + r);

    let val_hi = hi * Quad::from_bits(c::IVLN2_HI);
    let mut val_lo = (lo + hi) * Quad::from_bits(c::IVLN2_LO) + lo * Quad::from_bits(c::IVLN2_HI);

    let y = Quad::from_f64(k as f64);
    let w = y + val_hi;
    val_lo += (y - w) + val_hi;
    val_lo + w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::Ieee;

    #[test]
    fn log2f_specials_and_powers() {
        assert_eq!(log2f(1.0).to_bits(), 0);
        assert_eq!(log2f(2.0), 1.0);
        assert_eq!(log2f(0.25), -2.0);
        assert_eq!(log2f(f32::from_bits(1)), -149.0);
        assert_eq!(log2f(0.0), f32::NEG_INFINITY);
        assert!(log2f(-1.0).is_nan());
        assert_eq!(log2f(f32::INFINITY), f32::INFINITY);
        assert!(log2f(f32::NAN).is_nan());
    }

    #[test]
    fn log2f_known_values() {
        // Correctly rounded references; the kernel is good to `<1` ulp.
        let cases: [(u32, u32); 5] = [
            (0x408b0c34, 0x4007a4d6),
            (0x411445de, 0x404d933b),
            (0x3f2977e8, 0xbf185a49),
            (0x3f0fcf7d, 0xbf54fc4d),
            (0x3f462ed8, 0xbebd164b),
        ];
        for (input, want) in cases {
            let got = log2f(f32::from_bits(input)).to_bits();
            assert!(got.abs_diff(want) <= 1, "log2f({input:#x}) = {got:#x}, want {want:#x}");
        }
    }

    #[test]
    fn log2_specials_and_powers() {
        assert_eq!(log2(1.0).to_bits(), 0);
        assert_eq!(log2(2.0), 1.0);
        assert_eq!(log2(0.5), -1.0);
        assert_eq!(log2(1024.0), 10.0);
        assert_eq!(log2(f64::from_bits(1)), -1074.0);
        assert_eq!(log2(0.0), f64::NEG_INFINITY);
        assert!(log2(-2.0).is_nan());
        assert_eq!(log2(f64::INFINITY), f64::INFINITY);
        assert!(log2(f64::NAN).is_nan());
    }

    #[test]
    fn log2_known_values() {
        let cases: [(u64, u64); 5] = [
            (0x401161868e18bc67, 0x4000f49ac3838580),
            (0x402288bbb0d6a1e6, 0x4009b26760c2a57e),
            (0x3fe52efd0cd80497, 0xbfe30b490ef684c7),
            (0x3fe1f9ef934745cb, 0xbfea9f89b5f5acb8),
            (0x3fe8c5db097f7442, 0xbfd7a2c947173f06),
        ];
        for (input, want) in cases {
            let got = log2(f64::from_bits(input)).to_bits();
            assert_eq!(got, want, "log2({input:#x})");
        }
    }

    #[test]
    fn log2q_exact_powers() {
        assert!(log2q(Quad::one()).is_zero());
        let eight = Quad::from_f64(8.0);
        assert_eq!(log2q(eight).to_bits(), Quad::from_f64(3.0).to_bits());
        let sixteenth = Quad::from_f64(0.0625);
        assert_eq!(log2q(sixteenth).to_bits(), Quad::from_f64(-4.0).to_bits());
        // smallest subnormal
        assert_eq!(
            log2q(Quad::from_bits(1)).to_bits(),
            Quad::from_f64(-16494.0).to_bits()
        );
    }

    #[test]
    fn log2q_specials() {
        assert_eq!(log2q(Quad::zero()).to_bits(), (1u128 << 127) | Quad::INF_BITS);
        assert!(log2q(-Quad::one()).is_nan());
        assert_eq!(log2q(Quad::infinity()).to_bits(), Quad::INF_BITS);
        assert!(log2q(Quad::nan()).is_nan());
    }

    #[test]
    fn log2q_known_values() {
        // log2(3), correctly rounded.
        let got = log2q(Quad::from_bits(0x40008000000000000000000000000000)).to_bits();
        let want = 0x3fff95c01a39fbd6879fa00b120a068cu128;
        assert!(got.abs_diff(want) <= 1, "{got:#x} vs {want:#x}");
    }
}
