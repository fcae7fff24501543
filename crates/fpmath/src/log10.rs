#![forbid(unsafe_code)]

//! Base-10 logarithm.
//!
//! Same shape as `log2`: the shared kernel's hi/lo result is multiplied by
//! 1/ln10 in extra precision, and k*log10(2) is folded in as its own
//! hi/lo pair.

use crate::log::{Reduced, kernel32, kernel64, kernelq, reduce32, reduce64, reduceq};
use crate::quad::Quad;
use crate::tables;

pub fn log10f(x: f32) -> f32 {
    use tables::log10 as c;

    let (f, k) = match reduce32(x) {
        Reduced::Early(r) => return r,
        Reduced::Scaled { f, k } => (f, k),
    };
    let (s, hfsq, r) = kernel32(f);

    let mut hi = f - hfsq;
    hi = f32::from_bits(hi.to_bits() & 0xfffff000);
    let lo = f - hi - hfsq + s * (hfsq + r);
    let dk = k as f32;
    dk * c::LOG10_2_LO_F
        + (lo + hi) * c::IVLN10_LO_F
        + lo * c::IVLN10_HI_F
        + hi * c::IVLN10_HI_F
        + dk * c::LOG10_2_HI_F
}

pub fn log10(x: f64) -> f64 {
    use tables::log10 as c;

    let (f, k) = match reduce64(x) {
        Reduced::Early(r) => return r,
        Reduced::Scaled { f, k } => (f, k),
    };
    let (s, hfsq, r) = kernel64(f);

    // hi+lo = f - hfsq + s*(hfsq+R) ~ log(1+f), hi truncated as in log2.
    let mut hi = f - hfsq;
    hi = f64::from_bits(hi.to_bits() & (u64::MAX << 32));
    let lo = f - hi - hfsq + s * (hfsq + r);

    let dk = k as f64;
    let val_hi = hi * c::IVLN10_HI;
    let mut val_lo = dk * c::LOG10_2_LO + (lo + hi) * c::IVLN10_LO + lo * c::IVLN10_HI;

    // spadd(val_hi, val_lo, y)
    let y = dk * c::LOG10_2_HI;
    let w = y + val_hi;
    val_lo += (y - w) + val_hi;
    val_lo + w
}

pub fn log10q(x: Quad) -> Quad {
    use tables::logq as c;

    let (f, k) = match reduceq(x) {
        Reduced::Early(r) => return r,
        Reduced::Scaled { f, k } => (f, k),
    };
    let (s, hfsq, r) = kernelq(f);

    let mut hi = f - hfsq;
    hi = Quad::from_bits(hi.to_bits() & (u128::MAX << 64));
    let lo = f - hi - hfsq + s * (hfsq + r);

    let dk = Quad::from_f64(k as f64);
    let val_hi = hi * Quad::from_bits(c::IVLN10_HI);
    let mut val_lo = dk * Quad::from_bits(c::LOG10_2_LO)
        + (lo + hi) * Quad::from_bits(c::IVLN10_LO)
        + lo * Quad::from_bits(c::IVLN10_HI);

    let y = dk * Quad::from_bits(c::LOG10_2_HI);
    let w = y + val_hi;
    val_lo += (y - w) + val_hi;
    val_lo + w
}
