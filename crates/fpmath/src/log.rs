#![forbid(unsafe_code)]

//! Natural logarithm at the three widths, plus the range reduction and
//! series kernel shared by the base-2 and base-10 drivers.
//!
//! All of them follow the Sun scheme: rewrite x as 2^k * (1+f) with 1+f in
//! [sqrt(2)/2, sqrt(2)), set s = f/(2+f), and approximate
//! log(1+f) = 2s + s*R(s^2) with an odd series in s. The reduction works
//! directly on the bit pattern: adding `one - sqrt(2)/2` to the raw bits
//! shifts the exponent boundary so the biased exponent field reads off k.

use crate::quad::Quad;
use crate::tables;

/// Outcome of the log-family range reduction.
pub(crate) enum Reduced<F> {
    /// Special case; the driver returns this value as is.
    Early(F),
    /// x = 2^k * (1+f) with 1+f in [sqrt(2)/2, sqrt(2)).
    Scaled { f: F, k: i32 },
}

pub(crate) fn reduce32(x: f32) -> Reduced<f32> {
    use tables::logf as c;

    let mut x = x;
    let mut ix = x.to_bits();
    let mut k = 0i32;
    if ix < 0x00800000 || ix >> 31 != 0 {
        // x < 2**-126
        if ix << 1 == 0 {
            return Reduced::Early(-1.0 / (x * x)); // log(+-0) = -inf
        }
        if ix >> 31 != 0 {
            return Reduced::Early(f32::NAN); // log(-#) = NaN
        }
        // subnormal number, scale up x
        k -= 25;
        x *= f32::from_bits(0x4c000000); // 0x1p25
        ix = x.to_bits();
    } else if ix >= 0x7f800000 {
        return Reduced::Early(x);
    } else if ix == 0x3f800000 {
        return Reduced::Early(0.0);
    }

    // reduce x into [sqrt(2)/2, sqrt(2)]
    ix = ix.wrapping_add(0x3f800000 - c::SQRT2_OVER2_BITS);
    k += (ix >> 23) as i32 - 0x7f;
    ix = (ix & 0x007fffff) + c::SQRT2_OVER2_BITS;
    x = f32::from_bits(ix);
    Reduced::Scaled { f: x - 1.0, k }
}

/// Returns (s, hfsq, R) for the reduced argument f.
pub(crate) fn kernel32(f: f32) -> (f32, f32, f32) {
    use tables::logf as c;

    let s = f / (2.0 + f);
    let z = s * s;
    let w = z * z;
    let t1 = w * (c::LG2 + w * c::LG4);
    let t2 = z * (c::LG1 + w * c::LG3);
    let r = t2 + t1;
    let hfsq = 0.5 * f * f;
    (s, hfsq, r)
}

pub fn logf(x: f32) -> f32 {
    use tables::logf as c;

    let (f, k) = match reduce32(x) {
        Reduced::Early(r) => return r,
        Reduced::Scaled { f, k } => (f, k),
    };
    let (s, hfsq, r) = kernel32(f);
    let dk = k as f32;
    s * (hfsq + r) + dk * c::LN2_LO - hfsq + f + dk * c::LN2_HI
}

pub(crate) fn reduce64(x: f64) -> Reduced<f64> {
    use tables::log as c;

    let mut x = x;
    let mut ui = x.to_bits();
    let mut hx = (ui >> 32) as u32;
    let mut k = 0i32;
    if hx < 0x00100000 || hx >> 31 != 0 {
        if ui << 1 == 0 {
            return Reduced::Early(-1.0 / (x * x)); // log(+-0) = -inf
        }
        if hx >> 31 != 0 {
            return Reduced::Early(f64::NAN); // log(-#) = NaN
        }
        // subnormal number, scale x up
        k -= 54;
        x *= f64::from_bits(0x4350000000000000); // 0x1p54
        ui = x.to_bits();
        hx = (ui >> 32) as u32;
    } else if hx >= 0x7ff00000 {
        return Reduced::Early(x);
    } else if hx == 0x3ff00000 && ui << 32 == 0 {
        return Reduced::Early(0.0);
    }

    // reduce x into [sqrt(2)/2, sqrt(2)]
    hx = hx.wrapping_add(0x3ff00000 - c::SQRT2_OVER2_HI);
    k += (hx >> 20) as i32 - 0x3ff;
    hx = (hx & 0x000fffff) + c::SQRT2_OVER2_HI;
    ui = (hx as u64) << 32 | (ui & 0xffffffff);
    x = f64::from_bits(ui);
    Reduced::Scaled { f: x - 1.0, k }
}

/// Returns (s, hfsq, R) for the reduced argument f.
pub(crate) fn kernel64(f: f64) -> (f64, f64, f64) {
    use tables::log as c;

    let s = f / (2.0 + f);
    let z = s * s;
    let w = z * z;
    let t1 = w * (c::LG2 + w * (c::LG4 + w * c::LG6));
    let t2 = z * (c::LG1 + w * (c::LG3 + w * (c::LG5 + w * c::LG7)));
    let r = t2 + t1;
    let hfsq = 0.5 * f * f;
    (s, hfsq, r)
}

pub fn log(x: f64) -> f64 {
    use tables::log as c;

    let (f, k) = match reduce64(x) {
        Reduced::Early(r) => return r,
        Reduced::Scaled { f, k } => (f, k),
    };
    let (s, hfsq, r) = kernel64(f);
    let dk = k as f64;
    s * (hfsq + r) + dk * c::LN2_LO - hfsq + f + dk * c::LN2_HI
}

pub(crate) fn reduceq(x: Quad) -> Reduced<Quad> {
    use tables::logq as c;
    const MANT_MASK: u128 = (1 << 112) - 1;

    let mut x = x;
    let mut ix = x.to_bits();
    let mut k = 0i32;
    let exp = ((ix >> 112) & 0x7fff) as u32;
    if exp == 0 || ix >> 127 != 0 {
        if ix << 1 == 0 {
            return Reduced::Early(-Quad::one() / (x * x)); // log(+-0) = -inf
        }
        if ix >> 127 != 0 {
            return Reduced::Early(Quad::nan()); // log(-#) = NaN
        }
        // subnormal number, scale up x
        k -= 114;
        x = x.scalbn(114);
        ix = x.to_bits();
    } else if exp == 0x7fff {
        return Reduced::Early(x);
    } else if ix == Quad::one().to_bits() {
        return Reduced::Early(Quad::zero());
    }

    // reduce x into [sqrt(2)/2, sqrt(2)]
    ix = ix.wrapping_add((0x3fffu128 << 112) - c::SQRT2_OVER2_BITS);
    k += (ix >> 112) as i32 - 0x3fff;
    ix = (ix & MANT_MASK) + c::SQRT2_OVER2_BITS;
    x = Quad::from_bits(ix);
    Reduced::Scaled {
        f: x - Quad::one(),
        k,
    }
}

/// Returns (s, hfsq, R) for the reduced argument f.
pub(crate) fn kernelq(f: Quad) -> (Quad, Quad, Quad) {
    use tables::logq as c;

    let two = Quad::from_f64(2.0);
    let half = Quad::from_f64(0.5);
    let s = f / (two + f);
    let z = s * s;
    let mut r = Quad::zero();
    for &lg in c::LGQ.iter().rev() {
        r = r * z + Quad::from_bits(lg);
    }
    r = z * r;
    let hfsq = half * f * f;
    (s, hfsq, r)
}

pub fn logq(x: Quad) -> Quad {
    use tables::logq as c;

    let (f, k) = match reduceq(x) {
        Reduced::Early(r) => return r,
        Reduced::Scaled { f, k } => (f, k),
    };
    let (s, hfsq, r) = kernelq(f);
    let dk = Quad::from_f64(k as f64);
    let ln2_hi = Quad::from_bits(c::LN2_HI);
    let ln2_lo = Quad::from_bits(c::LN2_LO);
    s * (hfsq + r) + dk * ln2_lo - hfsq + f + dk * ln2_hi
}
