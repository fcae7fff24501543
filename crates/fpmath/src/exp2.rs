#![forbid(unsafe_code)]

//! Base-2 exponential at the three widths.
//!
//! The binary32 driver is Tang's equally-spaced table method with a small
//! degree-4 polynomial evaluated in double. The binary64 driver rounds x
//! to the nearest integer k and hands `(x-k)*ln2` to the `exp` kernel as a
//! hi/lo pair. The binary128 driver reduces to 1/128-wide intervals and
//! reuses the `exp` table kernel on `r*ln2`.

use crate::exp::{exp_poly_q, scale_q};
use crate::quad::Quad;
use crate::support::{force_eval, scalbn};
use crate::tables;

pub fn exp2f(x: f32) -> f32 {
    use tables::exp2f as c;

    let mut x = x;
    let ui = x.to_bits();
    let ix = ui & 0x7fffffff;

    // Filter out exceptional cases.
    if ix > 0x42fc0000 {
        // |x| > 126
        if ix > 0x7f800000 {
            // NaN
            return x;
        }
        if ui >= 0x43000000 && ui < 0x80000000 {
            // x >= 128: overflow
            x *= f32::from_bits(0x7f000000); // 0x1p127
            return x;
        }
        if ui >= 0x80000000 {
            // x < -126
            if ui >= 0xc3160000 || (ui & 0x0000ffff) != 0 {
                force_eval!(-f32::from_bits(1) / x);
            }
            if ui >= 0xc3160000 {
                // x <= -150
                return 0.0;
            }
        }
    } else if ix <= 0x33000000 {
        // |x| <= 0x1p-25
        return 1.0 + x;
    }

    // Reduce x, computing z, i0, and k.
    let uf = x + c::REDUX;
    let mut i0 = uf.to_bits();
    i0 += c::TBL_SIZE / 2;
    let k = i0 / c::TBL_SIZE;
    let twopk = f64::from_bits(((0x3ff + k) as u64) << 52);
    i0 &= c::TBL_SIZE - 1;
    let uf = uf - c::REDUX;
    let z = (x - uf) as f64;

    // Compute r = exp2(y) = exp2ft[i0] * p(z).
    let r = f64::from_bits(c::EXP2FT[i0 as usize]);
    let t = r * z;
    let r = r + t * (c::P1 as f64 + z * c::P2 as f64)
        + t * (z * z) * (c::P3 as f64 + z * c::P4 as f64);

    // Scale by 2**k.
    (r * twopk) as f32
}

pub fn exp2(x: f64) -> f64 {
    use tables::exp as xc;
    use tables::exp2 as c;

    let mut x = x;
    let ui = x.to_bits();
    let ix = ((ui >> 32) & 0x7fffffff) as u32;

    // Filter out exceptional cases.
    if ix >= 0x408ff000 {
        // |x| >= 1022 or NaN
        if ix >= 0x40900000 && ui >> 63 == 0 {
            // x >= 1024 or positive NaN: overflow
            x *= f64::from_bits(0x7fe0000000000000); // 0x1p1023
            return x;
        }
        if ix >= 0x7ff00000 {
            // -inf or negative NaN
            return -1.0 / x;
        }
        if ui >> 63 != 0 {
            // x <= -1022: underflow
            let redux = c::REDUX;
            if x <= -1075.0 || x - redux + redux != x {
                force_eval!((-f32::from_bits(1) as f64 / x) as f32);
            }
            if x <= -1075.0 {
                return 0.0;
            }
        }
    } else if ix < 0x3c900000 {
        // |x| < 0x1p-54
        return 1.0 + x;
    }

    // Round x to the nearest integer k; |y| <= 1/2 and y is exact.
    let t = x + c::REDUX;
    let k = t.to_bits() as u32 as i32;
    let t = t - c::REDUX;
    let y = x - t;

    // 2^x = 2^k * exp(y*ln2), with y*ln2 carried as a hi/lo pair so the
    // reconstruction can absorb the split error.
    let hi = y * xc::LN2_HI;
    let lo = -y * xc::LN2_LO;
    let xr = hi - lo;

    let xx = xr * xr;
    let cc = xr - xx * (xc::P1 + xx * (xc::P2 + xx * (xc::P3 + xx * (xc::P4 + xx * xc::P5))));
    let y = 1.0 + (xr * cc / (2.0 - cc) - lo + hi);
    if k == 0 { y } else { scalbn(y, k) }
}

pub fn exp2q(x: Quad) -> Quad {
    use tables::expq as xc;
    const BIAS: u32 = 16383;

    // Filter out exceptional cases.
    let hx = x.to_bits() >> 112;
    let ix = (hx & 0x7fff) as u32;
    if ix >= BIAS + 14 {
        // |x| >= 16384 or x is NaN
        if ix == 0x7fff {
            if hx >> 15 != 0 && x.is_infinite() {
                return Quad::zero();
            }
            return x + x; // +inf or NaN
        }
        if hx >> 15 == 0 {
            let huge = Quad::from_bits((BIAS as u128 + 10000) << 112);
            return huge * huge;
        }
        if x <= Quad::from_f64(-16495.0) {
            let tiny = Quad::from_bits((BIAS as u128 - 10000) << 112);
            return tiny * tiny;
        }
    } else if ix < BIAS - 114 {
        // |x| < 0x1p-114: 1 with inexact iff x != 0
        return Quad::one();
    }

    // Reduce: x = n/128 + r with n integral and |r| <= 1/256, r exact.
    let n_q = (x * Quad::from_f64(xc::INTERVALS as f64)).round_to_nearest();
    let n = n_q.to_i32();
    let k = n >> xc::LOG2_INTERVALS;
    let i = (n & (xc::INTERVALS - 1)) as usize;
    let r = x - n_q.scalbn(-xc::LOG2_INTERVALS);

    // 2^r = exp(r*ln2); the single rounding in z is below the kernel's
    // own error.
    let z = r * Quad::from_bits(tables::exp2::LN2_Q);
    let (hi, lo) = exp_poly_q(z, 0.0, i);
    scale_q(hi, lo, k)
}
