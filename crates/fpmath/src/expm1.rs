#![forbid(unsafe_code)]

//! exp(x)-1, accurate even where exp(x) is close to 1.
//!
//! The binary32 and binary64 drivers follow the Sun scheme: reduce by a
//! multiple of ln2, approximate (exp(r)-1)/r with a rational function, then
//! reconstruct 2^k (1 + r - e) - 1 along one of several cancellation-free
//! ladders picked by k. The binary128 driver leans on the shared `exp`
//! kernel, whose hi/lo split keeps the subtraction of 1 exact.

use crate::exp::k_expq;
use crate::quad::Quad;
use crate::support::force_eval;
use crate::tables;

pub fn expm1f(x: f32) -> f32 {
    use tables::expm1f as c;

    let mut x = x;
    let ui = x.to_bits();
    let hx = ui & 0x7fffffff;
    let sign = ui >> 31 != 0;

    // filter out huge and non-finite argument
    if hx >= 0x4195b844 {
        // |x| >= 27*ln2
        if hx > 0x7f800000 {
            // NaN
            return x;
        }
        if sign {
            return -1.0;
        }
        if x > c::O_THRESHOLD {
            x *= f32::from_bits(0x7f000000); // 0x1p127
            return x;
        }
    }

    // argument reduction
    let k: i32;
    let mut cc = 0.0f32;
    if hx > 0x3eb17218 {
        // |x| > 0.5 ln2
        let hi: f32;
        let lo: f32;
        if hx < 0x3f851592 {
            // |x| < 1.5 ln2
            if !sign {
                hi = x - c::LN2_HI;
                lo = c::LN2_LO;
                k = 1;
            } else {
                hi = x + c::LN2_HI;
                lo = -c::LN2_LO;
                k = -1;
            }
        } else {
            k = (c::INV_LN2 * x + if sign { -0.5 } else { 0.5 }) as i32;
            let t = k as f32;
            hi = x - t * c::LN2_HI; // t*ln2_hi is exact here
            lo = t * c::LN2_LO;
        }
        x = hi - lo;
        cc = (hi - x) - lo;
    } else if hx < 0x33000000 {
        // |x| < 2**-25, return x
        if hx < 0x00800000 {
            force_eval!(x * x);
        }
        return x;
    } else {
        k = 0;
    }

    // x is now in primary range
    let hfx = 0.5 * x;
    let hxs = x * hfx;
    let r1 = 1.0 + hxs * (c::Q1 + hxs * c::Q2);
    let t = 3.0 - r1 * hfx;
    let mut e = hxs * ((r1 - t) / (6.0 - x * t));
    if k == 0 {
        // cc is 0
        return x - (x * e - hxs);
    }
    e = x * (e - cc) - cc;
    e -= hxs;
    // exp(x) ~ 2^k (x_reduced - e + 1)
    if k == -1 {
        return 0.5 * (x - e) - 0.5;
    }
    if k == 1 {
        if x < -0.25 {
            return -2.0 * (e - (x + 0.5));
        }
        return 1.0 + 2.0 * (x - e);
    }
    let twopk = f32::from_bits(((0x7f + k) as u32) << 23); // 2^k
    if !(0..=56).contains(&k) {
        // suffices to return exp(x)-1
        let mut y = x - e + 1.0;
        if k == 128 {
            y = y * 2.0 * f32::from_bits(0x7f000000);
        } else {
            y *= twopk;
        }
        return y - 1.0;
    }
    let uf = f32::from_bits(((0x7f - k) as u32) << 23); // 2^-k
    if k < 23 {
        (x - e + (1.0 - uf)) * twopk
    } else {
        (x - (e + uf) + 1.0) * twopk
    }
}

pub fn expm1(x: f64) -> f64 {
    use tables::expm1 as c;

    let mut x = x;
    let ui = x.to_bits();
    let hx = ((ui >> 32) & 0x7fffffff) as u32;
    let sign = ui >> 63 != 0;

    // filter out huge and non-finite argument
    if hx >= 0x4043687a {
        // |x| >= 56*ln2
        if x.is_nan() {
            return x;
        }
        if sign {
            return -1.0;
        }
        if x > c::O_THRESHOLD {
            x *= f64::from_bits(0x7fe0000000000000); // 0x1p1023
            return x;
        }
    }

    // argument reduction
    let k: i32;
    let mut cc = 0.0f64;
    if hx > 0x3fd62e42 {
        // |x| > 0.5 ln2
        let hi: f64;
        let lo: f64;
        if hx < 0x3ff0a2b2 {
            // |x| < 1.5 ln2
            if !sign {
                hi = x - c::LN2_HI;
                lo = c::LN2_LO;
                k = 1;
            } else {
                hi = x + c::LN2_HI;
                lo = -c::LN2_LO;
                k = -1;
            }
        } else {
            k = (c::INV_LN2 * x + if sign { -0.5 } else { 0.5 }) as i32;
            let t = k as f64;
            hi = x - t * c::LN2_HI; // t*ln2_hi is exact here
            lo = t * c::LN2_LO;
        }
        x = hi - lo;
        cc = (hi - x) - lo;
    } else if hx < 0x3c900000 {
        // |x| < 2**-54, return x
        if hx < 0x00100000 {
            force_eval!(x as f32);
        }
        return x;
    } else {
        k = 0;
    }

    // x is now in primary range
    let hfx = 0.5 * x;
    let hxs = x * hfx;
    let r1 = 1.0 + hxs * (c::Q1 + hxs * (c::Q2 + hxs * (c::Q3 + hxs * (c::Q4 + hxs * c::Q5))));
    let t = 3.0 - r1 * hfx;
    let mut e = hxs * ((r1 - t) / (6.0 - x * t));
    if k == 0 {
        // cc is 0
        return x - (x * e - hxs);
    }
    e = x * (e - cc) - cc;
    e -= hxs;
    // exp(x) ~ 2^k (x_reduced - e + 1)
    if k == -1 {
        return 0.5 * (x - e) - 0.5;
    }
    if k == 1 {
        if x < -0.25 {
            return -2.0 * (e - (x + 0.5));
        }
        return 1.0 + 2.0 * (x - e);
    }
    let twopk = f64::from_bits(((0x3ff + k) as u64) << 52); // 2^k
    if !(0..=56).contains(&k) {
        // suffices to return exp(x)-1
        let mut y = x - e + 1.0;
        if k == 1024 {
            y = y * 2.0 * f64::from_bits(0x7fe0000000000000);
        } else {
            y *= twopk;
        }
        return y - 1.0;
    }
    let uf = f64::from_bits(((0x3ff - k) as u64) << 52); // 2^-k
    if k < 20 {
        (x - e + (1.0 - uf)) * twopk
    } else {
        (x - (e + uf) + 1.0) * twopk
    }
}

pub fn expm1q(x: Quad) -> Quad {
    const BIAS: u32 = 16383;

    let hx = x.to_bits() >> 112;
    let ix = (hx & 0x7fff) as u32;
    if ix >= BIAS + 7 {
        // |x| >= 128 or non-finite
        if ix == 0x7fff {
            if x.is_nan() {
                return x + x;
            }
            if hx >> 15 != 0 {
                return -Quad::one();
            }
            return x; // +inf
        }
        if hx >> 15 != 0 {
            // exp(x) is below half an ulp of -1
            return -Quad::one();
        }
        if x > Quad::from_bits(tables::expq::O_THRESHOLD) {
            let huge = Quad::from_bits((BIAS as u128 + 10000) << 112);
            return huge * huge;
        }
    } else if ix < BIAS - 114 {
        // |x| < 0x1p-114
        return x;
    }

    let (hi, lo, k) = k_expq(x);
    if k == 0 {
        // hi - 1 is exact; for |x| below ln2/256 it is 0
        return (hi - Quad::one()) + lo;
    }
    let twopk = Quad::from_bits(((BIAS as i32 + k) as u128) << 112);
    if k >= 114 {
        // the -1 is below the rounding of the sum
        return (hi + lo) * twopk - Quad::one();
    }
    (hi * twopk - Quad::one()) + lo * twopk
}
