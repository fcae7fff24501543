#![forbid(unsafe_code)]

//! Natural exponential at the three widths.
//!
//! The binary32 and binary64 drivers are the Sun fdlibm scheme: round
//! `x/ln2` to an integer `k`, subtract `k*ln2` as a hi/lo pair, run a short
//! rational kernel on the remainder and rescale by `2^k`. The binary128
//! driver is the FreeBSD ld128 table method; its kernel is shared with
//! `expm1` and (indirectly) `exp2`.

use crate::quad::Quad;
use crate::support::{force_eval, scalbn, scalbnf};
use crate::tables;

pub fn expf(x: f32) -> f32 {
    use tables::expf as c;

    let half = [0.5f32, -0.5];
    let mut x = x;
    let mut hx = x.to_bits();
    let sign = (hx >> 31) as usize;
    hx &= 0x7fffffff;

    // special cases
    if hx >= 0x42aeac50 {
        // |x| >= 87.33655 or NaN
        if hx > 0x7f800000 {
            return x;
        }
        if hx >= 0x42b17218 && sign == 0 {
            // x >= 88.722839: overflow
            x *= f32::from_bits(0x7f000000); // 0x1p127
            return x;
        }
        if sign == 1 {
            // underflow
            force_eval!(-f32::from_bits(1) / x);
            if hx >= 0x42cff1b5 {
                // x <= -103.972084
                return 0.0;
            }
        }
    }

    // argument reduction
    let k: i32;
    let hi: f32;
    let lo: f32;
    if hx > 0x3eb17218 {
        // |x| > 0.5 ln2
        if hx > 0x3f851592 {
            // |x| > 1.5 ln2
            k = (c::INV_LN2 * x + half[sign]) as i32;
        } else {
            k = 1 - sign as i32 - sign as i32;
        }
        hi = x - k as f32 * c::LN2_HI; // k*ln2hi is exact here
        lo = k as f32 * c::LN2_LO;
        x = hi - lo;
    } else if hx > 0x39000000 {
        // |x| > 2**-14
        k = 0;
        hi = x;
        lo = 0.0;
    } else {
        // raise inexact
        force_eval!(f32::from_bits(0x7f000000) + x);
        return 1.0 + x;
    }

    // x is now in primary range
    let xx = x * x;
    let cc = x - xx * (c::P1 + xx * c::P2);
    let y = 1.0 + (x * cc / (2.0 - cc) - lo + hi);
    if k == 0 { y } else { scalbnf(y, k) }
}

pub fn exp(x: f64) -> f64 {
    use tables::exp as c;

    let half = [0.5f64, -0.5];
    let mut x = x;
    let hx = ((x.to_bits() >> 32) & 0x7fffffff) as u32;
    let sign = (x.to_bits() >> 63) as usize;

    // special cases
    if hx >= 0x4086232b {
        // |x| >= 708.39 or NaN
        if x.is_nan() {
            return x;
        }
        if x > c::O_THRESHOLD {
            // overflow if x != inf
            x *= f64::from_bits(0x7fe0000000000000); // 0x1p1023
            return x;
        }
        if x < c::U_THRESHOLD {
            // underflow if x != -inf
            force_eval!((-f32::from_bits(1) as f64 / x) as f32);
            if x < c::UNDERFLOW_SURE_ZERO {
                return 0.0;
            }
        }
    }

    // argument reduction
    let k: i32;
    let hi: f64;
    let lo: f64;
    if hx > 0x3fd62e42 {
        // |x| > 0.5 ln2
        if hx >= 0x3ff0a2b2 {
            // |x| >= 1.5 ln2
            k = (c::INV_LN2 * x + half[sign]) as i32;
        } else {
            k = 1 - sign as i32 - sign as i32;
        }
        hi = x - k as f64 * c::LN2_HI; // k*ln2hi is exact here
        lo = k as f64 * c::LN2_LO;
        x = hi - lo;
    } else if hx > 0x3e300000 {
        // |x| > 2**-28
        k = 0;
        hi = x;
        lo = 0.0;
    } else {
        // inexact if x != 0
        force_eval!(f64::from_bits(0x7fe0000000000000) + x);
        return 1.0 + x;
    }

    // x is now in primary range
    let xx = x * x;
    let cc = x - xx * (c::P1 + xx * (c::P2 + xx * (c::P3 + xx * (c::P4 + xx * c::P5))));
    let y = 1.0 + (x * cc / (2.0 - cc) - lo + hi);
    if k == 0 { y } else { scalbn(y, k) }
}

/// Round to nearest integer, ties to even, for |x| < 2**51.
pub(crate) fn rnint(x: f64) -> f64 {
    let toint = f64::from_bits(0x4338000000000000); // 0x1.8p52
    core::hint::black_box(x + toint) - toint
}

/// Evaluate `tbl[n2] * exp(r1 + r2)` as a hi/lo pair, for a reduced
/// argument `r1 + r2` within half an interval of zero.
pub(crate) fn exp_poly_q(r1: Quad, r2: f64, n2: usize) -> (Quad, Quad) {
    use tables::expq as c;

    let r = r1 + Quad::from_f64(r2);

    // The tail terms are below 2**-60 of the result and run in double.
    let dr = r.to_f64();
    let tail = dr * (c::A7 + dr * (c::A8 + dr * (c::A9 + dr * c::A10)));
    let a2 = Quad::from_f64(0.5);
    let a3 = Quad::from_bits(c::A3);
    let a4 = Quad::from_bits(c::A4);
    let a5 = Quad::from_bits(c::A5);
    let a6 = Quad::from_bits(c::A6);
    let q = Quad::from_f64(r2)
        + r * r * (a2 + r * (a3 + r * (a4 + r * (a5 + r * (a6 + Quad::from_f64(tail))))));

    let (hi_bits, lo_bits) = c::EXPQ_TBL[n2];
    let hi = Quad::from_bits(hi_bits);
    let tbl_lo = Quad::from_bits(lo_bits);
    let t = tbl_lo + hi;
    let lo = tbl_lo + t * (q + r1);
    (hi, lo)
}

/// Shared binary128 exponential kernel.
///
/// For finite x that is neither tiny nor huge, returns `(hi, lo, k)` with
/// `exp(x) = 2^k * (hi + lo)`, where `hi` is a table entry with slack in
/// its low bits and `lo` carries the polynomial correction.
pub(crate) fn k_expq(x: Quad) -> (Quad, Quad, i32) {
    use tables::expq as c;

    // Reduce x to (k*ln2 + endpoint[n2] + r1 + r2).
    let fn_ = rnint(x.to_f64() * c::INV_L);
    let n = fn_ as i32;
    let n2 = (n & (c::INTERVALS - 1)) as usize;
    let k = n >> c::LOG2_INTERVALS;
    let r1 = x - Quad::from_f64(fn_) * Quad::from_bits(c::L1);
    let r2 = fn_ * -c::L2;

    let (hi, lo) = exp_poly_q(r1, r2, n2);
    (hi, lo, k)
}

/// Scale `hi + lo` by `2^k`, writing `k` straight into an exponent field.
///
/// At the extremes a single multiply would overflow the exponent range, so
/// the scale is applied in two steps through 2^±10000.
pub(crate) fn scale_q(hi: Quad, lo: Quad, k: i32) -> Quad {
    const BIAS: i32 = 16383;
    let t = hi + lo;
    if k >= -16381 {
        if k == 16384 {
            // 2^k itself is not representable; borrow a doubling.
            return t * Quad::from_f64(2.0) * Quad::from_bits(((BIAS + 16383) as u128) << 112);
        }
        t * Quad::from_bits(((BIAS + k) as u128) << 112)
    } else {
        let twom10000 = Quad::from_bits(((BIAS - 10000) as u128) << 112);
        t * Quad::from_bits(((BIAS + k + 10000) as u128) << 112) * twom10000
    }
}

pub fn expq(x: Quad) -> Quad {
    use tables::expq as c;
    const BIAS: u32 = 16383;

    // Filter out exceptional cases.
    let hx = x.to_bits() >> 112;
    let ix = (hx & 0x7fff) as u32;
    if ix >= BIAS + 13 {
        // |x| >= 8192 or x is NaN
        if ix == 0x7fff {
            if hx >> 15 != 0 {
                // -inf or negative NaN
                return -Quad::one() / x;
            }
            return x + x; // +inf or NaN
        }
        if x > Quad::from_bits(c::O_THRESHOLD) {
            let huge = Quad::from_bits((BIAS as u128 + 10000) << 112);
            return huge * huge;
        }
        if x < Quad::from_bits(c::U_THRESHOLD) {
            let tiny = Quad::from_bits((BIAS as u128 - 10000) << 112);
            return tiny * tiny;
        }
    } else if ix < BIAS - 114 {
        // |x| < 0x1p-114: 1 with inexact iff x != 0
        return Quad::one();
    }

    let (hi, lo, k) = k_expq(x);
    scale_q(hi, lo, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::Ieee;

    #[test]
    fn expf_exact_identities() {
        assert_eq!(expf(0.0).to_bits(), 1.0f32.to_bits());
        assert_eq!(expf(-0.0).to_bits(), 1.0f32.to_bits());
    }

    #[test]
    fn expf_overflow_and_underflow_boundaries() {
        assert_eq!(expf(f32::from_bits(0x42b17218)).to_bits(), f32::INF_BITS);
        assert_eq!(expf(f32::from_bits(0xc2cff1b5)).to_bits(), 0);
        assert_eq!(expf(f32::INFINITY), f32::INFINITY);
        assert_eq!(expf(f32::NEG_INFINITY), 0.0);
        assert!(expf(f32::NAN).is_nan());
    }

    #[test]
    fn expf_known_values() {
        // Correctly rounded references.
        assert_eq!(expf(1.0).to_bits(), 0x402df854);
        assert_eq!(expf(-0.5).to_bits(), 0x3f1b4598);
    }

    #[test]
    fn exp_special_cases() {
        assert_eq!(exp(0.0).to_bits(), 1.0f64.to_bits());
        assert_eq!(exp(f64::INFINITY), f64::INFINITY);
        assert_eq!(exp(f64::NEG_INFINITY), 0.0);
        assert!(exp(f64::NAN).is_nan());
        assert_eq!(exp(710.0), f64::INFINITY);
        assert_eq!(exp(-746.0), 0.0);
    }

    #[test]
    fn exp_known_values() {
        // Correctly rounded references; the kernel is good to `<1` ulp.
        let cases: [(u64, u64); 7] = [
            (1.0f64.to_bits(), 0x4005bf0a8b145769),
            (0.5f64.to_bits(), 0x3ffa61298e1e069c),
            ((-1.0f64).to_bits(), 0x3fd78b56362cef38),
            (3.0f64.to_bits(), 0x403415e5bf6fb106),
            ((-20.0f64).to_bits(), 0x3e21b48655f37267),
            (700.0f64.to_bits(), 0x7f0d945df4f8ec8e),
            // Deep in the subnormal range.
            ((-700.0f64).to_bits(), 0x00d14f2b0fb9307f),
        ];
        for (input, want) in cases {
            let got = exp(f64::from_bits(input)).to_bits();
            assert!(got.abs_diff(want) <= 1, "exp({input:#x}) = {got:#x}, want {want:#x}");
        }
    }

    #[test]
    fn rnint_ties_to_even() {
        assert_eq!(rnint(0.5), 0.0);
        assert_eq!(rnint(1.5), 2.0);
        assert_eq!(rnint(-2.5), -2.0);
        assert_eq!(rnint(184.2), 184.0);
    }

    #[test]
    fn expq_special_cases() {
        assert_eq!(expq(Quad::zero()).to_bits(), Quad::one().to_bits());
        assert!(expq(Quad::nan()).is_nan());
        assert_eq!(expq(Quad::infinity()).to_bits(), Quad::infinity().to_bits());
        let exp_neg_inf = expq(-Quad::infinity());
        assert!(exp_neg_inf.is_zero());
        assert!(!exp_neg_inf.is_sign_negative());
        // Just past the overflow threshold.
        let over = Quad::from_bits(0x400c62e42fefa39ef35793c7673007e6);
        assert!(expq(over).is_infinite());
        // Just past the underflow threshold.
        let under = Quad::from_bits(0xc00c654bb3b2c73ebb059fabb506ff34);
        assert!(expq(under).is_zero());
    }

    #[test]
    fn expq_tiny_is_one() {
        let tiny = Quad::from_bits(((16383u128 - 120) << 112) | 42);
        assert_eq!(expq(tiny).to_bits(), Quad::one().to_bits());
    }

    fn ulp_diff(a: u128, b: u128) -> u128 {
        a.abs_diff(b)
    }

    #[test]
    fn expq_known_values() {
        // Correctly rounded 113-bit references; the table method is good
        // to well under an ulp.
        let cases = [
            (
                0x3fff0000000000000000000000000000u128, // 1
                0x40005bf0a8b1457695355fb8ac404e7au128, // e
            ),
            (
                0x3ffe0000000000000000000000000000, // 0.5
                0x3fffa61298e1e069bc972dfefab6df34,
            ),
            (
                0xbfff0000000000000000000000000000, // -1
                0x3ffd78b56362cef37c6aeb7b1e0a4154,
            ),
            (
                0x40008000000000000000000000000000, // 3
                0x4003415e5bf6fb105f2d4bdfc53744c4,
            ),
            (
                0x3ff50624dd2f1a9fbe76c8b439581062, // 0.001
                0x3fff0041919b7ee33ce8184f77d3f23c,
            ),
            (
                0xc0049000000000000000000000000000, // -50
                0x3fb6d257d547e083ed71dacb19cc574f,
            ),
        ];
        for (input, want) in cases {
            let got = expq(Quad::from_bits(input)).to_bits();
            assert!(
                ulp_diff(got, want) <= 1,
                "expq({input:#x}) = {got:#x}, want {want:#x}"
            );
        }
    }
}
