#![forbid(unsafe_code)]

//! log(1+x) without the cancellation near x = 0.
//!
//! Reduction differs from `log`: 1+x is formed in working precision, and
//! the rounding error of that addition is carried as a correction term
//! c ~ log(1+x) - log(u), folded into the reconstruction. When 1+x is
//! already in [sqrt(2)/2, sqrt(2)) the argument is exact and k = 0.

use crate::log::{kernel32, kernel64, kernelq};
use crate::quad::Quad;
use crate::support::force_eval;
use crate::tables;

pub fn log1pf(x: f32) -> f32 {
    use tables::logf as c;

    let ix = x.to_bits();
    let mut k = 1i32;
    let mut cc = 0.0f32;
    let mut f = 0.0f32;
    if ix < 0x3ed413d0 || ix >> 31 != 0 {
        // 1+x < sqrt(2)+
        if ix >= 0xbf800000 {
            // x <= -1.0
            if x == -1.0 {
                return x / 0.0; // log1p(-1) = -inf
            }
            return f32::NAN; // log1p(x<-1) = NaN
        }
        if ix << 1 < 0x33800000u32 << 1 {
            // |x| < 2**-24; underflow if subnormal
            if ix & 0x7f800000 == 0 {
                force_eval!(x * x);
            }
            return x;
        }
        if ix <= 0xbe95f619 {
            // sqrt(2)/2- <= 1+x < sqrt(2)+
            k = 0;
            f = x;
        }
    } else if ix >= 0x7f800000 {
        return x;
    }
    if k != 0 {
        let u = 1.0 + x;
        let mut iu = u.to_bits();
        iu += 0x3f800000 - c::SQRT2_OVER2_BITS;
        k = (iu >> 23) as i32 - 0x7f;
        // correction term ~ log(1+x)-log(u), avoid underflow in c/u
        if k < 25 {
            cc = if k >= 2 { 1.0 - (u - x) } else { x - (u - 1.0) };
            cc /= u;
        }
        // reduce u into [sqrt(2)/2, sqrt(2)]
        iu = (iu & 0x007fffff) + c::SQRT2_OVER2_BITS;
        f = f32::from_bits(iu) - 1.0;
    }
    let (s, hfsq, r) = kernel32(f);
    let dk = k as f32;
    s * (hfsq + r) + (dk * c::LN2_LO + cc) - hfsq + f + dk * c::LN2_HI
}

pub fn log1p(x: f64) -> f64 {
    use tables::log as c;

    let ui = x.to_bits();
    let hx = (ui >> 32) as u32;
    let mut k = 1i32;
    let mut cc = 0.0f64;
    let mut f = 0.0f64;
    if hx < 0x3fda827a || hx >> 31 != 0 {
        // 1+x < sqrt(2)+
        if hx >= 0xbff00000 {
            // x <= -1.0
            if x == -1.0 {
                return x / 0.0; // log1p(-1) = -inf
            }
            return f64::NAN; // log1p(x<-1) = NaN
        }
        if hx << 1 < 0x3ca00000u32 << 1 {
            // |x| < 2**-53; underflow if subnormal
            if hx & 0x7ff00000 == 0 {
                force_eval!(x as f32);
            }
            return x;
        }
        if hx <= 0xbfd2bec4 {
            // sqrt(2)/2- <= 1+x < sqrt(2)+
            k = 0;
            f = x;
        }
    } else if hx >= 0x7ff00000 {
        return x;
    }
    if k != 0 {
        let u = 1.0 + x;
        let ub = u.to_bits();
        let mut hu = (ub >> 32) as u32;
        hu += 0x3ff00000 - c::SQRT2_OVER2_HI;
        k = (hu >> 20) as i32 - 0x3ff;
        // correction term ~ log(1+x)-log(u), avoid underflow in c/u
        if k < 54 {
            cc = if k >= 2 { 1.0 - (u - x) } else { x - (u - 1.0) };
            cc /= u;
        }
        // reduce u into [sqrt(2)/2, sqrt(2)]
        hu = (hu & 0x000fffff) + c::SQRT2_OVER2_HI;
        f = f64::from_bits((hu as u64) << 32 | (ub & 0xffffffff)) - 1.0;
    }
    let (s, hfsq, r) = kernel64(f);
    let dk = k as f64;
    s * (hfsq + r) + (dk * c::LN2_LO + cc) - hfsq + f + dk * c::LN2_HI
}

pub fn log1pq(x: Quad) -> Quad {
    use tables::logq as c;
    const MANT_MASK: u128 = (1 << 112) - 1;

    if x.is_nan() {
        return x;
    }
    let ix = x.to_bits();
    let mut k = 1i32;
    let mut cc = Quad::zero();
    let mut f = Quad::zero();
    if x < Quad::from_bits(c::SQRT2_M1_BITS) {
        // 1+x < sqrt(2)
        if x <= -Quad::one() {
            if x == -Quad::one() {
                return x / Quad::zero(); // log1p(-1) = -inf
            }
            return Quad::nan(); // log1p(x<-1) = NaN
        }
        if (ix << 1) >> 1 < (16383u128 - 113) << 112 {
            // |x| < 2**-113
            return x;
        }
        if x >= Quad::from_bits(c::SQRT2H_M1_BITS) {
            // sqrt(2)/2 <= 1+x < sqrt(2)
            k = 0;
            f = x;
        }
    } else if (ix >> 112) & 0x7fff == 0x7fff {
        return x; // +inf
    }
    if k != 0 {
        let u = Quad::one() + x;
        let mut iu = u.to_bits();
        iu = iu.wrapping_add((0x3fffu128 << 112) - c::SQRT2_OVER2_BITS);
        k = (iu >> 112) as i32 - 0x3fff;
        // correction term ~ log(1+x)-log(u), avoid underflow in c/u
        if k < 114 {
            let num = if k >= 2 {
                Quad::one() - (u - x)
            } else {
                x - (u - Quad::one())
            };
            cc = num / u;
        }
        // reduce u into [sqrt(2)/2, sqrt(2)]
        iu = (iu & MANT_MASK) + c::SQRT2_OVER2_BITS;
        f = Quad::from_bits(iu) - Quad::one();
    }
    let (s, hfsq, r) = kernelq(f);
    let dk = Quad::from_f64(k as f64);
    let ln2_hi = Quad::from_bits(c::LN2_HI);
    let ln2_lo = Quad::from_bits(c::LN2_LO);
    s * (hfsq + r) + (dk * ln2_lo + cc) - hfsq + f + dk * ln2_hi
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::Ieee;

    #[test]
    fn log1pf_specials() {
        assert_eq!(log1pf(0.0).to_bits(), 0); // preserves +0
        assert_eq!(log1pf(-0.0).to_bits(), 0x80000000); // and -0
        assert_eq!(log1pf(-1.0), f32::NEG_INFINITY);
        assert!(log1pf(-1.5).is_nan());
        assert!(log1pf(f32::NEG_INFINITY).is_nan());
        assert_eq!(log1pf(f32::INFINITY), f32::INFINITY);
        assert!(log1pf(f32::NAN).is_nan());
        // |x| < 2^-24 is the identity
        assert_eq!(log1pf(f32::from_bits(1)).to_bits(), 1);
    }

    #[test]
    fn log1pf_known_values() {
        let cases: [(u32, u32); 7] = [
            (0x408b0c34, 0x3fd68dee),
            (0x411445de, 0x40150d5c),
            (0x3f2977e8, 0x3f020d27),
            (0xbed02e64, 0xbf059acb),
            (0x3f0fcf7d, 0x3ee441a2),
            (0x3f462ed8, 0x3f12c547),
            (0xbf2dc375, 0xbf915aa1),
        ];
        for (input, want) in cases {
            let got = log1pf(f32::from_bits(input)).to_bits();
            assert_eq!(got, want, "log1pf({input:#x})");
        }
    }

    #[test]
    fn log1p_specials() {
        assert_eq!(log1p(0.0).to_bits(), 0);
        assert_eq!(log1p(-0.0).to_bits(), 0x8000000000000000);
        assert_eq!(log1p(-1.0), f64::NEG_INFINITY);
        assert!(log1p(-1.0000000001).is_nan());
        assert!(log1p(f64::NEG_INFINITY).is_nan());
        assert_eq!(log1p(f64::INFINITY), f64::INFINITY);
        assert!(log1p(f64::NAN).is_nan());
        assert_eq!(log1p(f64::from_bits(1)).to_bits(), 1);
    }

    #[test]
    fn log1p_known_values() {
        // Correctly rounded references; the kernel is good to `<1` ulp.
        let cases: [(u64, u64); 7] = [
            (0x401161868e18bc67, 0x3ffad1bdd1e9e687),
            (0x402288bbb0d6a1e6, 0x4002a1ab8365b56f),
            (0x3fe52efd0cd80497, 0x3fe041a4ec2a680a),
            (0xbfda05cc754481d1, 0xbfe0b3595423aec1),
            (0x3fe1f9ef934745cb, 0x3fdc8834348a846e),
            (0x3fe8c5db097f7442, 0x3fe258a8e8a35bbf),
            (0xbfe5b86ea8118a0e, 0xbff22b5426327502),
        ];
        for (input, want) in cases {
            let got = log1p(f64::from_bits(input)).to_bits();
            assert!(got.abs_diff(want) <= 1, "log1p({input:#x}) = {got:#x}, want {want:#x}");
        }
    }

    #[test]
    fn log1pq_specials() {
        assert!(log1pq(Quad::zero()).is_zero());
        let neg_one = -Quad::one();
        let got = log1pq(neg_one);
        assert!(got.is_infinite() && got.is_sign_negative());
        assert!(log1pq(Quad::from_f64(-2.0)).is_nan());
        assert!(log1pq(-Quad::infinity()).is_nan());
        assert_eq!(log1pq(Quad::infinity()).to_bits(), Quad::INF_BITS);
        assert!(log1pq(Quad::nan()).is_nan());
    }

    #[test]
    fn log1pq_tiny_is_identity() {
        let tiny = Quad::from_bits(((16383u128 - 120) << 112) | 7);
        assert_eq!(log1pq(tiny).to_bits(), tiny.to_bits());
        let neg = Quad::from_bits((1u128 << 127) | ((16383u128 - 115) << 112));
        assert_eq!(log1pq(neg).to_bits(), neg.to_bits());
    }

    #[test]
    fn log1pq_known_values() {
        // Correctly rounded 113-bit references.
        let cases = [
            (
                0x3fff0000000000000000000000000000u128, // 1
                0x3ffe62e42fefa39ef35793c7673007e6u128, // ln 2
            ),
            (
                0x3ffe0000000000000000000000000000, // 0.5
                0x3ffd9f323ecbf984bf2b68d766f40522,
            ),
            (
                0x3fbc79ca10c9242235d511e976394d7a, // 1e-20
                0x3fbc79ca10c9242235d4ef1129ea5ecb,
            ),
        ];
        for (input, want) in cases {
            let got = log1pq(Quad::from_bits(input)).to_bits();
            assert!(
                got.abs_diff(want) <= 1,
                "log1pq({input:#x}) = {got:#x}, want {want:#x}"
            );
        }
    }
}
