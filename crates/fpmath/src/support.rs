#![forbid(unsafe_code)]

//! Small helpers shared by every driver: forced evaluation of
//! flag-raising expressions and exponent scaling.

/// Evaluates an expression for its floating-point side effects.
///
/// The reference implementations compute values like `huge + x` purely so
/// the inexact/underflow flags get raised and then discard the result.
/// An optimizer is free to delete such dead arithmetic; routing the value
/// through `black_box` keeps it evaluated.
macro_rules! force_eval {
    ($e:expr) => {
        let _ = core::hint::black_box($e);
    };
}
pub(crate) use force_eval;

/// `x * 2^n` computed without intermediate overflow or underflow, by
/// stepping through representable powers of two.
pub(crate) fn scalbn(x: f64, mut n: i32) -> f64 {
    let x1p1023 = f64::from_bits(0x7fe0000000000000); // 0x1p1023
    let x1p53 = f64::from_bits(0x4340000000000000); // 0x1p53
    let x1p_1022 = f64::from_bits(0x0010000000000000); // 0x1p-1022

    let mut y = x;
    if n > 1023 {
        y *= x1p1023;
        n -= 1023;
        if n > 1023 {
            y *= x1p1023;
            n -= 1023;
            if n > 1023 {
                n = 1023;
            }
        }
    } else if n < -1022 {
        // Scaling by 2^-1022 and then 2^53 keeps subnormal results on the
        // gradual-underflow path instead of flushing them early.
        y *= x1p_1022 * x1p53;
        n += 1022 - 53;
        if n < -1022 {
            y *= x1p_1022 * x1p53;
            n += 1022 - 53;
            if n < -1022 {
                n = -1022;
            }
        }
    }
    y * f64::from_bits(((0x3ff + n) as u64) << 52)
}

/// Single-precision counterpart of [`scalbn`].
pub(crate) fn scalbnf(x: f32, mut n: i32) -> f32 {
    let x1p127 = f32::from_bits(0x7f000000); // 0x1p127
    let x1p_126 = f32::from_bits(0x00800000); // 0x1p-126
    let x1p24 = f32::from_bits(0x4b800000); // 0x1p24

    let mut y = x;
    if n > 127 {
        y *= x1p127;
        n -= 127;
        if n > 127 {
            y *= x1p127;
            n -= 127;
            if n > 127 {
                n = 127;
            }
        }
    } else if n < -126 {
        y *= x1p_126 * x1p24;
        n += 126 - 24;
        if n < -126 {
            y *= x1p_126 * x1p24;
            n += 126 - 24;
            if n < -126 {
                n = -126;
            }
        }
    }
    y * f32::from_bits(((127 + n) as u32) << 23)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalbn_normal_range() {
        assert_eq!(scalbn(1.5, 4), 24.0);
        assert_eq!(scalbn(1.0, -1), 0.5);
        assert_eq!(scalbn(-3.0, 0), -3.0);
    }

    #[test]
    fn scalbn_extreme_exponents() {
        // 2^-1074 is the smallest subnormal.
        assert_eq!(scalbn(1.0, -1074), f64::from_bits(1));
        assert_eq!(scalbn(1.0, -1075), 0.0);
        assert_eq!(scalbn(1.0, 1024), f64::INFINITY);
        assert_eq!(scalbn(f64::from_bits(1), 1074), 1.0);
    }

    #[test]
    fn scalbnf_extreme_exponents() {
        assert_eq!(scalbnf(1.0, -149), f32::from_bits(1));
        assert_eq!(scalbnf(1.0, -150), 0.0);
        assert_eq!(scalbnf(1.0, 128), f32::INFINITY);
        assert_eq!(scalbnf(f32::from_bits(1), 149), 1.0);
    }
}
