//! Bit-pattern argument handling and function dispatch.
//!
//! Arguments travel as raw IEEE bit patterns: `0x` followed by exactly 8,
//! 16, or 32 hex digits, which doubles as the width selector. Results come
//! back in the same format, so every invocation is reproducible bit for bit.

use fpmath::Quad;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown function `{0}` (expected exp, exp2, expm1, log, log2, log10 or log1p)")]
    UnknownFunction(String),
    #[error("bit pattern `{0}` must start with `0x`")]
    MissingPrefix(String),
    #[error("bit pattern has {0} hex digits, expected 8 (binary32), 16 (binary64) or 32 (binary128)")]
    BadLength(usize),
    #[error("bit pattern contains a non-hex digit: `{0}`")]
    BadDigit(String),
}

/// The seven supported function families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Exp,
    Exp2,
    Expm1,
    Log,
    Log2,
    Log10,
    Log1p,
}

impl FromStr for Function {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "exp" => Ok(Function::Exp),
            "exp2" => Ok(Function::Exp2),
            "expm1" => Ok(Function::Expm1),
            "log" => Ok(Function::Log),
            "log2" => Ok(Function::Log2),
            "log10" => Ok(Function::Log10),
            "log1p" => Ok(Function::Log1p),
            other => Err(ParseError::UnknownFunction(other.to_owned())),
        }
    }
}

/// A value at one of the three widths, carried as its bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Bits32(u32),
    Bits64(u64),
    Bits128(u128),
}

impl FromStr for Argument {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let digits = s
            .strip_prefix("0x")
            .ok_or_else(|| ParseError::MissingPrefix(s.to_owned()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseError::BadDigit(digits.to_owned()));
        }
        match digits.len() {
            8 => Ok(Argument::Bits32(u32::from_str_radix(digits, 16).map_err(
                |_| ParseError::BadDigit(digits.to_owned()),
            )?)),
            16 => Ok(Argument::Bits64(u64::from_str_radix(digits, 16).map_err(
                |_| ParseError::BadDigit(digits.to_owned()),
            )?)),
            32 => Ok(Argument::Bits128(
                u128::from_str_radix(digits, 16)
                    .map_err(|_| ParseError::BadDigit(digits.to_owned()))?,
            )),
            n => Err(ParseError::BadLength(n)),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Bits32(b) => write!(f, "{b:#010x}"),
            Argument::Bits64(b) => write!(f, "{b:#018x}"),
            Argument::Bits128(b) => write!(f, "{b:#034x}"),
        }
    }
}

/// Apply `function` to `arg` at the width the argument selected.
pub fn evaluate(function: Function, arg: Argument) -> Argument {
    match arg {
        Argument::Bits32(bits) => {
            let x = f32::from_bits(bits);
            let y = match function {
                Function::Exp => fpmath::expf(x),
                Function::Exp2 => fpmath::exp2f(x),
                Function::Expm1 => fpmath::expm1f(x),
                Function::Log => fpmath::logf(x),
                Function::Log2 => fpmath::log2f(x),
                Function::Log10 => fpmath::log10f(x),
                Function::Log1p => fpmath::log1pf(x),
            };
            Argument::Bits32(y.to_bits())
        }
        Argument::Bits64(bits) => {
            let x = f64::from_bits(bits);
            let y = match function {
                Function::Exp => fpmath::exp(x),
                Function::Exp2 => fpmath::exp2(x),
                Function::Expm1 => fpmath::expm1(x),
                Function::Log => fpmath::log(x),
                Function::Log2 => fpmath::log2(x),
                Function::Log10 => fpmath::log10(x),
                Function::Log1p => fpmath::log1p(x),
            };
            Argument::Bits64(y.to_bits())
        }
        Argument::Bits128(bits) => {
            let x = Quad::from_bits(bits);
            let y = match function {
                Function::Exp => fpmath::expq(x),
                Function::Exp2 => fpmath::exp2q(x),
                Function::Expm1 => fpmath::expm1q(x),
                Function::Log => fpmath::logq(x),
                Function::Log2 => fpmath::log2q(x),
                Function::Log10 => fpmath::log10q(x),
                Function::Log1p => fpmath::log1pq(x),
            };
            Argument::Bits128(y.to_bits())
        }
    }
}
