use crate::dispatch::{Argument, Function};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

/// fpmath: bit-exact elementary function evaluation
///
/// Evaluates one of the exponential/logarithm family functions on an IEEE
/// 754 bit pattern and prints the result's bit pattern. The number of hex
/// digits selects the width: 8 for binary32, 16 for binary64, 32 for
/// binary128.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Cli {
    /// Function to evaluate: exp, exp2, expm1, log, log2, log10 or log1p.
    #[arg(value_parser = parse_function)]
    pub function: Function,

    /// Argument as a hex bit pattern, e.g. `0x3f800000`.
    #[arg(value_parser = parse_argument)]
    pub bits: Argument,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

fn parse_function(s: &str) -> Result<Function, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_argument(s: &str) -> Result<Argument, String> {
    s.parse().map_err(|e| format!("{e}"))
}
