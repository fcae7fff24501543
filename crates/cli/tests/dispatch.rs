#![forbid(unsafe_code)]

use fpmath_cli::dispatch::{evaluate, Argument, Function};

fn run(function: &str, bits: &str) -> String {
    let function: Function = function.parse().unwrap();
    let arg: Argument = bits.parse().unwrap();
    evaluate(function, arg).to_string()
}

#[test]
fn evaluates_at_all_three_widths() {
    // exp(1) at each width.
    assert_eq!(run("exp", "0x3f800000"), "0x402df854");
    assert_eq!(run("exp", "0x3ff0000000000000"), "0x4005bf0a8b145769");
    assert_eq!(
        run("exp", "0x3fff0000000000000000000000000000"),
        "0x40005bf0a8b1457695355fb8ac404e7a"
    );
}

#[test]
fn covers_every_function_name() {
    assert_eq!(run("exp2", "0x40800000"), "0x41800000"); // 2^4 = 16
    assert_eq!(run("expm1", "0x00000000"), "0x00000000");
    assert_eq!(run("log", "0x3f800000"), "0x00000000");
    assert_eq!(run("log2", "0x4010000000000000"), "0x4000000000000000"); // log2(4) = 2
    assert_eq!(
        run("log2", "0x40020000000000000000000000000000"),
        "0x40008000000000000000000000000000" // log2(8) = 3
    );
    assert_eq!(run("log10", "0x3ff0000000000000"), "0x0000000000000000");
    assert_eq!(run("log1p", "0xbf800000"), "0xff800000"); // log1p(-1) = -inf
}

#[test]
fn output_width_matches_input_width() {
    assert_eq!(run("log", "0x7f800000").len(), 10);
    assert_eq!(run("log", "0x7ff0000000000000").len(), 18);
    assert_eq!(run("log", "0x7fff0000000000000000000000000000").len(), 34);
}
