#![forbid(unsafe_code)]

//! Randomized bit-pattern properties and a concurrent-use check.

use fpmath::{
    exp, exp2, exp2f, exp2q, expf, expm1, expm1f, expm1q, expq, log, log10, log10f, log10q, log1p,
    log1pf, log1pq, log2, log2f, log2q, logf, logq, Ieee, Quad,
};
use proptest::prelude::*;

fn key64(x: f64) -> u64 {
    let b = x.to_bits();
    if b >> 63 == 1 { !b } else { b | (1 << 63) }
}

proptest! {
    #[test]
    fn bit_view_roundtrips_f32(bits in any::<u32>()) {
        prop_assert_eq!(<f32 as Ieee>::from_bits(bits).to_bits(), bits);
    }

    #[test]
    fn bit_view_roundtrips_f64(bits in any::<u64>()) {
        prop_assert_eq!(<f64 as Ieee>::from_bits(bits).to_bits(), bits);
    }

    #[test]
    fn bit_view_roundtrips_quad(bits in any::<u128>()) {
        prop_assert_eq!(<Quad as Ieee>::from_bits(bits).to_bits(), bits);
    }

    #[test]
    fn nan_payloads_propagate_f32(payload in 1u32..(1 << 22), sign in any::<bool>()) {
        let bits = (u32::from(sign) << 31) | f32::QNAN_BITS | payload;
        let x = f32::from_bits(bits);
        prop_assert!(expf(x).is_nan());
        prop_assert!(exp2f(x).is_nan());
        prop_assert!(expm1f(x).is_nan());
        prop_assert!(logf(x).is_nan());
        prop_assert!(log2f(x).is_nan());
        prop_assert!(log10f(x).is_nan());
        prop_assert!(log1pf(x).is_nan());
    }

    #[test]
    fn nan_payloads_propagate_f64(payload in 1u64..(1 << 51), sign in any::<bool>()) {
        let bits = (u64::from(sign) << 63) | f64::QNAN_BITS | payload;
        let x = f64::from_bits(bits);
        prop_assert!(exp(x).is_nan());
        prop_assert!(exp2(x).is_nan());
        prop_assert!(expm1(x).is_nan());
        prop_assert!(log(x).is_nan());
        prop_assert!(log2(x).is_nan());
        prop_assert!(log10(x).is_nan());
        prop_assert!(log1p(x).is_nan());
    }

    #[test]
    fn nan_payloads_propagate_quad(payload in 1u128..(1 << 110), sign in any::<bool>()) {
        let bits = (u128::from(sign) << 127) | Quad::QNAN_BITS | payload;
        let x = Quad::from_bits(bits);
        prop_assert!(expq(x).is_nan());
        prop_assert!(exp2q(x).is_nan());
        prop_assert!(expm1q(x).is_nan());
        prop_assert!(logq(x).is_nan());
        prop_assert!(log2q(x).is_nan());
        prop_assert!(log10q(x).is_nan());
        prop_assert!(log1pq(x).is_nan());
    }

    #[test]
    fn negative_arguments_yield_nan(x in f64::MIN..-f64::MIN_POSITIVE) {
        prop_assert!(log(x).is_nan());
        prop_assert!(log2(x).is_nan());
        prop_assert!(log10(x).is_nan());
        prop_assert!(logq(Quad::from_f64(x)).is_nan());
    }

    #[test]
    fn negative_arguments_yield_nan_f32(x in f32::MIN..-f32::MIN_POSITIVE) {
        prop_assert!(logf(x).is_nan());
        prop_assert!(log2f(x).is_nan());
        prop_assert!(log10f(x).is_nan());
    }

    #[test]
    fn log1p_below_the_pole_yields_nan(x in f64::MIN..-1.0f64) {
        prop_assert!(log1p(x).is_nan());
        prop_assert!(log1pq(Quad::from_f64(x)).is_nan());
    }

    #[test]
    fn exp_is_positive_and_finite_in_range(x in -700.0f64..700.0) {
        let y = exp(x);
        prop_assert!(y.is_finite());
        prop_assert!(y > 0.0);
    }

    #[test]
    fn exp_tracks_platform_libm(x in -700.0f64..700.0) {
        let diff = key64(exp(x)).abs_diff(key64(x.exp()));
        prop_assert!(diff <= 2, "exp({x}) off by {diff} ulp");
    }

    #[test]
    fn expm1_tracks_platform_libm(x in -36.0f64..36.0) {
        let diff = key64(expm1(x)).abs_diff(key64(x.exp_m1()));
        prop_assert!(diff <= 2, "expm1({x}) off by {diff} ulp");
    }

    #[test]
    fn log10_tracks_platform_libm(bits in (1u64 << 52)..0x7ff0_0000_0000_0000) {
        // All positive normals.
        let x = f64::from_bits(bits);
        let diff = key64(log10(x)).abs_diff(key64(x.log10()));
        prop_assert!(diff <= 2, "log10({x:e}) off by {diff} ulp");
    }

    #[test]
    fn log_inverts_exp_to_a_few_ulp(x in 0.0625f64..709.0) {
        let back = log(exp(x));
        let diff = key64(back).abs_diff(key64(x));
        // log amplifies the argument error of exp by 1/x, so the bound
        // loosens as x approaches the bottom of the range.
        prop_assert!(diff <= 64, "log(exp({x})) = {back}, off by {diff} ulp");
    }

    #[test]
    fn exp2f_is_exact_at_integers(k in -149i32..=127) {
        let want = if k >= -126 {
            f32::from_bits(((127 + k) as u32) << 23)
        } else {
            f32::from_bits(1 << (k + 149))
        };
        prop_assert_eq!(exp2f(k as f32).to_bits(), want.to_bits());
    }
}

#[test]
fn tables_are_safe_to_share_across_threads() {
    let inputs: Vec<f64> = (0..256).map(|i| 0.01 * f64::from(i) - 1.2).collect();
    let reference: Vec<u64> = inputs.iter().map(|&x| exp(x).to_bits()).collect();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let inputs = inputs.clone();
            std::thread::spawn(move || {
                inputs
                    .iter()
                    .map(|&x| exp(x).to_bits())
                    .collect::<Vec<u64>>()
            })
        })
        .collect();
    for h in handles {
        let got = h.join().unwrap();
        assert_eq!(got, reference);
    }
}
