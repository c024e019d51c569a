// tests/properties.rs

use proptest::prelude::*;

use mathtext::core::ops::math::statistics;
use mathtext::core::ops::text::transform;
use mathtext::{dispatch_math, dispatch_text, ErrorKind, MathParams, TextParams};

proptest! {
    #[test]
    fn statistics_mean_within_bounds(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..64)) {
        let stats = statistics(&values).unwrap();
        prop_assert!(stats.max >= stats.mean);
        prop_assert!(stats.mean >= stats.min);
        prop_assert_eq!(stats.range, stats.max - stats.min);
        prop_assert_eq!(stats.count, values.len());
    }

    #[test]
    fn statistics_spread_is_non_negative(values in prop::collection::vec(-1.0e3f64..1.0e3, 1..32)) {
        let stats = statistics(&values).unwrap();
        prop_assert!(stats.variance >= 0.0);
        prop_assert!(stats.std_dev >= 0.0);
    }

    #[test]
    fn upper_is_idempotent(text in "[a-zA-Z0-9 àéçñßÀÉ.,!?]{0,64}") {
        let once = transform(&text, "upper").unwrap();
        let twice = transform(&once, "upper").unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn reverse_twice_is_identity(text in ".{0,64}") {
        let back = transform(&transform(&text, "reverse").unwrap(), "reverse").unwrap();
        prop_assert_eq!(back, text);
    }

    #[test]
    fn text_dispatch_is_deterministic(text in "[a-zA-Z0-9 .,!?@/-]{0,80}", mode in prop::sample::select(vec!["emails", "urls", "phone_numbers", "dates", "numbers"])) {
        let params = TextParams::with_mode(text, mode);
        prop_assert_eq!(dispatch_text("extract", &params), dispatch_text("extract", &params));
    }

    #[test]
    fn math_dispatch_is_deterministic(values in prop::collection::vec(-100.0f64..100.0, 0..16)) {
        let params = MathParams::with_values(values);
        prop_assert_eq!(dispatch_math("statistics", &params), dispatch_math("statistics", &params));
    }
}

#[test]
fn empty_statistics_is_invalid_input() {
    let err = dispatch_math("statistics", &MathParams::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
