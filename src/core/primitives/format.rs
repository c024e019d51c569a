//! Float formatting and numeric guards
//!
//! Keeps number presentation consistent between operations: integral floats
//! keep a trailing `.0`, negative zero prints as `0.0`.

use crate::core::{CoreError, CoreResult};

/// Shortest round-trip text for a float, with `-0.0` folded into `0.0`
pub fn display_float(value: f64) -> String {
    // -0.0 + 0.0 == +0.0
    format!("{:?}", value + 0.0)
}

/// Round to a fixed number of decimal places
///
/// Rounds the exact binary value, ties to even, so `2.125` becomes `2.12`.
/// Scaling by a power of ten first would round the product instead.
pub fn round_to(value: f64, places: u32) -> f64 {
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Reject results that overflowed or left the real domain
pub fn ensure_finite(value: f64, context: &str) -> CoreResult<f64> {
    if value.is_nan() {
        Err(CoreError::invalid(format!("{}: math domain error", context)))
    } else if value.is_infinite() {
        Err(CoreError::invalid(format!("{}: math range error", context)))
    } else {
        Ok(value)
    }
}

/// Reject NaN or infinite inputs before computing anything
pub fn ensure_finite_inputs(values: &[f64], context: &str) -> CoreResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(idx) => Err(CoreError::invalid(format!(
            "{}: value at index {} is not a finite number",
            context, idx
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_float_integral() {
        assert_eq!(display_float(1.0), "1.0");
        assert_eq!(display_float(-2.0), "-2.0");
    }

    #[test]
    fn test_display_float_negative_zero() {
        assert_eq!(display_float(-0.0), "0.0");
    }

    #[test]
    fn test_display_float_fraction() {
        assert_eq!(display_float(0.5), "0.5");
        assert_eq!(display_float(-1.25), "-1.25");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(2.0 / 3.0, 2), 0.67);
        assert_eq!(round_to(5.0, 2), 5.0);
    }

    #[test]
    fn test_round_to_ties_to_even() {
        assert_eq!(round_to(2.125, 2), 2.12);
        assert_eq!(round_to(2.375, 2), 2.38);
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite(1.5, "power").unwrap(), 1.5);

        let err = ensure_finite(f64::INFINITY, "power").unwrap_err();
        assert!(err.to_string().contains("range"));

        let err = ensure_finite(f64::NAN, "logarithm").unwrap_err();
        assert!(err.to_string().contains("domain"));
    }

    #[test]
    fn test_ensure_finite_inputs() {
        assert!(ensure_finite_inputs(&[1.0, 2.0], "statistics").is_ok());
        let err = ensure_finite_inputs(&[1.0, f64::NAN], "statistics").unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }
}
