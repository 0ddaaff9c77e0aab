//! Decimal rounding used for scores, coefficients, and percentages.

/// Round `value` to `digits` decimal places, ties to even on the exact
/// binary value (so `0.125` becomes `0.12`).
///
/// Non-finite values and magnitudes too large to carry a fractional part
/// are returned unchanged.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() || value.abs() >= 1e15 {
        return value;
    }
    let digits = digits as usize;
    format!("{value:.digits$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_requested_digits() {
        assert_eq!(round_to(0.123456, 2), 0.12);
        assert_eq!(round_to(0.125001, 2), 0.13);
        assert_eq!(round_to(-2.34567, 4), -2.3457);
        assert_eq!(round_to(3.0, 0), 3.0);
    }

    #[test]
    fn exact_halves_round_to_even() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.625, 2), 0.62);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(-0.125, 2), -0.12);
    }

    #[test]
    fn non_exact_halves_follow_the_binary_value() {
        // 2.675 is stored just below the half.
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(66.666_666, 2), 66.67);
    }

    #[test]
    fn huge_and_non_finite_values_pass_through() {
        assert_eq!(round_to(1e300, 2), 1e300);
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 4), f64::INFINITY);
    }
}
