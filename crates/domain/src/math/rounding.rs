use rust_decimal::prelude::*;

/// Rounds `value` to `dp` decimal places, half away from zero.
///
/// Works on the exact binary value of `value`, so `1.005` (stored as
/// `1.00499...`) rounds down. Non-finite values and values outside the
/// `Decimal` range are returned unchanged.
#[must_use]
pub fn round_dp(value: f64, dp: u32) -> f64 {
    let Some(decimal) = Decimal::from_f64_retain(value) else {
        return value;
    };
    decimal
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(value)
}

/// Rounds a monetary amount to cents.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    round_dp(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(1050.0), 1050.0);
        assert_eq!(round_cents(1051.161897881733), 1051.16);
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(-0.125), -0.13);
    }

    #[test]
    fn test_binary_representation_respected() {
        // 1.005 is slightly below the midpoint in binary.
        assert_eq!(round_cents(1.005), 1.0);
    }

    #[test]
    fn test_matches_decimal_rounding() {
        let rounded = Decimal::from_f64(round_dp(12.3456, 3)).unwrap();
        assert_eq!(rounded, dec!(12.346));
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(round_cents(f64::NAN).is_nan());
        assert_eq!(round_cents(f64::INFINITY), f64::INFINITY);
    }
}
