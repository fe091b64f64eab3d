//! Monetary amount helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`, rounded to two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places carried by currency amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds an amount to currency precision (two decimal places,
/// midpoint away from zero).
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns true if `amount` is a well-formed positive currency amount:
/// strictly positive and no finer than two decimal places.
#[must_use]
pub fn is_valid_amount(amount: Decimal) -> bool {
    amount > Decimal::ZERO && amount == round_currency(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1.005), dec!(1.01))]
    #[case(dec!(-1.005), dec!(-1.01))]
    #[case(dec!(2.444), dec!(2.44))]
    #[case(dec!(2.445), dec!(2.45))]
    fn test_round_currency_half_away_from_zero(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(round_currency(input), expected);
    }

    #[test]
    fn test_round_currency_preserves_exact_values() {
        assert_eq!(round_currency(dec!(100.00)), dec!(100.00));
        assert_eq!(round_currency(dec!(0)), dec!(0));
    }

    #[test]
    fn test_is_valid_amount() {
        assert!(is_valid_amount(dec!(0.01)));
        assert!(is_valid_amount(dec!(1000)));
        assert!(is_valid_amount(dec!(19.99)));

        assert!(!is_valid_amount(dec!(0)));
        assert!(!is_valid_amount(dec!(-5)));
        assert!(!is_valid_amount(dec!(0.001)));
    }
}
