//! Property-based tests for signed contributions.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::contribution::{EventKind, TxnKind};

/// Strategy for generating positive currency magnitudes.
fn magnitude_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating event kinds.
fn event_kind_strategy() -> impl Strategy<Value = EventKind> {
    prop_oneof![
        Just(EventKind::SaleInvoice),
        Just(EventKind::PurchaseInvoice),
        Just(EventKind::Income),
        Just(EventKind::Expense),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The contribution's absolute value always equals the magnitude.
    #[test]
    fn prop_contribution_preserves_magnitude(
        kind in event_kind_strategy(),
        magnitude in magnitude_strategy(),
    ) {
        prop_assert_eq!(kind.signed_contribution(magnitude).abs(), magnitude);
    }

    /// Credits are positive, debits negative, for any magnitude.
    #[test]
    fn prop_sign_follows_polarity(
        kind in event_kind_strategy(),
        magnitude in magnitude_strategy(),
    ) {
        let contribution = kind.signed_contribution(magnitude);
        match kind.txn_kind() {
            TxnKind::Credit => prop_assert!(contribution > Decimal::ZERO),
            TxnKind::Debit => prop_assert!(contribution < Decimal::ZERO),
        }
    }

    /// Balance invariant: folding a sequence of events over a zero starting
    /// balance equals the closed-form sum of their signed contributions.
    #[test]
    fn prop_folded_balance_equals_contribution_sum(
        events in prop::collection::vec((event_kind_strategy(), magnitude_strategy()), 0..50),
    ) {
        let folded = events
            .iter()
            .fold(Decimal::ZERO, |bal, (kind, mag)| kind.txn_kind().apply(bal, *mag));
        let summed: Decimal = events
            .iter()
            .map(|(kind, mag)| kind.signed_contribution(*mag))
            .sum();
        prop_assert_eq!(folded, summed);
    }

    /// An income entry exactly cancels an expense entry of equal magnitude.
    #[test]
    fn prop_income_cancels_expense(magnitude in magnitude_strategy()) {
        let net = EventKind::Income.signed_contribution(magnitude)
            + EventKind::Expense.signed_contribution(magnitude);
        prop_assert_eq!(net, Decimal::ZERO);
    }
}
