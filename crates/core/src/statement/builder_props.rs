//! Property-based tests for the statement merge and running balance.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::balance::EventKind;

use super::builder::StatementBuilder;
use super::merge::merge_by_creation;
use super::types::{EventSource, StatementEvent};

fn magnitude_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn timestamp(offset_secs: i64) -> DateTime<FixedOffset> {
    Utc.timestamp_opt(1_767_225_600 + offset_secs, 0)
        .single()
        .map(|dt| dt.fixed_offset())
        .expect("valid timestamp")
}

fn invoice_kind_strategy() -> impl Strategy<Value = EventKind> {
    prop_oneof![Just(EventKind::SaleInvoice), Just(EventKind::PurchaseInvoice)]
}

fn ledger_kind_strategy() -> impl Strategy<Value = EventKind> {
    prop_oneof![Just(EventKind::Income), Just(EventKind::Expense)]
}

/// Builds a creation-ordered stream from (seconds-offset, kind, amount)
/// triples. Offsets are sorted so the precondition of the merge holds.
fn stream(
    triples: Vec<(i64, EventKind, Decimal)>,
    invoice_source: bool,
) -> Vec<StatementEvent> {
    let mut offsets: Vec<i64> = triples.iter().map(|(o, _, _)| *o).collect();
    offsets.sort_unstable();

    offsets
        .into_iter()
        .zip(triples)
        .map(|(offset, (_, kind, amount))| StatementEvent {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date"),
            created_at: timestamp(offset),
            kind,
            amount,
            description: String::new(),
            source: if invoice_source {
                EventSource::Invoice {
                    number: "F".to_string(),
                }
            } else {
                EventSource::Ledger {
                    payment_method: None,
                }
            },
        })
        .collect()
}

fn invoice_stream_strategy() -> impl Strategy<Value = Vec<StatementEvent>> {
    prop::collection::vec(
        ((0i64..100_000), invoice_kind_strategy(), magnitude_strategy()),
        0..30,
    )
    .prop_map(|t| stream(t, true))
}

fn ledger_stream_strategy() -> impl Strategy<Value = Vec<StatementEvent>> {
    prop::collection::vec(
        ((0i64..100_000), ledger_kind_strategy(), magnitude_strategy()),
        0..30,
    )
    .prop_map(|t| stream(t, false))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    /// Statement reconciliation: the last running balance equals the sum
    /// of every event's signed contribution — exactly what the balance
    /// mutation leaves on the party row after the same events.
    #[test]
    fn prop_final_balance_reconciles_with_mutator(
        invoices in invoice_stream_strategy(),
        entries in ledger_stream_strategy(),
    ) {
        let stored: Decimal = invoices
            .iter()
            .chain(&entries)
            .map(|e| e.kind.signed_contribution(e.amount))
            .sum();

        let lines = StatementBuilder::build(invoices, entries);
        let final_balance = lines.last().map_or(Decimal::ZERO, |l| l.balance);

        prop_assert_eq!(final_balance, stored);
    }

    /// The merge emits every event exactly once, in non-decreasing
    /// creation order, preserving each source's internal order.
    #[test]
    fn prop_merge_is_an_ordered_permutation(
        invoices in invoice_stream_strategy(),
        entries in ledger_stream_strategy(),
    ) {
        let merged = merge_by_creation(invoices.clone(), entries.clone());

        prop_assert_eq!(merged.len(), invoices.len() + entries.len());
        for window in merged.windows(2) {
            prop_assert!(window[0].created_at <= window[1].created_at);
        }

        let merged_invoice_ids: Vec<Uuid> = merged
            .iter()
            .filter(|e| matches!(e.source, EventSource::Invoice { .. }))
            .map(|e| e.id)
            .collect();
        let invoice_ids: Vec<Uuid> = invoices.iter().map(|e| e.id).collect();
        prop_assert_eq!(merged_invoice_ids, invoice_ids);

        let merged_entry_ids: Vec<Uuid> = merged
            .iter()
            .filter(|e| matches!(e.source, EventSource::Ledger { .. }))
            .map(|e| e.id)
            .collect();
        let entry_ids: Vec<Uuid> = entries.iter().map(|e| e.id).collect();
        prop_assert_eq!(merged_entry_ids, entry_ids);
    }

    /// Each line's balance moves from the previous one by exactly the
    /// line's signed amount.
    #[test]
    fn prop_running_balance_steps_by_signed_amount(
        invoices in invoice_stream_strategy(),
        entries in ledger_stream_strategy(),
    ) {
        let lines = StatementBuilder::build(invoices, entries);

        let mut previous = Decimal::ZERO;
        for line in &lines {
            let step = line.kind.apply(previous, line.amount);
            prop_assert_eq!(line.balance, step);
            previous = line.balance;
        }
    }

    /// Reads are idempotent: building twice from the same rows yields
    /// identical statements.
    #[test]
    fn prop_build_is_deterministic(
        invoices in invoice_stream_strategy(),
        entries in ledger_stream_strategy(),
    ) {
        let first = StatementBuilder::build(invoices.clone(), entries.clone());
        let second = StatementBuilder::build(invoices, entries);
        prop_assert_eq!(first, second);
    }
}
