//! Running-balance annotation over merged event streams.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::merge::merge_by_creation;
use super::types::{EventSource, StatementEvent, StatementLine};

/// Builds statement lines from the party's event streams.
///
/// Pure function of its inputs: the same events always produce the same
/// lines, so reads are idempotent and need no locking.
pub struct StatementBuilder;

impl StatementBuilder {
    /// Merges the two streams and annotates each event with the running
    /// balance after it.
    ///
    /// The accumulator is seeded at zero and moves by each event's signed
    /// contribution (credit adds, debit subtracts). Because the signs come
    /// from the same table the balance mutation uses on write, the final
    /// line's balance equals the party's stored balance.
    #[must_use]
    pub fn build(
        invoices: Vec<StatementEvent>,
        entries: Vec<StatementEvent>,
    ) -> Vec<StatementLine> {
        let mut balance = Decimal::ZERO;
        merge_by_creation(invoices, entries)
            .into_iter()
            .map(|event| {
                balance += event.kind.signed_contribution(event.amount);
                Self::line(event, balance)
            })
            .collect()
    }

    /// Restricts lines to a business-date range.
    ///
    /// The range filters the output only; running balances are always
    /// accumulated over the whole history, so a filtered line still shows
    /// the true balance at that point in time.
    #[must_use]
    pub fn filter_range(
        lines: Vec<StatementLine>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Vec<StatementLine> {
        lines
            .into_iter()
            .filter(|line| from.is_none_or(|d| line.date >= d) && to.is_none_or(|d| line.date <= d))
            .collect()
    }

    fn line(event: StatementEvent, balance: Decimal) -> StatementLine {
        let (document_no, payment_method) = match &event.source {
            EventSource::Invoice { number } => (Some(number.clone()), None),
            EventSource::Ledger { payment_method } => (None, *payment_method),
        };

        StatementLine {
            id: event.id,
            date: event.date,
            description: event.description,
            kind: event.kind.txn_kind(),
            amount: event.amount,
            document: event.source.document_kind(),
            document_no,
            payment_method,
            balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::{EventKind, TxnKind};
    use crate::statement::types::DocumentKind;
    use chrono::{DateTime, FixedOffset};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(
        kind: EventKind,
        amount: Decimal,
        created_at: &str,
        date: NaiveDate,
    ) -> StatementEvent {
        let source = match kind {
            EventKind::SaleInvoice | EventKind::PurchaseInvoice => EventSource::Invoice {
                number: "F-1".to_string(),
            },
            EventKind::Income | EventKind::Expense => EventSource::Ledger {
                payment_method: None,
            },
        };
        StatementEvent {
            id: Uuid::new_v4(),
            date,
            created_at: ts(created_at),
            kind,
            amount,
            description: String::new(),
            source,
        }
    }

    // Concrete scenario: a sale invoice for 1000, then an income entry of
    // 500. Balances run -1000, -500; the final value matches what the
    // balance mutation leaves on the party row.
    #[test]
    fn test_sale_then_income_running_balance() {
        let invoice = event(
            EventKind::SaleInvoice,
            dec!(1000),
            "2026-01-01T09:00:00+00:00",
            day(2026, 1, 1),
        );
        let income = event(
            EventKind::Income,
            dec!(500),
            "2026-01-05T09:00:00+00:00",
            day(2026, 1, 5),
        );

        let lines = StatementBuilder::build(vec![invoice], vec![income]);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].kind, TxnKind::Debit);
        assert_eq!(lines[0].document, DocumentKind::Invoice);
        assert_eq!(lines[0].balance, dec!(-1000));
        assert_eq!(lines[1].kind, TxnKind::Credit);
        assert_eq!(lines[1].document, DocumentKind::Ledger);
        assert_eq!(lines[1].balance, dec!(-500));
    }

    #[test]
    fn test_empty_history_yields_no_lines() {
        assert!(StatementBuilder::build(vec![], vec![]).is_empty());
    }

    #[test]
    fn test_build_is_pure() {
        let invoice = event(
            EventKind::PurchaseInvoice,
            dec!(300),
            "2026-01-01T00:00:00+00:00",
            day(2026, 1, 1),
        );
        let first = StatementBuilder::build(vec![invoice.clone()], vec![]);
        let second = StatementBuilder::build(vec![invoice], vec![]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_invoice_lines_carry_document_number() {
        let invoice = event(
            EventKind::SaleInvoice,
            dec!(10),
            "2026-01-01T00:00:00+00:00",
            day(2026, 1, 1),
        );
        let lines = StatementBuilder::build(vec![invoice], vec![]);
        assert_eq!(lines[0].document_no.as_deref(), Some("F-1"));
        assert_eq!(lines[0].payment_method, None);
    }

    #[test]
    fn test_filter_range_keeps_accumulated_balances() {
        let early = event(
            EventKind::PurchaseInvoice,
            dec!(200),
            "2026-01-01T00:00:00+00:00",
            day(2026, 1, 1),
        );
        let late = event(
            EventKind::Income,
            dec!(100),
            "2026-02-01T00:00:00+00:00",
            day(2026, 2, 1),
        );

        let lines = StatementBuilder::build(vec![early], vec![late]);
        let filtered =
            StatementBuilder::filter_range(lines, Some(day(2026, 1, 15)), None);

        // Only the February line survives, but its balance still reflects
        // the January purchase.
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].balance, dec!(300));
    }

    #[test]
    fn test_filter_range_bounds_inclusive() {
        let e = event(
            EventKind::Expense,
            dec!(10),
            "2026-01-10T00:00:00+00:00",
            day(2026, 1, 10),
        );
        let lines = StatementBuilder::build(vec![], vec![e]);

        let kept = StatementBuilder::filter_range(
            lines.clone(),
            Some(day(2026, 1, 10)),
            Some(day(2026, 1, 10)),
        );
        assert_eq!(kept.len(), 1);

        let dropped =
            StatementBuilder::filter_range(lines, None, Some(day(2026, 1, 9)));
        assert!(dropped.is_empty());
    }
}
