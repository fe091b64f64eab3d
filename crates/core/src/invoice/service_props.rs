//! Property-based tests for invoice totals.

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::service::InvoiceService;
use super::types::LineItemInput;

fn quantity_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000i64).prop_map(Decimal::from)
}

fn price_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_00i64).prop_map(|n| Decimal::new(n, 2))
}

fn vat_strategy() -> impl Strategy<Value = Decimal> {
    prop_oneof![Just(0i64), Just(1), Just(8), Just(18), Just(20)].prop_map(Decimal::from)
}

fn discount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=100i64).prop_map(Decimal::from)
}

fn line_strategy() -> impl Strategy<Value = LineItemInput> {
    (
        quantity_strategy(),
        price_strategy(),
        vat_strategy(),
        discount_strategy(),
    )
        .prop_map(|(quantity, unit_price, vat_rate, discount)| LineItemInput {
            product_id: Uuid::nil(),
            quantity,
            unit_price,
            vat_rate,
            discount,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    /// total = subtotal + vat_total, always.
    #[test]
    fn prop_total_is_subtotal_plus_vat(lines in prop::collection::vec(line_strategy(), 1..10)) {
        let resolved: Vec<_> = lines
            .iter()
            .map(|l| {
                let input = crate::invoice::CreateInvoiceInput {
                    direction: crate::invoice::InvoiceDirection::Sale,
                    number: "N-1".to_string(),
                    date: chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                    party_id: Uuid::nil(),
                    items: vec![l.clone()],
                };
                InvoiceService::validate_and_total(&input, |_| Ok(())).unwrap().0.remove(0)
            })
            .collect();

        let totals = InvoiceService::totals(&resolved);
        prop_assert_eq!(totals.total, totals.subtotal + totals.vat_total);
    }

    /// Each resolved line satisfies line_total = line_net + line_vat, with
    /// all three non-negative and at currency precision.
    #[test]
    fn prop_line_amounts_consistent(line in line_strategy()) {
        let input = crate::invoice::CreateInvoiceInput {
            direction: crate::invoice::InvoiceDirection::Purchase,
            number: "N-1".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            party_id: Uuid::nil(),
            items: vec![line],
        };
        let (items, _) = InvoiceService::validate_and_total(&input, |_| Ok(())).unwrap();
        let item = &items[0];

        prop_assert_eq!(item.line_total, item.line_net + item.line_vat);
        prop_assert!(item.line_net >= Decimal::ZERO);
        prop_assert!(item.line_vat >= Decimal::ZERO);
        prop_assert!(item.line_net.scale() <= 2);
        prop_assert!(item.line_vat.scale() <= 2);
    }

    /// A larger discount never yields a larger line total.
    #[test]
    fn prop_discount_monotone(
        quantity in quantity_strategy(),
        unit_price in price_strategy(),
        vat in vat_strategy(),
        d1 in discount_strategy(),
        d2 in discount_strategy(),
    ) {
        prop_assume!(d1 <= d2);
        let make = |discount| {
            let input = crate::invoice::CreateInvoiceInput {
                direction: crate::invoice::InvoiceDirection::Sale,
                number: "N-1".to_string(),
                date: chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                party_id: Uuid::nil(),
                items: vec![LineItemInput {
                    product_id: Uuid::nil(),
                    quantity,
                    unit_price,
                    vat_rate: vat,
                    discount,
                }],
            };
            InvoiceService::validate_and_total(&input, |_| Ok(())).unwrap().1.total
        };
        prop_assert!(make(d1) >= make(d2));
    }
}
