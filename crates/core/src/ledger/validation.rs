//! Business rule validation for ledger entries.

use tally_shared::types::is_valid_amount;

use super::error::LedgerError;
use super::types::{CreateEntryInput, EntryDirection};

/// Validates a ledger entry input before persistence.
///
/// # Errors
///
/// Returns `LedgerError` if the amount is not a positive two-decimal
/// amount, the category or description is blank, or an income entry
/// lacks a payment method.
pub fn validate_entry(input: &CreateEntryInput) -> Result<(), LedgerError> {
    if !is_valid_amount(input.amount) {
        return Err(LedgerError::InvalidAmount);
    }
    if input.category.trim().is_empty() {
        return Err(LedgerError::EmptyCategory);
    }
    if input.description.trim().is_empty() {
        return Err(LedgerError::EmptyDescription);
    }
    if input.direction == EntryDirection::Income && input.payment_method.is_none() {
        return Err(LedgerError::MissingPaymentMethod);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::types::PaymentMethod;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn entry(direction: EntryDirection) -> CreateEntryInput {
        CreateEntryInput {
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            direction,
            category: "Rent".to_string(),
            description: "February rent".to_string(),
            amount: dec!(750.00),
            payment_method: Some(PaymentMethod::BankTransfer),
            party_id: None,
        }
    }

    #[test]
    fn test_valid_entries_pass() {
        assert!(validate_entry(&entry(EntryDirection::Income)).is_ok());
        assert!(validate_entry(&entry(EntryDirection::Expense)).is_ok());

        // Party-linked entries validate the same way.
        let mut linked = entry(EntryDirection::Income);
        linked.party_id = Some(Uuid::new_v4());
        assert!(validate_entry(&linked).is_ok());
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-10))]
    #[case(dec!(0.001))]
    fn test_rejects_bad_amounts(#[case] amount: Decimal) {
        let mut bad = entry(EntryDirection::Expense);
        bad.amount = amount;
        assert!(matches!(
            validate_entry(&bad),
            Err(LedgerError::InvalidAmount)
        ));
    }

    #[test]
    fn test_rejects_blank_text_fields() {
        let mut bad = entry(EntryDirection::Expense);
        bad.category = "  ".to_string();
        assert!(matches!(
            validate_entry(&bad),
            Err(LedgerError::EmptyCategory)
        ));

        let mut bad = entry(EntryDirection::Expense);
        bad.description = String::new();
        assert!(matches!(
            validate_entry(&bad),
            Err(LedgerError::EmptyDescription)
        ));
    }

    #[test]
    fn test_income_requires_payment_method() {
        let mut bad = entry(EntryDirection::Income);
        bad.payment_method = None;
        assert!(matches!(
            validate_entry(&bad),
            Err(LedgerError::MissingPaymentMethod)
        ));

        // Expenses do not.
        let mut ok = entry(EntryDirection::Expense);
        ok.payment_method = None;
        assert!(validate_entry(&ok).is_ok());
    }
}
