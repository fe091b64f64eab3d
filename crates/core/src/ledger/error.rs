//! Ledger entry error types.

use thiserror::Error;

/// Errors that can occur while validating a ledger entry.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Amount must be positive at currency precision.
    #[error("Entry amount must be a positive amount with at most two decimal places")]
    InvalidAmount,

    /// Category must not be empty.
    #[error("Entry category must not be empty")]
    EmptyCategory,

    /// Description must not be empty.
    #[error("Entry description must not be empty")]
    EmptyDescription,

    /// Income entries must state how they were settled.
    #[error("Income entries require a payment method")]
    MissingPaymentMethod,
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::EmptyCategory => "EMPTY_CATEGORY",
            Self::EmptyDescription => "EMPTY_DESCRIPTION",
            Self::MissingPaymentMethod => "MISSING_PAYMENT_METHOD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::InvalidAmount.error_code(), "INVALID_AMOUNT");
        assert_eq!(
            LedgerError::MissingPaymentMethod.error_code(),
            "MISSING_PAYMENT_METHOD"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LedgerError::EmptyCategory.to_string(),
            "Entry category must not be empty"
        );
    }
}
