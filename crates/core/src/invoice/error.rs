//! Invoice validation error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while validating an invoice.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// Invoice must have at least one line item.
    #[error("Invoice must have at least one line item")]
    EmptyItems,

    /// Invoice number must not be empty.
    #[error("Invoice number must not be empty")]
    EmptyNumber,

    /// Line quantity must be positive.
    #[error("Line quantity must be positive")]
    InvalidQuantity,

    /// Unit price must be positive.
    #[error("Unit price must be positive")]
    InvalidUnitPrice,

    /// Discount must be between 0 and 100 percent.
    #[error("Discount must be between 0 and 100 percent")]
    InvalidDiscount,

    /// VAT rate must not be negative.
    #[error("VAT rate must not be negative")]
    InvalidVatRate,

    /// Referenced product does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),
}

impl InvoiceError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyItems => "EMPTY_ITEMS",
            Self::EmptyNumber => "EMPTY_NUMBER",
            Self::InvalidQuantity => "INVALID_QUANTITY",
            Self::InvalidUnitPrice => "INVALID_UNIT_PRICE",
            Self::InvalidDiscount => "INVALID_DISCOUNT",
            Self::InvalidVatRate => "INVALID_VAT_RATE",
            Self::ProductNotFound(_) => "PRODUCT_NOT_FOUND",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::ProductNotFound(_) => 404,
            _ => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(InvoiceError::EmptyItems.error_code(), "EMPTY_ITEMS");
        assert_eq!(InvoiceError::InvalidQuantity.error_code(), "INVALID_QUANTITY");
        assert_eq!(
            InvoiceError::ProductNotFound(Uuid::nil()).error_code(),
            "PRODUCT_NOT_FOUND"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(InvoiceError::EmptyItems.http_status_code(), 400);
        assert_eq!(InvoiceError::InvalidDiscount.http_status_code(), 400);
        assert_eq!(
            InvoiceError::ProductNotFound(Uuid::nil()).http_status_code(),
            404
        );
    }
}
