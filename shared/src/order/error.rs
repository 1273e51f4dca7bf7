//! Validation errors raised by the order engine

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Locally recoverable validation failure
///
/// None of these are fatal: the caller is expected to surface the problem and
/// re-prompt the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Order must contain at least one item")]
    EmptyOrder,

    #[error("Table number must be at least 1, got {0}")]
    InvalidTable(i32),

    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Quantity out of range: {0}")]
    QuantityOutOfRange(i32),
}

/// Discriminant of [`ValidationError`] without its payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    EmptyOrder,
    InvalidTable,
    UnknownStatus,
    InvalidPrice,
    QuantityOutOfRange,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::EmptyOrder => ValidationErrorKind::EmptyOrder,
            ValidationError::InvalidTable(_) => ValidationErrorKind::InvalidTable,
            ValidationError::UnknownStatus(_) => ValidationErrorKind::UnknownStatus,
            ValidationError::InvalidPrice(_) => ValidationErrorKind::InvalidPrice,
            ValidationError::QuantityOutOfRange(_) => ValidationErrorKind::QuantityOutOfRange,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind() {
            ValidationErrorKind::EmptyOrder => ErrorCode::OrderEmpty,
            ValidationErrorKind::InvalidTable => ErrorCode::InvalidTableNumber,
            ValidationErrorKind::UnknownStatus => ErrorCode::UnknownOrderStatus,
            ValidationErrorKind::InvalidPrice => ErrorCode::ProductInvalidPrice,
            ValidationErrorKind::QuantityOutOfRange => ErrorCode::InvalidQuantity,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            ValidationError::InvalidTable(n) => app.with_detail("table_number", n),
            ValidationError::UnknownStatus(s) => app.with_detail("status", s),
            ValidationError::QuantityOutOfRange(q) => app.with_detail("quantity", q),
            _ => app,
        }
    }
}
