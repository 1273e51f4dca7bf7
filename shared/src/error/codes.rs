//! Unified error codes for the POS order engine
//!
//! Error codes are organized by category:
//! - 4xxx: Order errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so that a front end written in any
/// language can match on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no line items
    OrderEmpty = 4101,
    /// Table number is not a positive integer
    InvalidTableNumber = 4102,
    /// Status is not one of the four lifecycle states
    UnknownOrderStatus = 4103,
    /// Line item quantity outside the accepted range
    InvalidQuantity = 4104,

    // ==================== 6xxx: Catalog ====================
    /// Catalog item price is negative, non-finite or too large
    ProductInvalidPrice = 6002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// The external order service rejected the request
    GatewayRejected = 9301,
    /// The external order service could not be reached
    GatewayUnavailable = 9302,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Order must contain at least one item",
            ErrorCode::InvalidTableNumber => "Table number must be at least 1",
            ErrorCode::UnknownOrderStatus => "Unknown order status",
            ErrorCode::InvalidQuantity => "Item quantity is out of range",

            ErrorCode::ProductInvalidPrice => "Invalid product price",

            ErrorCode::InternalError => "Internal server error",
            ErrorCode::GatewayRejected => "Order service rejected the request",
            ErrorCode::GatewayUnavailable => "Order service is unavailable",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4101 => Ok(ErrorCode::OrderEmpty),
            4102 => Ok(ErrorCode::InvalidTableNumber),
            4103 => Ok(ErrorCode::UnknownOrderStatus),
            4104 => Ok(ErrorCode::InvalidQuantity),

            // Catalog
            6002 => Ok(ErrorCode::ProductInvalidPrice),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9301 => Ok(ErrorCode::GatewayRejected),
            9302 => Ok(ErrorCode::GatewayUnavailable),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::OrderEmpty.code(), 4101);
        assert_eq!(ErrorCode::InvalidTableNumber.code(), 4102);
        assert_eq!(ErrorCode::UnknownOrderStatus.code(), 4103);
        assert_eq!(ErrorCode::GatewayUnavailable.code(), 9302);
    }

    #[test]
    fn test_try_from_rejects_unknown_value() {
        assert_eq!(ErrorCode::try_from(4103), Ok(ErrorCode::UnknownOrderStatus));
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ErrorCode::OrderEmpty).unwrap();
        assert_eq!(json, "4101");
        let code: ErrorCode = serde_json::from_str("4102").unwrap();
        assert_eq!(code, ErrorCode::InvalidTableNumber);
    }
}
