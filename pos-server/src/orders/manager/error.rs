use super::super::traits::GatewayError;
use shared::error::{AppError, ErrorCode};
use shared::order::ValidationError;
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order already exists: {0}")]
    DuplicateOrder(String),
}

impl ManagerError {
    /// Error code reported to front ends (they localize the message)
    pub fn code(&self) -> ErrorCode {
        match self {
            ManagerError::Validation(e) => e.code(),
            ManagerError::Gateway(GatewayError::Rejected(_)) => ErrorCode::GatewayRejected,
            ManagerError::Gateway(GatewayError::Unavailable(_)) => ErrorCode::GatewayUnavailable,
            ManagerError::OrderNotFound(_) => ErrorCode::OrderNotFound,
            ManagerError::DuplicateOrder(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::Validation(e) => e.into(),
            ManagerError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, format!("Order not found: {}", id))
                    .with_detail("order_id", id)
            }
            ManagerError::DuplicateOrder(id) => {
                AppError::with_message(
                    ErrorCode::InternalError,
                    format!("Order already exists: {}", id),
                )
                .with_detail("order_id", id)
            }
            other => {
                let code = other.code();
                if !code.category().is_user_recoverable() {
                    tracing::error!(error = %other, error_code = %code, "Order manager failure");
                }
                AppError::with_message(code, other.to_string())
            }
        }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
