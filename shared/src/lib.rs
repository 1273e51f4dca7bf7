//! Shared types for the POS order engine
//!
//! Catalog models, order value types, and the unified error codes used by
//! `pos-server` and by any front end that talks to it.

pub mod error;
pub mod models;
pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::CatalogItem;
pub use order::{
    LineItem, Order, OrderEvent, OrderIdentity, OrderStatus, OrderSubmission,
    StatusChange, ValidationError, ValidationErrorKind,
};
