//! Order types
//!
//! - Line items and the boundary payloads exchanged with the order service
//! - The submitted [`Order`] and its [`OrderStatus`]
//! - Events broadcast after confirmed changes
//! - Validation errors

pub mod error;
pub mod event;
pub mod snapshot;
pub mod types;

// Re-exports
pub use error::{ValidationError, ValidationErrorKind};
pub use event::{EventPayload, OrderEvent, OrderEventType};
pub use snapshot::{Order, OrderStatus};
pub use types::*;
