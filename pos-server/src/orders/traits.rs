//! Collaborator seams of the order engine
//!
//! The engine never talks to a database or network itself. It reads the menu through a
//! [`CatalogSource`] and hands submitted orders and status changes to an
//! [`OrderGateway`], which owns ids and durability.

use async_trait::async_trait;
use shared::models::CatalogItem;
use shared::order::{OrderIdentity, OrderSubmission, StatusChange};
use thiserror::Error;

/// Read access to the current menu
pub trait CatalogSource: Send + Sync {
    /// All catalog items in menu order, available or not
    fn catalog(&self) -> Vec<CatalogItem>;
}

/// Failures reported by the external order service
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Order service rejected the request: {0}")]
    Rejected(String),

    #[error("Order service unavailable: {0}")]
    Unavailable(String),
}

/// The external service layer that persists orders
///
/// Each call completes exactly once, with success or a [`GatewayError`]. Callers only
/// adopt a change after the call succeeded.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Persist a completed draft; the service assigns id and order number
    async fn submit_order(&self, submission: &OrderSubmission)
    -> Result<OrderIdentity, GatewayError>;

    /// Persist a status change of an existing order
    async fn persist_status(&self, change: &StatusChange) -> Result<(), GatewayError>;
}
