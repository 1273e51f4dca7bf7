//! Value types exchanged between the aggregator, the lifecycle controller and the
//! external order service

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::snapshot::OrderStatus;

// ============================================================================
// Line Items
// ============================================================================

/// One row of an order: a catalog reference plus a quantity
///
/// `name` and `unit_price` are snapshotted from the catalog when the item is first
/// added and never re-read afterwards. `quantity` is always >= 1; the aggregator
/// drops a line item instead of storing a non-positive quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Catalog item ID (back-reference, not ownership)
    pub catalog_id: String,
    /// Name snapshot
    pub name: String,
    /// Unit price snapshot
    pub unit_price: Decimal,
    pub quantity: i32,
}

impl LineItem {
    pub fn new(
        catalog_id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: i32,
    ) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// `unit_price * quantity`, exact; `None` when the product overflows
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

// ============================================================================
// Boundary Payloads
// ============================================================================

/// Completed draft handed to the external order service for persistence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSubmission {
    pub table_number: i32,
    pub items: Vec<LineItem>,
    pub total: Decimal,
}

/// Identity minted by the external order service for a submitted draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderIdentity {
    /// Order ID (opaque, unique)
    pub id: String,
    /// Human-facing order number (e.g. printed on the kitchen ticket)
    pub order_number: String,
}

impl OrderIdentity {
    pub fn new(id: impl Into<String>, order_number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            order_number: order_number.into(),
        }
    }
}

/// Status write emitted to the external order service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusChange {
    pub order_id: String,
    pub status: OrderStatus,
}

impl StatusChange {
    pub fn new(order_id: impl Into<String>, status: OrderStatus) -> Self {
        Self {
            order_id: order_id.into(),
            status,
        }
    }
}
