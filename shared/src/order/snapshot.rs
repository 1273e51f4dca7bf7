//! Submitted order and its lifecycle status

use super::error::ValidationError;
use super::types::LineItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order status
///
/// Lifecycle order is `Waiting -> Cooking -> Ready -> Done`. The Indonesian labels shown
/// on the front desk screens are accepted as aliases when parsing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// New order, not yet picked up by the kitchen
    #[default]
    #[serde(alias = "menunggu")]
    Waiting,
    /// Being cooked
    #[serde(alias = "dimasak")]
    Cooking,
    /// Ready to be served to the table
    #[serde(alias = "siap")]
    Ready,
    /// Served and settled
    #[serde(alias = "selesai")]
    Done,
}

impl OrderStatus {
    /// All statuses in lifecycle order
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Waiting,
        OrderStatus::Cooking,
        OrderStatus::Ready,
        OrderStatus::Done,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Waiting => "waiting",
            OrderStatus::Cooking => "cooking",
            OrderStatus::Ready => "ready",
            OrderStatus::Done => "done",
        }
    }

    /// Zero-based position in the lifecycle
    pub const fn stage(&self) -> u8 {
        match self {
            OrderStatus::Waiting => 0,
            OrderStatus::Cooking => 1,
            OrderStatus::Ready => 2,
            OrderStatus::Done => 3,
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == OrderStatus::Done
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "waiting" | "menunggu" => Ok(OrderStatus::Waiting),
            "cooking" | "dimasak" => Ok(OrderStatus::Cooking),
            "ready" | "siap" => Ok(OrderStatus::Ready),
            "done" | "selesai" => Ok(OrderStatus::Done),
            _ => Err(ValidationError::UnknownStatus(raw.to_string())),
        }
    }
}

/// Submitted order
///
/// Built only by the lifecycle controller. `total` is derived from `items` at creation
/// time and is not meant to be set independently; [`Order::verify_total`] detects a
/// value that drifted from its items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Order ID (assigned by the external order service)
    pub id: String,
    /// Human-facing order number
    pub order_number: String,
    /// Table number (>= 1)
    pub table_number: i32,
    /// Line items, at most one per catalog item
    pub items: Vec<LineItem>,
    /// Sum of line totals
    pub total: Decimal,
    pub status: OrderStatus,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,
    /// Last status change timestamp (Unix milliseconds)
    pub updated_at: i64,
}

impl Order {
    /// Total number of portions across all line items
    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_done(&self) -> bool {
        self.status.is_terminal()
    }

    /// Line item for a catalog item, if present
    pub fn line_item(&self, catalog_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.catalog_id == catalog_id)
    }

    /// Check that `total` still matches the sum of line totals
    pub fn verify_total(&self) -> bool {
        let expected = self
            .items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| {
                item.line_total().and_then(|t| acc.checked_add(t))
            });
        expected == Some(self.total)
    }
}
