//! Order lifecycle controller
//!
//! ```text
//! waiting -> cooking -> ready -> done
//! ```
//!
//! The controller builds orders and computes status transitions. Transitions are
//! permissive: any of the four statuses may follow any other, because the front desk
//! lets staff pick any status at any time. Regressions are allowed but logged.
//!
//! Everything here is pure. Persisting a transition is the caller's job, and the caller
//! must only adopt the returned order once the order service confirmed the write.

use chrono::Utc;
use shared::order::{LineItem, Order, OrderIdentity, OrderStatus, ValidationError};

use super::{aggregator, money};

/// Build a new order in status `waiting`
///
/// `identity` comes from the external order service. Fails with `EmptyOrder` when
/// `items` is empty (checked first) and `InvalidTable` when `table_number < 1`.
pub fn create_order(
    table_number: i32,
    items: Vec<LineItem>,
    identity: OrderIdentity,
) -> Result<Order, ValidationError> {
    aggregator::validate_draft(&items)?;
    if table_number < 1 {
        return Err(ValidationError::InvalidTable(table_number));
    }

    let now = Utc::now().timestamp_millis();
    let total = money::compute_total(&items)?;

    Ok(Order {
        id: identity.id,
        order_number: identity.order_number,
        table_number,
        items,
        total,
        status: OrderStatus::Waiting,
        created_at: now,
        updated_at: now,
    })
}

/// Move `order` to `new_status`
///
/// Re-selecting the current status returns the order unchanged; it is not an error.
pub fn transition(order: &Order, new_status: OrderStatus) -> Order {
    if order.status == new_status {
        return order.clone();
    }

    if !is_forward(order.status, new_status) {
        tracing::warn!(
            order_id = %order.id,
            from = %order.status,
            to = %new_status,
            "Order status moved backwards"
        );
    }

    Order {
        status: new_status,
        updated_at: Utc::now().timestamp_millis().max(order.updated_at),
        ..order.clone()
    }
}

/// [`transition`] for a raw status value
///
/// Anything outside the four lifecycle statuses fails with `UnknownStatus`.
pub fn transition_str(order: &Order, raw_status: &str) -> Result<Order, ValidationError> {
    let new_status: OrderStatus = raw_status.parse()?;
    Ok(transition(order, new_status))
}

/// Whether `to` comes after `from` in the lifecycle
pub fn is_forward(from: OrderStatus, to: OrderStatus) -> bool {
    to.stage() > from.stage()
}

/// Next lifecycle status, `None` once the order is done
pub fn next_status(status: OrderStatus) -> Option<OrderStatus> {
    match status {
        OrderStatus::Waiting => Some(OrderStatus::Cooking),
        OrderStatus::Cooking => Some(OrderStatus::Ready),
        OrderStatus::Ready => Some(OrderStatus::Done),
        OrderStatus::Done => None,
    }
}
