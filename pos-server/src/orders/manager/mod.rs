//! OrdersManager - the service-layer caller of the order engine
//!
//! This module handles:
//! - Submitting completed drafts to the order service
//! - Serialized status updates per order
//! - The in-memory order book of confirmed orders
//! - Event broadcasting with process-wide sequence numbers
//!
//! # Status Update Flow
//!
//! ```text
//! update_status(order_id, status)
//!     ├─ 1. Acquire the per-order lock (unknown id: OrderNotFound)
//!     ├─ 2. Look up the confirmed order
//!     ├─ 3. lifecycle::transition (no-op returns early)
//!     ├─ 4. Await the order service
//!     ├─ 5. Store the new order (only on success)
//!     ├─ 6. Broadcast StatusChanged
//!     └─ 7. Return the order
//! ```

mod error;
pub use error::*;

use super::aggregator;
use super::draft::DraftOrder;
use super::lifecycle;
use super::traits::{CatalogSource, OrderGateway};
use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use shared::models::CatalogItem;
use shared::order::{EventPayload, Order, OrderEvent, OrderStatus, StatusChange};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 4096;

/// Confirmed orders plus their arrival order
#[derive(Debug, Default)]
struct OrderBook {
    orders: HashMap<String, Order>,
    arrival: Vec<String>,
}

/// OrdersManager for order submission and status updates
///
/// Only changes confirmed by the [`OrderGateway`] reach the order book. The `epoch`
/// field is a unique identifier generated on each startup so subscribers can detect a
/// restart and drop their cached view.
pub struct OrdersManager {
    gateway: Arc<dyn OrderGateway>,
    catalog: Arc<dyn CatalogSource>,
    book: RwLock<OrderBook>,
    /// One async lock per order in the book, serializing status updates
    order_locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
    event_tx: broadcast::Sender<OrderEvent>,
    sequence: AtomicU64,
    epoch: String,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager")
            .field("orders", &self.book.read().orders.len())
            .field("event_tx", &"<broadcast::Sender>")
            .field("epoch", &self.epoch)
            .finish()
    }
}

impl OrdersManager {
    pub fn new(gateway: Arc<dyn OrderGateway>, catalog: Arc<dyn CatalogSource>) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(epoch = %epoch, "OrdersManager started with new epoch");
        Self {
            gateway,
            catalog,
            book: RwLock::new(OrderBook::default()),
            order_locks: Mutex::new(HashMap::new()),
            event_tx,
            sequence: AtomicU64::new(0),
            epoch,
        }
    }

    /// Get the server epoch (unique instance ID)
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    /// Subscribe to event broadcasts
    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.event_tx.subscribe()
    }

    /// Last sequence number handed out
    pub fn current_sequence(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    // ========== Catalog ==========

    /// Catalog items that can be added to a draft, filtered by name
    pub fn selectable_items(&self, search_term: &str) -> Vec<CatalogItem> {
        aggregator::filter_selectable(&self.catalog.catalog(), search_term)
    }

    // ========== Commands ==========

    /// Submit a completed draft
    ///
    /// The draft is validated before the order service is contacted. The new order
    /// enters the order book in status `waiting` once the service assigned its id.
    pub async fn submit_draft(&self, draft: &DraftOrder) -> ManagerResult<Order> {
        let submission = draft.to_submission()?;

        let identity = match self.gateway.submit_order(&submission).await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(
                    table_number = submission.table_number,
                    error = %e,
                    "Order submission failed"
                );
                return Err(e.into());
            }
        };

        let order = lifecycle::create_order(submission.table_number, submission.items, identity)?;

        {
            let mut book = self.book.write();
            if book.orders.contains_key(&order.id) {
                // Already persisted by the order service, needs manual reconciliation
                tracing::error!(
                    order_id = %order.id,
                    order_number = %order.order_number,
                    table_number = order.table_number,
                    "Order service returned an id already in the order book"
                );
                return Err(ManagerError::DuplicateOrder(order.id));
            }
            book.arrival.push(order.id.clone());
            book.orders.insert(order.id.clone(), order.clone());
            self.order_locks
                .lock()
                .insert(order.id.clone(), Arc::default());
        }

        tracing::info!(
            order_id = %order.id,
            order_number = %order.order_number,
            table_number = order.table_number,
            total = %order.total,
            "Order submitted"
        );
        let resource = format!("order:{}", order.id);
        let details = format!("table {} total {}", order.table_number, order.total);
        crate::audit_log!("order_created", resource.as_str(), details.as_str());

        self.emit(
            &order.id,
            EventPayload::OrderCreated {
                order_number: order.order_number.clone(),
                table_number: order.table_number,
                total: order.total,
                item_count: order.item_count(),
            },
        );

        Ok(order)
    }

    /// Move an order to `new_status`
    ///
    /// Re-selecting the current status returns the order without contacting the order
    /// service. When the service call fails the stored order keeps its previous status
    /// and the service error is returned.
    pub async fn update_status(
        &self,
        order_id: &str,
        new_status: OrderStatus,
    ) -> ManagerResult<Order> {
        self.change_status(order_id, |_| new_status).await
    }

    /// [`Self::update_status`] for a raw status value (e.g. from a dropdown)
    pub async fn update_status_str(&self, order_id: &str, raw_status: &str) -> ManagerResult<Order> {
        let new_status: OrderStatus = raw_status.parse()?;
        self.update_status(order_id, new_status).await
    }

    /// Move an order one step forward; a done order stays done
    pub async fn advance_status(&self, order_id: &str) -> ManagerResult<Order> {
        self.change_status(order_id, |order| {
            lifecycle::next_status(order.status).unwrap_or(order.status)
        })
        .await
    }

    async fn change_status<F>(&self, order_id: &str, target: F) -> ManagerResult<Order>
    where
        F: FnOnce(&Order) -> OrderStatus,
    {
        let lock = self
            .order_lock(order_id)
            .ok_or_else(|| ManagerError::OrderNotFound(order_id.to_string()))?;
        let _guard = lock.lock().await;

        let current = self
            .get_order(order_id)
            .ok_or_else(|| ManagerError::OrderNotFound(order_id.to_string()))?;
        let next = lifecycle::transition(&current, target(&current));

        if next.status == current.status {
            tracing::debug!(order_id = %order_id, status = %current.status, "Status unchanged");
            return Ok(current);
        }

        let change = StatusChange::new(order_id, next.status);
        if let Err(e) = self.gateway.persist_status(&change).await {
            tracing::warn!(
                order_id = %order_id,
                from = %current.status,
                to = %next.status,
                error = %e,
                "Status update failed, keeping previous status"
            );
            return Err(e.into());
        }

        self.book
            .write()
            .orders
            .insert(order_id.to_string(), next.clone());

        tracing::info!(
            order_id = %order_id,
            from = %current.status,
            to = %next.status,
            "Order status changed"
        );
        let resource = format!("order:{}", order_id);
        let details = format!("{} -> {}", current.status, next.status);
        crate::audit_log!("status_change", resource.as_str(), details.as_str());

        self.emit(
            order_id,
            EventPayload::StatusChanged {
                previous: current.status,
                current: next.status,
            },
        );

        Ok(next)
    }

    // ========== Queries ==========

    pub fn get_order(&self, order_id: &str) -> Option<Order> {
        self.book.read().orders.get(order_id).cloned()
    }

    /// All confirmed orders in submission order
    pub fn list_orders(&self) -> Vec<Order> {
        let book = self.book.read();
        book.arrival
            .iter()
            .filter_map(|id| book.orders.get(id).cloned())
            .collect()
    }

    pub fn orders_by_status(&self, status: OrderStatus) -> Vec<Order> {
        self.list_orders()
            .into_iter()
            .filter(|o| o.status == status)
            .collect()
    }

    /// Orders still in the kitchen flow (not done)
    pub fn active_orders(&self) -> Vec<Order> {
        self.list_orders()
            .into_iter()
            .filter(|o| !o.is_done())
            .collect()
    }

    // ========== Internals ==========

    /// Lock of a booked order, `None` for unknown ids
    fn order_lock(&self, order_id: &str) -> Option<Arc<tokio::sync::Mutex<()>>> {
        self.order_locks.lock().get(order_id).cloned()
    }

    fn emit(&self, order_id: &str, payload: EventPayload) {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let event = OrderEvent {
            event_id: uuid::Uuid::new_v4().to_string(),
            sequence,
            order_id: order_id.to_string(),
            timestamp: Utc::now().timestamp_millis(),
            event_type: payload.event_type(),
            payload,
        };
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests;
