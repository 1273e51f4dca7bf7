//! In-process order service
//!
//! Stands in for the remote order service: it assigns ids, remembers the last persisted
//! status of every order and answers after a configurable delay. Availability and
//! one-shot failures can be switched on to exercise the error paths.

use crate::core::Config;
use crate::orders::traits::{GatewayError, OrderGateway};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared::order::{OrderIdentity, OrderStatus, OrderSubmission, StatusChange};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use super::order_number::OrderNumberIssuer;

#[derive(Debug)]
pub struct SimulatedGateway {
    issuer: OrderNumberIssuer,
    latency: Duration,
    available: AtomicBool,
    fail_next_status: AtomicBool,
    status_writes: AtomicUsize,
    /// order id -> last persisted status
    persisted: RwLock<HashMap<String, OrderStatus>>,
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl SimulatedGateway {
    pub fn new(latency: Duration) -> Self {
        Self {
            issuer: OrderNumberIssuer::new(),
            latency,
            available: AtomicBool::new(true),
            fail_next_status: AtomicBool::new(false),
            status_writes: AtomicUsize::new(0),
            persisted: RwLock::new(HashMap::new()),
        }
    }

    /// Gateway answering after `STATUS_UPDATE_DELAY_MS`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.status_update_delay())
    }

    /// Take the service up or down
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Make the next status update fail once
    pub fn fail_next_status_update(&self) {
        self.fail_next_status.store(true, Ordering::SeqCst);
    }

    /// Number of successful status writes
    pub fn status_write_count(&self) -> usize {
        self.status_writes.load(Ordering::SeqCst)
    }

    pub fn persisted_status(&self, order_id: &str) -> Option<OrderStatus> {
        self.persisted.read().get(order_id).copied()
    }

    async fn round_trip(&self) -> Result<(), GatewayError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if !self.available.load(Ordering::SeqCst) {
            return Err(GatewayError::Unavailable("order service is offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderGateway for SimulatedGateway {
    async fn submit_order(
        &self,
        submission: &OrderSubmission,
    ) -> Result<OrderIdentity, GatewayError> {
        self.round_trip().await?;
        if submission.items.is_empty() {
            return Err(GatewayError::Rejected("order has no items".into()));
        }

        let identity = self.issuer.issue();
        self.persisted
            .write()
            .insert(identity.id.clone(), OrderStatus::Waiting);
        tracing::debug!(
            order_id = %identity.id,
            order_number = %identity.order_number,
            "Order persisted"
        );
        Ok(identity)
    }

    async fn persist_status(&self, change: &StatusChange) -> Result<(), GatewayError> {
        self.round_trip().await?;
        if self.fail_next_status.swap(false, Ordering::SeqCst) {
            return Err(GatewayError::Unavailable("status write timed out".into()));
        }

        let mut persisted = self.persisted.write();
        let Some(status) = persisted.get_mut(&change.order_id) else {
            return Err(GatewayError::Rejected(format!(
                "unknown order {}",
                change.order_id
            )));
        };
        *status = change.status;
        self.status_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::order::LineItem;

    fn submission() -> OrderSubmission {
        let items = vec![LineItem::new("m1", "Nasi Goreng", Decimal::from(25000), 2)];
        OrderSubmission {
            table_number: 2,
            total: Decimal::from(50000),
            items,
        }
    }

    #[tokio::test]
    async fn test_submit_assigns_identity() {
        let gateway = SimulatedGateway::default();
        let identity = gateway.submit_order(&submission()).await.unwrap();

        assert!(identity.order_number.starts_with("ORD"));
        assert_eq!(gateway.persisted_status(&identity.id), Some(OrderStatus::Waiting));
    }

    #[tokio::test]
    async fn test_persist_status() {
        let gateway = SimulatedGateway::default();
        let identity = gateway.submit_order(&submission()).await.unwrap();

        gateway
            .persist_status(&StatusChange::new(&identity.id, OrderStatus::Cooking))
            .await
            .unwrap();
        assert_eq!(gateway.persisted_status(&identity.id), Some(OrderStatus::Cooking));
        assert_eq!(gateway.status_write_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_injection_is_one_shot() {
        let gateway = SimulatedGateway::default();
        let identity = gateway.submit_order(&submission()).await.unwrap();
        let change = StatusChange::new(&identity.id, OrderStatus::Ready);

        gateway.fail_next_status_update();
        assert!(matches!(
            gateway.persist_status(&change).await,
            Err(GatewayError::Unavailable(_))
        ));
        assert_eq!(gateway.persisted_status(&identity.id), Some(OrderStatus::Waiting));

        gateway.persist_status(&change).await.unwrap();
        assert_eq!(gateway.persisted_status(&identity.id), Some(OrderStatus::Ready));
    }

    #[tokio::test]
    async fn test_unknown_order_rejected() {
        let gateway = SimulatedGateway::default();
        let result = gateway
            .persist_status(&StatusChange::new("missing", OrderStatus::Done))
            .await;
        assert!(matches!(result, Err(GatewayError::Rejected(_))));
    }

    #[tokio::test]
    async fn test_offline() {
        let gateway = SimulatedGateway::default();
        gateway.set_available(false);
        assert!(matches!(
            gateway.submit_order(&submission()).await,
            Err(GatewayError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_latency_from_config() {
        let config = Config::from_lookup(|key| match key {
            "STATUS_UPDATE_DELAY_MS" => Some("20".to_string()),
            _ => None,
        });
        let gateway = SimulatedGateway::from_config(&config);

        let started = std::time::Instant::now();
        gateway.submit_order(&submission()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
