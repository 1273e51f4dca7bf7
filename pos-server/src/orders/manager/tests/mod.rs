use super::*;
use crate::orders::traits::GatewayError;
use crate::services::{CatalogService, SimulatedGateway};
use rust_decimal::Decimal;
use shared::order::{OrderEventType, ValidationError};
use std::time::Duration;

struct TestEnv {
    manager: OrdersManager,
    gateway: Arc<SimulatedGateway>,
    catalog: Arc<CatalogService>,
}

fn test_menu() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("m1", "Nasi Goreng", Decimal::from(25000)),
        CatalogItem::new("m2", "Es Jeruk", Decimal::from(15000)),
        CatalogItem::new("m3", "Nasi Uduk", Decimal::from(20000)).with_available(false),
        CatalogItem::new("m4", "Mie Goreng", Decimal::from(22000)),
    ]
}

fn create_test_env() -> TestEnv {
    create_test_env_with_latency(Duration::ZERO)
}

fn create_test_env_with_latency(latency: Duration) -> TestEnv {
    let catalog = Arc::new(CatalogService::new());
    catalog.load(test_menu()).unwrap();
    let gateway = Arc::new(SimulatedGateway::new(latency));
    let manager = OrdersManager::new(gateway.clone(), catalog.clone());
    TestEnv {
        manager,
        gateway,
        catalog,
    }
}

fn create_test_manager() -> OrdersManager {
    create_test_env().manager
}

// ========================================================================
// Helper: build a draft from catalog ids and quantities
// ========================================================================

fn draft_with(env: &TestEnv, table_number: i32, lines: &[(&str, i32)]) -> DraftOrder {
    lines
        .iter()
        .fold(DraftOrder::new(table_number), |draft, (id, quantity)| {
            let item = env.catalog.get(id).unwrap();
            let draft = draft.with_item(&item);
            draft.with_quantity(id, *quantity)
        })
}

async fn submit_order(env: &TestEnv, table_number: i32, lines: &[(&str, i32)]) -> Order {
    let draft = draft_with(env, table_number, lines);
    env.manager.submit_draft(&draft).await.unwrap()
}

mod test_core;
