use std::sync::Arc;

use pos_server::{
    CatalogService, DraftOrder, OrdersManager, SimulatedGateway, print_banner, setup_environment,
};
use rust_decimal::Decimal;
use shared::models::CatalogItem;

fn demo_menu() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("m1", "Nasi Goreng", Decimal::from(25000)).with_category("Makanan"),
        CatalogItem::new("m2", "Mie Goreng", Decimal::from(22000)).with_category("Makanan"),
        CatalogItem::new("m3", "Nasi Uduk", Decimal::from(20000))
            .with_category("Makanan")
            .with_available(false),
        CatalogItem::new("m4", "Es Jeruk", Decimal::from(15000)).with_category("Minuman"),
        CatalogItem::new("m5", "Teh Manis", Decimal::from(8000)).with_category("Minuman"),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, config, logging)
    let config = setup_environment()?;

    print_banner();
    tracing::info!(environment = %config.environment, "POS order engine starting...");

    // 2. Collaborators
    let catalog = Arc::new(CatalogService::new());
    catalog.load(demo_menu())?;
    let gateway = Arc::new(SimulatedGateway::from_config(&config));
    let manager = OrdersManager::new(gateway, catalog);

    let mut events = manager.subscribe();
    let listener = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            tracing::info!(
                sequence = event.sequence,
                order_id = %event.order_id,
                event_type = %event.event_type,
                "Event received"
            );
        }
    });

    // 3. Build a draft from the menu
    let selectable = manager.selectable_items("goreng");
    let mut draft = DraftOrder::new(config.default_table_number);
    for item in &selectable {
        draft = draft.with_item(item);
    }
    if let Some(drink) = manager.selectable_items("jeruk").first() {
        draft = draft.with_item(drink).with_item(drink);
    }
    let draft_total = draft.total()?;
    tracing::info!(
        table_number = draft.table_number,
        items = draft.items.len(),
        total = %draft_total,
        "Draft ready"
    );

    // 4. Submit and walk through the kitchen flow
    let order = manager.submit_draft(&draft).await?;
    tracing::info!(order_number = %order.order_number, status = %order.status, "Order placed");

    let mut current = order;
    while !current.is_done() {
        current = manager.advance_status(&current.id).await?;
        tracing::info!(order_number = %current.order_number, status = %current.status, "Order advanced");
    }

    drop(manager);
    listener.await?;

    tracing::info!("Demo session finished");
    Ok(())
}
