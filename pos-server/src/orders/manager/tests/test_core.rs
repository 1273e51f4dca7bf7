use super::*;

#[tokio::test]
async fn test_submit_draft() {
    let env = create_test_env();
    let order = submit_order(&env, 3, &[("m1", 2), ("m2", 1)]).await;

    assert_eq!(order.status, OrderStatus::Waiting);
    assert_eq!(order.table_number, 3);
    assert_eq!(order.total, Decimal::from(65000));
    assert!(order.order_number.starts_with("ORD"));
    assert_eq!(env.gateway.persisted_status(&order.id), Some(OrderStatus::Waiting));

    let stored = env.manager.get_order(&order.id).unwrap();
    assert_eq!(stored, order);
}

#[tokio::test]
async fn test_submit_empty_draft_does_not_reach_gateway() {
    let manager = create_test_manager();
    let result = manager.submit_draft(&DraftOrder::new(3)).await;

    assert!(matches!(
        result,
        Err(ManagerError::Validation(ValidationError::EmptyOrder))
    ));
    assert!(manager.list_orders().is_empty());
}

#[tokio::test]
async fn test_submit_invalid_table() {
    let env = create_test_env();
    let draft = draft_with(&env, 0, &[("m1", 1)]);

    let result = env.manager.submit_draft(&draft).await;
    assert!(matches!(
        result,
        Err(ManagerError::Validation(ValidationError::InvalidTable(0)))
    ));
}

#[tokio::test]
async fn test_update_status() {
    let env = create_test_env();
    let order = submit_order(&env, 1, &[("m1", 1)]).await;

    let cooking = env
        .manager
        .update_status(&order.id, OrderStatus::Cooking)
        .await
        .unwrap();

    assert_eq!(cooking.status, OrderStatus::Cooking);
    assert_eq!(cooking.items, order.items);
    assert_eq!(
        env.manager.get_order(&order.id).unwrap().status,
        OrderStatus::Cooking
    );
    assert_eq!(env.gateway.persisted_status(&order.id), Some(OrderStatus::Cooking));
    assert_eq!(env.gateway.status_write_count(), 1);
}

#[tokio::test]
async fn test_same_status_skips_gateway() {
    let env = create_test_env();
    let order = submit_order(&env, 1, &[("m1", 1)]).await;
    env.manager
        .update_status(&order.id, OrderStatus::Ready)
        .await
        .unwrap();

    let again = env
        .manager
        .update_status(&order.id, OrderStatus::Ready)
        .await
        .unwrap();

    assert_eq!(again.status, OrderStatus::Ready);
    assert_eq!(env.gateway.status_write_count(), 1);
}

#[tokio::test]
async fn test_failed_status_write_keeps_previous_status() {
    let env = create_test_env();
    let order = submit_order(&env, 1, &[("m1", 1)]).await;

    env.gateway.fail_next_status_update();
    let result = env
        .manager
        .update_status(&order.id, OrderStatus::Cooking)
        .await;

    assert!(matches!(
        result,
        Err(ManagerError::Gateway(GatewayError::Unavailable(_)))
    ));
    assert_eq!(
        env.manager.get_order(&order.id).unwrap().status,
        OrderStatus::Waiting
    );

    // retry with the same target succeeds
    let retried = env
        .manager
        .update_status(&order.id, OrderStatus::Cooking)
        .await
        .unwrap();
    assert_eq!(retried.status, OrderStatus::Cooking);
}

#[tokio::test]
async fn test_update_unknown_order() {
    let manager = create_test_manager();
    let result = manager.update_status("missing", OrderStatus::Done).await;
    assert!(matches!(result, Err(ManagerError::OrderNotFound(id)) if id == "missing"));
}

#[tokio::test]
async fn test_update_status_str() {
    let env = create_test_env();
    let order = submit_order(&env, 1, &[("m2", 2)]).await;

    let ready = env.manager.update_status_str(&order.id, "siap").await.unwrap();
    assert_eq!(ready.status, OrderStatus::Ready);

    let result = env.manager.update_status_str(&order.id, "archived").await;
    assert!(matches!(
        result,
        Err(ManagerError::Validation(ValidationError::UnknownStatus(s))) if s == "archived"
    ));
    assert_eq!(
        env.manager.get_order(&order.id).unwrap().status,
        OrderStatus::Ready
    );
}

#[tokio::test]
async fn test_events_are_broadcast() {
    let env = create_test_env();
    let mut rx = env.manager.subscribe();

    let order = submit_order(&env, 4, &[("m1", 1), ("m4", 1)]).await;
    env.manager
        .update_status(&order.id, OrderStatus::Cooking)
        .await
        .unwrap();

    let created = rx.recv().await.unwrap();
    assert_eq!(created.event_type, OrderEventType::OrderCreated);
    assert_eq!(created.order_id, order.id);
    assert_eq!(created.sequence, 1);
    match created.payload {
        EventPayload::OrderCreated {
            total, item_count, ..
        } => {
            assert_eq!(total, Decimal::from(47000));
            assert_eq!(item_count, 2);
        }
        other => panic!("unexpected payload: {:?}", other),
    }

    let changed = rx.recv().await.unwrap();
    assert_eq!(changed.event_type, OrderEventType::StatusChanged);
    assert_eq!(changed.sequence, 2);
    assert_eq!(
        changed.payload,
        EventPayload::StatusChanged {
            previous: OrderStatus::Waiting,
            current: OrderStatus::Cooking,
        }
    );
    assert_eq!(env.manager.current_sequence(), 2);
}

#[tokio::test]
async fn test_no_event_for_noop_or_failure() {
    let env = create_test_env();
    let order = submit_order(&env, 1, &[("m1", 1)]).await;
    let mut rx = env.manager.subscribe();

    env.manager
        .update_status(&order.id, OrderStatus::Waiting)
        .await
        .unwrap();
    env.gateway.fail_next_status_update();
    let _ = env
        .manager
        .update_status(&order.id, OrderStatus::Done)
        .await;

    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_selectable_items() {
    let manager = create_test_manager();

    let names: Vec<String> = manager
        .selectable_items("nas")
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, vec!["Nasi Goreng"]);

    assert_eq!(manager.selectable_items("").len(), 3);
}

#[tokio::test]
async fn test_epoch_is_unique() {
    let a = create_test_manager();
    let b = create_test_manager();
    assert_ne!(a.epoch(), b.epoch());
}
