mod common;

use std::sync::Arc;

use food_ordering::domain::entities::{NewOrder, NewOrderItem};
use food_ordering::domain::repositories::OrderRepository;
use food_ordering::infrastructure::persistence::PgOrderRepository;
use rust_decimal::Decimal;
use sqlx::PgPool;

#[sqlx::test]
async fn test_create_persists_order_and_items_together(pool: PgPool) {
    let restaurant_id = common::create_test_restaurant(&pool, "Trattoria").await;
    let customer_id = common::create_test_customer(&pool, "Alice", "alice@example.com").await;
    let pizza = common::create_test_menu_item(&pool, restaurant_id, "Margherita", "10.00", true).await;

    let repo = PgOrderRepository::new(Arc::new(pool.clone()));

    let order = repo
        .create(
            NewOrder {
                customer_id,
                restaurant_id,
                total_amount: Decimal::new(2000, 2),
            },
            vec![NewOrderItem {
                menu_item_id: pizza,
                quantity: 2,
                price_at_order: Decimal::new(1000, 2),
            }],
        )
        .await
        .unwrap();

    assert_eq!(order.customer_id, customer_id);
    assert_eq!(order.status, "pending");
    assert_eq!(order.total_amount, Decimal::new(2000, 2));

    assert_eq!(common::count_rows(&pool, "orders").await, 1);
    assert_eq!(common::count_rows(&pool, "order_items").await, 1);

    let total: Decimal = sqlx::query_scalar("SELECT total_amount FROM orders WHERE id = $1")
        .bind(order.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(total, Decimal::new(2000, 2));
}

#[sqlx::test]
async fn test_create_rolls_back_on_bad_item_reference(pool: PgPool) {
    let restaurant_id = common::create_test_restaurant(&pool, "Trattoria").await;
    let customer_id = common::create_test_customer(&pool, "Alice", "alice@example.com").await;

    let repo = PgOrderRepository::new(Arc::new(pool.clone()));

    // The second item violates the menu_items foreign key; the whole
    // transaction, including the already-inserted order row, must roll back.
    let result = repo
        .create(
            NewOrder {
                customer_id,
                restaurant_id,
                total_amount: Decimal::new(1000, 2),
            },
            vec![NewOrderItem {
                menu_item_id: 9999,
                quantity: 1,
                price_at_order: Decimal::new(1000, 2),
            }],
        )
        .await;

    assert!(result.is_err());
    assert_eq!(common::count_rows(&pool, "orders").await, 0);
    assert_eq!(common::count_rows(&pool, "order_items").await, 0);
}

#[sqlx::test]
async fn test_list_by_customer_orders_descending(pool: PgPool) {
    let restaurant_id = common::create_test_restaurant(&pool, "Trattoria").await;
    let customer_id = common::create_test_customer(&pool, "Alice", "alice@example.com").await;
    let other_customer = common::create_test_customer(&pool, "Bob", "bob@example.com").await;

    let oldest = common::create_test_order(&pool, customer_id, restaurant_id, "1.00", 300).await;
    let newest = common::create_test_order(&pool, customer_id, restaurant_id, "3.00", 10).await;
    let middle = common::create_test_order(&pool, customer_id, restaurant_id, "2.00", 100).await;
    common::create_test_order(&pool, other_customer, restaurant_id, "9.00", 5).await;

    let repo = PgOrderRepository::new(Arc::new(pool));

    let orders = repo.list_by_customer(customer_id).await.unwrap();

    assert_eq!(orders.len(), 3);
    assert_eq!(
        orders.iter().map(|o| o.order_id).collect::<Vec<_>>(),
        vec![newest, middle, oldest]
    );
    assert!(orders.iter().all(|o| o.restaurant_name == "Trattoria"));
}

#[sqlx::test]
async fn test_items_for_order_joins_menu_item_names(pool: PgPool) {
    let restaurant_id = common::create_test_restaurant(&pool, "Trattoria").await;
    let customer_id = common::create_test_customer(&pool, "Alice", "alice@example.com").await;
    let pizza = common::create_test_menu_item(&pool, restaurant_id, "Margherita", "10.00", true).await;
    let soda = common::create_test_menu_item(&pool, restaurant_id, "Soda", "4.25", true).await;

    let order_id = common::create_test_order(&pool, customer_id, restaurant_id, "24.25", 10).await;
    common::create_test_order_item(&pool, order_id, pizza, 2, "10.00").await;
    common::create_test_order_item(&pool, order_id, soda, 1, "4.25").await;

    let repo = PgOrderRepository::new(Arc::new(pool));

    let items = repo.items_for_order(order_id).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Margherita");
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[0].price_at_order, Decimal::new(1000, 2));
    assert_eq!(items[1].name, "Soda");
}
