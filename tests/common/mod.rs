#![allow(dead_code)]

use axum_test::TestServer;
use food_ordering::api;
use food_ordering::state::AppState;
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Builds a test server over the full application router.
pub fn test_server(pool: PgPool) -> TestServer {
    let state = AppState::new(pool);
    let app = api::routes::routes().with_state(state);
    TestServer::new(app).unwrap()
}

pub async fn create_test_restaurant(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO restaurants (name, cuisine) VALUES ($1, 'testfood') RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_menu_item(
    pool: &PgPool,
    restaurant_id: i64,
    name: &str,
    price: &str,
    is_available: bool,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO menu_items (restaurant_id, name, price, is_available)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(restaurant_id)
    .bind(name)
    .bind(Decimal::from_str_exact(price).unwrap())
    .bind(is_available)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_customer(pool: &PgPool, name: &str, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO customers (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Inserts an order row directly, with an explicit creation timestamp offset
/// (seconds in the past) so ordering assertions are deterministic.
pub async fn create_test_order(
    pool: &PgPool,
    customer_id: i64,
    restaurant_id: i64,
    total: &str,
    seconds_ago: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO orders (customer_id, restaurant_id, total_amount, created_at)
         VALUES ($1, $2, $3, now() - make_interval(secs => $4::double precision))
         RETURNING id",
    )
    .bind(customer_id)
    .bind(restaurant_id)
    .bind(Decimal::from_str_exact(total).unwrap())
    .bind(seconds_ago as f64)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_order_item(
    pool: &PgPool,
    order_id: i64,
    menu_item_id: i64,
    quantity: i32,
    price_at_order: &str,
) {
    sqlx::query(
        "INSERT INTO order_items (order_id, menu_item_id, quantity, price_at_order)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(order_id)
    .bind(menu_item_id)
    .bind(quantity)
    .bind(Decimal::from_str_exact(price_at_order).unwrap())
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    // Table names come from test code only.
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
