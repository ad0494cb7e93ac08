mod common;

use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_signup_creates_account_with_hashed_password(pool: PgPool) {
    let server = common::test_server(pool.clone());

    let response = server
        .post("/signup")
        .json(&json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "hunter2!"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["message"], "Account created successfully!");
    let id = body["id"].as_i64().unwrap();

    let hash: Option<String> =
        sqlx::query_scalar("SELECT password_hash FROM customers WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    let hash = hash.unwrap();
    assert!(hash.starts_with("$argon2"));
    assert_ne!(hash, "hunter2!");
}

#[sqlx::test]
async fn test_signup_duplicate_email_conflict(pool: PgPool) {
    let server = common::test_server(pool.clone());

    let payload = json!({
        "name": "Alice",
        "email": "alice@example.com",
        "password": "hunter2!"
    });

    server.post("/signup").json(&payload).await.assert_status_ok();

    let response = server.post("/signup").json(&payload).await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "conflict");
    assert_eq!(body["error"]["message"], "Email already registered");

    assert_eq!(common::count_rows(&pool, "customers").await, 1);
}

#[sqlx::test]
async fn test_login_success_returns_identity(pool: PgPool) {
    let server = common::test_server(pool);

    let signup = server
        .post("/signup")
        .json(&json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "hunter2!"
        }))
        .await;
    let id = signup.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let response = server
        .post("/login")
        .json(&json!({
            "email": "alice@example.com",
            "password": "hunter2!"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["id"].as_i64().unwrap(), id);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["email"], "alice@example.com");
    // Identity only: no token and no hash in the payload.
    assert!(body.get("token").is_none());
    assert!(body.get("password_hash").is_none());
}

#[sqlx::test]
async fn test_login_wrong_password_unauthorized(pool: PgPool) {
    let server = common::test_server(pool.clone());

    server
        .post("/signup")
        .json(&json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "hunter2!"
        }))
        .await
        .assert_status_ok();

    let response = server
        .post("/login")
        .json(&json!({
            "email": "alice@example.com",
            "password": "wrong"
        }))
        .await;

    response.assert_status_unauthorized();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "unauthorized");

    // No row was mutated by the failed attempt.
    assert_eq!(common::count_rows(&pool, "customers").await, 1);
}

#[sqlx::test]
async fn test_login_unknown_email_not_found(pool: PgPool) {
    let server = common::test_server(pool);

    let response = server
        .post("/login")
        .json(&json!({
            "email": "nobody@example.com",
            "password": "whatever"
        }))
        .await;

    response.assert_status_not_found();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Email not found");
}

#[sqlx::test]
async fn test_login_rejected_for_account_without_credentials(pool: PgPool) {
    // Created through the plain customer path: no password hash stored.
    common::create_test_customer(&pool, "Bob", "bob@example.com").await;

    let server = common::test_server(pool);

    let response = server
        .post("/login")
        .json(&json!({
            "email": "bob@example.com",
            "password": "anything"
        }))
        .await;

    response.assert_status_unauthorized();
}
