#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use cultores_api::config::ServerConfig;
use cultores_api::router::build_app_router;
use cultores_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router over `pool`, exactly as `main.rs` does.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

/// Seed the reference tables and build the app.
pub async fn seeded_app(pool: PgPool) -> Router {
    cultores_db::seed::seed_reference_data(&pool)
        .await
        .expect("seed reference data");
    build_test_app(pool)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A valid create payload: Valencia / Catedral, Música / Canto.
pub fn cultor_payload(id_number: &str, phone_number: &str) -> Value {
    json!({
        "first_name": "  maría josé ",
        "last_name": "RODRÍGUEZ",
        "gender": "f",
        "id_number": id_number,
        "birth_date": "1990-05-20",
        "phone_number": phone_number,
        "email": "Maria.Rodriguez@Example.com",
        "instagram_user": "",
        "municipality_id": 14,
        "parish_id": 30,
        "home_address": "Av. Bolívar, casa 12",
        "art_category_id": 3,
        "art_discipline_id": 10,
        "years_of_experience": 12
    })
}

/// Create a cultor through the API and return its `data` object.
pub async fn create_cultor(app: Router, id_number: &str, phone_number: &str) -> Value {
    let mut payload = cultor_payload(id_number, phone_number);
    payload["email"] = Value::Null;
    let response = post_json(app, "/api/v1/cultors", payload).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
