//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the full router (including the middleware stack) through
//! `tower::ServiceExt::oneshot`, without a TCP listener.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use reportage_api::config::ServerConfig;
use reportage_api::router::build_app_router;
use reportage_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through the same [`build_app_router`] as `main.rs`, so tests
/// exercise the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PUT request without a body (query-parameter driven endpoints).
pub async fn put(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an event via the API, returning its id.
pub async fn create_event(pool: PgPool, city: &str, danger: &str, duration: i64) -> i64 {
    create_event_with_metadata(pool, city, danger, duration, serde_json::Value::Null).await
}

/// Create an event with an attribute bag via the API, returning its id.
pub async fn create_event_with_metadata(
    pool: PgPool,
    city: &str,
    danger: &str,
    duration: i64,
    extra_metadata: serde_json::Value,
) -> i64 {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/events",
        serde_json::json!({
            "place": "Opera Square",
            "city": city,
            "date": "2024-05-01",
            "duration": duration,
            "danger": danger,
            "type": "protest",
            "extra_metadata": extra_metadata,
        }),
    )
    .await;
    let json = body_json(response).await;
    json["id"].as_i64().expect("event id")
}

/// Create a correspondent via the API, returning its id.
pub async fn create_correspondent(pool: PgPool, operator: bool, price: &str) -> i64 {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/correspondents",
        serde_json::json!({
            "name": "Anna",
            "country": "Armenia",
            "city": "Yerevan",
            "specification": "politics",
            "operator": operator,
            "price": price,
        }),
    )
    .await;
    let json = body_json(response).await;
    json["id"].as_i64().expect("correspondent id")
}

/// Create a reportage via the API, returning its id.
pub async fn create_reportage(pool: PgPool, event_id: i64, correspondent_id: i64) -> i64 {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/reportages",
        serde_json::json!({
            "date": "2024-05-02",
            "quality": "good",
            "time": "14:30:00",
            "video": true,
            "event_id": event_id,
            "correspondent_id": correspondent_id,
        }),
    )
    .await;
    let json = body_json(response).await;
    json["id"].as_i64().expect("reportage id")
}
