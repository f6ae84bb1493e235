//! Shared harness for HTTP integration tests.
//!
//! Requests go straight into the production router via
//! `tower::ServiceExt::oneshot`; no socket is opened.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use propman_api::auth::jwt::{generate_access_token, JwtConfig, DEFAULT_ACCESS_EXPIRY_MINS};
use propman_api::config::ServerConfig;
use propman_api::router::build_app_router;
use propman_api::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        db_max_connections: 5,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        redacted_params: vec!["name".to_string(), "address".to_string()],
        app_env: "test".to_string(),
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry_mins: DEFAULT_ACCESS_EXPIRY_MINS,
        },
    }
}

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state).expect("test config must build a router")
}

/// A valid bearer token for an organization member.
pub fn token() -> String {
    let config = test_config();
    generate_access_token("user_test", Some("org_test"), Some("org:member"), &config.jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>, auth: bool) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if auth {
        builder = builder.header(AUTHORIZATION, format!("Bearer {}", token()));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Authenticated GET.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, true).await
}

/// GET without an `Authorization` header.
pub async fn get_anonymous(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, false).await
}

/// GET with an arbitrary `Authorization` header value.
pub async fn get_with_auth(app: Router, uri: &str, authorization: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Authenticated POST with a JSON body.
pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json), true).await
}

/// Authenticated POST without a body (archive).
pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None, true).await
}

/// Authenticated PATCH with a JSON body.
pub async fn patch_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(json), true).await
}

/// Authenticated PATCH with a raw body, for malformed JSON.
pub async fn patch_raw(app: Router, uri: &str, raw: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {}", token()))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(raw))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn landlord_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "email": "owner@example.com",
        "suburb": "Fitzroy",
        "state": "VIC",
        "postcode": "3065",
        "country": "Australia"
    })
}

pub fn property_body(landlord_id: &str, number: &str, street: &str) -> serde_json::Value {
    serde_json::json!({
        "street_number": number,
        "street_name": street,
        "suburb": "Fitzroy",
        "state": "VIC",
        "postcode": "3065",
        "country": "Australia",
        "landlord_id": landlord_id,
        "management_fee": 6.6,
        "management_gained": "2024-02-01"
    })
}

pub fn tenant_body(property_id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "email": "tenant@example.com",
        "paid_from": "2024-05-01",
        "paid_to": "2024-05-31",
        "rental_amount": 2400.0,
        "frequency": "monthly",
        "original_start_date": "2022-05-01",
        "start_date": "2024-05-01",
        "end_date": "2025-04-30",
        "property_id": property_id
    })
}

/// Create a landlord through the API and return its id.
pub async fn create_landlord(app: &Router, name: &str) -> String {
    let response = post_json(app.clone(), "/landlords", landlord_body(name)).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

/// Create a property through the API and return its id.
pub async fn create_property(app: &Router, landlord_id: &str, number: &str, street: &str) -> String {
    let response = post_json(app.clone(), "/properties", property_body(landlord_id, number, street)).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_str().unwrap().to_string()
}
