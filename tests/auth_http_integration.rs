//! Integration tests for the auth HTTP endpoints.
//!
//! These wire the real in-memory adapters through the axum router and
//! drive it with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Duration;
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use cyberzone::adapters::auth::HmacTokenSigner;
use cyberzone::adapters::http::{api_router, ApiState};
use cyberzone::adapters::memory::{
    InMemoryCatalogStore, InMemoryProgressStore, InMemorySessionStore, InMemoryUserStore,
};
use cyberzone::adapters::seed;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with_ttl(ttl: Duration) -> Router {
    let users = seed::users_from_json(seed::DEFAULT_USERS_JSON).unwrap();
    let (modules, labs) = seed::default_catalog();
    let state = ApiState::new(
        Arc::new(InMemoryUserStore::new(users)),
        Arc::new(InMemoryCatalogStore::new(modules, labs)),
        Arc::new(InMemoryProgressStore::new()),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(HmacTokenSigner::new(SecretString::new(
            "integration-test-key".to_string(),
        ))),
        ttl,
    );
    api_router(state)
}

fn app() -> Router {
    app_with_ttl(Duration::hours(8))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn bearer_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        json_request(
            "POST",
            "/api/auth/login",
            json!({"email": email, "password": password}),
        ),
    )
    .await
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn login_succeeds_with_seeded_credentials_and_strips_password() {
    let app = app();
    let (status, body) = login(&app, "student@cyberzone.com", "password123").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], "student@cyberzone.com");
    assert_eq!(body["user"]["role"], "student");
    assert!(body["user"].get("password").is_none());
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn login_rejects_wrong_password_with_failure_body() {
    let app = app();
    let (status, body) = login(&app, "student@cyberzone.com", "wrong").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Invalid"));
}

#[tokio::test]
async fn login_rejects_unknown_email_identically() {
    let app = app();
    let (wrong_status, wrong_body) = login(&app, "student@cyberzone.com", "wrong").await;
    let (unknown_status, unknown_body) = login(&app, "nonexistent@x.com", "anything").await;

    assert_eq!(wrong_status, unknown_status);
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn malformed_login_body_is_bad_request() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

// =============================================================================
// Session lifecycle
// =============================================================================

#[tokio::test]
async fn session_round_trips_after_login() {
    let app = app();
    let (_, body) = login(&app, "student@cyberzone.com", "password123").await;
    let token = body["token"].as_str().unwrap();

    let (status, session) = send(&app, bearer_request("GET", "/api/auth/session", token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["user"]["id"], body["user"]["id"]);
    assert_eq!(session["user"]["email"], "student@cyberzone.com");
}

#[tokio::test]
async fn session_without_token_is_unauthorized() {
    let app = app();
    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/session")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn forged_token_is_unauthorized() {
    let app = app();
    let (status, _) = send(
        &app,
        bearer_request("GET", "/api/auth/session", "deadbeef.deadbeef"),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_clears_the_session_and_is_idempotent() {
    let app = app();
    let (_, body) = login(&app, "student@cyberzone.com", "password123").await;
    let token = body["token"].as_str().unwrap();

    let (first, _) = send(&app, bearer_request("POST", "/api/auth/logout", token)).await;
    assert_eq!(first, StatusCode::NO_CONTENT);

    // The session is gone.
    let (session_status, _) =
        send(&app, bearer_request("GET", "/api/auth/session", token)).await;
    assert_eq!(session_status, StatusCode::UNAUTHORIZED);

    // Logging out again still succeeds.
    let (second, _) = send(&app, bearer_request("POST", "/api/auth/logout", token)).await;
    assert_eq!(second, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn expired_session_is_rejected() {
    let app = app_with_ttl(Duration::seconds(-1));
    let (status, body) = login(&app, "student@cyberzone.com", "password123").await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();

    let (session_status, session_body) =
        send(&app, bearer_request("GET", "/api/auth/session", token)).await;
    assert_eq!(session_status, StatusCode::UNAUTHORIZED);
    assert_eq!(session_body["code"], "UNAUTHORIZED");
}
