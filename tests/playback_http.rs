//! Integration tests for the playback token and viewer state endpoints.
//!
//! Drives the full axum router with `oneshot` requests against in-memory
//! collaborators and verifies issued tokens with the fixture public key.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::Router;
use http::{header, Method, Request, StatusCode};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use serde_json::{json, Value};
use tower::ServiceExt;

use playback_gate::adapters::auth::MockSessionValidator;
use playback_gate::adapters::http::{api_router, AppState};
use playback_gate::adapters::memory::InMemoryEntitlementStore;
use playback_gate::adapters::signing::RsaPlaybackSigner;
use playback_gate::config::ServerConfig;
use playback_gate::domain::foundation::{AuthError, UserId};

const PRIVATE_PEM: &str = include_str!("fixtures/playback_signing_key.pem");
const PUBLIC_PEM: &str = include_str!("fixtures/playback_signing_key.pub.pem");
const KEY_ID: &str = "kid-integration";
const SUBDOMAIN: &str = "customer-abc123";

// =============================================================================
// Test Infrastructure
// =============================================================================

#[derive(Debug, Deserialize)]
struct DecodedClaims {
    sub: String,
    kid: String,
    iat: i64,
    exp: i64,
}

struct TestApp {
    router: Router,
    store: Arc<InMemoryEntitlementStore>,
}

fn paid_user() -> UserId {
    UserId::new("paid-user").unwrap()
}

fn unpaid_user() -> UserId {
    UserId::new("unpaid-user").unwrap()
}

fn unknown_user() -> UserId {
    UserId::new("unknown-user").unwrap()
}

fn validator() -> MockSessionValidator {
    MockSessionValidator::new()
        .with_test_user("paid-session", paid_user())
        .with_test_user("unpaid-session", unpaid_user())
        .with_test_user("unknown-session", unknown_user())
}

fn app_with(validator: MockSessionValidator) -> TestApp {
    let store = Arc::new(
        InMemoryEntitlementStore::new()
            .with_entitlement(paid_user(), true)
            .with_entitlement(unpaid_user(), false),
    );
    let signer = RsaPlaybackSigner::new(KEY_ID, PRIVATE_PEM).unwrap();
    let state = AppState::new(Arc::new(validator), store.clone(), Arc::new(signer), SUBDOMAIN);

    TestApp {
        router: api_router(state, &ServerConfig::default()),
        store,
    }
}

fn app() -> TestApp {
    app_with(validator())
}

fn mint_request(token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/playback/token")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn state_request(token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri("/api/viewer/state");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn verify(token: &str) -> DecodedClaims {
    let key = DecodingKey::from_rsa_pem(PUBLIC_PEM.as_bytes()).unwrap();
    decode::<DecodedClaims>(token, &key, &Validation::new(Algorithm::RS256))
        .unwrap()
        .claims
}

// =============================================================================
// Successful Minting
// =============================================================================

#[tokio::test]
async fn paid_viewer_receives_signed_token() {
    let app = app();

    let (status, body) = send(
        &app.router,
        mint_request(Some("paid-session"), r#"{"videoId": "vid123"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["videoId"], "vid123");
    assert_eq!(body["customerSubdomain"], SUBDOMAIN);
    assert_eq!(body["expiresIn"], 3600);

    let token = body["token"].as_str().unwrap();
    let header = decode_header(token).unwrap();
    assert_eq!(header.alg, Algorithm::RS256);
    assert_eq!(header.kid.as_deref(), Some(KEY_ID));

    let claims = verify(token);
    assert_eq!(claims.sub, "vid123");
    assert_eq!(claims.kid, KEY_ID);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn token_subject_tracks_each_requested_video() {
    let app = app();

    for video in ["intro", "chapter-2", "b3c1a9f0e5"] {
        let body = format!(r#"{{"videoId": "{}"}}"#, video);
        let (status, response) = send(&app.router, mint_request(Some("paid-session"), &body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(verify(response["token"].as_str().unwrap()).sub, video);
    }
}

// =============================================================================
// Authorization Failures
// =============================================================================

#[tokio::test]
async fn missing_session_is_unauthorized() {
    let app = app();

    let (status, body) = send(&app.router, mint_request(None, r#"{"videoId": "vid123"}"#)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Unauthorized"}));
}

#[tokio::test]
async fn invalid_session_is_unauthorized() {
    let app = app();

    let (status, _) = send(
        &app.router,
        mint_request(Some("forged-session"), r#"{"videoId": "vid123"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.store.read_count(), 0);
}

#[tokio::test]
async fn identity_outage_is_unauthorized() {
    let app = app_with(validator().with_error(AuthError::service_unavailable("timeout")));

    let (status, _) = send(
        &app.router,
        mint_request(Some("paid-session"), r#"{"videoId": "vid123"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unpaid_viewer_is_forbidden() {
    let app = app();

    let (status, body) = send(
        &app.router,
        mint_request(Some("unpaid-session"), r#"{"videoId": "vid123"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].is_string());
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn viewer_without_record_is_not_found() {
    let app = app();

    let (status, _) = send(
        &app.router,
        mint_request(Some("unknown-session"), r#"{"videoId": "vid123"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Request Shape
// =============================================================================

#[tokio::test]
async fn empty_video_id_is_bad_request() {
    let app = app();

    let (status, _) = send(&app.router, mint_request(Some("paid-session"), r#"{"videoId": ""}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn padded_video_id_is_bad_request() {
    let app = app();

    let (status, body) = send(
        &app.router,
        mint_request(Some("paid-session"), r#"{"videoId": " vid123 "}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn malformed_body_is_bad_request_for_paid_viewer() {
    let app = app();

    let (status, body) = send(&app.router, mint_request(Some("paid-session"), "{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_body_still_checks_authorization_first() {
    let app = app();

    let (status, _) = send(&app.router, mint_request(None, "{not json")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Infrastructure Failures
// =============================================================================

#[tokio::test]
async fn store_failure_is_internal_without_details() {
    let app = app();
    app.store.fail_reads(true);

    let (status, body) = send(
        &app.router,
        mint_request(Some("paid-session"), r#"{"videoId": "vid123"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}

// =============================================================================
// Viewer State
// =============================================================================

#[tokio::test]
async fn viewer_state_reports_each_settled_state() {
    let app = app();

    let cases = [
        (None, "not_logged_in"),
        (Some("forged-session"), "not_logged_in"),
        (Some("unpaid-session"), "not_paid"),
        (Some("unknown-session"), "not_paid"),
        (Some("paid-session"), "paid"),
    ];

    for (token, expected) in cases {
        let (status, body) = send(&app.router, state_request(token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"], expected, "token {:?}", token);
    }
}

#[tokio::test]
async fn viewer_state_fails_closed_on_store_error() {
    let app = app();
    app.store.fail_reads(true);

    let (status, body) = send(&app.router, state_request(Some("paid-session"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "not_paid");
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = app();

    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
