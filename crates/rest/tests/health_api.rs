//! Tests for the health and probe endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::create_test_server;
use common::fixtures::seed_course;

#[tokio::test]
async fn test_health_reports_backend() {
    let (server, _backend) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], "sqlite");
}

#[tokio::test]
async fn test_liveness_returns_200() {
    let (server, _backend) = create_test_server();

    let response = server.get("/_liveness").await;

    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_probes_storage() {
    let (server, backend) = create_test_server();
    seed_course(&backend, &[]).await;

    let response = server.get("/_readiness").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["storage"], "ok");
    assert_eq!(body["checks"]["courses"], 1);
}
