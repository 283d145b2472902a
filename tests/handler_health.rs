mod common;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_health_ok() {
    let server = common::make_server(common::MemoryStore::new());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn test_health_degraded() {
    let store = common::MemoryStore::new();
    store.fail_reads();
    let server = common::make_server(store);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body = response.json::<Value>();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
}
