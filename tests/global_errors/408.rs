//! tests/global_errors/408.rs
//! Ensures that requests taking too long are raised as 408.

#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn returns_408_when_request_times_out() {
    let app: common::TestApp = common::spawn_app();

    // The handler sleeps two seconds past the one second test timeout.
    let resp_result: Result<Result<reqwest::Response, reqwest::Error>, tokio::time::error::Elapsed> = timeout(
        Duration::from_secs(5),
        reqwest::Client::new().get(app.url("/timeout")).send(),
    )
    .await;

    assert!(resp_result.is_ok(), "Client timed out waiting for server.");

    let resp: reqwest::Response = resp_result.unwrap().expect("Request failed unexpectedly.");

    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["key"], "REQUEST_TIMEOUT");
    assert_eq!(json["status"], 408);
    assert_eq!(json["path"], "/timeout");
    assert_eq!(json["message"], "Request timeout: request timed out");
}
