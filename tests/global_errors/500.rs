//! tests/global_errors/500.rs
//! Ensures that an `anyhow` error surfaced by `?` maps to a 500.

#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn returns_500_on_internal_error() {
    let app: common::TestApp = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(app.url("/errors/unhandled"))
        .send()
        .await
        .expect("Failed to make request.");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // No status or code was raised, so neither appears in the body
    let json: Value = resp.json().await.unwrap();
    assert_eq!(
        json,
        json!({
            "message": "Failed to parse the retry count: invalid digit found in string",
            "path": "/errors/unhandled"
        })
    );
}
