//! tests/raised_errors/message_only.rs
//! An error with only a message answers 500 without a key.

#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn message_only_error_answers_500() {
    let app: common::TestApp = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(app.url("/errors/raise"))
        .json(&json!({ "message": "boom" }))
        .send()
        .await
        .expect("Failed to make request.");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json, json!({ "message": "boom", "path": "/errors/raise" }));
    assert!(json.get("key").is_none());
}
