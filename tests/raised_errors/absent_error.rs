//! tests/raised_errors/absent_error.rs
//! Raising no error value at all still produces a response.

#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn null_error_answers_500_with_only_the_path() {
    let app: common::TestApp = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(app.url("/errors/raise"))
        .json(&Value::Null)
        .send()
        .await
        .expect("Failed to make request.");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json, json!({ "path": "/errors/raise" }));
    assert_eq!(app.traced(), vec![(500, "/errors/raise".to_string())]);
}

#[tokio::test]
async fn scalar_error_is_treated_as_empty() {
    let app: common::TestApp = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(app.url("/errors/raise"))
        .json(&json!("just a string"))
        .send()
        .await
        .expect("Failed to make request.");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json, json!({ "path": "/errors/raise" }));
}
