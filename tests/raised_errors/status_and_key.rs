//! tests/raised_errors/status_and_key.rs
//! A raised status, message and code are echoed with `key` and the path.

#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn raised_body_echoes_status_message_and_code() {
    let app: common::TestApp = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(app.url("/errors/raise"))
        .json(&json!({ "status": 404, "message": "not found", "code": "E_NF" }))
        .send()
        .await
        .expect("Failed to make request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(
        json,
        json!({
            "message": "not found",
            "path": "/errors/raise",
            "key": "E_NF",
            "status": 404,
            "code": "E_NF"
        })
    );
    assert_eq!(app.traced(), vec![(404, "/errors/raise".to_string())]);
}

#[tokio::test]
async fn unknown_user_raises_404_with_its_id() {
    let app: common::TestApp = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(app.url("/users/1"))
        .send()
        .await
        .expect("Failed to make request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers()["content-type"],
        "application/json"
    );

    let json: Value = resp.json().await.unwrap();
    assert_eq!(
        json,
        json!({
            "message": "user not found",
            "path": "/users/1",
            "key": "E_NF",
            "status": 404,
            "code": "E_NF",
            "id": "1"
        })
    );
}

#[tokio::test]
async fn integral_float_status_is_used_as_the_http_status() {
    let app: common::TestApp = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(app.url("/errors/raise"))
        .json(&json!({ "status": 404.0, "message": "nf" }))
        .send()
        .await
        .expect("Failed to make request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json, json!({ "message": "nf", "path": "/errors/raise", "status": 404 }));
}
