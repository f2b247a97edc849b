//! tests/global_errors/404.rs
//! Ensures that hitting an unknown route raises a 404 through the responder.

#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let app: common::TestApp = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(app.url("/does-not-exist?page=2"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(
        json,
        json!({
            "message": "The requested route does not exist",
            "path": "/does-not-exist",
            "key": "ROUTE_NOT_FOUND",
            "status": 404,
            "code": "ROUTE_NOT_FOUND"
        })
    );
    assert_eq!(app.traced(), vec![(404, "/does-not-exist".to_string())]);
}
