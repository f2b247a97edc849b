// Handlers that succeed or raise errors in every supported way

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::config::state::AppState;
use crate::responder::{ErrorValue, RaisedError};
use crate::utils::utils::status_key;

// The only user the demo knows about
const KNOWN_USER_ID: &str = "0";

/// Basic hello endpoint
#[instrument]
pub async fn hello_handler() -> Json<Value> {
    info!("Hello endpoint called");

    Json(json!({ "message": "Hello from Axum!" }))
}

/// Looks up a user; anything but the known id is a 404
pub async fn user_handler(Path(id): Path<String>) -> Result<Json<Value>, ErrorValue> {
    info!("User lookup for id '{id}'");

    if id != KNOWN_USER_ID {
        return Err(ErrorValue::new("user not found")
            .status(StatusCode::NOT_FOUND.as_u16())
            .code("E_NF")
            .field("id", id));
    }

    Ok(Json(json!({ "id": id, "name": "ale" })))
}

/// Raises whatever JSON the client sent as the error value.
///
/// A JSON `null` raises with no error value at all. A body that cannot be
/// read as JSON is raised with the rejection's own status.
#[instrument(skip(payload))]
pub async fn raise_handler(payload: Result<Json<Value>, JsonRejection>) -> RaisedError {
    let raw: Value = match payload {
        Ok(Json(raw)) => raw,
        Err(rejection) => return RaisedError(Some(rejection_error(rejection))),
    };

    info!("Raising client supplied error: {raw}");

    match raw {
        Value::Null => RaisedError(None),
        other => RaisedError(Some(ErrorValue::from_json(other))),
    }
}

/// Fails with an `anyhow` error converted by `?`
#[instrument]
pub async fn unhandled_handler() -> Result<Json<Value>, ErrorValue> {
    let retries: u32 = "three"
        .parse()
        .context("Failed to parse the retry count")?;

    Ok(Json(json!({ "retries": retries })))
}

/// Endpoint that sleeps longer than the timeout to trigger the timeout layer
#[instrument(skip(state))]
pub async fn timeout_handler(State(state): State<AppState>) -> Json<Value> {
    let timeout_seconds: u64 = state.environment.default_timeout_seconds;

    info!("Sleeping for {} seconds (timeout is {} seconds)", timeout_seconds + 2, timeout_seconds);

    tokio::time::sleep(std::time::Duration::from_secs(timeout_seconds + 2)).await;

    // Should never be reached due to timeout
    Json(json!({ "message": "This should not be reached due to timeout" }))
}

fn rejection_error(rejection: JsonRejection) -> ErrorValue {
    let status: StatusCode = rejection.status();

    ErrorValue::new(rejection.body_text())
        .status(status.as_u16())
        .code(status_key(status))
}
