// Error demo route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Creates router with endpoints that exercise the error responder
pub fn error_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(handler::hello_handler))
        .route("/users/{id}", get(handler::user_handler))
        // Raises the request body as the error value
        .route("/errors/raise", post(handler::raise_handler))
        .route("/errors/unhandled", get(handler::unhandled_handler))
        // Sleeps past the configured timeout
        .route("/timeout", get(handler::timeout_handler))
}
