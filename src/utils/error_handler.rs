// Global error handling for tower middleware layers

use axum::{http::StatusCode, BoxError};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
// Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;

use crate::responder::ErrorValue;
use crate::utils::utils::status_key;

/// Maps layer failures to raised errors so they reach the error responder
pub async fn handle_global_error(err: BoxError) -> ErrorValue {
    map_layer_error(&*err)
}

/// Synchronous core of `handle_global_error`
pub fn map_layer_error(err: &(dyn Error + 'static)) -> ErrorValue {
    // 413 if the body was too large
    if let Some(e) = find_cause::<LengthLimitError>(err) {
        return raised(StatusCode::PAYLOAD_TOO_LARGE, format!("Request body too large: {e}"));
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return raised(StatusCode::REQUEST_TIMEOUT, format!("Request timeout: {err}"));
    }

    // Otherwise, 500
    raised(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Unhandled internal error: {err}"),
    )
}

fn raised(status: StatusCode, message: String) -> ErrorValue {
    ErrorValue::new(message)
        .status(status.as_u16())
        .code(status_key(status))
}

/// Helper function to find a specific error type in the error chain,
/// starting with the error itself
pub fn find_cause<'a, T: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    let mut source: Option<&'a (dyn Error + 'static)> = Some(err);

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
