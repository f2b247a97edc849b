// Start of file: src/api/fallback.rs

use axum::http::StatusCode;

use crate::responder::ErrorValue;
use crate::utils::utils::status_key;

/// Unknown routes raise a 404 through the responder
pub async fn fallback_handler() -> ErrorValue {
    let status: StatusCode = StatusCode::NOT_FOUND;

    ErrorValue::new("The requested route does not exist")
        .status(status.as_u16())
        .code(format!("ROUTE_{}", status_key(status)))
}

/// Known routes hit with an unsupported method raise a 405
pub async fn method_not_allowed_handler() -> ErrorValue {
    let status: StatusCode = StatusCode::METHOD_NOT_ALLOWED;

    ErrorValue::new("The requested method is not allowed on this route")
        .status(status.as_u16())
        .code(status_key(status))
}

// End of file: src/api/fallback.rs
