// Turns a raised error into the single JSON response sent back to the client

use std::{fmt, sync::Arc};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::responder::error_value::ErrorValue;
use crate::responder::request::RequestDescriptor;
use crate::responder::trace::{ConsoleTrace, ErrorTrace, TraceKind, TracingTrace};
use crate::utils::utils::to_two_space_indented_json;

/// Status and body of one error response
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub status: StatusCode,
    pub body: Map<String, Value>,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(Value::Object(self.body))).into_response()
    }
}

/// Resolves the HTTP status for a raised error.
///
/// Absent and zero statuses give 500, as does anything that is not a
/// valid HTTP status code.
pub fn resolve_status(status: Option<u16>) -> StatusCode {
    http_status(status).unwrap_or_else(|| {
        if let Some(code) = status.filter(|&code| code != 0) {
            warn!("Raised status {code} is not a valid HTTP status, answering 500");
        }
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// The raised status as an HTTP status, if it is usable as one
pub fn http_status(status: Option<u16>) -> Option<StatusCode> {
    status
        .filter(|&code| code != 0)
        .and_then(|code| StatusCode::from_u16(code).ok())
}

/// Builds the response body.
///
/// `message`, `path` and `key` go in first, then every own field of the
/// error in `ErrorValue::own_fields` order. Later entries win, so an extra
/// field named `path` or `key` replaces the explicit one. Absent values are
/// left out.
pub fn render_body(error: Option<&ErrorValue>, request: &RequestDescriptor) -> Map<String, Value> {
    let mut body: Map<String, Value> = Map::new();

    if let Some(message) = error.and_then(|e| e.message.as_ref()) {
        body.insert("message".into(), Value::String(message.clone()));
    }
    body.insert("path".into(), Value::String(request.path.clone()));
    if let Some(code) = error.and_then(|e| e.code.as_ref()) {
        body.insert("key".into(), code.clone());
    }

    if let Some(error) = error {
        body.extend(error.own_fields());
    }

    body
}

/// Terminal error stage: traces the error, then renders its response
#[derive(Clone)]
pub struct ErrorResponder {
    trace: Arc<dyn ErrorTrace>,
}

impl fmt::Debug for ErrorResponder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorResponder").finish_non_exhaustive()
    }
}

impl ErrorResponder {
    pub fn new(trace: impl ErrorTrace) -> Self {
        Self {
            trace: Arc::new(trace),
        }
    }

    pub fn from_kind(kind: TraceKind) -> Self {
        match kind {
            TraceKind::Console => Self::new(ConsoleTrace::stdout()),
            TraceKind::Tracing => Self::new(TracingTrace),
        }
    }

    pub fn respond(&self, error: Option<&ErrorValue>, request: &RequestDescriptor) -> ErrorResponse {
        let status: StatusCode = resolve_status(error.and_then(|e| e.status));

        self.trace.record(status, error, request);

        let body: Map<String, Value> = render_body(error, request);

        match to_two_space_indented_json(&body) {
            Ok(pretty) => debug!("\nError response ({status}):\n{pretty}"),
            Err(err) => warn!("Failed to format error body: {err:?}"),
        }

        ErrorResponse { status, body }
    }
}
