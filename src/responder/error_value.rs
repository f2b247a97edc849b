// Start of file: /src/responder/error_value.rs

/*
    * The error value raised by handlers and layers. It replaces a loosely
    * shaped error object with explicit optional fields plus a bag of
    * extra fields that are echoed back in the response body.
*/

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::responder::responder::{http_status, render_body, ErrorResponse};
use crate::responder::request::RequestDescriptor;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorValue {
    // Requested HTTP status. `None` and `Some(0)` both resolve to 500.
    pub status: Option<u16>,
    pub message: Option<String>,
    // Surfaced as `key` in the response body.
    pub code: Option<Value>,
    // Every other own field, in insertion order.
    pub extra: Map<String, Value>,
}

impl ErrorValue {
    /// Creates an error carrying only a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn code(mut self, code: impl Into<Value>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Adds an extra field that is echoed in the response body
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Builds an error from an arbitrary JSON value without validating it.
    ///
    /// `null` and non-object values give the empty error. Within an object,
    /// `status` is only taken when it is a whole number that fits a `u16`
    /// (`404` and `404.0` alike) and
    /// `message` only when it is a string; otherwise they stay in `extra`
    /// under their own names.
    pub fn from_json(value: Value) -> Self {
        let object: Map<String, Value> = match value {
            Value::Object(object) => object,
            Value::Null => return Self::default(),
            other => {
                tracing::warn!(
                    "Raised error is not an object ({other}); its fields are discarded and it is treated as empty"
                );
                return Self::default();
            }
        };

        let mut error: ErrorValue = Self::default();

        for (key, value) in object {
            match key.as_str() {
                "status" => match numeric_status(&value) {
                    Some(status) => error.status = Some(status),
                    None => {
                        error.extra.insert(key, value);
                    }
                },
                "message" => match value {
                    Value::String(message) => error.message = Some(message),
                    other => {
                        error.extra.insert(key, other);
                    }
                },
                "code" => error.code = Some(value),
                _ => {
                    error.extra.insert(key, value);
                }
            }
        }

        error
    }

    /// The error's own fields: `message`, `status`, `code`, then `extra`
    pub fn own_fields(&self) -> Map<String, Value> {
        let mut fields: Map<String, Value> = Map::new();

        if let Some(message) = &self.message {
            fields.insert("message".into(), Value::String(message.clone()));
        }
        if let Some(status) = self.status {
            fields.insert("status".into(), Value::from(status));
        }
        if let Some(code) = &self.code {
            fields.insert("code".into(), code.clone());
        }
        for (key, value) in &self.extra {
            fields.insert(key.clone(), value.clone());
        }

        fields
    }
}

impl<E: Into<anyhow::Error>> From<E> for ErrorValue {
    fn from(error: E) -> Self {
        let error: anyhow::Error = error.into();
        Self::new(format!("{error:#}"))
    }
}

// Whole numbers only, integral floats included
fn numeric_status(value: &Value) -> Option<u16> {
    let number: u64 = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u16::MAX))
            .map(|f| f as u64)
    })?;

    u16::try_from(number).ok()
}

/// A raised error on its way to the responder. `None` stands for a raise
/// that carried no error value at all.
///
/// Stored in response extensions so the responder middleware can re-render
/// it with the request path and trace it.
#[derive(Debug, Clone)]
pub struct RaisedError(pub Option<ErrorValue>);

impl IntoResponse for RaisedError {
    fn into_response(self) -> Response {
        // Rendered without a path and without logging; the middleware
        // replaces this response.
        let status: StatusCode = self
            .0
            .as_ref()
            .and_then(|e| http_status(e.status))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Map<String, Value> = render_body(self.0.as_ref(), &RequestDescriptor::default());

        let mut response: Response = ErrorResponse { status, body }.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl IntoResponse for ErrorValue {
    fn into_response(self) -> Response {
        RaisedError(Some(self)).into_response()
    }
}


// End of file: /src/responder/error_value.rs
