// Start of file: /src/responder/trace.rs

/*
    * Diagnostic output for raised errors. The responder only talks to the
    * `ErrorTrace` trait; which implementation runs is decided at boot
    * from the ERROR_TRACE setting.
*/

use std::{
    fmt,
    io::{self, Write},
    str::FromStr,
    sync::Mutex,
};

use anyhow::bail;
use axum::http::StatusCode;
use serde_json::Value;
use tracing::{error, warn};

use crate::responder::error_value::ErrorValue;
use crate::responder::request::RequestDescriptor;

const ANSI_RED: &str = "\x1b[31m";
const ANSI_RESET: &str = "\x1b[0m";
const SEPARATOR_WIDTH: usize = 50;

/// Receives one record per handled error
pub trait ErrorTrace: Send + Sync + 'static {
    fn record(&self, status: StatusCode, error: Option<&ErrorValue>, request: &RequestDescriptor);
}

/// Which trace the app is wired with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    Console,
    Tracing,
}

impl FromStr for TraceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "tracing" => Ok(Self::Tracing),
            other => bail!("Unknown error trace '{other}', expected 'console' or 'tracing'"),
        }
    }
}

impl fmt::Display for TraceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => f.write_str("console"),
            Self::Tracing => f.write_str("tracing"),
        }
    }
}

// Raw status as raised, even when it cannot be used as an HTTP status.
fn raw_status(error: Option<&ErrorValue>) -> String {
    let Some(error) = error else {
        return "(no error value)".to_string();
    };

    match (error.status, error.extra.get("status")) {
        (Some(status), _) => status.to_string(),
        (None, Some(raw)) => display_value(raw),
        (None, None) => "(no status)".to_string(),
    }
}

fn raw_message(error: Option<&ErrorValue>) -> String {
    let Some(error) = error else {
        return "(none)".to_string();
    };

    match (&error.message, error.extra.get("message")) {
        (Some(message), _) => message.clone(),
        (None, Some(raw)) => display_value(raw),
        (None, None) => "(none)".to_string(),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Formats the framed console block for one error
pub fn format_console_trace(error: Option<&ErrorValue>, request: &RequestDescriptor) -> String {
    let separator: String = format!("{ANSI_RED}{}{ANSI_RESET}", "-".repeat(SEPARATOR_WIDTH));

    format!(
        "{separator}\n{}\nMessage: {}\nPath: {}\n{separator}\n",
        raw_status(error),
        raw_message(error),
        request.path,
    )
}

/// Operator-facing framed output, stdout unless told otherwise
pub struct ConsoleTrace {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleTrace {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl ErrorTrace for ConsoleTrace {
    fn record(&self, _status: StatusCode, error: Option<&ErrorValue>, request: &RequestDescriptor) {
        let block: String = format_console_trace(error, request);

        // A poisoned lock only means another writer panicked mid-block
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Err(err) = writer.write_all(block.as_bytes()).and_then(|_| writer.flush()) {
            warn!("Failed to write error trace: {err}");
        }
    }
}

/// Structured `tracing` event per error
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTrace;

impl ErrorTrace for TracingTrace {
    fn record(&self, status: StatusCode, error: Option<&ErrorValue>, request: &RequestDescriptor) {
        let raw_status: String = raw_status(error);
        let message: String = raw_message(error);
        let code: Option<&Value> = error.and_then(|e| e.code.as_ref());

        if status.is_server_error() {
            error!(
                status = %raw_status,
                error_message = %message,
                code = ?code,
                path = %request.path,
                "Request failed with {status}"
            );
        } else {
            warn!(
                status = %raw_status,
                error_message = %message,
                code = ?code,
                path = %request.path,
                "Request failed with {status}"
            );
        }
    }
}


// End of file: /src/responder/trace.rs
