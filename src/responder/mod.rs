// Start of file: /src/responder/mod.rs

/*
    * Raised error values, the request view, diagnostic traces and the
    * responder that ties them into one JSON error response.
*/

pub mod error_value;
pub mod request;
pub mod responder;
pub mod trace;

#[cfg(test)]
mod test_support;

pub use error_value::{ErrorValue, RaisedError};
pub use request::RequestDescriptor;
pub use responder::{ErrorResponder, ErrorResponse};
pub use trace::{ConsoleTrace, ErrorTrace, TraceKind, TracingTrace};

// End of file: /src/responder/mod.rs
