// Library root: an Axum error responder plus the service around it

pub mod api;
pub mod config;
pub mod core;
pub mod middlewares;
pub mod responder;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
pub use crate::responder::{ErrorResponder, ErrorValue, RequestDescriptor};
