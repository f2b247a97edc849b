// Application state shared with handlers and middleware

use std::sync::Arc;

use crate::config::environment::EnvironmentVariables;
use crate::responder::ErrorResponder;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub responder: ErrorResponder,
}

impl AppState {
    /// Builds state with the trace selected by the configuration
    pub fn new(environment: EnvironmentVariables) -> Self {
        let responder: ErrorResponder = ErrorResponder::from_kind(environment.error_trace);

        Self::with_responder(environment, responder)
    }

    /// Builds state around an already configured responder
    pub fn with_responder(environment: EnvironmentVariables, responder: ErrorResponder) -> Self {
        Self {
            environment: Arc::new(environment),
            responder,
        }
    }

    /// Loads state from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::instance()?.clone();
        tracing::info!(
            "Environment '{}' loaded, error trace: {}",
            environment.environment,
            environment.error_trace
        );
        Ok(Self::new(environment))
    }
}
