// Application server configuration and setup

use std::time::Duration;
use axum::{
    Router,
    middleware::from_fn_with_state,
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::{Context, Result};

use crate::api::{
    errors::error_routes,
    fallback::{fallback_handler, method_not_allowed_handler},
};
use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::middlewares::error_responder::error_responder;
use crate::utils::error_handler::handle_global_error;

/// Creates the application router with all middleware layers.
///
/// The error responder sits outermost so that errors raised by handlers,
/// both fallbacks and the layers below it all pass through it.
pub fn create_app(state: AppState) -> Router {
    let timeout: Duration = Duration::from_secs(state.environment.default_timeout_seconds);
    let body_limit: usize = state.environment.max_request_body_size;

    Router::new()
        .merge(error_routes())
        .fallback(fallback_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(
            ServiceBuilder::new()
                .layer(from_fn_with_state(state.clone(), error_responder))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(timeout))
                .layer(DefaultBodyLimit::max(body_limit))
        )
        .with_state(state)
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install TERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }
}
