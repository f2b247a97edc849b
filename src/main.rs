// Start of file: src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;

use axum_error_responder::config::state::AppState;
use axum_error_responder::core::{
    logging::init_tracing,
    server::{create_app, setup_listener, shutdown_signal},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let state: AppState = AppState::from_env()?;
    let listener: TcpListener = setup_listener(&state.environment).await?;
    let url: String = state.environment.public_url(listener.local_addr()?);

    let app: Router = create_app(state);

    tracing::info!("Server listening on: {url}");

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
