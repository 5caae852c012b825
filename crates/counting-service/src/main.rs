//! Counting service binary.
//!
//! - Port from `PORT` (default 8080), optional `counting-service.yaml`
//! - Instance id derived once at startup
//! - `/kill` and `/exit` end the process with status 1 / 0

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use counting_core::error::{CountingError, Result};
use counting_service::{app_state::AppState, config, lifecycle};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(t) => t.exit_code(),
        Err(e) => {
            tracing::error!(error = %e, "counting-service failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<lifecycle::Termination> {
    let cfg = config::load()?;
    let listen = cfg.service.listen_addr()?;
    let state = AppState::new(&cfg)?;

    tracing::info!(
        %listen,
        instance_id = %state.identity().id(),
        color = %state.identity().color(),
        "Launching service on port {}", listen.port()
    );
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| CountingError::Internal(format!("failed to bind {listen}: {e}")))?;

    lifecycle::serve(listener, state).await
}
