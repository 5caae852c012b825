//! Serving loop and process termination.
//!
//! `/kill` and `/exit` do not exit from inside a handler. They record a
//! [`Termination`] in the app state; the serving loop shuts down gracefully
//! and hands the termination back to `main`, which turns it into the process
//! exit status seen by the supervisor. Open connections get at most
//! [`DRAIN_TIMEOUT`] to finish once a termination was requested.

use std::future::IntoFuture;
use std::process::ExitCode;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::watch;

use counting_core::error::{CountingError, Result};

use crate::{app_state::AppState, router};

/// How the process should end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Simulated crash, exit status 1.
    Crash,
    /// Proper shutdown, exit status 0.
    Exit,
}

impl Termination {
    pub fn code(self) -> u8 {
        match self {
            Termination::Crash => 1,
            Termination::Exit => 0,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

/// Grace period for in-flight connections after `/kill` or `/exit`.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Serve until a termination is requested or a shutdown signal arrives.
/// A signal-driven shutdown counts as [`Termination::Exit`].
pub async fn serve(listener: TcpListener, state: AppState) -> Result<Termination> {
    serve_with_drain(listener, state, DRAIN_TIMEOUT).await
}

/// Like [`serve`], with an explicit drain deadline. Connections still open
/// when it passes are abandoned and the requested termination is returned.
pub async fn serve_with_drain(
    listener: TcpListener,
    state: AppState,
    drain: Duration,
) -> Result<Termination> {
    let app = router::build_router(state.clone());
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state.subscribe_termination()))
        .into_future();

    let mut requested = state.subscribe_termination();
    let deadline = async move {
        if requested.wait_for(|t| t.is_some()).await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(drain).await;
    };

    tokio::select! {
        res = server => {
            res.map_err(|e| CountingError::Internal(format!("server failed: {e}")))?;
        }
        _ = deadline => {
            tracing::warn!(?drain, "connections still open after drain deadline, abandoning them");
        }
    }

    let t = state.termination().unwrap_or(Termination::Exit);
    tracing::info!(?t, code = t.code(), "counting-service stopped");
    Ok(t)
}

async fn shutdown_signal(mut rx: watch::Receiver<Option<Termination>>) {
    let requested = async move {
        // Sender lives as long as the state; an error means nobody can request anymore.
        if rx.wait_for(|t| t.is_some()).await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = requested => tracing::warn!("termination requested over http, shutting down"),
        _ = ctrl_c => tracing::info!("signal received, starting graceful shutdown"),
        _ = terminate => tracing::info!("signal received, starting graceful shutdown"),
    }
}
