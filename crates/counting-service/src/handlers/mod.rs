//! HTTP handlers.
//!
//! - `/`      : info page (also the fallback for unknown paths)
//! - `/count` : increment and report the counter
//! - `/reset` : reset the counter
//! - `/kill`  : stop the process with exit status 1
//! - `/exit`  : stop the process with exit status 0
//!
//! Every response, errors included, is tagged by [`tag_instance`].

pub mod page;

use axum::{
    extract::State,
    response::{Html, Response},
};

use crate::{app_state::AppState, error::ServiceError, lifecycle::Termination};

type HtmlResult = std::result::Result<Html<String>, ServiceError>;

pub async fn info() -> HtmlResult {
    Ok(Html(page::info()?))
}

pub async fn count(State(state): State<AppState>) -> HtmlResult {
    let n = state.counter().increment();
    tracing::debug!(count = n, "counter incremented");
    Ok(Html(page::count(state.identity(), n)?))
}

pub async fn reset(State(state): State<AppState>) -> HtmlResult {
    state.counter().reset();
    tracing::debug!("counter reset");
    Ok(Html(page::reset(state.identity())?))
}

pub async fn kill(State(state): State<AppState>) -> HtmlResult {
    terminate(&state, Termination::Crash)
}

pub async fn exit(State(state): State<AppState>) -> HtmlResult {
    terminate(&state, Termination::Exit)
}

fn terminate(state: &AppState, t: Termination) -> HtmlResult {
    tracing::warn!(?t, code = t.code(), "termination requested");
    state.request_termination(t);
    Ok(Html(page::terminating(state.identity(), t)?))
}

/// Response middleware adding `<header_key>: <instance id>`.
pub async fn tag_instance(State(state): State<AppState>, mut response: Response) -> Response {
    let (name, value) = state.instance_header();
    response.headers_mut().insert(name, value);
    response
}
