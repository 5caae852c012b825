//! Axum router wiring.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::info))
        .route("/count", get(handlers::count))
        .route("/reset", get(handlers::reset))
        .route("/kill", get(handlers::kill))
        .route("/exit", get(handlers::exit))
        .fallback(handlers::info);
    tag_responses(routes, &state).with_state(state)
}

/// Attach the instance header to every response of `routes`, errors included.
pub fn tag_responses(routes: Router<AppState>, state: &AppState) -> Router<AppState> {
    routes.layer(middleware::map_response_with_state(
        state.clone(),
        handlers::tag_instance,
    ))
}
