//! Route table assembly.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::middleware::{auth_middleware, logging_middleware};
use crate::state::AppState;

/// Build the gateway router with middleware applied.
///
/// Token verification wraps only the protected sub-router, leaving /login
/// public. Request logging wraps everything, unmatched paths included.
/// /health is advertised by /info but has no route, so it falls through
/// to the framework 404.
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/sum", get(handlers::sum))
        .route("/info", get(handlers::info))
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/login", post(handlers::login))
        .with_state(state)
        .merge(protected)
        .layer(middleware::from_fn(logging_middleware))
}
