//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use super::handlers;
use crate::presentation::middleware::rate_limit;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(message_routes(state.clone()))
        // Health check endpoints, not rate limited
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// Message routes, rate limited per client identity
fn message_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/message", post(handlers::message::post_message))
        .route("/messages", get(handlers::message::list_messages))
        .route("/message/{id}", get(handlers::message::get_message))
        .route("/message/{id}", delete(handlers::message::delete_message))
        .route_layer(middleware::from_fn_with_state(state, rate_limit))
}
