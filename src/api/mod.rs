//! HTTP API server

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::storage::UserStore;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/hello/:username",
            get(handlers::get_birthday_message).put(handlers::create_or_update_user),
        )
        .route("/healthcheck", get(handlers::healthcheck))
        .route("/version", get(handlers::version))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper wiring a store and version string into a router
pub fn create_app(store: Arc<dyn UserStore>, version: impl Into<String>) -> Router {
    create_router(AppState::new(store, version))
}
