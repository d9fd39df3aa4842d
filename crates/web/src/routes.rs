//! Route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_routes, home_routes, name_routes, not_found, user_routes};
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(home_routes())
        .merge(name_routes())
        .merge(user_routes())
        // Health check (JSON, no templates)
        .nest("/health", health_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
