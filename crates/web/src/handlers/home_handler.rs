//! Landing page and fallback.

use axum::{extract::State, response::Html, routing::get, Router};
use axum_extra::extract::cookie::SignedCookieJar;
use tera::Context;

use common::{AppError, AppResult};

use super::render_page;
use crate::state::AppState;

/// Create home routes
pub fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// Static landing page
pub async fn index(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let mut context = Context::new();
    context.insert("title", "Home");

    render_page(&state, jar, "index.html", context, Vec::new())
}

/// Unknown paths
pub async fn not_found() -> AppError {
    AppError::NotFound
}
