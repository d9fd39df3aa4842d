//! Request handlers.

mod health_handler;
mod home_handler;
mod name_handler;
mod user_handler;

pub use health_handler::health_routes;
pub use home_handler::{home_routes, not_found};
pub use name_handler::name_routes;
pub use user_handler::user_routes;

use axum::response::Html;
use axum_extra::extract::cookie::SignedCookieJar;
use tera::Context;

use common::AppResult;

use crate::state::AppState;
use crate::{csrf, flash};

/// Render a full page.
///
/// Pending flash messages are consumed and shown before `notices`, and the
/// page receives the browser's CSRF token.
pub(crate) fn render_page(
    state: &AppState,
    jar: SignedCookieJar,
    template: &str,
    mut context: Context,
    notices: Vec<String>,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let (jar, mut messages) = flash::take(jar);
    messages.extend(notices);

    let (jar, token) = csrf::ensure_token(jar);

    context.insert("messages", &messages);
    context.insert(csrf::CSRF_FIELD, &token);

    let html = state.templates.render(template, &context)?;
    Ok((jar, html))
}

/// CSRF check honoring the configuration switch.
pub(crate) fn check_csrf(
    state: &AppState,
    jar: &SignedCookieJar,
    submitted: Option<&str>,
) -> domain::FormErrors {
    if state.config.csrf_enabled {
        csrf::verify(jar, submitted)
    } else {
        domain::FormErrors::new()
    }
}
