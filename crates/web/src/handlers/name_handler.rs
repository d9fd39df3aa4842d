//! Name form demo: validation only, nothing is stored.

use axum::{extract::State, response::Html, routing::get, Router};
use axum_extra::extract::cookie::SignedCookieJar;
use tera::Context;

use common::AppResult;
use domain::{FormErrors, NameForm, NOTICE_FORM_SUBMITTED};

use super::{check_csrf, render_page};
use crate::extractors::Submission;
use crate::state::AppState;

/// Create name form routes
pub fn name_routes() -> Router<AppState> {
    Router::new().route("/name", get(show_name_form).post(submit_name_form))
}

/// Empty form
pub async fn show_name_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    render_name_page(&state, jar, &NameForm::default(), None, &FormErrors::new(), Vec::new())
}

/// Validate the submission and greet the submitted name.
///
/// On success the input is cleared so the form can be reused.
pub async fn submit_name_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    submission: Submission<NameForm>,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let Submission {
        mut form,
        csrf_token,
    } = submission;
    let mut errors = check_csrf(&state, &jar, csrf_token.as_deref());

    let mut greeted = None;
    let mut notices = Vec::new();

    match form.validated() {
        Ok(name) if errors.is_empty() => {
            tracing::debug!(%name, "Name form accepted");
            greeted = Some(name);
            form.name.clear();
            notices.push(NOTICE_FORM_SUBMITTED.to_string());
        }
        Ok(_) => {}
        Err(field_errors) => errors.merge(field_errors),
    }

    render_name_page(&state, jar, &form, greeted.as_deref(), &errors, notices)
}

fn render_name_page(
    state: &AppState,
    jar: SignedCookieJar,
    form: &NameForm,
    name: Option<&str>,
    errors: &FormErrors,
    notices: Vec<String>,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let mut context = Context::new();
    context.insert("title", "Name");
    context.insert("form", form);
    context.insert("name", &name);
    context.insert("errors", errors);

    render_page(state, jar, "name.html", context, notices)
}
