//! User handlers: registration form and paginated listing.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::{Deserialize, Serialize};
use tera::Context;

use common::AppResult;
use domain::{
    parse_page, FormErrors, PageRequest, User, UserForm, NOTICE_USER_ADDED, ROWS_PER_PAGE,
};

use super::{check_csrf, render_page};
use crate::extractors::Submission;
use crate::flash;
use crate::state::AppState;

/// Where a successful registration lands
const USER_LIST_PATH: &str = "/userlist";

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/add", get(show_add_user_form).post(submit_add_user_form))
        .route(USER_LIST_PATH, get(list_users))
}

/// User list query parameters.
///
/// `page` stays raw so a malformed value yields a clear 400.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

/// A user as shown in the list
#[derive(Debug, Serialize)]
struct UserRow {
    id: i32,
    name: String,
    email: String,
    date_created: String,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email_or_empty().to_string(),
            date_created: user.date_created.format("%Y-%m-%d %H:%M:%S").to_string(),
            name: user.name,
        }
    }
}

/// Empty registration form
pub async fn show_add_user_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<Response> {
    render_add_user_page(&state, jar, &UserForm::default(), &FormErrors::new(), Vec::new())
}

/// Register a user.
///
/// Invalid input and duplicate emails re-render the form; success redirects
/// to the user list with a flash notice.
pub async fn submit_add_user_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    submission: Submission<UserForm>,
) -> AppResult<Response> {
    let Submission { form, csrf_token } = submission;
    let mut errors = check_csrf(&state, &jar, csrf_token.as_deref());

    let new_user = match form.validated() {
        Ok(new_user) if errors.is_empty() => new_user,
        Ok(_) => return render_add_user_page(&state, jar, &form, &errors, Vec::new()),
        Err(field_errors) => {
            errors.merge(field_errors);
            return render_add_user_page(&state, jar, &form, &errors, Vec::new());
        }
    };

    match state.user_service.add_user(new_user).await {
        Ok(_) => {
            let jar = flash::push(jar, NOTICE_USER_ADDED);
            Ok((jar, Redirect::to(USER_LIST_PATH)).into_response())
        }
        Err(err) if err.is_conflict() => {
            render_add_user_page(&state, jar, &form, &errors, vec![err.user_message()])
        }
        Err(err) => Err(err),
    }
}

/// One page of users, oldest first
pub async fn list_users(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Query(params): Query<ListParams>,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let page = parse_page(params.page.as_deref())?;
    let users = state
        .user_service
        .list_users(PageRequest::new(page, ROWS_PER_PAGE))
        .await?
        .map(UserRow::from);

    let mut context = Context::new();
    context.insert("title", "User List");
    context.insert("users", &users.data);
    context.insert("page", &users.meta.page);
    context.insert("total_pages", &users.meta.total_pages.max(1));
    context.insert("prev_page", &users.prev_page());
    context.insert("next_page", &users.next_page());

    render_page(&state, jar, "userlist.html", context, Vec::new())
}

fn render_add_user_page(
    state: &AppState,
    jar: SignedCookieJar,
    form: &UserForm,
    errors: &FormErrors,
    notices: Vec<String>,
) -> AppResult<Response> {
    let mut context = Context::new();
    context.insert("title", "Add User");
    context.insert("form", form);
    context.insert("errors", errors);

    Ok(render_page(state, jar, "adduser.html", context, notices)?.into_response())
}
