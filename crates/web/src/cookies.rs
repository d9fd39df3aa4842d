//! Cookie helpers shared by flash notices and CSRF tokens.

use axum_extra::extract::cookie::{Cookie, SameSite};

/// Build a site-wide, script-inaccessible cookie.
pub fn build(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie matching `build`'s path, used to expire it.
pub fn removal(name: &'static str) -> Cookie<'static> {
    Cookie::build(name).path("/").build()
}
