//! Form-tampering protection.
//!
//! Every rendered form embeds the token stored in a signed cookie; a
//! submission is accepted only when both match.

use axum_extra::extract::cookie::SignedCookieJar;
use rand::distr::{Alphanumeric, SampleString};

use domain::FormErrors;

use crate::cookies;

/// Cookie holding the token issued to this browser
const CSRF_COOKIE: &str = "csrf_token";

/// Form field carrying the token back
pub const CSRF_FIELD: &str = "csrf_token";

const TOKEN_LENGTH: usize = 32;

pub const MSG_TOKEN_MISSING: &str = "The CSRF token is missing.";
pub const MSG_SESSION_TOKEN_MISSING: &str = "The CSRF session token is missing.";
pub const MSG_TOKEN_MISMATCH: &str = "The CSRF tokens do not match.";

/// Return the browser's token, minting one on first use.
pub fn ensure_token(jar: SignedCookieJar) -> (SignedCookieJar, String) {
    if let Some(cookie) = jar.get(CSRF_COOKIE) {
        let token = cookie.value().to_string();
        return (jar, token);
    }

    let token = Alphanumeric.sample_string(&mut rand::rng(), TOKEN_LENGTH);
    (jar.add(cookies::build(CSRF_COOKIE, token.clone())), token)
}

/// Check a submitted token against the cookie.
///
/// Failures are reported as a form-level error under `CSRF_FIELD`.
pub fn verify(jar: &SignedCookieJar, submitted: Option<&str>) -> FormErrors {
    let mut errors = FormErrors::new();

    let message = match (submitted, jar.get(CSRF_COOKIE)) {
        (None, _) => Some(MSG_TOKEN_MISSING),
        (Some(_), None) => Some(MSG_SESSION_TOKEN_MISSING),
        (Some(submitted), Some(cookie)) if !tokens_match(submitted, cookie.value()) => {
            Some(MSG_TOKEN_MISMATCH)
        }
        _ => None,
    };

    if let Some(message) = message {
        tracing::warn!("Rejected form submission: {}", message);
        errors.add(CSRF_FIELD, message);
    }

    errors
}

/// Constant-time comparison.
fn tokens_match(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a
            .bytes()
            .zip(b.bytes())
            .fold(0u8, |acc, (x, y)| acc | (x ^ y))
            == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Key;

    #[test]
    fn test_token_is_stable_per_jar() {
        let jar = SignedCookieJar::new(Key::generate());
        let (jar, first) = ensure_token(jar);
        let (_, second) = ensure_token(jar);

        assert_eq!(first.len(), TOKEN_LENGTH);
        assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_verify_outcomes() {
        let (jar, token) = ensure_token(SignedCookieJar::new(Key::generate()));

        assert!(verify(&jar, Some(&token)).is_empty());
        assert_eq!(verify(&jar, None).field(CSRF_FIELD), [MSG_TOKEN_MISSING]);
        assert_eq!(
            verify(&jar, Some("forged")).field(CSRF_FIELD),
            [MSG_TOKEN_MISMATCH]
        );

        let empty = SignedCookieJar::new(Key::generate());
        assert_eq!(
            verify(&empty, Some(&token)).field(CSRF_FIELD),
            [MSG_SESSION_TOKEN_MISSING]
        );
    }

    #[test]
    fn test_tokens_match() {
        assert!(tokens_match("abc", "abc"));
        assert!(!tokens_match("abc", "abd"));
        assert!(!tokens_match("abc", "abcd"));
    }
}
