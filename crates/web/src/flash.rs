//! One-time notices carried across a redirect.
//!
//! Messages queued before a redirect are kept in a signed cookie and consumed
//! by the next page that renders them.

use axum_extra::extract::cookie::SignedCookieJar;

use crate::cookies;

const FLASH_COOKIE: &str = "_flash";

/// Queue a message for the next rendered page.
pub fn push(jar: SignedCookieJar, message: impl Into<String>) -> SignedCookieJar {
    let mut messages = peek(&jar);
    messages.push(message.into());
    jar.add(cookies::build(FLASH_COOKIE, encode(&messages)))
}

/// Remove and return every queued message.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Vec<String>) {
    if jar.get(FLASH_COOKIE).is_none() {
        return (jar, Vec::new());
    }
    let messages = peek(&jar);
    (jar.remove(cookies::removal(FLASH_COOKIE)), messages)
}

fn peek(jar: &SignedCookieJar) -> Vec<String> {
    jar.get(FLASH_COOKIE)
        .and_then(|cookie| decode(cookie.value()))
        .unwrap_or_default()
}

// Hex keeps the JSON payload within the cookie value alphabet.
fn encode(messages: &[String]) -> String {
    hex::encode(serde_json::to_vec(messages).unwrap_or_default())
}

fn decode(value: &str) -> Option<Vec<String>> {
    let bytes = hex::decode(value).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Key;

    fn jar() -> SignedCookieJar {
        SignedCookieJar::new(Key::generate())
    }

    #[test]
    fn test_push_then_take() {
        let jar = push(jar(), "first");
        let jar = push(jar, "second");

        let (jar, messages) = take(jar);
        assert_eq!(messages, vec!["first", "second"]);

        let (_, messages) = take(jar);
        assert!(messages.is_empty());
    }

    #[test]
    fn test_take_without_messages() {
        let (_, messages) = take(jar());
        assert!(messages.is_empty());
    }

    #[test]
    fn test_encoding_round_trip_keeps_punctuation() {
        let messages = vec!["User \"x\"; added, ok!".to_string()];
        let encoded = encode(&messages);
        assert!(encoded.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(decode(&encoded), Some(messages));
    }

    #[test]
    fn test_garbage_cookie_is_ignored() {
        assert_eq!(decode("not-hex"), None);
    }
}
