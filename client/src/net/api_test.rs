use super::*;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn endpoint_joins_base_without_double_slash() {
    assert_eq!(endpoint("https://localhost:7251/", "/api/player"), "https://localhost:7251/api/player");
    assert_eq!(endpoint("", "/api/player"), "/api/player");
}

#[test]
fn player_endpoint_formats_numeric_and_text_ids() {
    assert_eq!(player_endpoint("", &RecordId::Number(5)), "/api/player/5");
    assert_eq!(player_endpoint("http://svc", &RecordId::Text("p-5".to_owned())), "http://svc/api/player/p-5");
}

#[test]
fn api_base_defaults_to_same_origin() {
    if option_env!("PLAYER_API_BASE").is_none() {
        assert_eq!(api_base(), "");
    }
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

// =============================================================
// Login token body
// =============================================================

#[test]
fn token_body_accepts_json_string() {
    assert_eq!(parse_token_body("\"eyJ.abc\""), Some("eyJ.abc".to_owned()));
}

#[test]
fn token_body_accepts_bare_text() {
    assert_eq!(parse_token_body("eyJ.abc\n"), Some("eyJ.abc".to_owned()));
}

#[test]
fn token_body_accepts_token_object() {
    assert_eq!(parse_token_body(r#"{"token": "t-1"}"#), Some("t-1".to_owned()));
}

#[test]
fn token_body_rejects_falsy_values() {
    assert_eq!(parse_token_body(""), None);
    assert_eq!(parse_token_body("\"\""), None);
    assert_eq!(parse_token_body("null"), None);
    assert_eq!(parse_token_body("false"), None);
    assert_eq!(parse_token_body(r#"{"error": "bad"}"#), None);
}

// =============================================================
// Non-hydrate stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn helpers_are_unavailable_outside_browser() {
    let out = block_on(fetch_clubs());
    assert_eq!(out, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
