#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn token_key_matches_existing_sessions() {
    assert_eq!(TOKEN_KEY, "authToken");
}

#[test]
fn read_token_is_none_outside_browser() {
    write_token("abc");
    assert!(read_token().is_none());
}

#[test]
fn clear_token_is_noop_but_callable() {
    clear_token();
    assert!(read_token().is_none());
}
