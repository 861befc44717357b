use super::*;

#[test]
fn status_error_message_includes_code() {
    assert_eq!(ApiError::Status(500).to_string(), "server responded with status 500");
}

#[test]
fn missing_token_message() {
    assert_eq!(ApiError::MissingToken.to_string(), "no session token");
}

#[test]
fn unauthorized_covers_401_and_403_only() {
    assert!(ApiError::Status(401).is_unauthorized());
    assert!(ApiError::Status(403).is_unauthorized());
    assert!(!ApiError::Status(404).is_unauthorized());
    assert!(!ApiError::MissingToken.is_unauthorized());
}
