use super::*;

#[test]
fn should_not_redirect_before_storage_is_restored() {
    let state = SessionState::default();
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_redirect_when_restored_without_token() {
    let state = SessionState { token: None, restored: true };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_token_exists() {
    let state = SessionState { token: Some("tok".to_owned()), restored: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn sign_in_and_sign_out_flip_the_context_value() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(SessionState::default());

        sign_in(session, "tok");
        assert!(session.get_untracked().is_authenticated());
        assert!(!should_redirect_unauth(&session.get_untracked()));

        sign_out(session);
        assert!(should_redirect_unauth(&session.get_untracked()));
    });
}


#[test]
fn request_token_uses_restored_session() {
    let state = SessionState { token: Some("tok".to_owned()), restored: true };
    assert_eq!(request_token(&state), Some("tok".to_owned()));
}

#[test]
fn request_token_is_none_after_sign_out() {
    let state = SessionState { token: None, restored: true };
    assert_eq!(request_token(&state), None);
}

#[test]
fn request_token_reads_storage_before_restore() {
    // Storage is empty outside the browser, so nothing is found.
    assert_eq!(request_token(&SessionState::default()), None);
}

#[test]
fn require_token_skips_anonymous_actions() {
    let anonymous = SessionState { token: None, restored: true };
    assert_eq!(require_token(&anonymous, "delete"), None);

    let signed_in = SessionState { token: Some("tok".to_owned()), restored: true };
    assert_eq!(require_token(&signed_in, "delete"), Some("tok".to_owned()));
}
