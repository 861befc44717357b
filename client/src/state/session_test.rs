use super::*;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_default_is_unrestored_and_anonymous() {
    let state = SessionState::default();
    assert!(!state.restored);
    assert!(!state.is_authenticated());
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_with_token_authenticates() {
    let mut state = SessionState::default();
    state.restore(Some("tok".to_owned()));
    assert!(state.restored);
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("tok"));
}

#[test]
fn restore_treats_blank_token_as_absent() {
    let mut state = SessionState::default();
    state.restore(Some("   ".to_owned()));
    assert!(state.restored);
    assert!(!state.is_authenticated());
}

#[test]
fn restore_follows_storage_after_another_context_clears_it() {
    let mut state = SessionState::default();
    state.sign_in("tok");
    state.restore(None);
    assert!(!state.is_authenticated());
}

#[test]
fn restore_follows_storage_after_another_context_sets_it() {
    let mut state = SessionState::default();
    state.restore(None);
    state.restore(Some("from-other-tab".to_owned()));
    assert_eq!(state.token.as_deref(), Some("from-other-tab"));
}

// =============================================================
// sign_in / sign_out
// =============================================================

#[test]
fn sign_in_then_sign_out() {
    let mut state = SessionState::default();
    state.sign_in(" tok ");
    assert_eq!(state.token.as_deref(), Some("tok"));
    state.sign_out();
    assert!(state.token.is_none());
    assert!(state.restored);
}
