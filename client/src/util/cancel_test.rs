use super::*;

#[test]
fn new_token_is_live() {
    assert!(!CancelToken::new().is_cancelled());
}

#[test]
fn cancel_is_visible_through_clones() {
    let token = CancelToken::new();
    let held_by_task = token.clone();
    token.cancel();
    assert!(held_by_task.is_cancelled());
}

#[test]
fn independent_tokens_do_not_interfere() {
    let a = CancelToken::new();
    let b = CancelToken::new();
    a.cancel();
    assert!(!b.is_cancelled());
}

#[test]
fn scoped_token_cancels_when_owner_is_cleaned_up() {
    use leptos::prelude::Owner;

    let owner = Owner::new();
    let token = owner.with(scoped_token);
    assert!(!token.is_cancelled());
    owner.cleanup();
    assert!(token.is_cancelled());
}
