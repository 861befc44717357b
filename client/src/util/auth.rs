//! Session mutators and route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session context is the only writer of the stored token. Pages call
//! [`sign_in`] / [`sign_out`] instead of touching storage directly, and
//! guarded routes install [`install_unauth_redirect`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;
use crate::util::session_storage::{clear_token, read_token, write_token};

/// Login route; unauthenticated visitors are sent here.
pub const LOGIN_PATH: &str = "/";
/// Landing route after a successful login.
pub const LIST_PATH: &str = "/list";

/// True once storage was read and it held no token.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    state.restored && !state.is_authenticated()
}

/// Bearer token for an outgoing request.
///
/// Before the restore Effect has run (first fetch after a hard reload), the
/// token is read straight from storage.
pub fn request_token(session: &SessionState) -> Option<String> {
    if session.restored {
        return session.token.clone();
    }
    read_token().map(|raw| raw.trim().to_owned()).filter(|token| !token.is_empty())
}

/// Token for an authenticated action, or `None` with a logged error.
pub fn require_token(session: &SessionState, action: &str) -> Option<String> {
    let token = request_token(session);
    if token.is_none() {
        log::error!("No session token; {action} skipped");
    }
    token
}

/// Redirect to the login route whenever the session becomes anonymous.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Persist `token` and mark the session authenticated.
pub fn sign_in(session: RwSignal<SessionState>, token: &str) {
    write_token(token.trim());
    session.update(|s| s.sign_in(token));
}

/// Drop the stored token and mark the session anonymous.
pub fn sign_out(session: RwSignal<SessionState>) {
    clear_token();
    session.update(SessionState::sign_out);
}

/// Restore the session from storage and keep it in sync with `storage` events.
///
/// The listener re-reads storage instead of trusting the event payload, and is
/// removed when the calling component is cleaned up.
pub fn install_session_sync(session: RwSignal<SessionState>) {
    // Effects only run in the browser, so SSR keeps the unrestored default.
    Effect::new(move || session.update(|s| s.restore(read_token())));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::storage, move |_| {
            log::debug!("storage changed; re-reading session token");
            session.update(|s| s.restore(read_token()));
        });
        on_cleanup(move || handle.remove());
    }
}
