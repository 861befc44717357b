//! Session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<SessionState>` from the root component. Route guards
//! read it to decide on login redirects, and REST calls read the token from it
//! to build their `Authorization` header.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Authentication state derived from the stored bearer token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Bearer token; `Some` only for a non-empty value.
    pub token: Option<String>,
    /// Whether storage has been read at least once in this tab.
    ///
    /// False during SSR and the first hydrated frame.
    pub restored: bool,
}

impl SessionState {
    /// Re-derive the state from a raw storage read.
    pub fn restore(&mut self, raw: Option<String>) {
        self.token = normalize_token(raw);
        self.restored = true;
    }

    /// Record a freshly issued token.
    pub fn sign_in(&mut self, token: &str) {
        self.restore(Some(token.to_owned()));
    }

    /// Forget the token.
    pub fn sign_out(&mut self) {
        self.restore(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}
