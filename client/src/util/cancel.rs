//! View-lifetime cancellation for spawned requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and the form modal spawn fetches with `spawn_local`. A fetch that
//! settles after its view was disposed must not touch that view's signals, so
//! each view owns a token that its cleanup cancels and every completion checks.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

/// Shared flag flipped once when the owning view goes away.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Create a token cancelled when the current reactive owner is cleaned up.
pub fn scoped_token() -> CancelToken {
    let token = CancelToken::new();
    let on_drop = token.clone();
    on_cleanup(move || on_drop.cancel());
    token
}
