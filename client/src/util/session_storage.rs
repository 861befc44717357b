//! Tab-scoped persistence of the session token.
//!
//! Reads and writes the token under [`TOKEN_KEY`] in `sessionStorage`, so it
//! survives reloads of the same tab but not a new tab or window. Requires a
//! browser environment; outside the `hydrate` build every read is empty and
//! every write is a no-op.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "authToken";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// Read the raw stored token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token` for the rest of this tab's lifetime.
pub fn write_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                log::warn!("session storage rejected the auth token");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
