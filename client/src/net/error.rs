//! Error type shared by all REST helpers.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a call against the remote player service.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, TLS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// An authenticated call was attempted without a session token.
    #[error("no session token")]
    MissingToken,
    /// The call was made outside the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// True when the service rejected the session token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401 | 403))
    }
}
