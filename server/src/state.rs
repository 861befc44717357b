//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled upstream HTTP client reused by every
//! proxied request.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state. Clone is cheap: both fields are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state and the upstream client from config.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error when the TLS backend cannot be initialized.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.insecure_tls)
            .timeout(config.upstream_timeout)
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
