//! Same-origin relay to the remote player service.
//!
//! The browser build calls `/api/...` on this host; every method, path and
//! query is replayed against `PLAYER_API_URL` with the auth and content
//! headers carried over. Status, content type and body come back verbatim so
//! the client sees the service's own 2xx/4xx semantics.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::state::AppState;

const FORWARDED_HEADERS: [HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("player service timed out")]
    Timeout,
    #[error("player service unreachable: {0}")]
    Unreachable(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Unreachable(e.to_string()) }
    }
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Upstream URL for an incoming request URI. The raw path is kept so
/// percent-encoded ids survive the hop unchanged.
pub(crate) fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// `ANY /api/{*path}`: relay one request to the player service.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.player_api_url, &uri);

    let mut request = state.http.request(method.clone(), &url);
    for name in &FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name.clone(), value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.inspect_err(|e| {
        tracing::warn!(%method, %url, error = %e, "player service request failed");
    })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.inspect_err(|e| {
        tracing::warn!(%method, %url, error = %e, "player service body read failed");
    })?;
    tracing::debug!(%method, %url, status = status.as_u16(), "proxied");

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}
