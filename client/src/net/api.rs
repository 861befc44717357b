//! REST API helpers for the remote player service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>` so pages decide which failures
//! surface to the user and which only reach the log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Club, Player, PlayerPayload, RecordId};

#[cfg(feature = "hydrate")]
use super::types::LoginRequest;
#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, RequestBuilder, Response};

/// Base URL prepended to every `/api/...` path.
///
/// Empty by default, meaning same-origin calls through the host proxy. Set
/// `PLAYER_API_BASE` at build time to talk to the service directly.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("PLAYER_API_BASE").unwrap_or("")
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn player_endpoint(base: &str, id: &RecordId) -> String {
    endpoint(base, &format!("/api/player/{id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extract a session token from the login response body.
///
/// The service answers with a JSON string, but bare text and a `{"token": ..}`
/// object are accepted too. Empty, `null` and `false` bodies mean the
/// credentials were rejected.
#[cfg(any(test, feature = "hydrate"))]
fn parse_token_body(body: &str) -> Option<String> {
    let body = body.trim();
    let token = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(serde_json::Value::Object(map)) => map.get("token")?.as_str()?.to_owned(),
        Ok(_) => return None,
        Err(_) => body.to_owned(),
    };
    let token = token.trim();
    if token.is_empty() { None } else { Some(token.to_owned()) }
}

#[cfg(feature = "hydrate")]
fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[cfg(feature = "hydrate")]
fn decode(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &bearer(token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() { Ok(resp) } else { Err(ApiError::Status(resp.status())) }
}

/// Exchange credentials for a session token via `POST /api/Auth/login`.
///
/// Returns `Ok(None)` when the service answers but hands back no token.
///
/// # Errors
///
/// Returns an error if the request fails or the service responds with a
/// non-OK status.
pub async fn login(email: &str, password: &str) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = Request::post(&endpoint(api_base(), "/api/Auth/login"))
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let text = ensure_ok(resp)?.text().await.map_err(decode)?;
        Ok(parse_token_body(&text))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch every player from `GET /api/player`.
///
/// The bearer header is attached only when a token is available.
///
/// # Errors
///
/// Returns an error if the request fails, the status is non-OK, or the body
/// is not a player array.
pub async fn fetch_players(token: Option<&str>) -> Result<Vec<Player>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(Request::get(&endpoint(api_base(), "/api/player")), token)
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(resp)?.json::<Vec<Player>>().await.map_err(decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one player from `GET /api/player/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is non-OK, or the body
/// is not a player.
pub async fn fetch_player(id: &RecordId, token: &str) -> Result<Player, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(Request::get(&player_endpoint(api_base(), id)), Some(token))
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(resp)?.json::<Player>().await.map_err(decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, token);
        Err(ApiError::Unavailable)
    }
}

/// Fetch club reference data from `GET /api/player/categories`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is non-OK, or the body
/// is not a club array.
pub async fn fetch_clubs() -> Result<Vec<Club>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = Request::get(&endpoint(api_base(), "/api/player/categories"))
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(resp)?.json::<Vec<Club>>().await.map_err(decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a player via `POST /api/player`.
///
/// # Errors
///
/// Returns an error if the request fails or the status is non-OK.
pub async fn create_player(payload: &PlayerPayload, token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(Request::post(&endpoint(api_base(), "/api/player")), Some(token))
            .json(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(resp).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (payload, token);
        Err(ApiError::Unavailable)
    }
}

/// Replace a player via `PUT /api/player`. The id travels in the payload.
///
/// # Errors
///
/// Returns an error if the request fails or the status is non-OK.
pub async fn update_player(payload: &PlayerPayload, token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(Request::put(&endpoint(api_base(), "/api/player")), Some(token))
            .json(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(resp).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (payload, token);
        Err(ApiError::Unavailable)
    }
}

/// Delete a player via `DELETE /api/player/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the status is non-OK.
pub async fn delete_player(id: &RecordId, token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(Request::delete(&player_endpoint(api_base(), id)), Some(token))
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(resp).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, token);
        Err(ApiError::Unavailable)
    }
}
