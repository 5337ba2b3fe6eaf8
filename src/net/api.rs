//! Shared REST plumbing for the Atlas backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`, with the stored
//! credential attached as a bearer token and the global 401 policy
//! applied. Native builds get `Unavailable` stubs so the rest of the
//! crate compiles and tests off-browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; pages translate the
//! taxonomy into inline messages. Transport failures never take the
//! application shell down.

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[cfg(feature = "csr")]
use crate::auth::token_store;
#[cfg(feature = "csr")]
use crate::routing::paths;

/// Base path of the Atlas REST API, overridable at compile time.
pub const API_BASE: &str = match option_env!("ATLAS_API_BASE") {
    Some(base) => base,
    None => "/atlas",
};

#[derive(Clone, Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    /// The backend rejected the credential (HTTP 401).
    #[error("authentication required")]
    Unauthorized,
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Native (non-browser) build; there is no HTTP stack to call.
    #[error("HTTP is only available in the browser")]
    Unavailable,
}

#[cfg(feature = "csr")]
fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Attach the stored credential as a bearer header. The flag reports
/// whether one was attached, which decides the 401 navigation below.
#[cfg(feature = "csr")]
fn with_bearer(request: gloo_net::http::RequestBuilder) -> (gloo_net::http::RequestBuilder, bool) {
    match token_store::get() {
        Some(token) => (
            request.header("Authorization", &format!("Bearer {token}")),
            true,
        ),
        None => (request, false),
    }
}

/// Global status policy. On 401 the token store is always cleared; the
/// hard navigation to the login page fires only when a stored credential
/// had been attached — a rejected login attempt stays on the form.
#[cfg(feature = "csr")]
fn check_status(
    response: gloo_net::http::Response,
    had_token: bool,
) -> Result<gloo_net::http::Response, ApiError> {
    if response.status() == 401 {
        log::warn!("request rejected with 401, clearing credential");
        token_store::clear();
        if had_token {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(paths::LOGIN);
            }
        }
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

#[cfg(feature = "csr")]
async fn send(
    request: gloo_net::http::RequestBuilder,
) -> Result<gloo_net::http::Response, ApiError> {
    let (request, had_token) = with_bearer(request);
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check_status(response, had_token)
}

#[cfg(feature = "csr")]
async fn send_with_body<B: Serialize>(
    request: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError> {
    let (request, had_token) = with_bearer(request);
    let request = request
        .json(body)
        .map_err(|err| ApiError::Network(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check_status(response, had_token)
}

#[cfg(feature = "csr")]
async fn decode_json<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// `GET` a JSON resource.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failures.
pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let response = send(gloo_net::http::Request::get(&url(path))).await?;
        decode_json(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `POST` a JSON body and decode a JSON response.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failures.
pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let response = send_with_body(gloo_net::http::Request::post(&url(path)), body).await?;
        decode_json(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// `PUT` a JSON body and decode a JSON response.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decoding failures.
pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let response = send_with_body(gloo_net::http::Request::put(&url(path)), body).await?;
        decode_json(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE` a resource, ignoring any response body.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or status failures.
pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        send(gloo_net::http::Request::delete(&url(path))).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}
