//! Auth API Client
//!
//! Thin wrappers around the backend's signup/login endpoints. Cookies are
//! forwarded (credentials: include); non-2xx responses surface the
//! server-provided message when the body carries one.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response, carrying the server's message
    #[error("{0}")]
    Rejected(String),
    /// Transport-level failure (server unreachable, bad payload)
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Serialize)]
pub struct SignupPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Success body of both auth endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct AuthData {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

pub async fn signup(payload: &SignupPayload) -> Result<AuthData, ApiError> {
    post_auth(config::SIGNUP_PATH, payload).await
}

pub async fn login(payload: &LoginPayload) -> Result<AuthData, ApiError> {
    post_auth(config::LOGIN_PATH, payload).await
}

async fn post_auth<B: Serialize>(path: &str, body: &B) -> Result<AuthData, ApiError> {
    let url = format!("{}{}", config::api_base(), path);
    let response = Request::post(&url)
        .credentials(web_sys::RequestCredentials::Include)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        response
            .json::<AuthData>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    } else {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => format!("request failed with status {status}"),
        };
        web_sys::console::error_1(&format!("[API] {path} rejected ({status}): {message}").into());
        Err(ApiError::Rejected(message))
    }
}
