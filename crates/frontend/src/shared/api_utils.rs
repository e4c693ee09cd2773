//! HTTP boundary between the frontend and the backend.
//!
//! Every request goes through the helpers here so callers get a tagged
//! `ApiError` instead of a stringly-typed failure. Callers match on the
//! variant, never on message text.

use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::system::auth::storage;

/// What went wrong talking to the backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never reached the server (offline, DNS, CORS).
    #[error("네트워크 오류: {0}")]
    Network(String),

    /// Server answered with a non-2xx status.
    #[error("서버 오류 ({status})")]
    Status { status: u16, body: String },

    /// Server answered 2xx but the body did not parse.
    #[error("응답 해석 실패: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn auth_header() -> Option<String> {
    storage::get_access_token().map(|t| format!("Bearer {}", t))
}

async fn read_error(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Status { status, body }
}

/// GET a JSON payload with the stored access token attached.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let mut request = Request::get(&api_url(path));
    if let Some(header) = auth_header() {
        request = request.header("Authorization", &header);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST a JSON body and decode a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let mut request = Request::post(&api_url(path));
    if let Some(header) = auth_header() {
        request = request.header("Authorization", &header);
    }

    let response = request
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// PUT a JSON body and decode a JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let mut request = Request::put(&api_url(path));
    if let Some(header) = auth_header() {
        request = request.header("Authorization", &header);
    }

    let response = request
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST a JSON body where the caller only cares about success.
pub async fn post_json_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let mut request = Request::post(&api_url(path));
    if let Some(header) = auth_header() {
        request = request.header("Authorization", &header);
    }

    let response = request
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }

    Ok(())
}

/// DELETE a resource.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let mut request = Request::delete(&api_url(path));
    if let Some(header) = auth_header() {
        request = request.header("Authorization", &header);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }

    Ok(())
}
