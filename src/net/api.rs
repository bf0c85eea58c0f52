//! HTTP client for the hub API.
//!
//! Browser builds perform real requests via `gloo-net`; native builds get
//! stubs that fail with a network error so the state core can be exercised
//! in tests without a browser. Response decoding is split into pure
//! `decode_*` helpers (status + body → typed result) so the strict-schema
//! rules are unit-testable.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::net::types::{FailureBody, FieldErrors, LoginRequest, LoginResponse, MeResponse, NotificationType, User};

/// Failures talking to the hub.
#[derive(Clone, Debug, Error)]
pub enum ApiError {
    /// Could not reach the hub at all (connectivity, DNS, timeout).
    #[error("network error: {0}")]
    Network(String),
    /// The hub answered with a non-2xx status.
    #[error("request rejected ({status})")]
    Rejected {
        status: u16,
        message: Option<String>,
        errors: FieldErrors,
    },
    /// The hub answered 2xx with a body that does not match the schema.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Text shown to the user when an operation fails.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_owned()
            }
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Rejected { status, .. } => {
                format!("The server rejected the request (HTTP {status}).")
            }
            ApiError::Malformed(_) => "The server returned an unexpected response.".to_owned(),
        }
    }

    /// Per-field validation messages, when the hub sent any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Rejected { errors, .. } if !errors.is_empty() => Some(errors),
            _ => None,
        }
    }
}

/// Join the configured endpoint with a path, tolerating a trailing slash.
pub fn join_url(endpoint: &str, path: &str) -> String {
    format!(
        "{}/{}",
        endpoint.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn rejected(status: u16, body: &str) -> ApiError {
    let parsed: FailureBody = serde_json::from_str(body).unwrap_or_default();
    ApiError::Rejected {
        status,
        message: parsed.message,
        errors: parsed.errors.unwrap_or_default(),
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a `POST /login` response.
pub fn decode_login(status: u16, body: &str) -> Result<LoginResponse, ApiError> {
    if !is_success(status) {
        return Err(rejected(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Decode a `GET /me` response. The payload must contain `user`; anything
/// else means the session the token refers to is not valid.
pub fn decode_me(status: u16, body: &str) -> Result<User, ApiError> {
    if !is_success(status) {
        return Err(rejected(status, body));
    }
    serde_json::from_str::<MeResponse>(body)
        .map(|r| r.user)
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Decode a response where only the status matters.
pub fn decode_ack(status: u16, body: &str) -> Result<(), ApiError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(rejected(status, body))
    }
}

/// Decode a `GET /notification-preferences` response.
pub fn decode_preferences(status: u16, body: &str) -> Result<BTreeMap<String, bool>, ApiError> {
    if !is_success(status) {
        return Err(rejected(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Remote session validation, abstracted so rehydration can run against
/// stubs in tests.
#[allow(async_fn_in_trait)] // single-threaded WASM app, no Send bounds wanted
pub trait SessionApi {
    /// `GET {endpoint}/me` with a bearer token.
    async fn fetch_me(&self, endpoint: &str, token: &str) -> Result<User, ApiError>;
}

/// The real hub client.
#[derive(Clone, Copy, Default)]
pub struct HubApi;

impl SessionApi for HubApi {
    async fn fetch_me(&self, endpoint: &str, token: &str) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&join_url(endpoint, "me"))
                .header("Authorization", &format!("Bearer {token}"))
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            decode_me(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (endpoint, token);
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }
}

/// `POST {endpoint}/login`.
pub async fn login(endpoint: &str, req: &LoginRequest<'_>) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&join_url(endpoint, "login"))
            .header("Accept", "application/json")
            .json(req)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_login(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, req);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `POST {endpoint}/logout`. Best-effort from the caller's perspective; the
/// local session is cleared regardless of what this returns.
pub async fn logout(endpoint: &str, token: &str, push_token: Option<&str>) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = crate::net::types::LogoutRequest { push_token };
        let resp = gloo_net::http::Request::post(&join_url(endpoint, "logout"))
            .header("Authorization", &format!("Bearer {token}"))
            .header("Accept", "application/json")
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_ack(status, &text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, token, push_token);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `GET {endpoint}/notification-types`.
pub async fn fetch_notification_types(endpoint: &str) -> Result<Vec<NotificationType>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&join_url(endpoint, "notification-types"))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !is_success(resp.status()) {
            let body = resp.text().await.unwrap_or_default();
            return Err(rejected(resp.status(), &body));
        }
        resp.json().await.map_err(|e| ApiError::Malformed(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `GET {endpoint}/notification-preferences` for the signed-in user.
pub async fn fetch_preferences(
    endpoint: &str,
    token: &str,
    push_token: Option<&str>,
) -> Result<BTreeMap<String, bool>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let mut req = gloo_net::http::Request::get(&join_url(endpoint, "notification-preferences"))
            .header("Authorization", &format!("Bearer {token}"))
            .header("Accept", "application/json");
        if let Some(push_token) = push_token {
            req = req.header("X-Push-Token", push_token);
        }
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_preferences(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, token, push_token);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// `POST {endpoint}/notification-preferences` flipping one preference.
pub async fn update_preference(
    endpoint: &str,
    token: &str,
    push_token: Option<&str>,
    key: &str,
    enabled: bool,
) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ key: enabled });
        let mut req = gloo_net::http::Request::post(&join_url(endpoint, "notification-preferences"))
            .header("Authorization", &format!("Bearer {token}"))
            .header("Accept", "application/json");
        if let Some(push_token) = push_token {
            req = req.header("X-Push-Token", push_token);
        }
        let resp = req
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_ack(status, &text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, token, push_token, key, enabled);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}
